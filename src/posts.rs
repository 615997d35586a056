//! The fetch-and-assemble pipeline for ranked top posts.
//!
//! One GET retrieves the ranked ID list, which is truncated to the requested
//! count; one GET per retained ID retrieves the item detail, strictly in
//! order. Any failed fetch aborts the whole run: the output is all-or-nothing
//! by design, so a partial list is never produced.

use tracing::{debug, info, instrument, warn};

use crate::api::{ApiClient, FetchError};
use crate::models::{Item, RankedPost};

const HN_API_BASE: &str = "https://hacker-news.firebaseio.com/v0";

/// The two Hacker News API endpoints, parameterized by base URL so tests
/// can point the pipeline at a local mock server.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub api_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_base: HN_API_BASE.to_string(),
        }
    }
}

impl Endpoints {
    pub fn with_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// The ranked-ID-list endpoint: a JSON array of item IDs, best first.
    pub fn top_stories(&self) -> String {
        format!("{}/topstories.json", self.api_base)
    }

    /// The item-detail endpoint for one post.
    pub fn item(&self, id: u64) -> String {
        format!("{}/item/{}.json", self.api_base, id)
    }
}

/// Fetch the current top `requested` posts as ranked output records.
///
/// The ranked-ID fetch is fatal on failure; so is every item fetch. When the
/// API returns fewer IDs than requested, the run continues with what is
/// available and the output is simply shorter.
#[instrument(level = "info", skip(client, endpoints))]
pub async fn fetch_top_posts(
    client: &ApiClient,
    endpoints: &Endpoints,
    requested: usize,
) -> Result<Vec<RankedPost>, FetchError> {
    let ids: Vec<u64> = client.fetch(&endpoints.top_stories()).await?;

    let available = ids.len();
    if available < requested {
        warn!(
            requested,
            available, "Fewer ranked IDs than requested; printing what is available"
        );
    }
    let retained = &ids[..available.min(requested)];
    debug!(count = retained.len(), ids = ?retained, "Retained ranked IDs");

    let mut posts = Vec::with_capacity(retained.len());
    for (index, &id) in retained.iter().enumerate() {
        let item: Item = client.fetch(&endpoints.item(id)).await?;
        posts.push(RankedPost::from_item(item, (index + 1) as u32));
    }

    info!(count = posts.len(), "Assembled ranked posts");
    Ok(posts)
}
