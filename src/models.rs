//! Data models for Hacker News items and the ranked output records.
//!
//! - [`Item`]: a raw item as returned by the `item/<id>.json` endpoint.
//!   Everything except the id is optional; text-only posts carry no `url`,
//!   childless posts carry no `kids`.
//! - [`RankedPost`]: one record of the printed output. Field declaration
//!   order is the output key order, so the struct must stay in the order
//!   `title, uri, author, points, comments, rank`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::utils::{clamp_field, is_valid_url};

const DISCUSSION_URL_BASE: &str = "https://news.ycombinator.com/item";

/// Build the discussion-page URL for a post, used when the post has no
/// external link (or an unusable one).
pub fn discussion_url(id: u64) -> String {
    format!("{DISCUSSION_URL_BASE}?id={id}")
}

/// A raw item from the Hacker News API.
#[derive(Debug, Deserialize)]
pub struct Item {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub by: Option<String>,
    #[serde(default)]
    pub score: Option<u64>,
    #[serde(default)]
    pub url: Option<String>,
    /// IDs of the item's direct child comments.
    #[serde(default)]
    pub kids: Vec<u64>,
}

/// One post of the final ranked output.
///
/// Serialized in declared field order; `rank` is assigned by the assembler
/// and is 1-based, contiguous across the output list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedPost {
    pub title: String,
    pub uri: String,
    pub author: String,
    pub points: u64,
    pub comments: u64,
    pub rank: u32,
}

impl RankedPost {
    /// Map a raw [`Item`] to an output record at the given 1-based rank.
    ///
    /// An absent or syntactically invalid link falls back to the post's own
    /// discussion page. Absent text fields map to the empty string; absent
    /// counts map to zero.
    pub fn from_item(item: Item, rank: u32) -> Self {
        debug!(id = item.id, rank, "Building ranked post");

        let uri = match item.url {
            Some(ref link) if is_valid_url(link) => link.clone(),
            Some(ref link) => {
                warn!(id = item.id, %link, "Link is not a well-formed URL; using discussion page");
                discussion_url(item.id)
            }
            None => discussion_url(item.id),
        };

        Self {
            title: clamp_field(item.title.as_deref().unwrap_or_default()),
            uri,
            author: clamp_field(item.by.as_deref().unwrap_or_default()),
            points: item.score.unwrap_or(0),
            comments: item.kids.len() as u64,
            rank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> Item {
        Item {
            id: 8863,
            title: Some("My YC app: Dropbox – Throw away your USB drive".to_string()),
            by: Some("dhouston".to_string()),
            score: Some(104),
            url: Some("http://www.getdropbox.com/u/2/screencast.html".to_string()),
            kids: vec![9224, 8917, 8952],
        }
    }

    #[test]
    fn test_from_item_maps_all_fields() {
        let post = RankedPost::from_item(sample_item(), 1);
        assert_eq!(
            post,
            RankedPost {
                title: "My YC app: Dropbox – Throw away your USB drive".to_string(),
                uri: "http://www.getdropbox.com/u/2/screencast.html".to_string(),
                author: "dhouston".to_string(),
                points: 104,
                comments: 3,
                rank: 1,
            }
        );
    }

    #[test]
    fn test_missing_url_falls_back_to_discussion_page() {
        let item = Item {
            url: None,
            ..sample_item()
        };
        let post = RankedPost::from_item(item, 2);
        assert_eq!(post.uri, "https://news.ycombinator.com/item?id=8863");
        assert!(is_valid_url(&post.uri));
    }

    #[test]
    fn test_invalid_url_falls_back_to_discussion_page() {
        let item = Item {
            url: Some("not a url at all".to_string()),
            ..sample_item()
        };
        let post = RankedPost::from_item(item, 2);
        assert_eq!(post.uri, discussion_url(8863));
    }

    #[test]
    fn test_absent_fields_default() {
        let item = Item {
            id: 42,
            title: None,
            by: None,
            score: None,
            url: None,
            kids: Vec::new(),
        };
        let post = RankedPost::from_item(item, 7);
        assert_eq!(post.title, "");
        assert_eq!(post.author, "");
        assert_eq!(post.points, 0);
        assert_eq!(post.comments, 0);
        assert_eq!(post.rank, 7);
    }

    #[test]
    fn test_item_deserializes_with_missing_optionals() {
        let json = r#"{"id": 121003, "title": "Ask HN: something", "by": "tel", "score": 25, "type": "story", "time": 1203647620}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 121003);
        assert!(item.url.is_none());
        assert!(item.kids.is_empty());
    }

    #[test]
    fn test_serialized_key_order_is_fixed() {
        let json = serde_json::to_string(&RankedPost::from_item(sample_item(), 1)).unwrap();
        let positions: Vec<usize> = ["\"title\"", "\"uri\"", "\"author\"", "\"points\"", "\"comments\"", "\"rank\""]
            .iter()
            .map(|key| json.find(key).expect("key missing from output"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
