//! HTTP/JSON client for the Hacker News API.
//!
//! A thin wrapper over `reqwest` that performs exactly one GET per call with
//! a bounded timeout and decodes the body as JSON. There is no retry logic:
//! every failure is terminal for the request and carries the offending
//! endpoint so the caller (and the log) can say which call broke.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, instrument};

/// Per-request timeout applied to every GET.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// A failed fetch: transport error, unexpected status, or undecodable body.
///
/// Every variant names the endpoint that failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("GET {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("GET {endpoint} returned status {status}")]
    Status { endpoint: String, status: StatusCode },
    #[error("GET {endpoint} returned unexpected JSON: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Blocking-style JSON GET client. Built once per run.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
}

impl ApiClient {
    /// Build a client with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { http })
    }

    /// Perform a single GET against `endpoint` and decode the body as `T`.
    ///
    /// Succeeds only on a 2xx status with a body that deserializes into `T`.
    #[instrument(level = "debug", skip(self))]
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, FetchError> {
        debug!(%endpoint, "Retrieving JSON");

        let response = self.http.get(endpoint).send().await.map_err(|e| {
            error!(%endpoint, error = %e, "HTTP request failed");
            FetchError::Request {
                endpoint: endpoint.to_string(),
                source: e,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(%endpoint, %status, "Unexpected HTTP status");
            return Err(FetchError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        response.json::<T>().await.map_err(|e| {
            error!(%endpoint, error = %e, "Response body was not the expected JSON");
            FetchError::Decode {
                endpoint: endpoint.to_string(),
                source: e,
            }
        })
    }
}
