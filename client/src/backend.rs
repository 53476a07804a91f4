//! HTTP client for the round-metadata backend.

use crate::{Error, Result};
use crashproof_types::RoundMetadata;
use reqwest::{header, StatusCode};
use tracing::debug;
use url::Url;

/// Fetches round metadata (the three transaction signatures) from the
/// backend service.
pub struct BackendClient {
    client: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Result<Self> {
        // Tolerate a trailing slash in configuration.
        let trimmed = base_url.trim().trim_end_matches('/');
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: Url::parse(trimmed)?,
        })
    }

    pub async fn fetch_round(&self, round_id: &str) -> Result<RoundMetadata> {
        let url = format!(
            "{}/fairness/{round_id}",
            self.base_url.as_str().trim_end_matches('/')
        );
        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound("round"));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = body.trim();
            if body.is_empty() {
                return Err(Error::Failed(status));
            }
            return Err(Error::FailedWithBody {
                status,
                body: body.to_string(),
            });
        }

        let metadata: RoundMetadata = response.json().await?;
        debug!(round_id, network = ?metadata.network, "fetched round metadata");
        Ok(metadata)
    }
}
