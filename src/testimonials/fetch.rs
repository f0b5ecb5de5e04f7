// SPDX-License-Identifier: MPL-2.0
//! One-shot read of the testimonials endpoint.
//!
//! No retries and no caching: the section that asked for the data either
//! gets a list or stays on its loading placeholder.

use super::record::TestimonialRecord;
use crate::app::config::TestimonialsConfig;
use crate::error::{Error, FetchError, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl Fetcher {
    /// Builds a fetcher for the configured endpoint and timeout.
    pub fn new(config: &TestimonialsConfig) -> Result<Self> {
        let endpoint = reqwest::Url::parse(&config.endpoint)
            .map_err(|e| Error::Config(format!("invalid testimonials endpoint: {e}")))?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs()))
            .user_agent(concat!("akanni/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }

    /// GETs the endpoint and parses a JSON array of records.
    pub async fn fetch(&self) -> std::result::Result<Vec<TestimonialRecord>, FetchError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_reqwest(&e))?;
        serde_json::from_slice(&body).map_err(|e| FetchError::MalformedBody(e.to_string()))
    }
}
