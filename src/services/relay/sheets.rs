use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Url;

use super::SubmissionRelay;
use crate::models::BookingFormInput;

/// Spreadsheet-backed web app that takes bookings as GET query parameters.
pub struct SheetsRelay {
    endpoint: String,
    client: reqwest::Client,
}

impl SheetsRelay {
    pub fn new(endpoint: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build relay HTTP client")?;
        Ok(Self { endpoint, client })
    }

    pub fn request_url(&self, booking: &BookingFormInput) -> anyhow::Result<Url> {
        anyhow::ensure!(!self.endpoint.is_empty(), "relay endpoint is not configured");
        Url::parse_with_params(&self.endpoint, booking.query_pairs())
            .with_context(|| format!("invalid relay endpoint: {}", self.endpoint))
    }
}

#[async_trait]
impl SubmissionRelay for SheetsRelay {
    async fn submit(&self, booking: &BookingFormInput) -> anyhow::Result<String> {
        let url = self.request_url(booking)?;

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .context("failed to reach booking relay")?
            .error_for_status()
            .context("booking relay returned error")?;

        resp.text()
            .await
            .context("failed to read booking relay response")
    }
}
