//! Validation service client
//!
//! Posts finished proofs to the validation endpoint. No retries; the
//! caller decides whether a failed submission is fatal.

use anyhow::{anyhow, Result};
use reqwest::Client;
use std::time::Duration;

use crate::proof::ProofResponse;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Validation service API client
pub struct ValidatorClient {
    client: Client,
    endpoint: String,
}

impl ValidatorClient {
    /// Create a new client for a validation endpoint
    pub fn new(endpoint: &str) -> Self {
        // Build HTTP client with timeout, falling back to default client if builder fails
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Submit a proof record as a JSON body
    pub async fn submit_proof(&self, proof: &ProofResponse) -> Result<()> {
        let resp = self.client.post(&self.endpoint).json(proof).send().await?;

        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            let error_text = resp.text().await.unwrap_or_else(|_| "Unknown error".into());
            Err(anyhow!("Proof submission failed ({}): {}", status, error_text))
        }
    }
}
