// src/llm/http_client.rs
// HTTP client with timeouts and transient-failure retries for the model API

use anyhow::{Result, anyhow};
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

/// Base backoff between retries (doubles each attempt)
const DEFAULT_BASE_BACKOFF_MS: u64 = 500;

pub struct LlmHttpClient {
    client: Client,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub max_retries: u32,
    pub base_backoff: Duration,
}

impl LlmHttpClient {
    pub fn new(request_timeout: Duration, connect_timeout: Duration, max_retries: u32) -> Self {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            request_timeout,
            connect_timeout,
            max_retries,
            base_backoff: Duration::from_millis(DEFAULT_BASE_BACKOFF_MS),
        }
    }

    /// POST a JSON body with Bearer auth, retrying 429/5xx and connect/timeout
    /// failures. Returns the response body on success.
    pub async fn post_json_with_retry(
        &self,
        request_id: &str,
        url: &str,
        api_key: &str,
        body: String,
    ) -> Result<String> {
        let mut attempts = 0;
        let mut backoff = self.base_backoff;

        loop {
            let response_result = self
                .client
                .post(url)
                .bearer_auth(api_key)
                .header("Content-Type", "application/json")
                .body(body.clone())
                .send()
                .await;

            match response_result {
                Ok(response) => {
                    let status = response.status();
                    if !status.is_success() {
                        let error_body = response.text().await.unwrap_or_default();

                        if attempts < self.max_retries
                            && (status.as_u16() == 429 || status.is_server_error())
                        {
                            warn!(
                                request_id = %request_id,
                                status = %status,
                                "Transient API error, retrying in {:?}",
                                backoff
                            );
                            tokio::time::sleep(backoff).await;
                            attempts += 1;
                            backoff *= 2;
                            continue;
                        }

                        return Err(anyhow!("API error {}: {}", status, error_body));
                    }

                    return Ok(response.text().await?);
                }
                Err(e) => {
                    // The request may have been processed for other errors
                    if attempts < self.max_retries && (e.is_connect() || e.is_timeout()) {
                        warn!(
                            request_id = %request_id,
                            error = %e,
                            "Request failed (connect/timeout), retrying in {:?}",
                            backoff
                        );
                        tokio::time::sleep(backoff).await;
                        attempts += 1;
                        backoff *= 2;
                        continue;
                    }
                    return Err(anyhow!("Request failed: {}", e));
                }
            }
        }
    }
}
