//! The text transformation seam.
//!
//! The submission workflow only ever talks to [`TextTransformer`], so the
//! concrete backend can be swapped without touching it. `DemoTransformer`
//! ships as the default until an endpoint is configured; `HttpTransformer`
//! is the real network boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::constants::{DEMO_DELAY, EXCERPT_LEN, REQUEST_TIMEOUT};
use crate::text::{count_words, excerpt};

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server returned HTTP {0}")]
    Status(u16),
    #[error("transform task aborted")]
    Aborted,
}

/// One operation: informal text in, academic text out. Asynchronous and
/// fallible; implementations must be shareable across the UI thread and
/// the runtime worker that executes the call.
#[async_trait]
pub trait TextTransformer: Send + Sync {
    async fn transform(&self, text: &str) -> Result<String, TransformError>;
}

/// Stand-in transformer used while no backend endpoint is configured.
/// Sleeps for the demo delay, then echoes a placeholder with the word
/// count and a truncated copy of the input.
pub struct DemoTransformer;

#[async_trait]
impl TextTransformer for DemoTransformer {
    async fn transform(&self, text: &str) -> Result<String, TransformError> {
        tokio::time::sleep(DEMO_DELAY).await;
        Ok(format!(
            "[Demo] Teks akademik akan muncul di sini setelah API terhubung.\n\n\
             Teks asli ({} kata):\n\"{}\"",
            count_words(text),
            excerpt(text, EXCERPT_LEN)
        ))
    }
}

#[derive(Serialize)]
struct RewriteRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct RewriteResponse {
    result: String,
}

/// Backend transformer: POSTs the text as JSON to the configured endpoint
/// and expects `{"result": "..."}` back. Any transport error or
/// non-success status fails the submission.
pub struct HttpTransformer {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransformer {
    pub fn new(endpoint: String) -> Result<Self, TransformError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl TextTransformer for HttpTransformer {
    async fn transform(&self, text: &str) -> Result<String, TransformError> {
        debug!(endpoint = %self.endpoint, chars = text.len(), "Sending rewrite request");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RewriteRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransformError::Status(status.as_u16()));
        }

        let body: RewriteResponse = response.json().await?;
        Ok(body.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn demo_output_reports_word_count_and_echo() {
        let out = DemoTransformer
            .transform("Halo dunia ini contoh")
            .await
            .unwrap();
        assert!(out.starts_with("[Demo]"));
        assert!(out.contains("(4 kata)"));
        assert!(out.contains("\"Halo dunia ini contoh\""));
    }

    #[tokio::test]
    async fn demo_output_truncates_long_input() {
        let input = vec!["kata"; 60].join(" ");
        let out = DemoTransformer.transform(&input).await.unwrap();
        assert!(out.contains("(60 kata)"));
        assert!(out.contains("..."));
        assert!(!out.contains(&input));
    }
}
