//! Embedding service client — turns text into fixed-dimension vectors for
//! the relevance score and corpus retrieval.
//!
//! Failures surface as `EmbeddingError`; the pipeline degrades to the fixed
//! fallback relevance instead of retrying or aborting the document.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const OPENAI_EMBEDDINGS_URL: &str = "https://api.openai.com/v1/embeddings";
/// Embedding model — vectors are only comparable within one model, so the
/// corpus must have been embedded with the same one.
pub const EMBEDDING_MODEL: &str = "text-embedding-3-large";
/// Input is truncated to this many characters before submission.
const MAX_INPUT_CHARS: usize = 8000;
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("embedding response contained no vectors")]
    Empty,
}

/// Abstraction over the embedding service, carried in `AppState` as
/// `Arc<dyn EmbeddingService>` so tests can substitute a deterministic stub.
#[async_trait]
pub trait EmbeddingService: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: Vec<&'a str>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingDatum>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingDatum {
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// Wraps the embeddings API behind `EmbeddingService`.
#[derive(Clone)]
pub struct EmbeddingClient {
    client: Client,
    api_key: String,
}

impl EmbeddingClient {
    pub fn new(api_key: String) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key,
        })
    }
}

#[async_trait]
impl EmbeddingService for EmbeddingClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        // Newlines degrade embedding quality for this model family.
        let flattened = text.replace('\n', " ");
        let input = truncate_chars(&flattened, MAX_INPUT_CHARS);

        let response = self
            .client
            .post(OPENAI_EMBEDDINGS_URL)
            .bearer_auth(&self.api_key)
            .json(&EmbeddingRequest {
                model: EMBEDDING_MODEL,
                input: vec![input],
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(EmbeddingError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: EmbeddingResponse = response.json().await.map_err(EmbeddingError::Http)?;
        parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .filter(|v| !v.is_empty())
            .ok_or(EmbeddingError::Empty)
    }
}

/// Truncates to at most `max` characters without splitting a code point.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_input_untouched() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_cuts_at_char_boundary() {
        assert_eq!(truncate_chars("hello", 3), "hel");
        // Multi-byte characters count as one char each.
        assert_eq!(truncate_chars("héllo", 2), "hé");
    }

    #[test]
    fn test_truncate_empty() {
        assert_eq!(truncate_chars("", 5), "");
    }
}
