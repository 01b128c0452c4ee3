use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::server::{
    error::upstream::UpstreamError,
    generation::GenerationClient,
    model::{flashcard::Flashcard, lecture::GeneratedSummary, quiz::GeneratedQuestion},
};

const SUMMARIZE_ENDPOINT: &str = "/summarize";
const QUIZ_ENDPOINT: &str = "/quiz";
const FLASHCARDS_ENDPOINT: &str = "/flashcards";

/// Generation service client speaking HTTP via a shared `reqwest::Client`.
///
/// Every call carries its own timeout so a stalled service cannot hold a request
/// open indefinitely.
#[derive(Clone)]
pub struct HttpGenerationClient {
    http_client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

#[derive(Serialize)]
struct TextPayload<'a> {
    text: &'a str,
}

impl HttpGenerationClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// - `http_client` - Pooled HTTP client shared by the whole process
    /// - `base_url` - Root of the generation service, e.g. `http://ml:8000`
    /// - `timeout` - Per-request timeout applied to every call
    pub fn new(http_client: reqwest::Client, mut base_url: Url, timeout: Duration) -> Self {
        // Url::join replaces the last segment unless the base ends with a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            http_client,
            base_url,
            timeout,
        }
    }

    fn endpoint_url(&self, endpoint: &'static str) -> Result<Url, UpstreamError> {
        self.base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| UpstreamError::Malformed {
                endpoint,
                reason: format!("invalid endpoint url: {}", e),
            })
    }

    /// Sends a prepared request and decodes a JSON body from a success response.
    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, UpstreamError> {
        let response = request
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|source| UpstreamError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                endpoint,
                status,
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| UpstreamError::Transport { endpoint, source })?;

        serde_json::from_slice::<T>(&body)
            .map_err(|source| UpstreamError::Decode { endpoint, source })
    }

    async fn post_text<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        text: &str,
    ) -> Result<T, UpstreamError> {
        let url = self.endpoint_url(endpoint)?;
        let request = self.http_client.post(url).json(&TextPayload { text });

        self.send(endpoint, request).await
    }
}

#[async_trait]
impl GenerationClient for HttpGenerationClient {
    async fn summarize(
        &self,
        file_name: &str,
        file: Bytes,
    ) -> Result<GeneratedSummary, UpstreamError> {
        let url = self.endpoint_url(SUMMARIZE_ENDPOINT)?;
        let part = Part::stream(file).file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        let request = self.http_client.post(url).multipart(form);

        self.send(SUMMARIZE_ENDPOINT, request).await
    }

    async fn generate_quiz(&self, text: &str) -> Result<Vec<GeneratedQuestion>, UpstreamError> {
        self.post_text(QUIZ_ENDPOINT, text).await
    }

    async fn generate_flashcards(&self, text: &str) -> Result<Vec<Flashcard>, UpstreamError> {
        self.post_text(FLASHCARDS_ENDPOINT, text).await
    }
}
