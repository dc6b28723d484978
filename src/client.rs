//! Roast request client: encodes the clip, sends one request to the
//! relay, parses the structured response. Fire-and-forget from the
//! concurrency perspective: no retries, no cancellation once sent.

use crate::audio::Clip;
use crate::error::RoastRequestError;
use crate::relay::{ErrorResponse, RoastRequest, RoastResult};
use async_trait::async_trait;
use base64::Engine;
use tracing::info;

/// The client-side seam the session talks through, so the network can
/// be substituted in tests.
#[async_trait]
pub trait RoastApi: Send + Sync {
    async fn request_roast(
        &self,
        clip: &Clip,
        challenge: &str,
    ) -> Result<RoastResult, RoastRequestError>;
}

/// HTTP client for the relay endpoint
pub struct RoastClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RoastClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl RoastApi for RoastClient {
    async fn request_roast(
        &self,
        clip: &Clip,
        challenge: &str,
    ) -> Result<RoastResult, RoastRequestError> {
        let body = RoastRequest {
            audio: base64::engine::general_purpose::STANDARD.encode(clip.bytes()),
            challenge_text: challenge.to_string(),
        };

        info!(
            "Submitting roast request ({} clip bytes, challenge: {:?})",
            clip.len(),
            challenge
        );

        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| RoastRequestError::new(format!("Couldn't reach the roast server: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            // Surface the relay's message verbatim when there is one.
            let message = match response.json::<ErrorResponse>().await {
                Ok(err) => err.error,
                Err(_) => format!("Roast server error ({status})"),
            };
            return Err(RoastRequestError::new(message));
        }

        response
            .json::<RoastResult>()
            .await
            .map_err(|e| RoastRequestError::new(format!("Roast server returned nonsense: {e}")))
    }
}
