//! Hosted collaborators for the two relay stages.
//!
//! Both authenticate with the single shared credential the pipeline
//! hands them per call; neither holds the key itself.

use crate::audio::CLIP_MIME;
use crate::config::UpstreamConfig;
use crate::error::RelayError;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, info};

/// Stage 1: binary clip in, transcript out.
#[async_trait]
pub trait TranscriptionService: Send + Sync {
    async fn transcribe(&self, credential: &str, audio: &[u8]) -> Result<String, RelayError>;
}

/// Stage 2: system instruction in, raw JSON critique text out.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, credential: &str, instruction: &str) -> Result<String, RelayError>;
}

// ============================================================================
// Upstream response shapes
// ============================================================================

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

// ============================================================================
// Groq-hosted implementations
// ============================================================================

/// Whisper-family transcription over the Groq OpenAI-compatible API
pub struct GroqTranscription {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GroqTranscription {
    pub fn new(client: reqwest::Client, cfg: &UpstreamConfig) -> Self {
        Self {
            client,
            base_url: cfg.base_url.clone(),
            model: cfg.transcription_model.clone(),
        }
    }
}

#[async_trait]
impl TranscriptionService for GroqTranscription {
    async fn transcribe(&self, credential: &str, audio: &[u8]) -> Result<String, RelayError> {
        debug!(audio_bytes = audio.len(), model = %self.model, "starting transcription");

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(audio.to_vec())
                    .file_name("recording.wav")
                    .mime_str(CLIP_MIME)
                    .map_err(|e| RelayError::Transcription(e.to_string()))?,
            )
            .text("model", self.model.clone());

        let response = self
            .client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(credential)
            .multipart(form)
            .send()
            .await
            .map_err(|e| RelayError::Transcription(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, %body, "transcription API error");
            return Err(RelayError::Transcription(format!("upstream status {status}")));
        }

        let parsed: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| RelayError::Transcription(e.to_string()))?;

        // An upstream response without text becomes "..." so the
        // generation stage still has something to chew on.
        let transcript = parsed.text.unwrap_or_else(|| "...".to_string());
        info!(transcript = %transcript, "transcription complete");

        Ok(transcript)
    }
}

/// Chat-completions generation over the Groq OpenAI-compatible API
pub struct GroqGeneration {
    client: reqwest::Client,
    base_url: String,
    model: String,
    temperature: f32,
    max_completion_tokens: u32,
}

impl GroqGeneration {
    pub fn new(client: reqwest::Client, cfg: &UpstreamConfig) -> Self {
        Self {
            client,
            base_url: cfg.base_url.clone(),
            model: cfg.generation_model.clone(),
            temperature: cfg.temperature,
            max_completion_tokens: cfg.max_completion_tokens,
        }
    }
}

#[async_trait]
impl GenerationService for GroqGeneration {
    async fn generate(&self, credential: &str, instruction: &str) -> Result<String, RelayError> {
        debug!(model = %self.model, "starting generation");

        let body = serde_json::json!({
            "model": self.model,
            "temperature": self.temperature,
            "max_completion_tokens": self.max_completion_tokens,
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "system", "content": instruction }
            ],
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(credential)
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Generation(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, %body, "generation API error");
            return Err(RelayError::Generation(format!("upstream status {status}")));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| RelayError::Generation(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| RelayError::Generation("upstream returned no choices".to_string()))
    }
}
