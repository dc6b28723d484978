use super::prompt;
use super::types::RoastResult;
use super::upstream::{GenerationService, GroqGeneration, GroqTranscription, TranscriptionService};
use crate::config::UpstreamConfig;
use crate::error::RelayError;
use std::sync::Arc;
use tracing::{error, info};

/// Environment variable holding the shared upstream credential.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// The two-stage pipeline behind POST /api/roast: transcription, then
/// generation over the transcript. Stage 2 depends on stage 1's
/// output, so a stage-1 failure short-circuits.
pub struct RoastPipeline {
    /// Shared credential for both stages. `None` means misconfigured:
    /// every run fails fast before either collaborator is touched.
    credential: Option<String>,
    transcriber: Arc<dyn TranscriptionService>,
    generator: Arc<dyn GenerationService>,
}

impl RoastPipeline {
    /// Wire up the hosted collaborators; credential from the process
    /// environment. A missing key does not stop the service, but every
    /// roast request will answer with a configuration error.
    pub fn from_config(cfg: &UpstreamConfig) -> Self {
        let credential = std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty());
        if credential.is_none() {
            error!("Missing {} in environment; roast requests will fail", API_KEY_ENV);
        }

        let client = reqwest::Client::new();
        Self {
            credential,
            transcriber: Arc::new(GroqTranscription::new(client.clone(), cfg)),
            generator: Arc::new(GroqGeneration::new(client, cfg)),
        }
    }

    /// Explicit wiring, used by tests and alternate deployments.
    pub fn with_collaborators(
        credential: Option<String>,
        transcriber: Arc<dyn TranscriptionService>,
        generator: Arc<dyn GenerationService>,
    ) -> Self {
        Self {
            credential,
            transcriber,
            generator,
        }
    }

    /// Run both stages for one clip and parse the result.
    pub async fn run(&self, audio: &[u8], challenge: &str) -> Result<RoastResult, RelayError> {
        // Never silently proceed without the credential.
        let credential = self.credential.as_deref().ok_or(RelayError::Configuration)?;

        // Stage 1: transcription. Failure short-circuits stage 2.
        let transcript = self.transcriber.transcribe(credential, audio).await?;

        // Stage 2: generation over the stage-1 output.
        let instruction = prompt::build_prompt(challenge, &transcript);
        let raw = self.generator.generate(credential, &instruction).await?;

        // A generation response that is not the result schema is its
        // own failure, not a network one.
        let result: RoastResult =
            serde_json::from_str(&raw).map_err(|e| RelayError::MalformedOutput(e.to_string()))?;

        if result.heritage.len() != 3 {
            return Err(RelayError::MalformedOutput(format!(
                "expected 3 heritage entries, got {}",
                result.heritage.len()
            )));
        }

        info!(badge = %result.badge, "roast pipeline complete");
        Ok(result)
    }
}
