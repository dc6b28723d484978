use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub recording: RecordingConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

/// Client-side capture limits and acceptance-gate thresholds.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordingConfig {
    /// Hard cap on one capture, in seconds
    pub max_duration_secs: u64,
    /// Duration gate: clips shorter than this are rejected before any network spend
    pub min_duration_ms: u64,
    /// Size gate: encoded clips smaller than this are rejected before any network spend
    pub min_clip_bytes: usize,
    pub sample_rate: u32,
    pub channels: u16,
}

/// Hosted AI services behind the relay. The credential is NOT here:
/// it comes from the `GROQ_API_KEY` environment variable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub transcription_model: String,
    pub generation_model: String,
    pub temperature: f32,
    pub max_completion_tokens: u32,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
