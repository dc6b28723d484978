use crate::audio::AcceptanceGates;
use crate::config::RecordingConfig;
use std::time::Duration;

/// Configuration for one game session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Unique session identifier (e.g., "roast-<uuid>")
    pub session_id: String,

    /// Hard cap on one capture
    pub max_capture: Duration,

    /// Client-side acceptance gates applied before any network spend
    pub gates: AcceptanceGates,

    /// Sample rate for the assembled clip
    pub sample_rate: u32,

    /// Number of audio channels (1 = mono, 2 = stereo)
    pub channels: u16,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("roast-{}", uuid::Uuid::new_v4()),
            max_capture: Duration::from_secs(5),
            gates: AcceptanceGates::default(),
            sample_rate: 16000, // Whisper expects 16kHz
            channels: 1,        // Mono
        }
    }
}

impl SessionConfig {
    /// Build from the service's recording configuration.
    pub fn from_recording(cfg: &RecordingConfig) -> Self {
        Self {
            max_capture: Duration::from_secs(cfg.max_duration_secs),
            gates: AcceptanceGates {
                min_duration: Duration::from_millis(cfg.min_duration_ms),
                min_bytes: cfg.min_clip_bytes,
            },
            sample_rate: cfg.sample_rate,
            channels: cfg.channels,
            ..Self::default()
        }
    }
}
