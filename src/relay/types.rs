use serde::{Deserialize, Serialize};

// ============================================================================
// Wire Types
// ============================================================================

/// Request body for POST /api/roast
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoastRequest {
    /// Base64-encoded audio clip. Required; absence is a 400.
    #[serde(default)]
    pub audio: String,

    /// The challenge phrase the player was asked to say
    #[serde(default)]
    pub challenge_text: String,
}

/// One entry of the heritage breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heritage {
    pub country: String,
    /// Conceptually the three percentages sum to 100; the upstream is
    /// not held to that and values are passed through unmodified.
    pub percentage: f64,
}

/// The structured critique returned by the generation stage.
/// Immutable once received; the presenter owns it for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoastResult {
    pub transcription: String,
    /// Exactly 3 entries on a well-formed response
    pub heritage: Vec<Heritage>,
    pub roast: String,
    /// Two-word title
    pub badge: String,
    /// Celebrity comparison line
    pub celebrity: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
