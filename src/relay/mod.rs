//! Roast relay: the HTTP surface bridging the browser client to the
//! two hosted AI stages (transcription, then generation).
//!
//! - POST /api/roast - base64 clip + challenge phrase in, structured roast out
//! - GET /health - health check

mod handlers;
mod routes;
mod state;

pub mod pipeline;
pub mod prompt;
pub mod types;
pub mod upstream;

pub use pipeline::{RoastPipeline, API_KEY_ENV};
pub use routes::create_router;
pub use state::AppState;
pub use types::{ErrorResponse, Heritage, RoastRequest, RoastResult};
pub use upstream::{GenerationService, GroqGeneration, GroqTranscription, TranscriptionService};
