pub mod audio;
pub mod catalogue;
pub mod client;
pub mod config;
pub mod error;
pub mod narration;
pub mod presenter;
pub mod relay;
pub mod session;

pub use audio::{
    AcceptanceGates, AudioFrame, CaptureBackend, CaptureConfig, CaptureHandle, CaptureSession,
    Clip, ScriptedBackend,
};
pub use client::{RoastApi, RoastClient};
pub use config::Config;
pub use error::{CaptureError, RelayError, RoastRequestError};
pub use narration::{ConsoleEngine, NarrationController, SpeechEngine, Utterance};
pub use presenter::{Advance, Meter, ResultCard, ResultPresenter, ShareCard};
pub use relay::{create_router, AppState, Heritage, RoastPipeline, RoastResult};
pub use session::{GameSession, Phase, SessionConfig};
