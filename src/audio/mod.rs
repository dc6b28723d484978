//! Audio capture: frames, backends, clip assembly, acceptance gates.
//!
//! The capture backend is a seam: the real microphone lives on the
//! browser side of the product, so the crate ships a scripted backend
//! and leaves device backends to embedders.

pub mod backend;
pub mod capture;
pub mod clip;

pub use backend::{AudioFrame, CaptureBackend, CaptureConfig, ScriptedBackend};
pub use capture::{CaptureHandle, CaptureSession};
pub use clip::{AcceptanceGates, Clip, CLIP_MIME};
