use super::backend::{CaptureBackend, CaptureConfig};
use super::clip::Clip;
use crate::error::CaptureError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tracing::{info, warn};

/// Lets the UI end a capture before the deadline. Clone freely; one
/// `stop()` from anywhere ends the session.
#[derive(Clone, Default)]
pub struct CaptureHandle {
    stop: Arc<Notify>,
}

impl CaptureHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// End the capture early. Safe to call before recording starts;
    /// the signal is retained.
    pub fn stop(&self) {
        self.stop.notify_one();
    }
}

/// One bounded capture: accumulates frames from a backend until the
/// deadline elapses or the handle stops it, then concatenates them
/// into a clip. The backend is released on every exit path.
pub struct CaptureSession {
    backend: Box<dyn CaptureBackend>,
    config: CaptureConfig,
    max_duration: Duration,
    handle: CaptureHandle,
}

impl CaptureSession {
    pub fn new(
        backend: Box<dyn CaptureBackend>,
        config: CaptureConfig,
        max_duration: Duration,
        handle: CaptureHandle,
    ) -> Self {
        Self {
            backend,
            config,
            max_duration,
            handle,
        }
    }

    /// Run the capture to completion and produce the clip.
    ///
    /// A backend that refuses to start surfaces as
    /// [`CaptureError::Device`]; the acceptance gates are the caller's
    /// job, once the clip exists.
    pub async fn record(&mut self) -> Result<Clip, CaptureError> {
        info!(
            "Starting capture via {} (max {:?})",
            self.backend.name(),
            self.max_duration
        );

        let mut frame_rx = match self.backend.start().await {
            Ok(rx) => rx,
            Err(e) => return Err(CaptureError::Device(e.to_string())),
        };

        let deadline = tokio::time::sleep(self.max_duration);
        tokio::pin!(deadline);

        let mut frames = Vec::new();

        loop {
            tokio::select! {
                maybe_frame = frame_rx.recv() => match maybe_frame {
                    Some(frame) => frames.push(frame),
                    None => {
                        info!("Capture stream closed by backend");
                        break;
                    }
                },
                _ = &mut deadline => {
                    info!("Capture deadline reached");
                    break;
                }
                _ = self.handle.stop.notified() => {
                    info!("Capture stopped by user");
                    break;
                }
            }
        }

        // Release the device no matter how the loop ended.
        if let Err(e) = self.backend.stop().await {
            warn!("Failed to stop capture backend: {}", e);
        }

        let clip = Clip::from_frames(&frames, self.config.sample_rate, self.config.channels)?;
        info!(
            "Capture complete: {} frames, {} bytes, {:?}",
            frames.len(),
            clip.len(),
            clip.duration()
        );

        Ok(clip)
    }
}
