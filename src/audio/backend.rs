use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Audio sample data (16-bit PCM, interleaved)
#[derive(Debug, Clone)]
pub struct AudioFrame {
    /// Raw audio samples (i16 PCM, interleaved)
    pub samples: Vec<i16>,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels
    pub channels: u16,
    /// Timestamp in milliseconds since capture started
    pub timestamp_ms: u64,
}

/// Configuration for a capture backend
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Target sample rate
    pub sample_rate: u32,
    /// Target channel count (1 = mono, 2 = stereo)
    pub channels: u16,
    /// Buffer size in milliseconds (affects latency)
    pub buffer_duration_ms: u64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            sample_rate: 16000, // Whisper expects 16kHz
            channels: 1,        // Mono
            buffer_duration_ms: 100,
        }
    }
}

/// Audio capture backend trait
///
/// Only the capture session reads from or stops a backend; the device
/// must be released on every path out of the recording state.
#[async_trait::async_trait]
pub trait CaptureBackend: Send + Sync {
    /// Start capturing audio
    ///
    /// Returns a channel receiver that will receive audio frames in
    /// arrival order. Failure here means the device is unavailable or
    /// permission was denied.
    async fn start(&mut self) -> Result<mpsc::Receiver<AudioFrame>>;

    /// Stop capturing audio and release the device
    async fn stop(&mut self) -> Result<()>;

    /// Check if backend is currently capturing
    fn is_capturing(&self) -> bool;

    /// Get backend name for logging
    fn name(&self) -> &str;
}

/// Replays a fixed frame script.
///
/// Stands in for a device backend in tests and demos: finite scripts
/// drain immediately and close the channel; looping scripts keep
/// producing until the session stops them.
pub struct ScriptedBackend {
    frames: Vec<AudioFrame>,
    looping: bool,
    deny: bool,
    capturing: bool,
    released: Arc<AtomicBool>,
}

impl ScriptedBackend {
    /// Backend that plays `frames` once and closes the stream.
    pub fn new(frames: Vec<AudioFrame>) -> Self {
        Self {
            frames,
            looping: false,
            deny: false,
            capturing: false,
            released: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Backend that replays `frames` until stopped.
    pub fn looping(frames: Vec<AudioFrame>) -> Self {
        Self {
            looping: true,
            ..Self::new(frames)
        }
    }

    /// Backend that refuses to start, as a denied microphone permission would.
    pub fn denied() -> Self {
        Self {
            deny: true,
            ..Self::new(Vec::new())
        }
    }

    /// Observable release flag: set once `stop()` has run.
    pub fn released_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.released)
    }
}

#[async_trait::async_trait]
impl CaptureBackend for ScriptedBackend {
    async fn start(&mut self) -> Result<mpsc::Receiver<AudioFrame>> {
        if self.deny {
            anyhow::bail!("microphone permission denied");
        }

        let (tx, rx) = mpsc::channel(64);
        let frames = self.frames.clone();
        let looping = self.looping;

        tokio::spawn(async move {
            loop {
                for frame in &frames {
                    if tx.send(frame.clone()).await.is_err() {
                        return; // receiver gone, capture is over
                    }
                    if looping {
                        tokio::time::sleep(Duration::from_millis(2)).await;
                    }
                }
                if !looping {
                    return;
                }
            }
        });

        self.capturing = true;
        Ok(rx)
    }

    async fn stop(&mut self) -> Result<()> {
        self.capturing = false;
        self.released.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_capturing(&self) -> bool {
        self.capturing
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
