//! Speech-synthesis narration with mute and single-utterance discipline.
//!
//! One controller owns the speaking flag and the in-flight utterance;
//! starting a new utterance cancels whatever is still playing. Muted
//! narration completes immediately without engine contact, so flow
//! that waits on a line ("speak welcome, then open the mic") is never
//! blocked by the mute switch.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Voice parameters for one spoken line
#[derive(Debug, Clone)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Utterance {
    /// Slow and low reads as condescending. That's the point.
    pub fn savage(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rate: 0.85,
            pitch: 0.1,
            volume: 1.0,
        }
    }
}

/// Speech-synthesis seam. The browser's synthesizer lives on the other
/// side of the product; embedders plug a real engine in here.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Speak one utterance to completion
    async fn speak(&self, utterance: &Utterance) -> Result<()>;

    /// Engine name for logging
    fn name(&self) -> &str;
}

/// Default engine: logs the line instead of synthesizing it
pub struct ConsoleEngine;

#[async_trait]
impl SpeechEngine for ConsoleEngine {
    async fn speak(&self, utterance: &Utterance) -> Result<()> {
        info!(
            "[{}] rate={} pitch={}: {:?}",
            self.name(),
            utterance.rate,
            utterance.pitch,
            utterance.text
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

/// Drives narration at UI transitions
#[derive(Clone)]
pub struct NarrationController {
    engine: Arc<dyn SpeechEngine>,
    speaking: Arc<AtomicBool>,
    muted: Arc<AtomicBool>,
    current: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl NarrationController {
    pub fn new(engine: Arc<dyn SpeechEngine>) -> Self {
        Self {
            engine,
            speaking: Arc::new(AtomicBool::new(false)),
            muted: Arc::new(AtomicBool::new(false)),
            current: Arc::new(Mutex::new(None)),
        }
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking.load(Ordering::SeqCst)
    }

    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::SeqCst)
    }

    /// Flip the global mute. Muting kills any in-flight utterance.
    pub async fn set_muted(&self, muted: bool) {
        self.muted.store(muted, Ordering::SeqCst);
        if muted {
            self.cancel().await;
        }
    }

    /// Speak to completion. Cancels any in-flight utterance first.
    /// When muted this returns immediately, so dependent flow still runs.
    pub async fn narrate(&self, utterance: Utterance) {
        self.cancel().await;

        if self.muted.load(Ordering::SeqCst) {
            return;
        }

        self.speaking.store(true, Ordering::SeqCst);
        if let Err(e) = self.engine.speak(&utterance).await {
            warn!("Narration failed: {}", e);
        }
        self.speaking.store(false, Ordering::SeqCst);
    }

    /// Fire-and-forget narration (the roast read-out). Cancels any
    /// in-flight utterance first.
    pub async fn narrate_detached(&self, utterance: Utterance) {
        self.cancel().await;

        if self.muted.load(Ordering::SeqCst) {
            return;
        }

        let engine = Arc::clone(&self.engine);
        let speaking = Arc::clone(&self.speaking);
        speaking.store(true, Ordering::SeqCst);

        let task = tokio::spawn(async move {
            if let Err(e) = engine.speak(&utterance).await {
                warn!("Narration failed: {}", e);
            }
            speaking.store(false, Ordering::SeqCst);
        });

        let mut current = self.current.lock().await;
        *current = Some(task);
    }

    /// Kill any in-flight utterance and clear the speaking flag.
    pub async fn cancel(&self) {
        let mut current = self.current.lock().await;
        if let Some(task) = current.take() {
            task.abort();
            self.speaking.store(false, Ordering::SeqCst);
        }
    }
}
