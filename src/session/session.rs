use super::config::SessionConfig;
use crate::audio::{CaptureBackend, CaptureConfig, CaptureHandle, CaptureSession, Clip};
use crate::catalogue;
use crate::client::RoastApi;
use crate::narration::{NarrationController, Utterance};
use crate::presenter::{Advance, ResultCard, ResultPresenter};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

/// Overall session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Landing,
    Recording,
    Analyzing,
    Results,
}

/// One player's session: owns the phase, the drawn challenge, the
/// result (once received) and the error line. Single-flight by
/// construction: one capture, one roast request, one result.
pub struct GameSession {
    config: SessionConfig,
    client: Arc<dyn RoastApi>,
    narrator: NarrationController,
    phase: Phase,
    challenge: &'static str,
    clip: Option<Clip>,
    presenter: Option<ResultPresenter>,
    error: Option<String>,
    started_at: DateTime<Utc>,
}

impl GameSession {
    pub fn new(
        config: SessionConfig,
        client: Arc<dyn RoastApi>,
        narrator: NarrationController,
    ) -> Self {
        let challenge = catalogue::draw_challenge();
        info!(
            "Session {} created, challenge: {:?}",
            config.session_id, challenge
        );

        Self {
            config,
            client,
            narrator,
            phase: Phase::Landing,
            challenge,
            clip: None,
            presenter: None,
            error: None,
            started_at: Utc::now(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn challenge(&self) -> &str {
        self.challenge
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn presenter(&self) -> Option<&ResultPresenter> {
        self.presenter.as_ref()
    }

    pub fn narrator(&self) -> &NarrationController {
        &self.narrator
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The active result card, when in the results phase
    pub fn current_card(&self) -> Option<ResultCard> {
        self.presenter.as_ref().map(|p| p.current_card())
    }

    /// Start a round: narrate a welcome line to completion, then
    /// capture. Only legal from landing with narration idle.
    ///
    /// A capture or gate failure puts the session back on landing with
    /// an error message and never touches the network; a valid clip
    /// moves it to analyzing.
    pub async fn begin(
        &mut self,
        backend: Box<dyn CaptureBackend>,
        stop: CaptureHandle,
    ) -> Result<()> {
        if self.phase != Phase::Landing {
            anyhow::bail!("cannot start recording from {:?}", self.phase);
        }
        if self.narrator.is_speaking() {
            anyhow::bail!("cannot start recording while narration is in flight");
        }

        self.error = None;

        // The welcome line finishes (or is skipped when muted) before
        // the mic opens.
        self.narrator
            .narrate(Utterance::savage(catalogue::draw_welcome()))
            .await;

        self.phase = Phase::Recording;

        let capture_config = CaptureConfig {
            sample_rate: self.config.sample_rate,
            channels: self.config.channels,
            ..CaptureConfig::default()
        };
        let mut capture =
            CaptureSession::new(backend, capture_config, self.config.max_capture, stop);

        let outcome = match capture.record().await {
            Ok(clip) => self.config.gates.check(&clip).map(|()| clip),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(clip) => {
                info!(
                    "Clip accepted: {} bytes, {:?}",
                    clip.len(),
                    clip.duration()
                );
                self.clip = Some(clip);
                self.phase = Phase::Analyzing;
            }
            Err(e) => {
                warn!("Capture rejected: {}", e);
                self.error = Some(e.to_string());
                self.phase = Phase::Landing;
            }
        }

        Ok(())
    }

    /// Submit the accepted clip. One shot; any failure surfaces its
    /// message and returns the session to landing.
    pub async fn analyze(&mut self) -> Result<()> {
        if self.phase != Phase::Analyzing {
            anyhow::bail!("cannot analyze from {:?}", self.phase);
        }

        let clip = self.clip.take().context("analyzing phase without a clip")?;

        match self.client.request_roast(&clip, self.challenge).await {
            Ok(result) => {
                info!("Roast received, badge: {:?}", result.badge);
                self.presenter = Some(ResultPresenter::new(result));
                self.phase = Phase::Results;
            }
            Err(e) => {
                warn!("Roast request failed: {}", e);
                self.error = Some(e.to_string());
                self.phase = Phase::Landing;
            }
        }

        Ok(())
    }

    /// Move to the next result card. The first arrival on the roast
    /// card narrates the roast; advancing past the share card resets
    /// the whole session.
    pub async fn advance_card(&mut self) -> Result<()> {
        if self.phase != Phase::Results {
            anyhow::bail!("cannot advance cards from {:?}", self.phase);
        }

        let (outcome, roast_to_narrate) = {
            let presenter = self
                .presenter
                .as_mut()
                .context("results phase without a result")?;

            let outcome = presenter.advance();
            let mut roast = None;
            if outcome == Advance::Advanced
                && presenter.cursor() == 1
                && !presenter.roast_narrated()
            {
                presenter.mark_roast_narrated();
                roast = Some(presenter.result().roast.clone());
            }
            (outcome, roast)
        };

        if let Some(roast) = roast_to_narrate {
            self.narrator.narrate_detached(Utterance::savage(roast)).await;
        }
        if outcome == Advance::Exhausted {
            self.reset().await;
        }

        Ok(())
    }

    /// Back to a fresh landing: new challenge drawn, result discarded,
    /// error cleared, narration cancelled. Nothing survives the reset.
    pub async fn reset(&mut self) {
        self.narrator.cancel().await;
        self.challenge = catalogue::draw_challenge();
        self.clip = None;
        self.presenter = None;
        self.error = None;
        self.phase = Phase::Landing;
        info!(
            "Session {} reset, new challenge: {:?}",
            self.config.session_id, self.challenge
        );
    }

    /// Flip the global mute; returns the new state.
    pub async fn toggle_mute(&mut self) -> bool {
        let muted = !self.narrator.is_muted();
        self.narrator.set_muted(muted).await;
        muted
    }
}
