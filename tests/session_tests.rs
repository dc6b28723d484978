// Integration tests for the game session state machine:
// landing → recording → analyzing → results → (reset) → landing.

use accent_roaster::audio::{AudioFrame, CaptureHandle, Clip, ScriptedBackend};
use accent_roaster::catalogue::CHALLENGES;
use accent_roaster::client::RoastApi;
use accent_roaster::error::RoastRequestError;
use accent_roaster::narration::{ConsoleEngine, NarrationController, SpeechEngine, Utterance};
use accent_roaster::presenter::ResultCard;
use accent_roaster::relay::{Heritage, RoastResult};
use accent_roaster::session::{GameSession, Phase, SessionConfig};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

// ============================================================================
// Mocks and helpers
// ============================================================================

/// Network stand-in with a call counter and a fixed outcome.
struct MockApi {
    calls: AtomicUsize,
    outcome: Result<RoastResult, String>,
}

impl MockApi {
    fn ok(result: RoastResult) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcome: Ok(result),
        })
    }

    fn err(message: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcome: Err(message.to_string()),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoastApi for MockApi {
    async fn request_roast(
        &self,
        _clip: &Clip,
        _challenge: &str,
    ) -> Result<RoastResult, RoastRequestError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(result) => Ok(result.clone()),
            Err(message) => Err(RoastRequestError::new(message.clone())),
        }
    }
}

/// Engine that records what it spoke.
struct SpyEngine {
    delay: Duration,
    spoken: Mutex<Vec<String>>,
}

impl SpyEngine {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            delay: Duration::ZERO,
            spoken: Mutex::new(Vec::new()),
        })
    }

    fn slow() -> Arc<Self> {
        Arc::new(Self {
            delay: Duration::from_millis(200),
            spoken: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl SpeechEngine for SpyEngine {
    async fn speak(&self, utterance: &Utterance) -> Result<()> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.spoken.lock().await.push(utterance.text.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "spy"
    }
}

fn sample_result() -> RoastResult {
    RoastResult {
        transcription: "hi".to_string(),
        heritage: vec![
            Heritage { country: "India".to_string(), percentage: 60.0 },
            Heritage { country: "USA".to_string(), percentage: 30.0 },
            Heritage { country: "UK".to_string(), percentage: 10.0 },
        ],
        roast: "X!".to_string(),
        badge: "Y Z".to_string(),
        celebrity: "W".to_string(),
    }
}

/// `tenths` * 100ms of 16kHz mono audio.
fn frames(tenths: u64) -> Vec<AudioFrame> {
    (0..tenths)
        .map(|i| AudioFrame {
            samples: vec![7i16; 1600],
            sample_rate: 16000,
            channels: 1,
            timestamp_ms: i * 100,
        })
        .collect()
}

fn session_with(api: Arc<MockApi>) -> GameSession {
    GameSession::new(
        SessionConfig::default(),
        api,
        NarrationController::new(Arc::new(ConsoleEngine)),
    )
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn fresh_session_lands_with_a_catalogue_challenge() {
    let session = session_with(MockApi::ok(sample_result()));

    assert_eq!(session.phase(), Phase::Landing);
    assert!(!session.challenge().is_empty());
    assert!(CHALLENGES.contains(&session.challenge()));
    assert!(session.error_message().is_none());
}

#[tokio::test]
async fn full_round_walks_every_phase_and_card() {
    let api = MockApi::ok(sample_result());
    let mut session = session_with(api.clone());

    // Record 1.5s of audio; passes both gates.
    session
        .begin(Box::new(ScriptedBackend::new(frames(15))), CaptureHandle::new())
        .await
        .unwrap();
    assert_eq!(session.phase(), Phase::Analyzing);
    assert!(session.error_message().is_none());

    session.analyze().await.unwrap();
    assert_eq!(session.phase(), Phase::Results);
    assert_eq!(api.call_count(), 1);

    // Card 0: heritage meters.
    match session.current_card().unwrap() {
        ResultCard::HeritageMeters(meters) => {
            assert_eq!(meters.len(), 3);
            assert_eq!(meters[0].label, "India");
        }
        other => panic!("expected heritage meters, got {other:?}"),
    }

    // Card 1: transcript + roast.
    session.advance_card().await.unwrap();
    match session.current_card().unwrap() {
        ResultCard::RoastText { transcription, roast } => {
            assert_eq!(transcription, "hi");
            assert_eq!(roast, "X!");
        }
        other => panic!("expected roast text, got {other:?}"),
    }

    // Card 2: composed share card.
    session.advance_card().await.unwrap();
    match session.current_card().unwrap() {
        ResultCard::Share(card) => {
            assert_eq!(card.primary_origin, "India");
            assert_eq!(card.celebrity, "W");
            assert_eq!(card.badge, "Y Z");
        }
        other => panic!("expected share card, got {other:?}"),
    }

    // Past the last card: full reset.
    session.advance_card().await.unwrap();
    assert_eq!(session.phase(), Phase::Landing);
    assert!(session.presenter().is_none());
    assert!(session.error_message().is_none());
    assert!(CHALLENGES.contains(&session.challenge()));
}

#[tokio::test]
async fn short_capture_fails_the_gate_and_never_reaches_the_network() {
    let api = MockApi::ok(sample_result());
    let mut session = session_with(api.clone());

    // 300ms < the 1000ms duration gate.
    session
        .begin(Box::new(ScriptedBackend::new(frames(3))), CaptureHandle::new())
        .await
        .unwrap();

    assert_eq!(session.phase(), Phase::Landing);
    assert!(session.error_message().is_some());
    assert_eq!(api.call_count(), 0, "gate failures must not issue requests");
}

#[tokio::test]
async fn silent_capture_is_rejected_client_side() {
    let api = MockApi::ok(sample_result());
    let mut session = session_with(api.clone());

    session
        .begin(Box::new(ScriptedBackend::new(Vec::new())), CaptureHandle::new())
        .await
        .unwrap();

    assert_eq!(session.phase(), Phase::Landing);
    assert!(session.error_message().is_some());
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn denied_device_returns_to_landing_with_error() {
    let api = MockApi::ok(sample_result());
    let mut session = session_with(api.clone());

    session
        .begin(Box::new(ScriptedBackend::denied()), CaptureHandle::new())
        .await
        .unwrap();

    assert_eq!(session.phase(), Phase::Landing);
    let message = session.error_message().unwrap();
    assert!(message.contains("Mic access denied"));
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn relay_error_message_is_shown_verbatim_on_landing() {
    let api = MockApi::err("server cooked.");
    let mut session = session_with(api.clone());

    session
        .begin(Box::new(ScriptedBackend::new(frames(15))), CaptureHandle::new())
        .await
        .unwrap();
    session.analyze().await.unwrap();

    assert_eq!(session.phase(), Phase::Landing);
    assert_eq!(session.error_message(), Some("server cooked."));
    assert!(session.presenter().is_none());
    assert_eq!(api.call_count(), 1);
}

#[tokio::test]
async fn begin_is_rejected_outside_landing() {
    let mut session = session_with(MockApi::ok(sample_result()));

    session
        .begin(Box::new(ScriptedBackend::new(frames(15))), CaptureHandle::new())
        .await
        .unwrap();
    assert_eq!(session.phase(), Phase::Analyzing);

    let second = session
        .begin(Box::new(ScriptedBackend::new(frames(15))), CaptureHandle::new())
        .await;
    assert!(second.is_err(), "no concurrent capture entry");
}

#[tokio::test]
async fn begin_is_rejected_while_narration_is_in_flight() {
    let engine = SpyEngine::slow();
    let narrator = NarrationController::new(engine);
    let mut session = GameSession::new(
        SessionConfig::default(),
        MockApi::ok(sample_result()),
        narrator.clone(),
    );

    narrator
        .narrate_detached(Utterance::savage("still yapping"))
        .await;
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(narrator.is_speaking());

    let attempt = session
        .begin(Box::new(ScriptedBackend::new(frames(15))), CaptureHandle::new())
        .await;
    assert!(attempt.is_err());
    assert_eq!(session.phase(), Phase::Landing);
}

#[tokio::test]
async fn muted_welcome_still_unblocks_the_capture() {
    let api = MockApi::ok(sample_result());
    let mut session = session_with(api.clone());
    session.toggle_mute().await;

    session
        .begin(Box::new(ScriptedBackend::new(frames(15))), CaptureHandle::new())
        .await
        .unwrap();

    // Muted narration completed immediately and the capture ran.
    assert_eq!(session.phase(), Phase::Analyzing);
    session.analyze().await.unwrap();
    assert_eq!(session.phase(), Phase::Results);
}

#[tokio::test]
async fn roast_is_narrated_once_on_first_show_of_card_one() {
    let engine = SpyEngine::new();
    let mut session = GameSession::new(
        SessionConfig::default(),
        MockApi::ok(sample_result()),
        NarrationController::new(engine.clone()),
    );

    session
        .begin(Box::new(ScriptedBackend::new(frames(15))), CaptureHandle::new())
        .await
        .unwrap();
    session.analyze().await.unwrap();

    session.advance_card().await.unwrap(); // card 1
    session.advance_card().await.unwrap(); // card 2
    tokio::time::sleep(Duration::from_millis(50)).await;

    let spoken = engine.spoken.lock().await;
    let roast_reads = spoken.iter().filter(|t| t.as_str() == "X!").count();
    assert_eq!(roast_reads, 1, "the roast is read exactly once");
}

#[tokio::test]
async fn reset_discards_everything() {
    let mut session = session_with(MockApi::ok(sample_result()));

    session
        .begin(Box::new(ScriptedBackend::new(frames(15))), CaptureHandle::new())
        .await
        .unwrap();
    session.analyze().await.unwrap();
    assert!(session.presenter().is_some());

    session.reset().await;
    assert_eq!(session.phase(), Phase::Landing);
    assert!(session.presenter().is_none());
    assert!(session.error_message().is_none());
    assert!(session.current_card().is_none());
}
