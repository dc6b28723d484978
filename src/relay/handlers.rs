use super::state::AppState;
use super::types::{ErrorResponse, RoastRequest};
use crate::error::RelayError;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use base64::Engine;
use tracing::{error, info};

/// POST /api/roast
/// One clip in, one structured roast out. Input validation happens
/// before the pipeline so a bad request never costs an upstream call.
pub async fn roast(
    State(state): State<AppState>,
    Json(req): Json<RoastRequest>,
) -> impl IntoResponse {
    if req.audio.trim().is_empty() {
        return error_response(&RelayError::MissingAudio);
    }

    let audio = match base64::engine::general_purpose::STANDARD.decode(req.audio.as_bytes()) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Rejecting roast request: {}", e);
            return error_response(&RelayError::BadAudioEncoding);
        }
    };

    info!(
        "Roast request: {} audio bytes, challenge: {:?}",
        audio.len(),
        req.challenge_text
    );

    match state.pipeline.run(&audio, &req.challenge_text).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            error!("Roast pipeline failed: {}", e);
            error_response(&e)
        }
    }
}

fn error_response(err: &RelayError) -> Response {
    (
        err.status(),
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
