//! Front-facing pitch gateway.
//!
//! `POST /create-pitch` hands the body to the slide engine and returns only
//! the slides. The engine is either an upstream `/generate` endpoint
//! (`[gateway] engine_url`) or, when none is configured, this process.

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorBody};
use crate::pitch::{self, GenerateEnvelope, Slide};
use crate::state::AppState;

/// Banner served on `GET /`
pub const BANNER: &str = "RePitchBook Backend Running";

#[derive(Debug, Serialize, Deserialize)]
pub struct PitchResponse {
    pub slides: Vec<Slide>,
}

/// Reasons the slide engine could not produce slides.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Slide engine request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Slide engine returned status {0}")]
    Status(StatusCode),

    #[error("Slide engine rejected the request: {0}")]
    Engine(#[from] AppError),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "Slide engine not responding");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: "AI Engine not responding",
                message: None,
            }),
        )
            .into_response()
    }
}

pub async fn index() -> &'static str {
    BANNER
}

pub async fn create_pitch(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PitchResponse>, GatewayError> {
    let slides = match state.config.gateway.engine_url.as_deref() {
        Some(url) => fetch_slides(&state.engine_client, url, body).await?,
        None => pitch::generate(&state.tera, &body)?.slides,
    };

    Ok(Json(PitchResponse { slides }))
}

/// POST the body to an upstream engine and unwrap its success envelope.
async fn fetch_slides(
    client: &reqwest::Client,
    url: &str,
    body: Bytes,
) -> Result<Vec<Slide>, GatewayError> {
    tracing::debug!(%url, "Forwarding pitch to slide engine");

    let response = client
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::Status(status));
    }

    let envelope: GenerateEnvelope = response.json().await?;
    Ok(envelope.data.slides)
}
