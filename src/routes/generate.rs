//! Slide generation endpoint.

use axum::{body::Bytes, extract::State, Json};

use crate::error::AppError;
use crate::pitch::{self, GenerateEnvelope};
use crate::state::AppState;

/// Validate the posted property and return its slides.
///
/// The body is taken as raw bytes so that unparseable input, non-object
/// JSON and missing fields each get their own error instead of a generic
/// extractor rejection.
pub async fn generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerateEnvelope>, AppError> {
    let response = pitch::generate(&state.tera, &body)?;
    Ok(Json(response.into()))
}
