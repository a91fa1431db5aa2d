//! Axum route handlers for the Assessment API.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::assessment::catalog::Question;
use crate::assessment::responses::{AnswerValue, ResponseSet};
use crate::assessment::scoring::AssessmentResult;
use crate::assessment::sessions::SessionView;
use crate::errors::AppError;
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub total: usize,
    pub questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub answers: ResponseSet,
}

#[derive(Debug, Deserialize)]
pub struct RecordAnswerRequest {
    pub question_id: String,
    pub value: AnswerValue,
}

// ────────────────────────────────────────────────────────────────────────────
// Stateless
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/assessment/catalog
pub async fn handle_get_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        total: state.catalog.len(),
        questions: state.catalog.questions().to_vec(),
    })
}

/// POST /api/v1/assessment/score
///
/// Scores a caller-supplied response set. Partial sets are fine; every entry must be valid.
pub async fn handle_score(
    State(state): State<AppState>,
    AppJson(request): AppJson<ScoreRequest>,
) -> Result<Json<AssessmentResult>, AppError> {
    state.catalog.validate_responses(&request.answers)?;
    let result = state.scorer.score(&request.answers);
    debug!(
        "Scored {} answers: overall {} ({:?})",
        request.answers.len(),
        result.overall_score,
        result.recommendation
    );
    Ok(Json(result))
}

// ────────────────────────────────────────────────────────────────────────────
// Sessions
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let view = state.sessions.create().await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(state.sessions.view(id).await?))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/answers
///
/// Records or overwrites one answer. The cursor does not move.
pub async fn handle_record_answer(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(request): AppJson<RecordAnswerRequest>,
) -> Result<Json<SessionView>, AppError> {
    if request.question_id.trim().is_empty() {
        return Err(AppError::Validation("question_id cannot be empty".to_string()));
    }

    let view = state
        .sessions
        .update(id, |c| c.record_answer(&request.question_id, request.value))
        .await?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/advance
pub async fn handle_advance(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let view = state.sessions.update(id, |c| c.advance().map(|_| ())).await?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/retreat
pub async fn handle_retreat(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let view = state.sessions.update(id, |c| c.retreat().map(|_| ())).await?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/results
///
/// Scores a completed session. Results are recomputed on every call.
pub async fn handle_session_results(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<AssessmentResult>, AppError> {
    let responses = state.sessions.finished_responses(id).await?;
    let result = state.scorer.score(&responses);
    info!(
        "Session {id} completed: overall {} ({:?})",
        result.overall_score, result.recommendation
    );
    Ok(Json(result))
}
