use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::{SessionOverview, WizardStep};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct GoToStepRequest {
    pub step: WizardStep,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionOverview>) {
    let session = state.sessions.create().await;
    tracing::info!(
        "Session {} created ({} active)",
        session.id,
        state.sessions.len().await
    );
    (StatusCode::CREATED, Json(session.overview()))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionOverview>, AppError> {
    let overview = state.sessions.read(id, |s| s.overview()).await?;
    Ok(Json(overview))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    tracing::info!("Session {id} deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/advance
pub async fn handle_advance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionOverview>, AppError> {
    let overview = state
        .sessions
        .update(id, |s| {
            s.advance()?;
            Ok(s.overview())
        })
        .await?;
    Ok(Json(overview))
}

/// POST /api/v1/sessions/:id/back
pub async fn handle_back(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionOverview>, AppError> {
    let overview = state
        .sessions
        .update(id, |s| {
            s.back();
            Ok(s.overview())
        })
        .await?;
    Ok(Json(overview))
}

/// POST /api/v1/sessions/:id/step
pub async fn handle_go_to_step(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<GoToStepRequest>,
) -> Result<Json<SessionOverview>, AppError> {
    let overview = state
        .sessions
        .update(id, |s| {
            s.go_to(req.step)?;
            Ok(s.overview())
        })
        .await?;
    Ok(Json(overview))
}
