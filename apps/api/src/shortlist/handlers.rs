use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::WizardStep;
use crate::shortlist::{
    candidate_board, rank_candidates, BoardEntry, Shortlist, ShortlistEntry, SortOrder,
};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct GenerateShortlistRequest {
    /// Percentage; the configured default applies when absent.
    pub threshold: Option<i64>,
}

#[derive(Serialize)]
pub struct ShortlistResponse {
    pub threshold: u8,
    pub shortlist: Shortlist,
}

#[derive(Deserialize)]
pub struct BoardQuery {
    #[serde(default)]
    pub sort: SortOrder,
}

#[derive(Deserialize)]
pub struct ToggleRequest {
    pub name: String,
}

#[derive(Serialize)]
pub struct ToggleResponse {
    pub name: String,
    pub shortlisted: bool,
    pub shortlist: Shortlist,
}

/// POST /api/v1/sessions/:id/shortlist
///
/// Replaces the shortlist with every candidate at or above the threshold.
pub async fn handle_generate_shortlist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<GenerateShortlistRequest>,
) -> Result<Json<ShortlistResponse>, AppError> {
    let threshold = match req.threshold {
        None => state.config.shortlist_threshold,
        Some(value @ 0..=100) => value as u8,
        Some(value) => {
            return Err(AppError::Validation(format!(
                "Threshold must be between 0 and 100, got {value}"
            )))
        }
    };

    let shortlist = state
        .sessions
        .update(id, |s| {
            s.require_step(WizardStep::Shortlist)?;
            s.shortlist = Shortlist::from_entries(rank_candidates(&s.assessments, threshold));
            s.selected_candidate = None;
            s.invitation = None;
            Ok(s.shortlist.clone())
        })
        .await?;

    info!(
        "Session {id}: {} candidates shortlisted at {threshold}%",
        shortlist.len()
    );
    Ok(Json(ShortlistResponse {
        threshold,
        shortlist,
    }))
}

/// GET /api/v1/sessions/:id/candidates?sort=match_desc|match_asc|name_asc
pub async fn handle_candidate_board(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<Vec<BoardEntry>>, AppError> {
    let board = state
        .sessions
        .read(id, |s| candidate_board(&s.assessments, &s.shortlist, query.sort))
        .await?;
    Ok(Json(board))
}

/// POST /api/v1/sessions/:id/shortlist/toggle
///
/// `name` is the candidate's label on the board.
pub async fn handle_toggle_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let response = state
        .sessions
        .update(id, |s| {
            s.require_step(WizardStep::Shortlist)?;
            let entry: ShortlistEntry =
                candidate_board(&s.assessments, &s.shortlist, SortOrder::default())
                    .into_iter()
                    .find(|row| row.entry.name == req.name)
                    .map(|row| row.entry)
                    .ok_or_else(|| {
                        AppError::NotFound(format!("No assessed candidate named '{}'", req.name))
                    })?;

            let shortlisted = s.shortlist.toggle(entry);
            if !shortlisted && s.selected_candidate.as_deref() == Some(req.name.as_str()) {
                s.selected_candidate = None;
                s.invitation = None;
            }
            Ok(ToggleResponse {
                name: req.name,
                shortlisted,
                shortlist: s.shortlist.clone(),
            })
        })
        .await?;
    Ok(Json(response))
}
