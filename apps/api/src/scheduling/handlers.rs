use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::scheduling::{
    draft_invitation, mailto_link, plain_text, propose_slots, schedule_progress,
    InterviewInvitation, ScheduleRow,
};
use crate::session::WizardStep;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct DraftInvitationRequest {
    pub name: String,
}

#[derive(Serialize)]
pub struct InvitationView {
    #[serde(flatten)]
    pub invitation: InterviewInvitation,
    pub mailto_link: String,
    pub plain_text: String,
}

impl From<InterviewInvitation> for InvitationView {
    fn from(invitation: InterviewInvitation) -> Self {
        Self {
            mailto_link: mailto_link(&invitation),
            plain_text: plain_text(&invitation),
            invitation,
        }
    }
}

/// POST /api/v1/sessions/:id/invitations
pub async fn handle_draft_invitation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<DraftInvitationRequest>,
) -> Result<Json<InvitationView>, AppError> {
    let (candidate, job) = state
        .sessions
        .read(id, |s| {
            s.require_step(WizardStep::Schedule)?;
            let candidate = s.shortlist.get(&req.name).cloned().ok_or_else(|| {
                AppError::NotFound(format!("'{}' is not on the shortlist", req.name))
            })?;
            Ok::<_, AppError>((candidate, s.job_requirement().cloned()))
        })
        .await??;

    let slots = propose_slots(Local::now().date_naive(), &mut rand::thread_rng());
    let invitation = draft_invitation(
        state.llm.as_ref(),
        &candidate,
        job.as_ref(),
        &state.config.company_name,
        slots,
    )
    .await;

    state
        .sessions
        .update(id, |s| {
            s.require_step(WizardStep::Schedule)?;
            s.selected_candidate = Some(candidate.name.clone());
            s.invitation = Some(invitation.clone());
            Ok(())
        })
        .await?;

    Ok(Json(invitation.into()))
}

/// GET /api/v1/sessions/:id/invitations/current
pub async fn handle_current_invitation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InvitationView>, AppError> {
    let invitation = state
        .sessions
        .read(id, |s| s.invitation.clone())
        .await?
        .ok_or_else(|| AppError::NotFound("No invitation has been drafted yet".into()))?;
    Ok(Json(invitation.into()))
}

/// GET /api/v1/sessions/:id/schedule
pub async fn handle_schedule_progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ScheduleRow>>, AppError> {
    let rows = state
        .sessions
        .read(id, |s| schedule_progress(&s.shortlist, s.invitation.as_ref()))
        .await?;
    Ok(Json(rows))
}
