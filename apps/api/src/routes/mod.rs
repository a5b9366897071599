pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::extraction::handlers as extraction;
use crate::scheduling::handlers as scheduling;
use crate::session::handlers as session;
use crate::shortlist::handlers as shortlist;
use crate::state::AppState;

/// Upload limit for resume batches and job description files.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Wizard navigation
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(session::handle_get_session).delete(session::handle_delete_session),
        )
        .route("/api/v1/sessions/:id/advance", post(session::handle_advance))
        .route("/api/v1/sessions/:id/back", post(session::handle_back))
        .route("/api/v1/sessions/:id/step", post(session::handle_go_to_step))
        // Step 1: job description
        .route(
            "/api/v1/sessions/:id/job-description",
            put(extraction::handle_set_job_description),
        )
        .route(
            "/api/v1/sessions/:id/job-description/upload",
            post(extraction::handle_upload_job_description),
        )
        .route(
            "/api/v1/sessions/:id/job-description/analyze",
            post(extraction::handle_analyze_job_description),
        )
        // Steps 2-3: resumes and their assessments
        .route(
            "/api/v1/sessions/:id/resumes",
            post(extraction::handle_upload_resumes),
        )
        .route(
            "/api/v1/sessions/:id/resumes/text",
            post(extraction::handle_submit_resume_texts),
        )
        .route(
            "/api/v1/sessions/:id/assessments",
            get(extraction::handle_list_assessments),
        )
        // Step 4: shortlist
        .route(
            "/api/v1/sessions/:id/shortlist",
            post(shortlist::handle_generate_shortlist),
        )
        .route(
            "/api/v1/sessions/:id/shortlist/toggle",
            post(shortlist::handle_toggle_candidate),
        )
        .route(
            "/api/v1/sessions/:id/candidates",
            get(shortlist::handle_candidate_board),
        )
        // Step 5: interviews
        .route(
            "/api/v1/sessions/:id/invitations",
            post(scheduling::handle_draft_invitation),
        )
        .route(
            "/api/v1/sessions/:id/invitations/current",
            get(scheduling::handle_current_invitation),
        )
        .route(
            "/api/v1/sessions/:id/schedule",
            get(scheduling::handle_schedule_progress),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
