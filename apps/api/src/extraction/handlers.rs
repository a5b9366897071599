use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::documents::{extract_text, DocumentKind};
use crate::errors::AppError;
use crate::extraction::{
    assess_candidate, summarize_job_description, CandidateAssessment, ExtractionResult,
    JobRequirement,
};
use crate::session::{SessionOverview, WizardStep};
use crate::shortlist::Shortlist;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct JobDescriptionText {
    pub text: String,
}

#[derive(Serialize)]
pub struct UploadedJobDescription {
    pub file_name: String,
    pub text: String,
}

#[derive(Serialize)]
pub struct JobAnalysisResponse {
    pub step: WizardStep,
    pub job: ExtractionResult<JobRequirement>,
}

#[derive(Deserialize)]
pub struct ResumeTexts {
    pub resumes: Vec<String>,
}

#[derive(Serialize)]
pub struct AssessmentsResponse {
    pub step: WizardStep,
    pub assessments: Vec<ExtractionResult<CandidateAssessment>>,
}

/// PUT /api/v1/sessions/:id/job-description
pub async fn handle_set_job_description(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<JobDescriptionText>,
) -> Result<Json<SessionOverview>, AppError> {
    let overview = state
        .sessions
        .update(id, |s| {
            s.require_step(WizardStep::Import)?;
            s.jd_text = req.text;
            Ok(s.overview())
        })
        .await?;
    Ok(Json(overview))
}

/// POST /api/v1/sessions/:id/job-description/upload
///
/// Expects one `file` part holding a PDF or CSV.
pub async fn handle_upload_job_description(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<UploadedJobDescription>, AppError> {
    state
        .sessions
        .read(id, |s| s.require_step(WizardStep::Import))
        .await??;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let kind = DocumentKind::from_file_name(&file_name).ok_or_else(|| {
            AppError::Validation(format!(
                "Unsupported job description file '{file_name}': expected .pdf or .csv"
            ))
        })?;
        upload = Some((file_name, kind, field.bytes().await?));
        break;
    }
    let (file_name, kind, data) =
        upload.ok_or_else(|| AppError::Validation("No job description file provided".into()))?;

    let text = extract_text(kind, data).await;
    info!("Job description read from {file_name} ({} chars)", text.len());

    let stored = text.clone();
    state
        .sessions
        .update(id, |s| {
            s.require_step(WizardStep::Import)?;
            s.jd_text = stored;
            Ok(())
        })
        .await?;

    Ok(Json(UploadedJobDescription { file_name, text }))
}

/// POST /api/v1/sessions/:id/job-description/analyze
///
/// An error record from the model is reported with 200 and the session stays
/// at the import step.
pub async fn handle_analyze_job_description(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobAnalysisResponse>, AppError> {
    let jd_text = state
        .sessions
        .read(id, |s| {
            s.require_step(WizardStep::Import)?;
            Ok::<_, AppError>(s.jd_text.clone())
        })
        .await??;
    if jd_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Provide a job description before analyzing it".into(),
        ));
    }

    let job = summarize_job_description(state.llm.as_ref(), &jd_text).await;

    let response = state
        .sessions
        .update(id, |s| {
            s.require_step(WizardStep::Import)?;
            s.job = Some(job.clone());
            if !job.is_error() {
                s.move_to(WizardStep::Upload);
            }
            Ok(JobAnalysisResponse { step: s.step, job })
        })
        .await?;
    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/resumes
///
/// Every `files` part must be a PDF. All resumes are assessed in order.
pub async fn handle_upload_resumes(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<AssessmentsResponse>, AppError> {
    state
        .sessions
        .read(id, |s| s.require_step(WizardStep::Upload))
        .await??;

    let mut files: Vec<(String, Bytes)> = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("files") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        if DocumentKind::from_file_name(&file_name) != Some(DocumentKind::Pdf) {
            return Err(AppError::Validation(format!(
                "Unsupported resume file '{file_name}': expected .pdf"
            )));
        }
        files.push((file_name, field.bytes().await?));
    }
    if files.is_empty() {
        return Err(AppError::Validation("No resume files provided".into()));
    }

    let mut texts = Vec::with_capacity(files.len());
    for (file_name, data) in files {
        let text = extract_text(DocumentKind::Pdf, data).await;
        info!("Resume read from {file_name} ({} chars)", text.len());
        texts.push(text);
    }

    analyze_resumes(&state, id, texts).await.map(Json)
}

/// POST /api/v1/sessions/:id/resumes/text
pub async fn handle_submit_resume_texts(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ResumeTexts>,
) -> Result<Json<AssessmentsResponse>, AppError> {
    if req.resumes.iter().all(|text| text.trim().is_empty()) {
        return Err(AppError::Validation("No resume text provided".into()));
    }
    let texts = req
        .resumes
        .into_iter()
        .filter(|text| !text.trim().is_empty())
        .collect();

    analyze_resumes(&state, id, texts).await.map(Json)
}

/// GET /api/v1/sessions/:id/assessments
pub async fn handle_list_assessments(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentsResponse>, AppError> {
    let response = state
        .sessions
        .read(id, |s| AssessmentsResponse {
            step: s.step,
            assessments: s.assessments.clone(),
        })
        .await?;
    Ok(Json(response))
}

/// Assesses every resume against the session's job requirement, replaces the
/// previous results, and moves the session on to review.
async fn analyze_resumes(
    state: &AppState,
    id: Uuid,
    texts: Vec<String>,
) -> Result<AssessmentsResponse, AppError> {
    let job = state
        .sessions
        .read(id, |s| {
            s.require_step(WizardStep::Upload)?;
            s.job_requirement().cloned().ok_or_else(|| {
                AppError::Validation("The job description has not been analyzed".into())
            })
        })
        .await??;

    let mut assessments = Vec::with_capacity(texts.len());
    for text in &texts {
        assessments.push(assess_candidate(state.llm.as_ref(), text, &job).await);
    }
    let failed = assessments.iter().filter(|r| r.is_error()).count();
    info!(
        "Session {id}: {} resumes assessed, {failed} failed",
        assessments.len()
    );

    state
        .sessions
        .update(id, |s| {
            s.require_step(WizardStep::Upload)?;
            s.resume_texts = texts;
            s.assessments = assessments;
            s.shortlist = Shortlist::default();
            s.selected_candidate = None;
            s.invitation = None;
            s.move_to(WizardStep::Review);
            Ok(AssessmentsResponse {
                step: s.step,
                assessments: s.assessments.clone(),
            })
        })
        .await
}
