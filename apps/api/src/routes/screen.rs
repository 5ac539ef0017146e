//! Axum route handlers for the screening endpoint.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};

use crate::errors::AppError;
use crate::screening::pipeline::{run_screening, ResumeUpload, Submission};
use crate::screening::ScreeningResult;
use crate::sessions::NewScreeningSession;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "jobDescription";

/// POST /screen-resume
///
/// Multipart upload of `resume` (PDF or DOCX) and `jobDescription`.
/// Extracts the resume text, screens it, appends a session record, and returns
/// the `ScreeningResult`. Nothing is persisted when validation fails.
pub async fn handle_screen_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ScreeningResult>, AppError> {
    let mut multipart = multipart?;

    let mut resume = None;
    let mut job_description = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            // First occurrence of a repeated field wins.
            Some(RESUME_FIELD) if resume.is_none() => {
                let file_name = field.file_name().unwrap_or("resume").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                resume = Some(ResumeUpload {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            Some(JOB_DESCRIPTION_FIELD) if job_description.is_none() => {
                job_description = Some(field.text().await?);
            }
            _ => {}
        }
    }

    let submission = Submission::validate(resume, job_description)?;

    let result = run_screening(
        state.extractor.as_ref(),
        state.screener.as_ref(),
        &submission,
    )
    .await?;

    state
        .sessions
        .append(NewScreeningSession {
            resume_filename: &submission.resume.file_name,
            job_description: &submission.job_description,
            result: &result,
        })
        .await?;

    Ok(Json(result))
}

/// OPTIONS /screen-resume
pub async fn handle_preflight() -> &'static str {
    "ok"
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
