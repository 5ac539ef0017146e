//! Submission validation and the extract → screen pipeline shared by the HTTP
//! handler and the in-process intake service.

use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{DocumentFormat, TextExtractor};
use crate::screening::screener::Screener;
use crate::screening::ScreeningResult;

/// An uploaded resume file as received.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// A validated screening request.
#[derive(Debug, Clone)]
pub struct Submission {
    pub resume: ResumeUpload,
    pub format: DocumentFormat,
    pub job_description: String,
}

impl Submission {
    /// Checks required fields first, then the resume's MIME type.
    pub fn validate(
        resume: Option<ResumeUpload>,
        job_description: Option<String>,
    ) -> Result<Self, AppError> {
        let (resume, job_description) = match (resume, job_description) {
            (Some(resume), Some(jd)) if !jd.is_empty() => (resume, jd),
            _ => return Err(AppError::missing_fields()),
        };

        let format = resume
            .content_type
            .as_deref()
            .map(|ct| ct.split(';').next().unwrap_or_default().trim())
            .and_then(DocumentFormat::from_mime)
            .ok_or_else(AppError::unsupported_type)?;

        Ok(Submission {
            resume,
            format,
            job_description,
        })
    }
}

/// Extracts the resume text and screens it against the job description.
pub async fn run_screening(
    extractor: &dyn TextExtractor,
    screener: &dyn Screener,
    submission: &Submission,
) -> Result<ScreeningResult, AppError> {
    let resume_text = extractor
        .extract(submission.format, &submission.resume.bytes)
        .await?;

    let result = screener
        .screen(&resume_text, &submission.job_description)
        .await?;

    info!(
        file = %submission.resume.file_name,
        format = ?submission.format,
        backend = screener.backend(),
        match_score = result.match_score,
        matched = result.matched_skills.len(),
        "Resume screened"
    );

    Ok(result)
}
