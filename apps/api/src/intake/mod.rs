// Intake & presentation for the command-line client.
// Loads the resume from disk, validates the inputs locally, hands them to a
// `ScreeningService`, and renders the resulting `ScreeningReport`.

pub mod report;
pub mod service;

use std::path::{Path, PathBuf};

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::errors::AppError;
use crate::extraction::DocumentFormat;
use crate::screening::ScreeningResult;

pub use report::{render_report, ScoreBand};
pub use service::{HttpScreeningService, LocalScreeningService, ScreeningService};

pub const MISSING_INPUT_MESSAGE: &str = "Please upload a resume and provide a job description.";
pub const FAILURE_MESSAGE: &str = "Failed to screen resume. Please try again.";

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Please upload a resume and provide a job description.")]
    MissingInput,

    #[error("Unsupported file type for '{0}'. Please upload PDF or DOCX files.")]
    UnsupportedFile(String),

    #[error("Could not read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Screening failed: {0}")]
    Screening(#[from] AppError),

    #[error("Configuration error: {0:#}")]
    Config(anyhow::Error),
}

/// A resume loaded from disk, with its format inferred from the extension.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub file_name: String,
    pub format: DocumentFormat,
    pub bytes: Bytes,
}

impl ResumeFile {
    /// Rejects unsupported extensions before touching the file.
    pub async fn load(path: &Path) -> Result<Self, IntakeError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let format = DocumentFormat::from_file_name(&file_name)
            .ok_or_else(|| IntakeError::UnsupportedFile(file_name.clone()))?;

        let bytes = tokio::fs::read(path).await.map_err(|source| IntakeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(file = %file_name, size = bytes.len(), "Resume loaded");

        Ok(Self {
            file_name,
            format,
            bytes: Bytes::from(bytes),
        })
    }
}

/// The last screening result together with the file it was computed for.
/// Produced by [`submit`] and handed to the results view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningReport {
    pub file_name: String,
    #[serde(flatten)]
    pub result: ScreeningResult,
}

/// Validates the job description and runs one screening through `service`.
pub async fn submit(
    service: &dyn ScreeningService,
    resume: &ResumeFile,
    job_description: &str,
) -> Result<ScreeningReport, IntakeError> {
    if job_description.trim().is_empty() {
        return Err(IntakeError::MissingInput);
    }

    let result = service.screen(resume, job_description).await?;

    Ok(ScreeningReport {
        file_name: resume.file_name.clone(),
        result,
    })
}

/// Reads a job description from a file.
pub async fn read_job_description(path: &Path) -> Result<String, IntakeError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| IntakeError::Io {
            path: path.to_path_buf(),
            source,
        })
}
