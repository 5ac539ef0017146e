//! The "perform screening" boundary seen by the intake client.
//!
//! `HttpScreeningService` talks to a running server; `LocalScreeningService`
//! runs the same pipeline in-process, optionally after a simulated delay.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::extraction::{DocumentTextExtractor, TextExtractor};
use crate::intake::{IntakeError, ResumeFile};
use crate::screening::pipeline::{run_screening, ResumeUpload, Submission};
use crate::screening::{KeywordScreener, Screener, ScreeningResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[async_trait]
pub trait ScreeningService: Send + Sync {
    async fn screen(
        &self,
        resume: &ResumeFile,
        job_description: &str,
    ) -> Result<ScreeningResult, IntakeError>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Posts the resume to `POST {base_url}/screen-resume`.
#[derive(Clone)]
pub struct HttpScreeningService {
    client: Client,
    endpoint: String,
}

impl HttpScreeningService {
    pub fn new(base_url: &str) -> Result<Self, IntakeError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint: screen_endpoint(base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn screen_endpoint(base_url: &str) -> String {
    format!("{}/screen-resume", base_url.trim_end_matches('/'))
}

#[async_trait]
impl ScreeningService for HttpScreeningService {
    async fn screen(
        &self,
        resume: &ResumeFile,
        job_description: &str,
    ) -> Result<ScreeningResult, IntakeError> {
        let part = Part::bytes(resume.bytes.to_vec())
            .file_name(resume.file_name.clone())
            .mime_str(resume.format.mime())?;
        let form = Form::new()
            .part("resume", part)
            .text("jobDescription", job_description.to_string());

        debug!(endpoint = %self.endpoint, file = %resume.file_name, "Submitting resume");
        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<ScreeningResult>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.error)
            .unwrap_or(body);
        warn!(status = status.as_u16(), %message, "Screening request rejected");
        Err(IntakeError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

/// Runs extraction and screening in-process.
#[derive(Clone)]
pub struct LocalScreeningService {
    extractor: Arc<dyn TextExtractor>,
    screener: Arc<dyn Screener>,
    latency: Duration,
}

impl LocalScreeningService {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        screener: Arc<dyn Screener>,
        latency: Duration,
    ) -> Self {
        Self {
            extractor,
            screener,
            latency,
        }
    }

    /// Keyword screener and document extractor configured like the server.
    pub fn from_config(config: &Config, latency: Duration) -> Self {
        Self::new(
            Arc::new(DocumentTextExtractor::new(config.max_resume_chars)),
            Arc::new(KeywordScreener::new(
                config.vocabulary.clone(),
                config.match_mode,
            )),
            latency,
        )
    }
}

#[async_trait]
impl ScreeningService for LocalScreeningService {
    async fn screen(
        &self,
        resume: &ResumeFile,
        job_description: &str,
    ) -> Result<ScreeningResult, IntakeError> {
        if !self.latency.is_zero() {
            debug!(latency_ms = self.latency.as_millis() as u64, "Simulating screening latency");
            tokio::time::sleep(self.latency).await;
        }

        let submission = Submission::validate(
            Some(ResumeUpload {
                file_name: resume.file_name.clone(),
                content_type: Some(resume.format.mime().to_string()),
                bytes: resume.bytes.clone(),
            }),
            Some(job_description.to_string()),
        )?;

        let result = run_screening(
            self.extractor.as_ref(),
            self.screener.as_ref(),
            &submission,
        )
        .await?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::docx::tests::build_docx;
    use crate::extraction::DocumentFormat;
    use crate::screening::pipeline::tests::FixedTextExtractor;
    use bytes::Bytes;
    use tokio::time::Instant;

    fn pdf_resume() -> ResumeFile {
        ResumeFile {
            file_name: "cv.pdf".to_string(),
            format: DocumentFormat::Pdf,
            bytes: Bytes::from_static(b"%PDF"),
        }
    }

    fn fixed_service(latency: Duration) -> LocalScreeningService {
        LocalScreeningService::new(
            Arc::new(FixedTextExtractor("Experienced in React and JavaScript")),
            Arc::new(KeywordScreener::default()),
            latency,
        )
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        assert_eq!(
            screen_endpoint("http://localhost:8080/"),
            "http://localhost:8080/screen-resume"
        );
        assert_eq!(
            screen_endpoint("https://api.example.com/v1"),
            "https://api.example.com/v1/screen-resume"
        );
    }

    #[tokio::test]
    async fn test_local_service_scores_resume() {
        let result = fixed_service(Duration::ZERO)
            .screen(&pdf_resume(), "Looking for React and Python experience")
            .await
            .unwrap();
        assert_eq!(result.match_score, 50);
        assert_eq!(result.missing_skills, vec!["Python"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_local_service_waits_for_simulated_latency() {
        let service = fixed_service(Duration::from_secs(2));
        let started = Instant::now();
        service.screen(&pdf_resume(), "React").await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_local_service_from_config_reads_docx() {
        let config = Config::from_lookup(|_| None).unwrap();
        let service = LocalScreeningService::from_config(&config, Duration::ZERO);
        let resume = ResumeFile {
            file_name: "cv.docx".to_string(),
            format: DocumentFormat::Docx,
            bytes: Bytes::from(build_docx(&["Python and Django developer"])),
        };
        let result = service
            .screen(&resume, "Python, Django, Flask")
            .await
            .unwrap();
        assert_eq!(result.matched_skills, vec!["Python", "Django"]);
        assert_eq!(result.missing_skills, vec!["Flask"]);
        assert_eq!(result.match_score, 67);
    }

    #[tokio::test]
    async fn test_local_service_surfaces_extraction_failure() {
        let config = Config::from_lookup(|_| None).unwrap();
        let service = LocalScreeningService::from_config(&config, Duration::ZERO);
        let resume = ResumeFile {
            file_name: "cv.docx".to_string(),
            format: DocumentFormat::Docx,
            bytes: Bytes::from_static(b"not a zip"),
        };
        let err = service.screen(&resume, "Python").await.unwrap_err();
        assert!(matches!(err, IntakeError::Screening(_)));
    }
}
