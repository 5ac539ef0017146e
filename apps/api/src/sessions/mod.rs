//! Append-only log of completed screenings.
//!
//! `PgSessionLog` writes to Postgres; `DisabledSessionLog` is used when no
//! `DATABASE_URL` is configured. There is no update or delete path.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::screening::ScreeningSessionRow;
use crate::screening::ScreeningResult;

/// Everything needed to record one screening.
#[derive(Debug, Clone, Copy)]
pub struct NewScreeningSession<'a> {
    pub resume_filename: &'a str,
    pub job_description: &'a str,
    pub result: &'a ScreeningResult,
}

#[async_trait]
pub trait SessionLog: Send + Sync {
    /// Appends a record. Returns `None` when persistence is disabled.
    async fn append(
        &self,
        session: NewScreeningSession<'_>,
    ) -> Result<Option<ScreeningSessionRow>, AppError>;
}

pub struct PgSessionLog {
    pool: PgPool,
}

impl PgSessionLog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionLog for PgSessionLog {
    async fn append(
        &self,
        session: NewScreeningSession<'_>,
    ) -> Result<Option<ScreeningSessionRow>, AppError> {
        let NewScreeningSession {
            resume_filename,
            job_description,
            result,
        } = session;

        // Append-only: INSERT, never UPDATE
        let row = sqlx::query_as::<_, ScreeningSessionRow>(
            r#"
            INSERT INTO screening_sessions
                (id, resume_filename, job_description, match_score,
                 matched_skills, missing_skills, improvement_suggestions, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(resume_filename)
        .bind(job_description)
        .bind(result.match_score as i32)
        .bind(&result.matched_skills)
        .bind(&result.missing_skills)
        .bind(&result.improvement_suggestions)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        info!(
            session_id = %row.id,
            match_score = row.match_score,
            "Screening session recorded"
        );
        Ok(Some(row))
    }
}

/// No-op log used when persistence is not configured.
pub struct DisabledSessionLog;

#[async_trait]
impl SessionLog for DisabledSessionLog {
    async fn append(
        &self,
        session: NewScreeningSession<'_>,
    ) -> Result<Option<ScreeningSessionRow>, AppError> {
        debug!(
            resume_filename = session.resume_filename,
            "Session persistence disabled; skipping insert"
        );
        Ok(None)
    }
}
