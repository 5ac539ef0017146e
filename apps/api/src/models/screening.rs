use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One row of the append-only `screening_sessions` log.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScreeningSessionRow {
    pub id: Uuid,
    pub resume_filename: String,
    pub job_description: String,
    pub match_score: i32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub improvement_suggestions: Vec<String>,
    pub created_at: DateTime<Utc>,
}
