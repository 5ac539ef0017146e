//! Screener — pluggable, trait-based backend that turns resume text and a job
//! description into a `ScreeningResult`.
//!
//! Default: `KeywordScreener` (pure-Rust, deterministic, vocabulary-based).
//! `AppState` holds an `Arc<dyn Screener>`; the intake client's local mode uses
//! the same trait object.

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::screening::matching::{extract_skills, MatchMode};
use crate::screening::scoring::match_skills;
use crate::screening::suggestions::generate_suggestions;
use crate::screening::vocabulary::SkillVocabulary;
use crate::screening::ScreeningResult;

/// Implement this to swap screening backends without touching the handler.
#[async_trait]
pub trait Screener: Send + Sync {
    async fn screen(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<ScreeningResult, AppError>;

    /// Short label for logs.
    fn backend(&self) -> &'static str;
}

/// Vocabulary substring screener. Fast, stateless, no I/O.
#[derive(Debug, Clone, Default)]
pub struct KeywordScreener {
    vocabulary: SkillVocabulary,
    mode: MatchMode,
}

impl KeywordScreener {
    pub fn new(vocabulary: SkillVocabulary, mode: MatchMode) -> Self {
        Self { vocabulary, mode }
    }

    /// Synchronous core of [`Screener::screen`].
    pub fn screen_texts(&self, resume_text: &str, job_description: &str) -> ScreeningResult {
        let job_skills = extract_skills(job_description, &self.vocabulary, self.mode);
        let resume_skills = extract_skills(resume_text, &self.vocabulary, self.mode);

        let skill_match = match_skills(&job_skills, &resume_skills);
        let match_score = skill_match.score();
        let improvement_suggestions = generate_suggestions(&skill_match.missing, match_score);

        debug!(
            job_skills = job_skills.len(),
            resume_skills = resume_skills.len(),
            matched = skill_match.matched.len(),
            match_score,
            "keyword screening complete"
        );

        ScreeningResult {
            match_score,
            missing_skills: skill_match.top_missing(),
            matched_skills: skill_match.matched,
            improvement_suggestions,
        }
    }
}

#[async_trait]
impl Screener for KeywordScreener {
    async fn screen(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<ScreeningResult, AppError> {
        Ok(self.screen_texts(resume_text, job_description))
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}
