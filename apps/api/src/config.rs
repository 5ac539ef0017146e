use anyhow::{Context, Result};

use crate::screening::{MatchMode, SkillVocabulary};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_MAX_RESUME_CHARS: usize = 5000;

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Session persistence is disabled when unset.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    pub max_resume_chars: usize,
    pub match_mode: MatchMode,
    pub vocabulary: SkillVocabulary,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. `from_env` is the
    /// production entry point; tests pass a closure over a fixed map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let match_mode = match lookup("SKILL_MATCH_MODE") {
            Some(raw) => raw
                .parse::<MatchMode>()
                .context("SKILL_MATCH_MODE must be 'substring' or 'word_boundary'")?,
            None => MatchMode::default(),
        };

        let vocabulary = match lookup("SKILL_VOCABULARY") {
            Some(raw) => {
                let vocabulary = SkillVocabulary::from_csv(&raw);
                anyhow::ensure!(
                    !vocabulary.is_empty(),
                    "SKILL_VOCABULARY must name at least one skill"
                );
                vocabulary
            }
            None => SkillVocabulary::default(),
        };

        Ok(Config {
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            port: parse_or("PORT", &lookup, 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_upload_bytes: parse_or("MAX_UPLOAD_BYTES", &lookup, DEFAULT_MAX_UPLOAD_BYTES)?,
            max_resume_chars: parse_or("MAX_RESUME_CHARS", &lookup, DEFAULT_MAX_RESUME_CHARS)?,
            match_mode,
            vocabulary,
        })
    }
}

fn parse_or<T>(key: &str, lookup: &impl Fn(&str) -> Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
