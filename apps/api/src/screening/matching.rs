//! Skill extraction — finds vocabulary entries mentioned in free text.
//!
//! Two modes:
//! - `Substring` (default): the lowercase skill appears anywhere in the lowercase
//!   text. Compatible with existing scores, but short skills match inside other
//!   words ("Git" inside "Digital").
//! - `WordBoundary`: an occurrence only counts when it is not flanked by
//!   alphanumeric characters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::screening::vocabulary::SkillVocabulary;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    #[default]
    Substring,
    WordBoundary,
}

#[derive(Debug, Error)]
#[error("unknown match mode '{0}'")]
pub struct ParseMatchModeError(String);

impl FromStr for MatchMode {
    type Err = ParseMatchModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "substring" => Ok(MatchMode::Substring),
            "word_boundary" | "word" => Ok(MatchMode::WordBoundary),
            other => Err(ParseMatchModeError(other.to_string())),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Substring => f.write_str("substring"),
            MatchMode::WordBoundary => f.write_str("word_boundary"),
        }
    }
}

/// Returns every vocabulary entry found in `text`, in vocabulary order.
/// The result is a subset of the vocabulary and never contains duplicates.
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary, mode: MatchMode) -> Vec<String> {
    let text_lower = text.to_lowercase();

    vocabulary
        .skills()
        .iter()
        .filter(|skill| contains_skill(&text_lower, &skill.to_lowercase(), mode))
        .cloned()
        .collect()
}

/// Both arguments must already be lowercased.
fn contains_skill(haystack: &str, needle: &str, mode: MatchMode) -> bool {
    if needle.is_empty() {
        return false;
    }
    match mode {
        MatchMode::Substring => haystack.contains(needle),
        MatchMode::WordBoundary => haystack.match_indices(needle).any(|(start, matched)| {
            let before = haystack[..start].chars().next_back();
            let after = haystack[start + matched.len()..].chars().next();
            !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
        }),
    }
}
