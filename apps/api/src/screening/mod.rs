// Scoring engine: skill extraction, overlap scoring, suggestion rules.
// Everything here is a pure function of its inputs except `Screener`, which is
// the async seam the HTTP handler and the intake client call through.

pub mod matching;
pub mod pipeline;
pub mod scoring;
pub mod screener;
pub mod suggestions;
pub mod vocabulary;

use serde::{Deserialize, Serialize};

pub use matching::{extract_skills, MatchMode};
pub use screener::{KeywordScreener, Screener};
pub use vocabulary::SkillVocabulary;

/// Outcome of screening one resume against one job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningResult {
    pub match_score: u32, // 0 – 100
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>, // at most MAX_MISSING_SKILLS
    pub improvement_suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serializes_with_camel_case_fields() {
        let result = ScreeningResult {
            match_score: 50,
            matched_skills: vec!["React".to_string()],
            missing_skills: vec!["Python".to_string()],
            improvement_suggestions: vec![],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["matchScore"], 50);
        assert_eq!(value["matchedSkills"][0], "React");
        assert_eq!(value["missingSkills"][0], "Python");
        assert!(value["improvementSuggestions"].as_array().unwrap().is_empty());
    }
}
