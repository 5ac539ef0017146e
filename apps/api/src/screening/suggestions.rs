const LOW_SCORE_SUGGESTION: &str =
    "Consider gaining experience in the key technologies mentioned in the job description";
const STRONG_MATCH_SUGGESTION: &str =
    "Great match! Consider highlighting relevant projects and achievements";
const FOUNDATION_SUGGESTION: &str =
    "Good foundation! Consider strengthening skills in missing areas";

/// Builds improvement suggestions from the missing skills and the match score.
///
/// Rules, applied in order:
/// 1. score < 50 → generic upskilling advice
/// 2. any missing skills → "Focus on learning: " + first three
/// 3. score ≥ 70 → positive reinforcement, otherwise score ≥ 50 → strengthen gaps
pub fn generate_suggestions(missing_skills: &[String], match_score: u32) -> Vec<String> {
    let mut suggestions = Vec::new();

    if match_score < 50 {
        suggestions.push(LOW_SCORE_SUGGESTION.to_string());
    }

    if !missing_skills.is_empty() {
        let focus: Vec<&str> = missing_skills.iter().take(3).map(String::as_str).collect();
        suggestions.push(format!("Focus on learning: {}", focus.join(", ")));
    }

    if match_score >= 70 {
        suggestions.push(STRONG_MATCH_SUGGESTION.to_string());
    } else if match_score >= 50 {
        suggestions.push(FOUNDATION_SUGGESTION.to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_low_score_with_gaps() {
        let suggestions = generate_suggestions(&strings(&["AWS", "Docker", "Redis", "SQL"]), 20);
        assert_eq!(
            suggestions,
            vec![
                LOW_SCORE_SUGGESTION.to_string(),
                "Focus on learning: AWS, Docker, Redis".to_string(),
            ]
        );
    }

    #[test]
    fn test_fifty_is_a_good_foundation() {
        let suggestions = generate_suggestions(&strings(&["Python"]), 50);
        assert_eq!(
            suggestions,
            vec![
                "Focus on learning: Python".to_string(),
                FOUNDATION_SUGGESTION.to_string(),
            ]
        );
    }

    #[test]
    fn test_perfect_match_only_praises() {
        let suggestions = generate_suggestions(&[], 100);
        assert_eq!(suggestions, vec![STRONG_MATCH_SUGGESTION.to_string()]);
    }

    #[test]
    fn test_seventy_boundary_is_strong() {
        let suggestions = generate_suggestions(&strings(&["Git"]), 70);
        assert_eq!(suggestions.last().unwrap(), STRONG_MATCH_SUGGESTION);
        assert!(!suggestions.contains(&FOUNDATION_SUGGESTION.to_string()));
    }

    #[test]
    fn test_zero_score_without_job_skills() {
        // Empty job description: score 0, nothing missing.
        let suggestions = generate_suggestions(&[], 0);
        assert_eq!(suggestions, vec![LOW_SCORE_SUGGESTION.to_string()]);
    }
}
