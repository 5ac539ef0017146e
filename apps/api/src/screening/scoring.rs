/// Missing skills reported back to the caller are capped at this many.
pub const MAX_MISSING_SKILLS: usize = 5;

/// Job skills split by whether the resume covers them. Both lists keep the
/// order of `job_skills`; `missing` is not truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl SkillMatch {
    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    /// Overlap score for this match, see [`compute_match_score`].
    pub fn score(&self) -> u32 {
        compute_match_score(self.matched.len(), self.total())
    }

    /// The first [`MAX_MISSING_SKILLS`] missing skills.
    pub fn top_missing(&self) -> Vec<String> {
        self.missing.iter().take(MAX_MISSING_SKILLS).cloned().collect()
    }
}

/// Splits `job_skills` into matched and missing.
///
/// A job skill is matched when some resume skill contains it, compared
/// lowercase. The check is containment, not equality: a resume listing
/// "PostgreSQL" covers a job asking for "SQL".
pub fn match_skills(job_skills: &[String], resume_skills: &[String]) -> SkillMatch {
    let resume_lower: Vec<String> = resume_skills.iter().map(|s| s.to_lowercase()).collect();

    let (matched, missing): (Vec<String>, Vec<String>) =
        job_skills.iter().cloned().partition(|skill| {
            let skill_lower = skill.to_lowercase();
            resume_lower.iter().any(|r| r.contains(&skill_lower))
        });

    SkillMatch { matched, missing }
}

/// `round(100 × matched / total)`, or 0 when `total` is 0. Always in [0, 100].
pub fn compute_match_score(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let ratio = matched.min(total) as f64 / total as f64;
    (ratio * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_half_match_scores_fifty() {
        let result = match_skills(&strings(&["Python", "React"]), &strings(&["JavaScript", "React"]));
        assert_eq!(result.matched, strings(&["React"]));
        assert_eq!(result.missing, strings(&["Python"]));
        assert_eq!(result.score(), 50);
    }

    #[test]
    fn test_no_job_skills_scores_zero() {
        let result = match_skills(&[], &strings(&["React"]));
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
        assert_eq!(result.score(), 0);
    }

    #[test]
    fn test_containment_is_asymmetric() {
        // Resume "PostgreSQL" covers job "SQL", but not the other way round.
        let covered = match_skills(&strings(&["SQL"]), &strings(&["PostgreSQL"]));
        assert_eq!(covered.matched, strings(&["SQL"]));

        let not_covered = match_skills(&strings(&["PostgreSQL"]), &strings(&["SQL"]));
        assert_eq!(not_covered.missing, strings(&["PostgreSQL"]));
    }

    #[test]
    fn test_matched_and_missing_are_disjoint_and_cover_job_skills() {
        let job = strings(&["JavaScript", "Python", "React", "AWS", "Docker", "SQL"]);
        let resume = strings(&["Python", "Docker", "PostgreSQL"]);
        let result = match_skills(&job, &resume);

        assert!(result.matched.iter().all(|m| !result.missing.contains(m)));
        assert_eq!(result.total(), job.len());
        let mut union: Vec<String> = result.matched.iter().chain(&result.missing).cloned().collect();
        union.sort();
        let mut expected = job.clone();
        expected.sort();
        assert_eq!(union, expected);
    }

    #[test]
    fn test_top_missing_truncates_to_five_in_order() {
        let job = strings(&["A1", "B2", "C3", "D4", "E5", "F6", "G7"]);
        let result = match_skills(&job, &[]);
        assert_eq!(result.missing.len(), 7);
        assert_eq!(result.top_missing(), strings(&["A1", "B2", "C3", "D4", "E5"]));
    }

    #[test]
    fn test_score_rounds_half_up() {
        assert_eq!(compute_match_score(1, 3), 33);
        assert_eq!(compute_match_score(2, 3), 67);
        assert_eq!(compute_match_score(1, 8), 13); // 12.5
    }

    #[test]
    fn test_score_bounded_0_to_100() {
        for total in 0..12 {
            for matched in 0..=total + 1 {
                assert!(compute_match_score(matched, total) <= 100);
            }
        }
        assert_eq!(compute_match_score(4, 4), 100);
    }
}
