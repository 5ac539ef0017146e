use std::collections::HashSet;

/// Built-in technology vocabulary. Order is significant: extraction results
/// are reported in this order.
pub const DEFAULT_SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "TypeScript",
    "AWS",
    "Docker",
    "Kubernetes",
    "SQL",
    "MongoDB",
    "Git",
    "Agile",
    "Scrum",
    "REST API",
    "GraphQL",
    "HTML",
    "CSS",
    "Vue.js",
    "Angular",
    "Express",
    "Django",
    "Flask",
    "Spring Boot",
    "PostgreSQL",
    "Redis",
    "Elasticsearch",
];

/// Ordered list of recognised skill names, unique under case-insensitive comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    skills: Vec<String>,
}

impl SkillVocabulary {
    /// Builds a vocabulary, trimming entries and dropping blanks and
    /// case-insensitive duplicates (first occurrence wins).
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let skills = skills
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(s.to_lowercase()))
            .collect();
        Self { skills }
    }

    /// Parses a comma-separated list, e.g. `"Rust, Go, Terraform"`.
    pub fn from_csv(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_keeps_order() {
        let vocab = SkillVocabulary::default();
        assert_eq!(vocab.len(), DEFAULT_SKILLS.len());
        assert_eq!(vocab.skills()[0], "JavaScript");
        assert_eq!(vocab.skills()[1], "Python");
        assert_eq!(vocab.skills().last().unwrap(), "Elasticsearch");
    }

    #[test]
    fn test_duplicates_dropped_case_insensitively() {
        let vocab = SkillVocabulary::new(["Rust", "rust", "Go", "RUST", "go"]);
        assert_eq!(vocab.skills(), ["Rust", "Go"]);
    }

    #[test]
    fn test_from_csv_trims_and_skips_blanks() {
        let vocab = SkillVocabulary::from_csv(" Rust ,, Terraform , ");
        assert_eq!(vocab.skills(), ["Rust", "Terraform"]);
    }
}
