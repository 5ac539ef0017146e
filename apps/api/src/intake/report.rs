use crate::intake::ScreeningReport;

const BAR_WIDTH: usize = 20;

/// Qualitative label for a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            ScoreBand::Excellent
        } else if score >= 60 {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent Match",
            ScoreBand::Good => "Good Match",
            ScoreBand::NeedsImprovement => "Needs Improvement",
        }
    }
}

fn progress_bar(score: u32) -> String {
    let filled = score.min(100) as usize * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn push_list(lines: &mut Vec<String>, title: &str, items: &[String], bullet: &str) {
    lines.push(String::new());
    lines.push(title.to_string());
    if items.is_empty() {
        lines.push("  (none)".to_string());
    }
    lines.extend(items.iter().map(|item| format!("  {bullet} {item}")));
}

/// Renders the results view as plain text.
pub fn render_report(report: &ScreeningReport) -> String {
    let result = &report.result;
    let mut lines = vec![
        "Resume Analysis Results".to_string(),
        format!("Analysis for: {}", report.file_name),
        String::new(),
        format!("Overall Match Score: {}%", result.match_score),
        format!(
            "{} {}",
            progress_bar(result.match_score),
            ScoreBand::from_score(result.match_score).label()
        ),
    ];

    push_list(&mut lines, "Matched Skills", &result.matched_skills, "+");
    push_list(&mut lines, "Areas for Improvement", &result.missing_skills, "-");

    lines.push(String::new());
    lines.push("Suggestions".to_string());
    if result.improvement_suggestions.is_empty() {
        lines.push("  (none)".to_string());
    }
    lines.extend(
        result
            .improvement_suggestions
            .iter()
            .enumerate()
            .map(|(i, suggestion)| format!("  {}. {suggestion}", i + 1)),
    );

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::ScreeningResult;

    fn report(score: u32) -> ScreeningReport {
        ScreeningReport {
            file_name: "jane.pdf".to_string(),
            result: ScreeningResult {
                match_score: score,
                matched_skills: vec!["React".to_string()],
                missing_skills: vec!["Python".to_string()],
                improvement_suggestions: vec!["Focus on learning: Python".to_string()],
            },
        }
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::NeedsImprovement);
        assert_eq!(ScoreBand::from_score(0).label(), "Needs Improvement");
    }

    #[test]
    fn test_progress_bar_width_is_fixed() {
        assert_eq!(progress_bar(0), format!("[{}]", "-".repeat(20)));
        assert_eq!(progress_bar(50), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
        assert_eq!(progress_bar(100), format!("[{}]", "#".repeat(20)));
        assert_eq!(progress_bar(250), progress_bar(100));
    }

    #[test]
    fn test_render_contains_every_section() {
        let text = render_report(&report(50));
        assert!(text.contains("Analysis for: jane.pdf"));
        assert!(text.contains("Overall Match Score: 50%"));
        assert!(text.contains("Needs Improvement"));
        assert!(text.contains("  + React"));
        assert!(text.contains("  - Python"));
        assert!(text.contains("  1. Focus on learning: Python"));
    }

    #[test]
    fn test_render_empty_lists() {
        let mut empty = report(0);
        empty.result.matched_skills.clear();
        empty.result.missing_skills.clear();
        empty.result.improvement_suggestions.clear();
        let text = render_report(&empty);
        assert_eq!(text.matches("(none)").count(), 3);
    }

    #[test]
    fn test_render_layout() {
        let text = render_report(&report(80));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Resume Analysis Results");
        assert_eq!(lines[2], "");
        assert_eq!(lines[4], format!("[{}{}] Excellent Match", "#".repeat(16), "-".repeat(4)));
        assert!(text.ends_with("  1. Focus on learning: Python\n"));
    }
}
