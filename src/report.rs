//! Terminal rendering of validation results

use console::style;
use std::fmt::Write;

use crate::models::{Grade, RuleStatus, RulesSummary, ValidationResult};

fn styled_grade(grade: Grade) -> String {
    match grade {
        Grade::A | Grade::B => style(grade).green().bold().to_string(),
        Grade::C | Grade::D => style(grade).yellow().bold().to_string(),
        Grade::F => style(grade).red().bold().to_string(),
    }
}

fn status_marker(status: RuleStatus) -> String {
    match status {
        RuleStatus::Pass => style("PASS").green().to_string(),
        RuleStatus::Warning => style("WARN").yellow().to_string(),
        RuleStatus::Fail => style("FAIL").red().to_string(),
    }
}

/// Render a validation result as human-readable text.
pub fn render_text(result: &ValidationResult) -> String {
    let summary = RulesSummary::from_rules(&result.rules);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} validation: score {}/100, grade {}",
        result.framework,
        result.score,
        styled_grade(result.grade)
    );
    let _ = writeln!(
        out,
        "{} passed, {} warnings, {} failed ({} rules)",
        summary.passed, summary.warnings, summary.failed, summary.total
    );
    let _ = writeln!(out);

    for rule in &result.rules {
        let _ = writeln!(out, "  [{}] {}", status_marker(rule.status), rule.rule);
        if rule.status != RuleStatus::Pass {
            let _ = writeln!(out, "         {}", rule.message);
        }
    }

    if !result.suggestions.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Suggestions:");
        for suggestion in &result.suggestions {
            let _ = writeln!(out, "  - {}", suggestion);
        }
    }

    out
}
