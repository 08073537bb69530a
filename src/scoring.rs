//! Score calculation for rule outcomes
//!
//! Each rule contributes a fixed weight by status: pass 1.0, warning 0.5,
//! fail 0.0. Severity is informational and never enters the formula. The
//! score is the weighted fraction of rules, scaled to 0-100 and rounded to
//! the nearest integer (half away from zero, so ties never bias down).

use crate::models::{Grade, RuleOutcome, RuleStatus};

fn weight(status: RuleStatus) -> f64 {
    match status {
        RuleStatus::Pass => 1.0,
        RuleStatus::Warning => 0.5,
        RuleStatus::Fail => 0.0,
    }
}

/// Reduce a rule-outcome list to a 0-100 integer score.
///
/// An empty rule list scores 0. This covers both the zero-element artifact
/// path and dispatch on an unrecognized framework, which produces no rules.
pub fn score(rules: &[RuleOutcome]) -> u32 {
    if rules.is_empty() {
        return 0;
    }
    let total: f64 = rules.iter().map(|r| weight(r.status)).sum();
    (100.0 * total / rules.len() as f64).round() as u32
}

/// Map a score to a letter grade.
pub fn grade(score: u32) -> Grade {
    Grade::from_score(score)
}
