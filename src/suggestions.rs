//! Suggestion generation from rule outcomes
//!
//! Failed rules become "Fix: ..." suggestions and warned rules become
//! "Consider: ..." suggestions, fails first, each group preserving rule
//! order. Two fixed suggestions cover degenerate artifacts: no elements at
//! all, and multiple elements with no relationships between them.

use crate::models::{RuleOutcome, RuleStatus};

pub const ADD_ELEMENTS_SUGGESTION: &str =
    "Add elements to the artifact to start modeling your architecture";

pub const ADD_RELATIONSHIPS_SUGGESTION: &str =
    "Add relationships between elements to show how they interact";

/// Derive actionable suggestions from a rule list.
pub fn suggestions(
    rules: &[RuleOutcome],
    element_count: usize,
    relationship_count: usize,
) -> Vec<String> {
    let mut out = Vec::new();

    for rule in rules.iter().filter(|r| r.status == RuleStatus::Fail) {
        out.push(format!("Fix: {}", rule.message));
    }
    for rule in rules.iter().filter(|r| r.status == RuleStatus::Warning) {
        out.push(format!("Consider: {}", rule.message));
    }

    if element_count == 0 {
        out.push(ADD_ELEMENTS_SUGGESTION.to_string());
    }
    if relationship_count == 0 && element_count > 1 {
        out.push(ADD_RELATIONSHIPS_SUGGESTION.to_string());
    }

    out
}
