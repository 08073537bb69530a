//! Validation facade
//!
//! Orchestrates a single validation pass: picks the evaluator for the
//! artifact's framework, runs it, then reduces the rule outcomes to a
//! score, grade, and suggestion list. Pure and reentrant: no shared state,
//! no I/O, safe to call concurrently.

use tracing::debug;

use crate::evaluators::evaluator_for;
use crate::models::{
    Artifact, Element, Relationship, RuleOutcome, RuleSeverity, ValidationResult,
};
use crate::scoring::{grade, score};
use crate::suggestions::suggestions;

const EMPTY_ARTIFACT_RULE: &str = "Artifact must contain elements";

/// Validate an artifact's elements and relationships against the structural
/// rules of `framework`.
///
/// Degenerate inputs are not errors: an empty element list yields a single
/// synthetic failing rule with score 0, and an unrecognized framework tag
/// yields zero rules and score 0. The framework string is echoed back in
/// the result either way.
pub fn validate(
    framework: &str,
    artifact_type: &str,
    elements: &[Element],
    relationships: &[Relationship],
) -> ValidationResult {
    let rules = if elements.is_empty() {
        vec![RuleOutcome::fail(
            EMPTY_ARTIFACT_RULE,
            EMPTY_ARTIFACT_RULE,
            RuleSeverity::Error,
        )]
    } else {
        match evaluator_for(framework) {
            Some(evaluator) => evaluator.evaluate(elements, relationships, artifact_type),
            None => {
                debug!(framework, "no evaluator registered for framework");
                Vec::new()
            }
        }
    };

    let score = score(&rules);
    let grade = grade(score);
    let suggestions = suggestions(&rules, elements.len(), relationships.len());

    debug!(
        framework,
        score,
        %grade,
        rule_count = rules.len(),
        "validation complete"
    );

    ValidationResult {
        score,
        grade,
        framework: framework.to_string(),
        rules,
        suggestions,
    }
}

/// Validate a loaded artifact.
pub fn validate_artifact(artifact: &Artifact) -> ValidationResult {
    validate(
        &artifact.framework,
        &artifact.artifact_type,
        &artifact.elements,
        &artifact.relationships,
    )
}
