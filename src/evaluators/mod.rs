//! Framework rule evaluators
//!
//! One evaluator per supported modeling framework (C4, ArchiMate, TOGAF,
//! BPMN). Each is a pure strategy: it inspects the artifact's elements and
//! relationships and returns an ordered list of rule outcomes. Output order
//! is fixed per evaluator so results are reproducible.

use crate::models::{Element, Relationship, RuleOutcome, RuleSeverity};

mod archimate;
mod bpmn;
mod c4;
mod togaf;

pub use archimate::ArchimateEvaluator;
pub use bpmn::BpmnEvaluator;
pub use c4::C4Evaluator;
pub use togaf::TogafEvaluator;

/// Trait for framework evaluators that check artifact structure
pub trait FrameworkEvaluator: Sync {
    /// The framework tag this evaluator handles, e.g. `c4`
    fn framework(&self) -> &'static str;

    /// Run every rule for this framework against the artifact's elements
    /// and relationships. `artifact_type` is the diagram type declared on
    /// the artifact; only the C4 evaluator consults it.
    fn evaluate(
        &self,
        elements: &[Element],
        relationships: &[Relationship],
        artifact_type: &str,
    ) -> Vec<RuleOutcome>;
}

static C4: C4Evaluator = C4Evaluator;
static ARCHIMATE: ArchimateEvaluator = ArchimateEvaluator;
static TOGAF: TogafEvaluator = TogafEvaluator;
static BPMN: BpmnEvaluator = BpmnEvaluator;

/// Look up the evaluator for a framework tag. Unrecognized tags yield
/// `None`; the validator treats that as zero rules, not an error.
pub fn evaluator_for(framework: &str) -> Option<&'static dyn FrameworkEvaluator> {
    match framework {
        "c4" => Some(&C4),
        "archimate" => Some(&ARCHIMATE),
        "togaf" => Some(&TOGAF),
        "bpmn" => Some(&BPMN),
        _ => None,
    }
}

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Names of elements with blank or whitespace-only descriptions
pub(crate) fn undescribed_names(elements: &[Element]) -> Vec<&str> {
    elements
        .iter()
        .filter(|e| is_blank(&e.description))
        .map(|e| e.name.as_str())
        .collect()
}

/// Shared hygiene rule: every element must carry a non-blank description.
/// Fails (warning severity) listing offender names.
pub(crate) fn description_rule(elements: &[Element]) -> RuleOutcome {
    let missing = undescribed_names(elements);
    if missing.is_empty() {
        RuleOutcome::pass(
            "All elements should have descriptions",
            "Every element has a description",
            RuleSeverity::Warning,
        )
    } else {
        RuleOutcome::fail(
            "All elements should have descriptions",
            &format!("Elements missing descriptions: {}", missing.join(", ")),
            RuleSeverity::Warning,
        )
    }
}
