//! ArchiMate rules
//!
//! Allow-list checks for layers, relationship types, and element types,
//! plus the shared description hygiene rule. Element types are accepted in
//! both short form (`business_actor`) and prefixed form
//! (`archimate_business_actor`). These tables are compiled-in constants.

use super::{description_rule, FrameworkEvaluator};
use crate::models::{Element, Relationship, RuleOutcome, RuleSeverity};

const VALID_LAYERS: &[&str] = &[
    "business",
    "application",
    "technology",
    "motivation",
    "strategy",
];

const VALID_RELATIONSHIP_TYPES: &[&str] = &[
    "serving",
    "realization",
    "triggering",
    "flow",
    "access",
    "composition",
    "aggregation",
    "assignment",
    "serves",
    "triggers",
    "accesses",
    "association",
    "influences",
    "realizes",
];

// Short-form element types; the prefixed `archimate_` variants are accepted
// by stripping the prefix before lookup.
const VALID_ELEMENT_TYPES: &[&str] = &[
    // Business layer
    "business_actor",
    "business_role",
    "business_process",
    "business_function",
    "business_service",
    "business_object",
    "business_event",
    "business_interface",
    // Application layer
    "application_component",
    "application_service",
    "application_function",
    "application_interface",
    "application_process",
    "data_object",
    // Technology layer
    "node",
    "device",
    "system_software",
    "technology_service",
    "technology_interface",
    "artifact",
    "communication_network",
    // Motivation and strategy
    "stakeholder",
    "driver",
    "goal",
    "principle",
    "requirement",
    "constraint",
];

fn is_valid_element_type(element_type: &str) -> bool {
    let short = element_type
        .strip_prefix("archimate_")
        .unwrap_or(element_type);
    VALID_ELEMENT_TYPES.contains(&short)
}

pub struct ArchimateEvaluator;

impl FrameworkEvaluator for ArchimateEvaluator {
    fn framework(&self) -> &'static str {
        "archimate"
    }

    fn evaluate(
        &self,
        elements: &[Element],
        relationships: &[Relationship],
        _artifact_type: &str,
    ) -> Vec<RuleOutcome> {
        let mut rules = Vec::new();

        // Layer validity (only elements that declare a layer)
        let bad_layers: Vec<&str> = elements
            .iter()
            .filter(|e| !e.layer.is_empty() && !VALID_LAYERS.contains(&e.layer.as_str()))
            .map(|e| e.name.as_str())
            .collect();
        rules.push(if bad_layers.is_empty() {
            RuleOutcome::pass(
                "Elements must declare a valid ArchiMate layer",
                "All declared layers are valid",
                RuleSeverity::Error,
            )
        } else {
            RuleOutcome::fail(
                "Elements must declare a valid ArchiMate layer",
                &format!("Elements with invalid layers: {}", bad_layers.join(", ")),
                RuleSeverity::Error,
            )
        });

        // Relationship type validity
        let bad_rels: Vec<&str> = relationships
            .iter()
            .filter(|r| !VALID_RELATIONSHIP_TYPES.contains(&r.relationship_type.as_str()))
            .map(|r| r.relationship_id.as_str())
            .collect();
        rules.push(if bad_rels.is_empty() {
            RuleOutcome::pass(
                "Relationships must use valid ArchiMate relationship types",
                "All relationship types are valid",
                RuleSeverity::Error,
            )
        } else {
            RuleOutcome::fail(
                "Relationships must use valid ArchiMate relationship types",
                &format!(
                    "Relationships with invalid types: {}",
                    bad_rels.join(", ")
                ),
                RuleSeverity::Error,
            )
        });

        // Element type validity
        let bad_types: Vec<&str> = elements
            .iter()
            .filter(|e| !is_valid_element_type(&e.element_type))
            .map(|e| e.name.as_str())
            .collect();
        rules.push(if bad_types.is_empty() {
            RuleOutcome::pass(
                "Elements must use valid ArchiMate element types",
                "All element types are valid",
                RuleSeverity::Error,
            )
        } else {
            RuleOutcome::fail(
                "Elements must use valid ArchiMate element types",
                &format!("Elements with invalid types: {}", bad_types.join(", ")),
                RuleSeverity::Error,
            )
        });

        rules.push(description_rule(elements));

        rules
    }
}
