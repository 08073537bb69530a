//! C4 model rules
//!
//! Diagram-type-specific presence checks (context, container, component),
//! plus hygiene checks shared by every C4 diagram: descriptions, relationship
//! labels, and orphaned elements. Orphans are deliberately lenient: they
//! degrade the score to warning weight, not a failure.

use rustc_hash::FxHashSet;

use super::{description_rule, is_blank, FrameworkEvaluator};
use crate::models::{Element, Relationship, RuleOutcome, RuleSeverity};

const CONTAINER_TYPES: &[&str] = &["c4_container", "c4_database", "c4_message_queue", "c4_api"];
const COMPONENT_TYPES: &[&str] = &["c4_component", "c4_service"];

pub struct C4Evaluator;

fn count_of_type(elements: &[Element], element_type: &str) -> usize {
    elements
        .iter()
        .filter(|e| e.element_type == element_type)
        .count()
}

fn count_of_types(elements: &[Element], types: &[&str]) -> usize {
    elements
        .iter()
        .filter(|e| types.contains(&e.element_type.as_str()))
        .count()
}

impl FrameworkEvaluator for C4Evaluator {
    fn framework(&self) -> &'static str {
        "c4"
    }

    fn evaluate(
        &self,
        elements: &[Element],
        relationships: &[Relationship],
        artifact_type: &str,
    ) -> Vec<RuleOutcome> {
        let mut rules = Vec::new();

        match artifact_type {
            "c4_context" => {
                let persons = count_of_type(elements, "c4_person");
                rules.push(if persons > 0 {
                    RuleOutcome::pass(
                        "Context diagrams must include at least one person",
                        &format!("Found {} person element(s)", persons),
                        RuleSeverity::Error,
                    )
                } else {
                    RuleOutcome::fail(
                        "Context diagrams must include at least one person",
                        "Add a person element to show who uses the system",
                        RuleSeverity::Error,
                    )
                });

                let systems = count_of_type(elements, "c4_system")
                    + count_of_type(elements, "c4_external_system");
                rules.push(if systems > 0 {
                    RuleOutcome::pass(
                        "Context diagrams must include at least one system",
                        &format!("Found {} system element(s)", systems),
                        RuleSeverity::Error,
                    )
                } else {
                    RuleOutcome::fail(
                        "Context diagrams must include at least one system",
                        "Add a system or external system element",
                        RuleSeverity::Error,
                    )
                });
            }
            "c4_container" => {
                let containers = count_of_types(elements, CONTAINER_TYPES);
                rules.push(if containers > 0 {
                    RuleOutcome::pass(
                        "Container diagrams must include at least one container",
                        &format!("Found {} container element(s)", containers),
                        RuleSeverity::Error,
                    )
                } else {
                    RuleOutcome::fail(
                        "Container diagrams must include at least one container",
                        "Add a container, database, message queue, or API element",
                        RuleSeverity::Error,
                    )
                });
            }
            "c4_component" => {
                let components = count_of_types(elements, COMPONENT_TYPES);
                rules.push(if components > 0 {
                    RuleOutcome::pass(
                        "Component diagrams must include at least one component",
                        &format!("Found {} component element(s)", components),
                        RuleSeverity::Error,
                    )
                } else {
                    RuleOutcome::fail(
                        "Component diagrams must include at least one component",
                        "Add a component or service element",
                        RuleSeverity::Error,
                    )
                });
            }
            _ => {}
        }

        rules.push(description_rule(elements));

        // Relationship labels
        let unlabeled: Vec<&str> = relationships
            .iter()
            .filter(|r| is_blank(&r.label))
            .map(|r| r.relationship_id.as_str())
            .collect();
        rules.push(if unlabeled.is_empty() {
            RuleOutcome::pass(
                "All relationships should have labels",
                "Every relationship is labeled",
                RuleSeverity::Warning,
            )
        } else {
            RuleOutcome::fail(
                "All relationships should have labels",
                &format!("Relationships missing labels: {}", unlabeled.join(", ")),
                RuleSeverity::Warning,
            )
        });

        // Orphaned elements: not referenced by any relationship endpoint
        let connected: FxHashSet<&str> = relationships
            .iter()
            .flat_map(|r| {
                [
                    r.source_element_id.as_str(),
                    r.target_element_id.as_str(),
                ]
            })
            .collect();
        let orphans: Vec<&str> = elements
            .iter()
            .filter(|e| !connected.contains(e.element_id.as_str()))
            .map(|e| e.name.as_str())
            .collect();
        rules.push(if orphans.is_empty() {
            RuleOutcome::pass(
                "All elements should be connected",
                "No orphaned elements",
                RuleSeverity::Warning,
            )
        } else {
            RuleOutcome::warning(
                "All elements should be connected",
                &format!("Orphaned elements with no relationships: {}", orphans.join(", ")),
            )
        });

        rules
    }
}
