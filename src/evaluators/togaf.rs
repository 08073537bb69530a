//! TOGAF rules
//!
//! Requires ADM phases and deliverables, checks that phases appear in ADM
//! order, and checks that building blocks are tagged ABB or SBB. Phase names
//! are matched against the canonical ADM order by substring containment in
//! either direction after normalization; unmatched phases are ignored by the
//! ordering check.

use super::{description_rule, FrameworkEvaluator};
use crate::models::{Element, Relationship, RuleOutcome, RuleSeverity};

/// Canonical ADM phase order
const ADM_PHASES: &[&str] = &[
    "preliminary",
    "architecture_vision",
    "business_architecture",
    "is_architecture",
    "technology_architecture",
    "opportunities_and_solutions",
    "migration_planning",
    "implementation_governance",
    "architecture_change_management",
    "requirements_management",
];

fn adm_index(phase_name: &str) -> Option<usize> {
    let normalized = phase_name.to_lowercase().replace(' ', "_");
    ADM_PHASES
        .iter()
        .position(|adm| normalized.contains(adm) || adm.contains(normalized.as_str()))
}

pub struct TogafEvaluator;

impl FrameworkEvaluator for TogafEvaluator {
    fn framework(&self) -> &'static str {
        "togaf"
    }

    fn evaluate(
        &self,
        elements: &[Element],
        _relationships: &[Relationship],
        _artifact_type: &str,
    ) -> Vec<RuleOutcome> {
        let mut rules = Vec::new();

        let phases: Vec<&Element> = elements
            .iter()
            .filter(|e| e.element_type == "togaf_phase")
            .collect();

        rules.push(if phases.is_empty() {
            RuleOutcome::fail(
                "Artifacts must include at least one ADM phase",
                "Add ADM phase elements to structure the architecture work",
                RuleSeverity::Error,
            )
        } else {
            RuleOutcome::pass(
                "Artifacts must include at least one ADM phase",
                &format!("Found {} ADM phase(s)", phases.len()),
                RuleSeverity::Error,
            )
        });

        // Phase ordering, only meaningful with more than one phase.
        // Unrecognized phase names are discarded before the order check.
        if phases.len() > 1 {
            let indices: Vec<usize> =
                phases.iter().filter_map(|p| adm_index(&p.name)).collect();
            let in_order = indices.windows(2).all(|w| w[0] <= w[1]);
            rules.push(if in_order {
                RuleOutcome::pass(
                    "ADM phases should follow the standard order",
                    "Phases follow the ADM sequence",
                    RuleSeverity::Warning,
                )
            } else {
                RuleOutcome::warning(
                    "ADM phases should follow the standard order",
                    "Phases appear out of ADM sequence; reorder them from Preliminary through Requirements Management",
                )
            });
        }

        let deliverables = elements
            .iter()
            .filter(|e| e.element_type == "togaf_deliverable")
            .count();
        rules.push(if deliverables > 0 {
            RuleOutcome::pass(
                "Artifacts should include deliverables",
                &format!("Found {} deliverable(s)", deliverables),
                RuleSeverity::Warning,
            )
        } else {
            RuleOutcome::warning(
                "Artifacts should include deliverables",
                "Add deliverable elements to capture the outputs of each phase",
            )
        });

        // Building blocks should be tagged as architecture (ABB) or
        // solution (SBB) building blocks in their name or description.
        let building_blocks: Vec<&Element> = elements
            .iter()
            .filter(|e| e.element_type == "togaf_building_block")
            .collect();
        if !building_blocks.is_empty() {
            let untagged: Vec<&str> = building_blocks
                .iter()
                .filter(|e| {
                    let name = e.name.to_lowercase();
                    let description = e.description.to_lowercase();
                    !(name.contains("abb")
                        || name.contains("sbb")
                        || description.contains("abb")
                        || description.contains("sbb"))
                })
                .map(|e| e.name.as_str())
                .collect();
            rules.push(if untagged.is_empty() {
                RuleOutcome::pass(
                    "Building blocks should be classified as ABB or SBB",
                    "All building blocks are classified",
                    RuleSeverity::Warning,
                )
            } else {
                RuleOutcome::warning(
                    "Building blocks should be classified as ABB or SBB",
                    &format!("Unclassified building blocks: {}", untagged.join(", ")),
                )
            });
        }

        rules.push(description_rule(elements));

        rules
    }
}
