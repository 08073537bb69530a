//! BPMN rules
//!
//! Graph-structural checks: exactly one start event, at least one end event,
//! gateways with at least two outgoing flows, and every task reachable from
//! the start events via the reachability analyzer.

use super::FrameworkEvaluator;
use crate::models::{Element, Relationship, RuleOutcome, RuleSeverity};
use crate::reachability::reachable_from;

const GATEWAY_TYPES: &[&str] = &[
    "bpmn_gateway",
    "bpmn_exclusive_gateway",
    "bpmn_parallel_gateway",
];

const TASK_TYPES: &[&str] = &["bpmn_task", "bpmn_service_task", "bpmn_user_task"];

pub struct BpmnEvaluator;

impl FrameworkEvaluator for BpmnEvaluator {
    fn framework(&self) -> &'static str {
        "bpmn"
    }

    fn evaluate(
        &self,
        elements: &[Element],
        relationships: &[Relationship],
        _artifact_type: &str,
    ) -> Vec<RuleOutcome> {
        let mut rules = Vec::new();

        let start_events: Vec<&Element> = elements
            .iter()
            .filter(|e| e.element_type == "bpmn_start_event")
            .collect();

        rules.push(match start_events.len() {
            1 => RuleOutcome::pass(
                "Processes must have exactly one start event",
                "Found exactly one start event",
                RuleSeverity::Error,
            ),
            0 => RuleOutcome::fail(
                "Processes must have exactly one start event",
                "Add a start event to mark where the process begins",
                RuleSeverity::Error,
            ),
            n => RuleOutcome::fail(
                "Processes must have exactly one start event",
                &format!("Found {} start events; a process needs exactly one", n),
                RuleSeverity::Error,
            ),
        });

        let end_events = elements
            .iter()
            .filter(|e| e.element_type == "bpmn_end_event")
            .count();
        rules.push(if end_events > 0 {
            RuleOutcome::pass(
                "Processes must have at least one end event",
                &format!("Found {} end event(s)", end_events),
                RuleSeverity::Error,
            )
        } else {
            RuleOutcome::fail(
                "Processes must have at least one end event",
                "Add an end event to mark where the process terminates",
                RuleSeverity::Error,
            )
        });

        // Gateways must branch: at least two outgoing flows each
        let gateways: Vec<&Element> = elements
            .iter()
            .filter(|e| GATEWAY_TYPES.contains(&e.element_type.as_str()))
            .collect();
        if !gateways.is_empty() {
            let underbranched: Vec<&str> = gateways
                .iter()
                .filter(|g| {
                    let outgoing = relationships
                        .iter()
                        .filter(|r| r.source_element_id == g.element_id)
                        .count();
                    outgoing < 2
                })
                .map(|g| g.name.as_str())
                .collect();
            rules.push(if underbranched.is_empty() {
                RuleOutcome::pass(
                    "Gateways must have at least two outgoing flows",
                    "All gateways branch",
                    RuleSeverity::Error,
                )
            } else {
                RuleOutcome::fail(
                    "Gateways must have at least two outgoing flows",
                    &format!(
                        "Gateways with fewer than two outgoing flows: {}",
                        underbranched.join(", ")
                    ),
                    RuleSeverity::Error,
                )
            });
        }

        // Task reachability from the start events. Seeded from all starts
        // even when the exactly-one rule failed above.
        if !start_events.is_empty() {
            let seeds = start_events.iter().map(|e| e.element_id.as_str());
            let reachable = reachable_from(seeds, relationships);
            let unreachable: Vec<&str> = elements
                .iter()
                .filter(|e| TASK_TYPES.contains(&e.element_type.as_str()))
                .filter(|e| !reachable.contains(e.element_id.as_str()))
                .map(|e| e.name.as_str())
                .collect();
            rules.push(if unreachable.is_empty() {
                RuleOutcome::pass(
                    "Every task must be reachable from the start event",
                    "All tasks are reachable",
                    RuleSeverity::Error,
                )
            } else {
                RuleOutcome::fail(
                    "Every task must be reachable from the start event",
                    &format!(
                        "Tasks not reachable from the start event: {}",
                        unreachable.join(", ")
                    ),
                    RuleSeverity::Error,
                )
            });
        }

        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RuleStatus;

    fn element(id: &str, element_type: &str, name: &str) -> Element {
        Element {
            element_id: id.to_string(),
            element_type: element_type.to_string(),
            name: name.to_string(),
            description: "described".to_string(),
            layer: String::new(),
        }
    }

    fn flow(id: &str, source: &str, target: &str) -> Relationship {
        Relationship {
            relationship_id: id.to_string(),
            source_element_id: source.to_string(),
            target_element_id: target.to_string(),
            relationship_type: "sequence_flow".to_string(),
            label: String::new(),
        }
    }

    fn linear_process() -> (Vec<Element>, Vec<Relationship>) {
        let elements = vec![
            element("start", "bpmn_start_event", "Start"),
            element("task", "bpmn_task", "Review order"),
            element("end", "bpmn_end_event", "End"),
        ];
        let relationships = vec![flow("f1", "start", "task"), flow("f2", "task", "end")];
        (elements, relationships)
    }

    #[test]
    fn test_linear_process_all_pass() {
        let (elements, relationships) = linear_process();
        let rules = BpmnEvaluator.evaluate(&elements, &relationships, "");
        // start, end, reachability; no gateways present
        assert_eq!(rules.len(), 3);
        assert!(rules.iter().all(|r| r.status == RuleStatus::Pass));
    }

    #[test]
    fn test_zero_start_events_fail() {
        let elements = vec![
            element("task", "bpmn_task", "Review"),
            element("end", "bpmn_end_event", "End"),
        ];
        let rules = BpmnEvaluator.evaluate(&elements, &[], "");
        assert_eq!(rules[0].status, RuleStatus::Fail);
        assert_eq!(rules[0].severity, RuleSeverity::Error);
        // No start events, so no reachability rule either
        assert!(!rules.iter().any(|r| r.rule.contains("reachable")));
    }

    #[test]
    fn test_two_start_events_fail_but_reachability_still_runs() {
        let elements = vec![
            element("s1", "bpmn_start_event", "Start A"),
            element("s2", "bpmn_start_event", "Start B"),
            element("task", "bpmn_task", "Review"),
            element("end", "bpmn_end_event", "End"),
        ];
        let relationships = vec![flow("f1", "s2", "task"), flow("f2", "task", "end")];
        let rules = BpmnEvaluator.evaluate(&elements, &relationships, "");
        assert_eq!(rules[0].status, RuleStatus::Fail);
        let reach = rules.iter().find(|r| r.rule.contains("reachable")).unwrap();
        // Task hangs off the second start event; both starts seed the BFS
        assert_eq!(reach.status, RuleStatus::Pass);
    }

    #[test]
    fn test_missing_end_event_fails() {
        let elements = vec![
            element("start", "bpmn_start_event", "Start"),
            element("task", "bpmn_task", "Review"),
        ];
        let relationships = vec![flow("f1", "start", "task")];
        let rules = BpmnEvaluator.evaluate(&elements, &relationships, "");
        assert_eq!(rules[1].status, RuleStatus::Fail);
    }

    #[test]
    fn test_gateway_with_one_outgoing_flow_fails() {
        let elements = vec![
            element("start", "bpmn_start_event", "Start"),
            element("gw", "bpmn_exclusive_gateway", "Approved?"),
            element("end", "bpmn_end_event", "End"),
        ];
        let relationships = vec![flow("f1", "start", "gw"), flow("f2", "gw", "end")];
        let rules = BpmnEvaluator.evaluate(&elements, &relationships, "");
        let gw_rule = rules.iter().find(|r| r.rule.contains("Gateways")).unwrap();
        assert_eq!(gw_rule.status, RuleStatus::Fail);
        assert!(gw_rule.message.contains("Approved?"));
    }

    #[test]
    fn test_branching_gateway_passes() {
        let elements = vec![
            element("start", "bpmn_start_event", "Start"),
            element("gw", "bpmn_parallel_gateway", "Split"),
            element("e1", "bpmn_end_event", "End A"),
            element("e2", "bpmn_end_event", "End B"),
        ];
        let relationships = vec![
            flow("f1", "start", "gw"),
            flow("f2", "gw", "e1"),
            flow("f3", "gw", "e2"),
        ];
        let rules = BpmnEvaluator.evaluate(&elements, &relationships, "");
        let gw_rule = rules.iter().find(|r| r.rule.contains("Gateways")).unwrap();
        assert_eq!(gw_rule.status, RuleStatus::Pass);
    }

    #[test]
    fn test_no_gateways_skips_gateway_rule() {
        let (elements, relationships) = linear_process();
        let rules = BpmnEvaluator.evaluate(&elements, &relationships, "");
        assert!(!rules.iter().any(|r| r.rule.contains("Gateways")));
    }

    #[test]
    fn test_unreachable_task_fails_and_is_named() {
        let elements = vec![
            element("start", "bpmn_start_event", "Start"),
            element("task", "bpmn_task", "Review order"),
            element("stranded", "bpmn_user_task", "Manual check"),
            element("end", "bpmn_end_event", "End"),
        ];
        let relationships = vec![flow("f1", "start", "task"), flow("f2", "task", "end")];
        let rules = BpmnEvaluator.evaluate(&elements, &relationships, "");
        let reach = rules.iter().find(|r| r.rule.contains("reachable")).unwrap();
        assert_eq!(reach.status, RuleStatus::Fail);
        assert!(reach.message.contains("Manual check"));
        assert!(!reach.message.contains("Review order"));
    }

    #[test]
    fn test_cycle_in_process_terminates() {
        let elements = vec![
            element("start", "bpmn_start_event", "Start"),
            element("t1", "bpmn_task", "Draft"),
            element("t2", "bpmn_task", "Rework"),
            element("end", "bpmn_end_event", "End"),
        ];
        let relationships = vec![
            flow("f1", "start", "t1"),
            flow("f2", "t1", "t2"),
            flow("f3", "t2", "t1"),
            flow("f4", "t1", "end"),
        ];
        let rules = BpmnEvaluator.evaluate(&elements, &relationships, "");
        let reach = rules.iter().find(|r| r.rule.contains("reachable")).unwrap();
        assert_eq!(reach.status, RuleStatus::Pass);
    }
}
