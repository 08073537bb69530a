//! Reachability analysis over the directed relationship graph
//!
//! Builds an outgoing adjacency index from relationships, then runs a BFS
//! from a seed set. Used by the BPMN evaluator to check that every task is
//! reachable from the start events. Iterative with an explicit visited set,
//! so cyclic graphs terminate and each node is visited at most once.

use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

use crate::models::Relationship;

/// Compute the set of element IDs reachable from `seeds` via zero or more
/// directed edges. Seeds are always part of the result.
pub fn reachable_from<'a>(
    seeds: impl IntoIterator<Item = &'a str>,
    relationships: &'a [Relationship],
) -> FxHashSet<&'a str> {
    // Outgoing adjacency: source -> [targets]
    let mut outgoing: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    for rel in relationships {
        outgoing
            .entry(rel.source_element_id.as_str())
            .or_default()
            .push(rel.target_element_id.as_str());
    }

    let mut visited: FxHashSet<&str> = FxHashSet::default();
    let mut queue: VecDeque<&str> = VecDeque::new();

    for seed in seeds {
        if visited.insert(seed) {
            queue.push_back(seed);
        }
    }

    while let Some(node_id) = queue.pop_front() {
        if let Some(targets) = outgoing.get(node_id) {
            for &target in targets {
                if visited.insert(target) {
                    queue.push_back(target);
                }
            }
        }
    }

    visited
}
