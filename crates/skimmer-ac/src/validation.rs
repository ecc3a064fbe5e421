//! Structural validation for built automatons
//!
//! Checks the invariants the builder is supposed to establish: failure
//! links in range and strictly depth-decreasing, every node reachable from
//! the root through trie edges, pattern IDs in range, and output sets
//! closed under the failure chain.

use crate::{ACAutomaton, ROOT};
use std::collections::VecDeque;

/// Validation result for a built automaton
#[derive(Debug, Clone)]
pub struct ACValidationResult {
    /// Critical errors that make the structure unusable
    pub errors: Vec<String>,
    /// Warnings about potential issues (non-fatal)
    pub warnings: Vec<String>,
    /// Statistics gathered during validation
    pub stats: ACStats,
}

/// Statistics gathered during automaton validation
#[derive(Debug, Clone, Default)]
pub struct ACStats {
    /// Number of nodes in the arena
    pub node_count: u32,
    /// Depth of the deepest node (longest pattern)
    pub max_depth: u32,
    /// Total output entries across all nodes, inherited entries included
    pub output_entries: u32,
    /// Number of nodes reachable from the root via trie edges
    pub reachable_count: u32,
}

impl ACValidationResult {
    fn new(node_count: usize) -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            stats: ACStats {
                node_count: node_count as u32,
                ..ACStats::default()
            },
        }
    }

    /// Check if validation passed (no errors)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate the structure of a built automaton
///
/// Validates:
/// - Failure links in range, root's failure fixed at the root
/// - Failure links strictly depth-decreasing (no cycle avoiding the root)
/// - Trie reachability of every arena node
/// - Pattern ID references
/// - Output-set closure under the failure chain
pub fn validate_structure(automaton: &ACAutomaton) -> ACValidationResult {
    let node_count = automaton.node_count();
    let pattern_count = automaton.patterns().len() as u32;
    let mut result = ACValidationResult::new(node_count);

    // Breadth-first sweep from the root records each node's depth and
    // doubles as the reachability check.
    let mut depth = vec![u32::MAX; node_count];
    depth[ROOT as usize] = 0;
    let mut queue = VecDeque::from([ROOT]);
    let mut reachable = 1u32;

    while let Some(id) = queue.pop_front() {
        for (&ch, &target) in &automaton.node(id).transitions {
            if target as usize >= node_count {
                result.errors.push(format!(
                    "node {} transition '{}' targets out-of-range node {}",
                    id, ch, target
                ));
                continue;
            }
            if depth[target as usize] != u32::MAX {
                result.errors.push(format!(
                    "node {} has more than one incoming trie edge",
                    target
                ));
                continue;
            }
            depth[target as usize] = depth[id as usize] + 1;
            result.stats.max_depth = result.stats.max_depth.max(depth[target as usize]);
            reachable += 1;
            queue.push_back(target);
        }
    }
    result.stats.reachable_count = reachable;

    if (reachable as usize) < node_count {
        result.errors.push(format!(
            "{} of {} nodes unreachable from root",
            node_count - reachable as usize,
            node_count
        ));
    }

    if automaton.node(ROOT).failure != ROOT {
        result
            .errors
            .push("root failure link must be the root itself".to_string());
    }

    for id in 0..node_count as u32 {
        let node = automaton.node(id);

        let failure = node.failure;
        if failure as usize >= node_count {
            result
                .errors
                .push(format!("node {} failure link {} out of range", id, failure));
            continue;
        }

        if id != ROOT
            && depth[id as usize] != u32::MAX
            && depth[failure as usize] != u32::MAX
            && depth[failure as usize] >= depth[id as usize]
        {
            result.errors.push(format!(
                "node {} failure link {} is not strictly shallower",
                id, failure
            ));
        }

        result.stats.output_entries += node.outputs.len() as u32;
        for &pattern in &node.outputs {
            if pattern >= pattern_count {
                result.errors.push(format!(
                    "node {} references unknown pattern ID {}",
                    id, pattern
                ));
            }
        }

        // Closure: everything the failure target outputs, this node must
        // output too.
        if id != ROOT {
            let target = automaton.node(failure);
            for &pattern in &target.outputs {
                if !node.outputs.contains(&pattern) {
                    result.errors.push(format!(
                        "node {} missing inherited output {} from failure target {}",
                        id, pattern, failure
                    ));
                }
            }
        }

        let mut sorted = node.outputs.clone();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() != node.outputs.len() {
            result
                .warnings
                .push(format!("node {} lists an output more than once", id));
        }
    }

    result
}
