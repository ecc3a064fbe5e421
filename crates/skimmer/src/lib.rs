//! Skimmer - Single-Pass Multi-Pattern Text Scanning
//!
//! Skimmer builds an Aho-Corasick automaton from a set of patterns, scans
//! an input text for every occurrence of every pattern in one linear pass,
//! and exports the automaton's structure (trie edges plus failure-link
//! graph) for external visualization.
//!
//! # Quick Start
//!
//! ```rust
//! use skimmer::Matcher;
//!
//! let matcher = Matcher::build(&["he", "she", "e"])?;
//!
//! // All occurrences of all patterns, overlapping matches included
//! let results = matcher.scan("ushers");
//! assert_eq!(results["she"], vec![1]);
//! assert_eq!(results["he"], vec![2]);
//! assert_eq!(results["e"], vec![3]);
//!
//! // Trie plus failure edges, for visualization
//! let structure = matcher.export();
//! assert_eq!(structure.tree_data.name, "root");
//! # Ok::<(), skimmer::SkimmerError>(())
//! ```
//!
//! # Indexing convention
//!
//! Match positions are 0-indexed character offsets: the offset of the first
//! character of the match, counting Unicode scalar values from the start of
//! the text. Byte offsets are never used.
//!
//! # Architecture
//!
//! ```text
//! patterns ──> Builder ──> automaton ──┬──> Scanner ──> match map
//!                                      └──> Exporter ──> tree + fail edges
//! ```
//!
//! The automaton is immutable once built and request-local by construction:
//! each pattern set gets a fresh automaton, and nothing is cached or shared
//! across requests.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types for skimmer operations
pub mod error;
/// Structure export for visualization
pub mod export;

pub use error::{ACError, Result, SkimmerError};
pub use export::{FailEdge, TrieExport, TrieNode};
pub use skimmer_ac::{validate_structure, ACAutomaton, ACStats, ACValidationResult, PatternMatch};

use serde::Serialize;
use std::collections::BTreeMap;

/// Per-pattern match positions, keyed by pattern string
///
/// Contains an entry for every requested pattern, including those with no
/// matches; duplicate pattern submissions collapse to one key.
pub type MatchMap = BTreeMap<String, Vec<usize>>;

/// A built pattern matcher
///
/// Wraps the automaton with the per-pattern result bookkeeping: scanning
/// returns a map with one entry per requested pattern, and exporting
/// projects the automaton structure for display.
#[derive(Debug, Clone)]
pub struct Matcher {
    automaton: ACAutomaton,
}

impl Matcher {
    /// Build a matcher from patterns
    ///
    /// Rejects an empty pattern list and empty pattern strings. Duplicate
    /// pattern strings collapse to a single result key.
    pub fn build<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        if patterns.is_empty() {
            return Err("provide at least one pattern".into());
        }
        let automaton = ACAutomaton::build(patterns)?;
        Ok(Self { automaton })
    }

    /// Scan `text`, reporting every occurrence of every pattern
    ///
    /// The returned map has an entry (possibly empty) for every pattern the
    /// matcher was built with. Positions are 0-indexed character offsets in
    /// ascending order.
    pub fn scan(&self, text: &str) -> MatchMap {
        let mut results: MatchMap = self
            .automaton
            .patterns()
            .iter()
            .map(|p| (p.clone(), Vec::new()))
            .collect();

        for m in self.automaton.scan(text) {
            let pattern = &self.automaton.patterns()[m.pattern as usize];
            // Entry always exists; the map was seeded from the same list.
            if let Some(positions) = results.get_mut(pattern) {
                positions.push(m.start);
            }
        }

        results
    }

    /// Export the automaton structure for visualization
    ///
    /// Read-only and deterministic: repeated exports of the same matcher
    /// yield identical trees and failure-edge lists.
    pub fn export(&self) -> TrieExport {
        export::export(&self.automaton)
    }

    /// The deduplicated pattern set the matcher was built with
    pub fn patterns(&self) -> &[String] {
        self.automaton.patterns()
    }

    /// Access the underlying automaton
    pub fn automaton(&self) -> &ACAutomaton {
        &self.automaton
    }
}

/// Combined scan-and-export report
///
/// Serializes to the `{ results, treeData, failEdges }` shape consumed by
/// the visualization layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Match positions per pattern
    pub results: MatchMap,
    /// The exported trie, rooted at node 0
    pub tree_data: TrieNode,
    /// Failure-link edges between exported node identifiers
    pub fail_edges: Vec<FailEdge>,
}

/// Build, scan, and export in one call
///
/// Constructs a fresh automaton for `patterns`, scans `text`, and flattens
/// the structure, returning everything a caller needs to render the result.
pub fn analyze<S: AsRef<str>>(patterns: &[S], text: &str) -> Result<Report> {
    let matcher = Matcher::build(patterns)?;
    let results = matcher.scan(text);
    let TrieExport {
        tree_data,
        fail_edges,
    } = matcher.export();

    Ok(Report {
        results,
        tree_data,
        fail_edges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pattern_gets_an_entry() {
        let matcher = Matcher::build(&["he", "absent"]).unwrap();
        let results = matcher.scan("hehe");

        assert_eq!(results["he"], vec![0, 2]);
        assert_eq!(results["absent"], Vec::<usize>::new());
    }

    #[test]
    fn test_duplicate_patterns_collapse_to_one_key() {
        let matcher = Matcher::build(&["ab", "ab"]).unwrap();
        let results = matcher.scan("abab");

        assert_eq!(results.len(), 1);
        assert_eq!(results["ab"], vec![0, 2]);
    }

    #[test]
    fn test_empty_pattern_list_rejected_at_boundary() {
        let patterns: Vec<&str> = Vec::new();
        let err = Matcher::build(&patterns).unwrap_err();
        assert!(matches!(err, SkimmerError::InvalidInput(_)));
    }

    #[test]
    fn test_analyze_combines_results_and_structure() {
        let report = analyze(&["he", "she"], "ushers").unwrap();

        assert_eq!(report.results["she"], vec![1]);
        assert_eq!(report.tree_data.name, "root");
        assert!(!report.fail_edges.is_empty());
    }
}
