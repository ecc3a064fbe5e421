//! In-memory Aho-Corasick Automaton
//!
//! This crate implements the core multi-pattern matching automaton: a trie
//! over the pattern set plus failure links and merged output sets, built
//! with a breadth-first pass so that every node's failure target is fully
//! resolved before the node itself.
//!
//! # Design
//!
//! The automaton is stored as an arena of nodes addressed by `u32` index:
//! - Trie edges are owned parent-to-child transitions keyed by character
//! - Failure links are plain indices into the same arena (never owned)
//! - The root occupies slot 0 and is the universal fallback state
//!
//! Once built, the automaton is read-only. Scanning and structure export
//! only ever read the arena.

use std::collections::{HashMap, VecDeque};
use std::fmt;

// Validation module for built automaton structures
pub mod validation;

// Re-export validation types for convenience
pub use validation::{validate_structure, ACStats, ACValidationResult};

/// Arena index of the root node.
pub const ROOT: u32 = 0;

/// Error type for AC automaton operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ACError {
    /// Invalid pattern
    InvalidPattern(String),
    /// Invalid input
    InvalidInput(String),
}

impl fmt::Display for ACError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ACError::InvalidPattern(msg) => write!(f, "Invalid pattern: {}", msg),
            ACError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for ACError {}

/// A single automaton state.
///
/// Transitions are keyed by character. `failure` points at the node for the
/// longest proper suffix of this node's path that is itself a prefix of some
/// pattern (the root when none exists). `outputs` holds the IDs of every
/// pattern recognized on reaching this node, including those inherited
/// through the failure chain.
#[derive(Debug, Clone, Default)]
pub struct ACNode {
    /// Outgoing trie edges, keyed by input character
    pub transitions: HashMap<char, u32>,
    /// Failure link (arena index; `ROOT` for depth-1 nodes and the root itself)
    pub failure: u32,
    /// Pattern IDs recognized at this state, closed under the failure chain
    pub outputs: Vec<u32>,
}

/// A single reported occurrence of a pattern in the scanned text.
///
/// `start` is the 0-indexed character offset of the first character of the
/// match. Offsets count Unicode scalar values, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch {
    /// ID of the matched pattern (index into [`ACAutomaton::patterns`])
    pub pattern: u32,
    /// 0-indexed character offset where the match begins
    pub start: usize,
}

/// Builder for constructing the automaton arena
///
/// Trie construction and failure-link computation are separate phases; the
/// failure pass must only run once every pattern has been inserted.
struct ACBuilder {
    /// Node arena; slot 0 is the root
    nodes: Vec<ACNode>,
    /// Deduplicated patterns, in first-seen order
    patterns: Vec<String>,
    /// Pattern string -> pattern ID, for duplicate submissions
    seen: HashMap<String, u32>,
}

impl ACBuilder {
    fn new() -> Self {
        Self {
            nodes: vec![ACNode::default()], // Root
            patterns: Vec::new(),
            seen: HashMap::new(),
        }
    }

    /// Add a pattern to the trie
    ///
    /// Walks from the root one character at a time, creating a node on the
    /// first visit to a given (node, character) pair. Duplicate pattern
    /// strings collapse to the ID of their first submission so each text
    /// occurrence is reported exactly once.
    fn add_pattern(&mut self, pattern: &str) -> u32 {
        if let Some(&id) = self.seen.get(pattern) {
            return id;
        }

        let pattern_id = self.patterns.len() as u32;
        self.patterns.push(pattern.to_string());
        self.seen.insert(pattern.to_string(), pattern_id);

        let mut current = ROOT;
        for ch in pattern.chars() {
            if let Some(&next) = self.nodes[current as usize].transitions.get(&ch) {
                current = next;
            } else {
                let new_id = self.nodes.len() as u32;
                self.nodes.push(ACNode::default());
                self.nodes[current as usize].transitions.insert(ch, new_id);
                current = new_id;
            }
        }

        self.nodes[current as usize].outputs.push(pattern_id);
        pattern_id
    }

    /// Compute failure links and close output sets, in breadth-first order
    ///
    /// Level order matters: a node's failure target is always at a strictly
    /// shallower depth, so by the time a node is assigned its link the
    /// target's own outputs are already fully merged. Inheriting just the
    /// direct failure target's outputs therefore captures the entire suffix
    /// chain.
    fn build_failure_links(&mut self) {
        let mut queue = VecDeque::new();

        // Depth-1 states fail to root
        let root_children: Vec<u32> = self.nodes[ROOT as usize]
            .transitions
            .values()
            .copied()
            .collect();

        for child in root_children {
            self.nodes[child as usize].failure = ROOT;
            queue.push_back(child);
        }

        while let Some(state_id) = queue.pop_front() {
            let transitions: Vec<(char, u32)> = self.nodes[state_id as usize]
                .transitions
                .iter()
                .map(|(&ch, &next)| (ch, next))
                .collect();

            for (ch, next_state) in transitions {
                queue.push_back(next_state);

                // Follow failure links looking for a state with a transition
                // on `ch`; the root is the universal default.
                let mut fail = self.nodes[state_id as usize].failure;
                loop {
                    if let Some(&target) = self.nodes[fail as usize].transitions.get(&ch) {
                        self.nodes[next_state as usize].failure = target;
                        break;
                    }
                    if fail == ROOT {
                        self.nodes[next_state as usize].failure = ROOT;
                        break;
                    }
                    fail = self.nodes[fail as usize].failure;
                }

                // The failure target is shallower and already processed, so
                // its output set is closed; one merge inherits everything.
                let failure = self.nodes[next_state as usize].failure;
                let inherited = self.nodes[failure as usize].outputs.clone();
                self.nodes[next_state as usize].outputs.extend(inherited);
            }
        }
    }

    fn finish(self) -> ACAutomaton {
        let pattern_lens = self.patterns.iter().map(|p| p.chars().count()).collect();
        ACAutomaton {
            nodes: self.nodes,
            patterns: self.patterns,
            pattern_lens,
        }
    }
}

/// Built Aho-Corasick automaton
///
/// Immutable once constructed. Built fresh per pattern set; there is no
/// incremental pattern insertion after [`ACAutomaton::build`] returns.
#[derive(Debug, Clone)]
pub struct ACAutomaton {
    /// Node arena; slot 0 is the root
    nodes: Vec<ACNode>,
    /// Deduplicated patterns, in first-seen order
    patterns: Vec<String>,
    /// Character lengths of each pattern, indexed by pattern ID
    pattern_lens: Vec<usize>,
}

impl ACAutomaton {
    /// Build the automaton from patterns
    ///
    /// Rejects an empty pattern list and empty pattern strings before any
    /// construction begins. Duplicate pattern strings are collapsed to a
    /// single pattern ID.
    pub fn build<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ACError> {
        if patterns.is_empty() {
            return Err(ACError::InvalidInput("no patterns provided".to_string()));
        }

        let mut builder = ACBuilder::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            if pattern.is_empty() {
                return Err(ACError::InvalidPattern("empty pattern".to_string()));
            }
            builder.add_pattern(pattern);
        }

        builder.build_failure_links();
        Ok(builder.finish())
    }

    /// Scan `text` once, reporting every occurrence of every pattern
    ///
    /// Maintains a current-state pointer, following precomputed failure
    /// links on mismatch and falling back to the root when no state in the
    /// chain has a transition on the current character. All matches are
    /// reported, including fully overlapping and nested ones. Matches are
    /// emitted in order of their end position in the text.
    pub fn scan(&self, text: &str) -> Vec<PatternMatch> {
        let mut matches = Vec::new();
        let mut state = ROOT;

        for (i, ch) in text.chars().enumerate() {
            loop {
                if let Some(&next) = self.nodes[state as usize].transitions.get(&ch) {
                    state = next;
                    break;
                }
                if state == ROOT {
                    // No partial match anywhere in the chain: stay at root.
                    break;
                }
                state = self.nodes[state as usize].failure;
            }

            for &pattern in &self.nodes[state as usize].outputs {
                matches.push(PatternMatch {
                    pattern,
                    start: i + 1 - self.pattern_lens[pattern as usize],
                });
            }
        }

        matches
    }

    /// Get a node by arena index
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range; valid indices are `0..node_count()`.
    pub fn node(&self, id: u32) -> &ACNode {
        &self.nodes[id as usize]
    }

    /// Number of nodes in the arena (root included)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Deduplicated patterns, indexed by pattern ID
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Character length of the pattern with the given ID
    pub fn pattern_len(&self, id: u32) -> usize {
        self.pattern_lens[id as usize]
    }
}
