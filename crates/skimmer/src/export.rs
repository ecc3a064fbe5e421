//! Read-only projection of a built automaton for visualization
//!
//! Flattens the trie into a serializable tree plus a flat list of
//! failure-link edges. Node identifiers are assigned in breadth-first
//! visitation order (root = 0), with children visited in sorted character
//! order so repeated exports of the same automaton are byte-identical.

use serde::Serialize;
use skimmer_ac::{ACAutomaton, ACNode, ROOT};
use std::collections::{HashMap, VecDeque};

/// One exported trie node
///
/// Field names serialize in camelCase for the consuming visualization
/// layer. The root carries the display name `"root"` and no edge label;
/// every other node is labeled with its incoming edge character and named
/// by its full path from the root.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrieNode {
    /// Stable identifier, assigned in breadth-first order from 0
    pub id: usize,
    /// Display name: the node's path string, or `"root"`
    pub name: String,
    /// Character on the incoming trie edge (absent on the root)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_label: Option<char>,
    /// Patterns recognized at this node, inherited outputs included
    pub outputs: Vec<String>,
    /// Child nodes in sorted edge-character order
    pub children: Vec<TrieNode>,
}

/// One failure-link edge, as a pair of exported node identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailEdge {
    /// Identifier of the node the failure link leaves
    pub source_id: usize,
    /// Identifier of the failure target
    pub target_id: usize,
}

/// Full exported structure: trie tree plus failure edges
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrieExport {
    /// The trie, rooted at node 0
    pub tree_data: TrieNode,
    /// Every non-root node's failure edge, in source-identifier order
    pub fail_edges: Vec<FailEdge>,
}

fn sorted_transitions(node: &ACNode) -> Vec<(char, u32)> {
    let mut edges: Vec<(char, u32)> = node
        .transitions
        .iter()
        .map(|(&ch, &target)| (ch, target))
        .collect();
    edges.sort_unstable_by_key(|&(ch, _)| ch);
    edges
}

/// Export the structure of a built automaton
///
/// Pure read-only projection: exporting the same automaton any number of
/// times yields identical results.
pub fn export(automaton: &ACAutomaton) -> TrieExport {
    // Level-order sweep assigns identifiers; the recursive assembly below
    // then reads them back while building the nested tree.
    let mut ids: HashMap<u32, usize> = HashMap::new();
    let mut order: Vec<u32> = Vec::new();
    let mut queue = VecDeque::from([ROOT]);
    ids.insert(ROOT, 0);
    order.push(ROOT);

    while let Some(node) = queue.pop_front() {
        for (_, target) in sorted_transitions(automaton.node(node)) {
            ids.insert(target, ids.len());
            order.push(target);
            queue.push_back(target);
        }
    }

    let tree_data = assemble(automaton, ROOT, None, String::new(), &ids);

    let fail_edges = order
        .iter()
        .skip(1) // the root has no failure edge to export
        .map(|&node| FailEdge {
            source_id: ids[&node],
            target_id: ids[&automaton.node(node).failure],
        })
        .collect();

    TrieExport {
        tree_data,
        fail_edges,
    }
}

fn assemble(
    automaton: &ACAutomaton,
    node: u32,
    edge_label: Option<char>,
    path: String,
    ids: &HashMap<u32, usize>,
) -> TrieNode {
    let data = automaton.node(node);

    let outputs = data
        .outputs
        .iter()
        .map(|&pattern| automaton.patterns()[pattern as usize].clone())
        .collect();

    let children = sorted_transitions(data)
        .into_iter()
        .map(|(ch, target)| {
            let mut child_path = path.clone();
            child_path.push(ch);
            assemble(automaton, target, Some(ch), child_path, ids)
        })
        .collect();

    TrieNode {
        id: ids[&node],
        name: if node == ROOT { "root".to_string() } else { path },
        edge_label,
        outputs,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_assigned_in_level_order() {
        let ac = ACAutomaton::build(&["he", "she", "his", "hers"]).unwrap();
        let exported = export(&ac);

        let root = &exported.tree_data;
        assert_eq!(root.id, 0);
        assert_eq!(root.name, "root");
        assert_eq!(root.edge_label, None);

        // Depth-1 children in sorted character order
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].name, "h");
        assert_eq!(root.children[0].id, 1);
        assert_eq!(root.children[1].name, "s");
        assert_eq!(root.children[1].id, 2);

        // Depth-2 identifiers continue level order, not depth-first order
        assert_eq!(root.children[0].children[0].name, "he");
        assert_eq!(root.children[0].children[0].id, 3);
        assert_eq!(root.children[0].children[1].name, "hi");
        assert_eq!(root.children[0].children[1].id, 4);
        assert_eq!(root.children[1].children[0].name, "sh");
        assert_eq!(root.children[1].children[0].id, 5);
    }

    #[test]
    fn test_fail_edges_exclude_root() {
        let ac = ACAutomaton::build(&["he", "she"]).unwrap();
        let exported = export(&ac);

        assert_eq!(exported.fail_edges.len(), ac.node_count() - 1);
        assert!(exported.fail_edges.iter().all(|e| e.source_id != 0));
    }

    #[test]
    fn test_edge_labels_and_outputs() {
        let ac = ACAutomaton::build(&["he", "she", "e"]).unwrap();
        let exported = export(&ac);

        fn find<'a>(node: &'a TrieNode, name: &str) -> Option<&'a TrieNode> {
            if node.name == name {
                return Some(node);
            }
            node.children.iter().find_map(|c| find(c, name))
        }

        let she = find(&exported.tree_data, "she").unwrap();
        assert_eq!(she.edge_label, Some('e'));
        let mut outputs = she.outputs.clone();
        outputs.sort_unstable();
        assert_eq!(outputs, vec!["e", "he", "she"]);
    }
}
