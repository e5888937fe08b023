/*!
 * Resource-Wait Graph
 * Adjacency built fresh from the allocation and request tables
 */

use super::types::{Edge, Holdings, Node};
use crate::core::types::Pid;
use ahash::RandomState;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Directed graph over interned nodes
///
/// Node indices follow first appearance and adjacency lists keep insertion
/// order, so traversal is deterministic for a given table state.
#[derive(Debug, Default)]
pub(super) struct WaitGraph {
    nodes: Vec<Node>,
    index: HashMap<Node, usize, RandomState>,
    adjacency: Vec<Vec<usize>>,
    edge_set: HashSet<(usize, usize), RandomState>,
}

impl WaitGraph {
    /// Build from per-process holdings
    ///
    /// Every held resource adds `resource -> process`; every requested
    /// resource adds `process -> resource`. All allocation edges are inserted
    /// before any request edge.
    pub fn build(table: &BTreeMap<Pid, Holdings>) -> Self {
        let mut graph = Self::default();

        for (&pid, holdings) in table {
            for resource in &holdings.allocated {
                graph.add_edge(Node::Resource(resource.clone()), Node::Process(pid));
            }
        }

        for (&pid, holdings) in table {
            for resource in &holdings.requested {
                graph.add_edge(Node::Process(pid), Node::Resource(resource.clone()));
            }
        }

        graph
    }

    fn intern(&mut self, node: Node) -> usize {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(node.clone());
        self.index.insert(node, idx);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Add an edge; repeated edges collapse into one
    pub fn add_edge(&mut self, from: Node, to: Node) {
        let from_idx = self.intern(from);
        let to_idx = self.intern(to);
        if self.edge_set.insert((from_idx, to_idx)) {
            self.adjacency[from_idx].push(to_idx);
        }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_set.len()
    }

    #[inline]
    pub fn successors(&self, idx: usize) -> &[usize] {
        &self.adjacency[idx]
    }

    #[inline]
    pub fn edge(&self, from: usize, to: usize) -> Edge {
        Edge::new(self.nodes[from].clone(), self.nodes[to].clone())
    }

    /// Every edge in node order, then insertion order
    pub fn edges(&self) -> Vec<Edge> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (from, to)))
            .map(|(from, to)| self.edge(from, to))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ResourceId;

    fn holdings(allocated: &[&str], requested: &[&str]) -> Holdings {
        Holdings {
            allocated: allocated.iter().map(|&r| ResourceId::from(r)).collect(),
            requested: requested.iter().map(|&r| ResourceId::from(r)).collect(),
        }
    }

    #[test]
    fn test_build_edges() {
        let mut table = BTreeMap::new();
        table.insert(1, holdings(&["R1"], &["R2"]));
        table.insert(2, holdings(&["R2"], &[]));

        let graph = WaitGraph::build(&table);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);

        let edges: Vec<String> = graph.edges().iter().map(|e| e.to_string()).collect();
        assert_eq!(edges, vec!["R1 -> P1", "P1 -> R2", "R2 -> P2"]);
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let mut table = BTreeMap::new();
        table.insert(1, holdings(&["R1", "R1"], &["R2", "R2"]));

        let graph = WaitGraph::build(&table);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.successors(0).len(), 1);
    }

    #[test]
    fn test_empty_table() {
        let graph = WaitGraph::build(&BTreeMap::new());
        assert_eq!(graph.node_count(), 0);
        assert!(graph.edges().is_empty());
    }
}
