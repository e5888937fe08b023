/*!
 * Deadlock Types
 * Nodes, edges, and detection reports of the resource-wait graph
 */

use crate::core::types::{Pid, ResourceId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A vertex of the resource-wait graph
///
/// Processes and resources live in separate namespaces, so pid 1 and a
/// resource labelled "1" are different nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Process(Pid),
    Resource(ResourceId),
}

impl Node {
    #[inline]
    pub fn as_process(&self) -> Option<Pid> {
        match self {
            Self::Process(pid) => Some(*pid),
            Self::Resource(_) => None,
        }
    }

    #[inline]
    pub fn as_resource(&self) -> Option<&ResourceId> {
        match self {
            Self::Process(_) => None,
            Self::Resource(id) => Some(id),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Process(pid) => write!(f, "P{}", pid),
            Self::Resource(id) => write!(f, "{}", id),
        }
    }
}

/// Directed edge: `Resource -> Process` means held, `Process -> Resource` means waiting
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: Node,
    pub to: Node,
}

impl Edge {
    #[inline]
    pub fn new(from: Node, to: Node) -> Self {
        Self { from, to }
    }

    /// `resource` is held by `pid`
    pub fn held(resource: ResourceId, pid: Pid) -> Self {
        Self::new(Node::Resource(resource), Node::Process(pid))
    }

    /// `pid` is waiting on `resource`
    pub fn waiting(pid: Pid, resource: ResourceId) -> Self {
        Self::new(Node::Process(pid), Node::Resource(resource))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Per-process holdings as last recorded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holdings {
    pub allocated: Vec<ResourceId>,
    pub requested: Vec<ResourceId>,
}

/// Outcome of a deadlock check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlockReport {
    pub deadlocked: bool,
    /// One witness cycle; each edge's `to` is the next edge's `from`
    pub cycle: Vec<Edge>,
}

impl DeadlockReport {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn found(cycle: Vec<Edge>) -> Self {
        Self {
            deadlocked: !cycle.is_empty(),
            cycle,
        }
    }

    /// Nodes along the cycle, closed by repeating the first
    pub fn path(&self) -> Vec<&Node> {
        let mut path: Vec<&Node> = self.cycle.iter().map(|edge| &edge.from).collect();
        if let Some(first) = self.cycle.first() {
            path.push(&first.from);
        }
        path
    }

    /// Processes taking part in the cycle
    pub fn processes(&self) -> Vec<Pid> {
        self.cycle
            .iter()
            .filter_map(|edge| edge.from.as_process())
            .collect()
    }

    /// Resources taking part in the cycle
    pub fn resources(&self) -> Vec<&ResourceId> {
        self.cycle
            .iter()
            .filter_map(|edge| edge.from.as_resource())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(id: &str) -> ResourceId {
        ResourceId::from(id)
    }

    #[test]
    fn test_node_display() {
        assert_eq!(Node::Process(3).to_string(), "P3");
        assert_eq!(Node::Resource(r("R1")).to_string(), "R1");
        assert_eq!(Edge::held(r("R1"), 1).to_string(), "R1 -> P1");
    }

    #[test]
    fn test_report_accessors() {
        let report = DeadlockReport::found(vec![
            Edge::held(r("R1"), 1),
            Edge::waiting(1, r("R2")),
            Edge::held(r("R2"), 2),
            Edge::waiting(2, r("R1")),
        ]);

        assert!(report.deadlocked);
        assert_eq!(report.processes(), vec![1, 2]);
        assert_eq!(report.resources(), vec![&r("R1"), &r("R2")]);

        let path: Vec<String> = report.path().iter().map(|n| n.to_string()).collect();
        assert_eq!(path, vec!["R1", "P1", "R2", "P2", "R1"]);
    }

    #[test]
    fn test_empty_report() {
        let report = DeadlockReport::none();
        assert!(!report.deadlocked);
        assert!(report.path().is_empty());
        assert_eq!(DeadlockReport::found(Vec::new()), report);
    }

    #[test]
    fn test_node_serialization() {
        let json = serde_json::to_string(&Edge::held(r("R1"), 1)).unwrap();
        assert_eq!(json, r#"{"from":{"resource":"R1"},"to":{"process":1}}"#);
    }
}
