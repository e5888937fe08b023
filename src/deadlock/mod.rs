/*!
 * Deadlock Detection
 * Per-process resource holdings and wait-cycle search
 */

use crate::core::types::{Pid, ResourceId};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

mod detection;
mod graph;
pub mod types;

pub use types::{DeadlockReport, Edge, Holdings, Node};

use graph::WaitGraph;

/// Allocation and request tables keyed by process
///
/// The wait graph is derived from these tables on every detection call and
/// never stored.
#[derive(Debug, Default, Clone)]
pub struct ResourceGraph {
    // Ordered by pid so traversal order is stable
    table: BTreeMap<Pid, Holdings>,
}

impl ResourceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record what `pid` holds and what it is waiting for
    ///
    /// Overwrites any earlier record for `pid`. Overlap between the two sets
    /// and resource existence are not checked.
    pub fn record_allocation<A, R>(&mut self, pid: Pid, allocated: A, requested: R)
    where
        A: IntoIterator,
        A::Item: Into<ResourceId>,
        R: IntoIterator,
        R::Item: Into<ResourceId>,
    {
        let holdings = Holdings {
            allocated: allocated.into_iter().map(Into::into).collect(),
            requested: requested.into_iter().map(Into::into).collect(),
        };

        info!(
            pid,
            allocated = holdings.allocated.len(),
            requested = holdings.requested.len(),
            "Resource allocation recorded"
        );

        self.table.insert(pid, holdings);
    }

    /// Check the combined holds/requests relation for a cycle
    ///
    /// Reports the first cycle found by the traversal; which one is
    /// unspecified when several exist.
    pub fn detect_deadlock(&self) -> DeadlockReport {
        let graph = WaitGraph::build(&self.table);
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Resource-wait graph built"
        );

        match detection::find_cycle(&graph) {
            Some(cycle) => {
                let report = DeadlockReport::found(cycle);
                warn!(
                    processes = ?report.processes(),
                    cycle_len = report.cycle.len(),
                    "Deadlock detected"
                );
                report
            }
            None => {
                debug!("No deadlock detected");
                DeadlockReport::none()
            }
        }
    }

    /// Full derived edge list, suitable for a graph visualizer
    pub fn edges(&self) -> Vec<Edge> {
        WaitGraph::build(&self.table).edges()
    }

    pub fn holdings(&self, pid: Pid) -> Option<&Holdings> {
        self.table.get(&pid)
    }

    pub fn allocation(&self, pid: Pid) -> Option<&[ResourceId]> {
        self.holdings(pid).map(|h| h.allocated.as_slice())
    }

    pub fn request(&self, pid: Pid) -> Option<&[ResourceId]> {
        self.holdings(pid).map(|h| h.requested.as_slice())
    }

    /// Number of processes with a recorded allocation
    #[inline]
    pub fn process_count(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Forget every recorded allocation
    pub fn clear(&mut self) {
        self.table.clear();
    }
}
