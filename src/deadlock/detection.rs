/*!
 * Cycle Detection
 * Iterative depth-first search with three-color marking
 */

use super::graph::WaitGraph;
use super::types::Edge;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Not yet visited
    White,
    /// On the current DFS path
    Gray,
    /// Fully explored
    Black,
}

/// Find one directed cycle, returned as head-to-tail edges
///
/// Start nodes are tried in index order. The first back edge found closes
/// the reported cycle. O(V + E).
pub(super) fn find_cycle(graph: &WaitGraph) -> Option<Vec<Edge>> {
    let mut color = vec![Color::White; graph.node_count()];
    // (node, next successor to try)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for start in 0..graph.node_count() {
        if color[start] != Color::White {
            continue;
        }

        color[start] = Color::Gray;
        stack.push((start, 0));

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let Some(&next) = graph.successors(node).get(frame.1) else {
                color[node] = Color::Black;
                stack.pop();
                continue;
            };
            frame.1 += 1;

            match color[next] {
                Color::White => {
                    color[next] = Color::Gray;
                    stack.push((next, 0));
                }
                Color::Gray => return Some(close_cycle(graph, &stack, next)),
                Color::Black => {}
            }
        }
    }

    None
}

/// Edges from `entry` along the gray path back to `entry`
fn close_cycle(graph: &WaitGraph, stack: &[(usize, usize)], entry: usize) -> Vec<Edge> {
    let start = stack
        .iter()
        .position(|&(node, _)| node == entry)
        .unwrap_or(0);
    let path = &stack[start..];

    let mut cycle: Vec<Edge> = path
        .windows(2)
        .map(|pair| graph.edge(pair[0].0, pair[1].0))
        .collect();
    if let Some(&(last, _)) = path.last() {
        cycle.push(graph.edge(last, entry));
    }
    cycle
}
