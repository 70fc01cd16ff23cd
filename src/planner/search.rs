//! Dijkstra search over the visibility graph.
//!
//! Edge costs are recomputed through the active [`CostStrategy`] at
//! traversal time rather than read from the graph's stored weights, so one
//! graph can be searched under either strategy without rebuilding.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::PlanError;

use super::cost::CostStrategy;
use super::visibility::VisibilityGraph;

/// State for the search priority queue.
#[derive(Clone, Copy, Debug)]
struct SearchState {
    /// Cumulative cost from the start node.
    cost: f32,
    /// Node index.
    node: usize,
}

impl PartialEq for SearchState {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.node == other.node
    }
}

impl Eq for SearchState {}

impl Ord for SearchState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is a max-heap).
        // Equal costs break on node index so pops are deterministic.
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for SearchState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the minimum-cost node sequence from start to goal.
///
/// Costs and predecessors are tracked in dense index-addressed tables.
/// A node may be re-pushed whenever its tentative cost improves; stale
/// frontier entries are skipped on pop. Valid for the non-negative costs
/// both strategies produce.
///
/// Returns the node indices from start to goal and the cumulative cost,
/// or [`PlanError::PathNotFound`] once the frontier empties without
/// reaching the goal.
pub fn search(
    graph: &VisibilityGraph,
    strategy: CostStrategy,
    mass: f32,
    max_acceleration: f32,
) -> Result<(Vec<usize>, f32), PlanError> {
    let n = graph.node_count();
    if n == 0 {
        return Err(PlanError::PathNotFound);
    }

    let start = graph.start_idx();
    let goal = graph.goal_idx();

    let mut best: Vec<f32> = vec![f32::INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    best[start] = 0.0;

    let mut frontier = BinaryHeap::new();
    frontier.push(SearchState {
        cost: 0.0,
        node: start,
    });

    while let Some(SearchState { cost, node }) = frontier.pop() {
        // A better cost was recorded after this entry was pushed.
        if cost > best[node] {
            continue;
        }

        if node == goal {
            break;
        }

        let here = graph.nodes()[node];
        for &(neighbor, _distance) in graph.neighbors(node) {
            let step = strategy.cost(here, graph.nodes()[neighbor], mass, max_acceleration);
            let candidate = cost + step;
            if candidate < best[neighbor] {
                best[neighbor] = candidate;
                prev[neighbor] = Some(node);
                frontier.push(SearchState {
                    cost: candidate,
                    node: neighbor,
                });
            }
        }
    }

    if best[goal].is_infinite() {
        return Err(PlanError::PathNotFound);
    }

    let mut indices = vec![goal];
    let mut current = goal;
    while current != start {
        current = prev[current].ok_or(PlanError::PathNotFound)?;
        indices.push(current);
    }
    indices.reverse();

    Ok((indices, best[goal]))
}
