//! Visibility graph construction.
//!
//! Nodes are the start, the goal, and the obstacle vertices; edges connect
//! every pair of nodes whose connecting open segment is not blocked by an
//! obstacle interior. Grazing contact does not block: a segment may touch
//! an obstacle boundary, run along an edge, or share a vertex with it.

use log::debug;

use crate::core::{Point2D, Polygon, Segment2D};
use crate::error::PlanError;
use crate::workspace::Workspace;

use super::PlannerConfig;

/// Weighted undirected visibility graph over a workspace.
///
/// Node indices are dense and assigned in construction order (start, goal,
/// then obstacle vertices in declaration order), so identical workspaces
/// always produce identical graphs. Each edge stores the Euclidean distance
/// between its endpoints; the search treats this as informational metadata
/// and recomputes traversal costs through the active strategy.
#[derive(Clone, Debug)]
pub struct VisibilityGraph {
    /// Node positions.
    nodes: Vec<Point2D>,

    /// Adjacency list: edges[i] = [(neighbor_idx, distance), ...]
    edges: Vec<Vec<(usize, f32)>>,

    /// Index of the start node.
    start_idx: usize,

    /// Index of the goal node.
    goal_idx: usize,
}

impl VisibilityGraph {
    /// Build the visibility graph for a validated workspace.
    ///
    /// Obstacle vertices strictly outside the workspace bounds do not
    /// become nodes (their polygons still block visibility). Duplicate
    /// coordinates collapse onto a single node.
    ///
    /// Fails with [`PlanError::CapacityExceeded`] if the candidate node
    /// count exceeds `config.max_nodes`, before any pairwise scan begins.
    pub fn build(workspace: &Workspace, config: &PlannerConfig) -> Result<Self, PlanError> {
        let bounds = workspace.bounds();

        let start_idx = 0;
        let mut nodes = vec![workspace.start];
        let goal_idx = match nodes.iter().position(|&n| n == workspace.goal) {
            Some(idx) => idx,
            None => {
                nodes.push(workspace.goal);
                nodes.len() - 1
            }
        };

        for polygon in &workspace.obstacles {
            for &vertex in polygon.vertices() {
                if !bounds.contains(vertex) {
                    continue;
                }
                if !nodes.contains(&vertex) {
                    nodes.push(vertex);
                }
            }
        }

        if nodes.len() > config.max_nodes {
            return Err(PlanError::CapacityExceeded {
                nodes: nodes.len(),
                limit: config.max_nodes,
            });
        }

        let n = nodes.len();
        let mut edges: Vec<Vec<(usize, f32)>> = vec![Vec::new(); n];
        for i in 0..n {
            for j in (i + 1)..n {
                if segment_blocked(nodes[i], nodes[j], &workspace.obstacles) {
                    continue;
                }
                let distance = nodes[i].distance(&nodes[j]);
                edges[i].push((j, distance));
                edges[j].push((i, distance));
            }
        }

        let graph = Self {
            nodes,
            edges,
            start_idx,
            goal_idx,
        };
        debug!(
            "visibility graph built: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Get a node position by index.
    pub fn node(&self, idx: usize) -> Option<&Point2D> {
        self.nodes.get(idx)
    }

    /// All node positions.
    pub fn nodes(&self) -> &[Point2D] {
        &self.nodes
    }

    /// Neighbors of a node as (neighbor_idx, distance) pairs.
    pub fn neighbors(&self, idx: usize) -> &[(usize, f32)] {
        &self.edges[idx]
    }

    /// Index of the start node.
    pub fn start_idx(&self) -> usize {
        self.start_idx
    }

    /// Index of the goal node.
    pub fn goal_idx(&self) -> usize {
        self.goal_idx
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|e| e.len()).sum::<usize>() / 2
    }
}

/// Check whether the open segment p-q is blocked by any obstacle.
///
/// Blocked iff the segment properly crosses an obstacle edge, or some part
/// of it runs through an obstacle interior. Boundary contact alone never
/// blocks.
pub fn segment_blocked(p: Point2D, q: Point2D, obstacles: &[Polygon]) -> bool {
    let segment = Segment2D::new(p, q);
    let dir = segment.direction();
    let len_sq = dir.dot(&dir);
    if len_sq <= f32::EPSILON {
        return obstacles.iter().any(|o| o.contains_point(p));
    }

    for polygon in obstacles {
        if polygon.edges().any(|edge| segment.crosses_properly(&edge)) {
            return true;
        }

        // No proper crossing, so the boundary only touches the segment, at
        // segment endpoints or at polygon vertices lying on it. Split the
        // segment at those contacts and probe each piece's midpoint: a
        // piece with its midpoint strictly inside runs through the
        // interior. A single midpoint probe is not enough, e.g. for a
        // segment entering through one vertex and leaving through another.
        let mut params = vec![0.0_f32, 1.0];
        for &vertex in polygon.vertices() {
            if segment.contains_point(vertex) {
                params.push(((vertex - p).dot(&dir) / len_sq).clamp(0.0, 1.0));
            }
        }
        params.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        if params.windows(2).any(|w| {
            polygon.contains_point(segment.point_at((w[0] + w[1]) * 0.5))
        }) {
            return true;
        }
    }
    false
}
