//! Path planning: visibility graph plus strategy-weighted Dijkstra search.

mod cost;
mod search;
mod visibility;

pub use cost::CostStrategy;
pub use visibility::{segment_blocked, VisibilityGraph};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::workspace::Workspace;
use crate::Path;

/// Configuration for the planner.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Maximum number of visibility-graph nodes. The pairwise visibility
    /// scan is quadratic in the node count, so planning fails fast with
    /// a capacity error instead of degrading on oversized scenes.
    /// Default: 1000
    pub max_nodes: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { max_nodes: 1000 }
    }
}

impl PlannerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the node ceiling.
    pub fn with_max_nodes(mut self, max: usize) -> Self {
        self.max_nodes = max;
        self
    }
}

/// Plan a path through the workspace with the default configuration.
pub fn plan(workspace: &Workspace, strategy: CostStrategy) -> Result<Path> {
    plan_with_config(workspace, strategy, &PlannerConfig::default())
}

/// Plan a path through the workspace.
///
/// Validates the workspace (logging any non-fatal warnings), builds the
/// visibility graph, and searches it under the given strategy. The
/// returned path starts at the workspace start and ends at its goal; a
/// zero-distance request still yields the two-element `[start, goal]`
/// path.
pub fn plan_with_config(
    workspace: &Workspace,
    strategy: CostStrategy,
    config: &PlannerConfig,
) -> Result<Path> {
    for warning in workspace.validate()? {
        warn!("{warning}");
    }

    if workspace.start == workspace.goal {
        return Ok(Path {
            points: vec![workspace.start, workspace.goal],
            length: 0.0,
            cost: 0.0,
        });
    }

    let graph = VisibilityGraph::build(workspace, config)?;

    let mass = workspace.mass.unwrap_or(1.0);
    let max_acceleration = workspace.max_acceleration.unwrap_or(1.0);
    let (indices, cost) = search::search(&graph, strategy, mass, max_acceleration)?;

    let mut points: Vec<_> = Vec::with_capacity(indices.len());
    let mut length = 0.0;
    for &idx in &indices {
        let point = graph.nodes()[idx];
        if let Some(prev) = points.last() {
            length += point.distance(prev);
        }
        points.push(point);
    }

    Ok(Path {
        points,
        length,
        cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::core::{Point2D, Polygon};
    use crate::error::{GeometryError, PlanError};

    fn poly(coords: &[(f32, f32)]) -> Polygon {
        Polygon::new(coords.iter().map(|&(x, y)| Point2D::new(x, y)).collect())
    }

    #[test]
    fn test_plan_without_obstacles() {
        let ws = Workspace::new(
            Point2D::new(2.0, 2.0),
            Point2D::new(98.0, 98.0),
            100.0,
            100.0,
            vec![],
        );
        let path = plan(&ws, CostStrategy::ShortestDistance).unwrap();

        assert_eq!(path.points, vec![ws.start, ws.goal]);
        assert_eq!(path.cost, ws.start.distance(&ws.goal));
        assert_eq!(path.length, path.cost);
    }

    #[test]
    fn test_plan_degenerate_request() {
        let p = Point2D::new(5.0, 5.0);
        let ws = Workspace::new(p, p, 10.0, 10.0, vec![]);
        let path = plan(&ws, CostStrategy::ShortestDistance).unwrap();

        assert_eq!(path.points, vec![p, p]);
        assert_eq!(path.length, 0.0);
        assert_eq!(path.cost, 0.0);
    }

    #[test]
    fn test_plan_enclosed_goal() {
        let ws = Workspace::new(
            Point2D::new(2.0, 2.0),
            Point2D::new(98.0, 98.0),
            100.0,
            100.0,
            vec![poly(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)])],
        );
        assert!(matches!(
            plan(&ws, CostStrategy::ShortestDistance),
            Err(PlanError::PathNotFound)
        ));
    }

    #[test]
    fn test_plan_rejects_invalid_geometry() {
        let ws = Workspace::new(
            Point2D::new(2.0, 2.0),
            Point2D::new(98.0, 98.0),
            100.0,
            100.0,
            vec![poly(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)])],
        );
        assert!(matches!(
            plan(&ws, CostStrategy::ShortestDistance),
            Err(PlanError::Geometry(GeometryError::SelfIntersecting { index: 0 }))
        ));
    }

    #[test]
    fn test_plan_travel_time_cost() {
        let ws = Workspace::new(
            Point2D::new(0.0, 0.0),
            Point2D::new(8.0, 0.0),
            10.0,
            10.0,
            vec![],
        )
        .with_kinematics(1.0, 2.0);

        let strategy = CostStrategy::for_workspace(&ws);
        assert_eq!(strategy, CostStrategy::FastestTravelTime);

        let path = plan(&ws, strategy).unwrap();
        assert_relative_eq!(path.length, 8.0);
        assert_relative_eq!(path.cost, 3.0 * 2.0_f32.sqrt(), max_relative = 1e-5);
    }
}
