//! # Marga-Plan: Visibility-Graph Path Planner
//!
//! An offline path planner for bounded 2D workspaces with polygonal
//! obstacles. Given a start point and a goal point, it computes the
//! collision-free waypoint sequence minimizing either raw Euclidean length
//! or travel time under a bounded-acceleration kinematic model.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_plan::core::{Point2D, Polygon};
//! use marga_plan::planner::{plan, CostStrategy};
//! use marga_plan::workspace::Workspace;
//!
//! let ws = Workspace::new(
//!     Point2D::new(2.0, 2.0),
//!     Point2D::new(98.0, 98.0),
//!     100.0,
//!     100.0,
//!     vec![Polygon::new(vec![
//!         Point2D::new(5.0, 5.0),
//!         Point2D::new(10.0, 5.0),
//!         Point2D::new(8.0, 12.0),
//!     ])],
//! );
//!
//! let path = plan(&ws, CostStrategy::ShortestDistance).unwrap();
//! println!("{} waypoints, length {:.2}", path.points.len(), path.length);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: geometric value types (points, segments, polygons, bounds)
//! - [`workspace`]: the planning area, its obstacles, and validation
//! - [`planner`]: visibility-graph construction, cost strategies, search
//! - [`config`]: YAML scene loading
//! - [`svg`]: scene and solution rendering
//!
//! ## Data Flow
//!
//! ```text
//! scene YAML ──► Workspace ──► validate (warnings)
//!                                  │
//!                                  ▼
//!                          VisibilityGraph ──► Dijkstra + CostStrategy ──► Path
//! ```
//!
//! The visibility graph is immutable once built and may be searched
//! repeatedly under different cost strategies; the strategy is a
//! search-time parameter, not baked into the graph.

pub mod config;
pub mod core;
pub mod planner;
pub mod svg;
pub mod workspace;

mod error;

// Re-export main types at crate root
pub use crate::config::{ConfigLoadError, SceneConfig};
pub use crate::core::{Point2D, Polygon};
pub use crate::error::{GeometryError, PlanError, Result};
pub use crate::planner::{plan, plan_with_config, CostStrategy, PlannerConfig, VisibilityGraph};
pub use crate::workspace::{ValidationWarning, Workspace};

/// A planned path through the workspace.
///
/// Waypoints run from the workspace start to its goal, inclusive; even a
/// zero-distance request yields the two-element `[start, goal]` path.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Waypoints along the path.
    pub points: Vec<Point2D>,
    /// Total Euclidean length of the path.
    pub length: f32,
    /// Cumulative cost under the strategy that produced the path.
    pub cost: f32,
}
