//! Error types for marga-plan.

use thiserror::Error;

use crate::config::ConfigLoadError;
use crate::core::Point2D;

/// Fatal geometric precondition violation.
///
/// Raised by workspace validation before any graph construction is
/// attempted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("start point ({}, {}) is out of bounds", .0.x, .0.y)]
    StartOutOfBounds(Point2D),

    #[error("goal point ({}, {}) is out of bounds", .0.x, .0.y)]
    GoalOutOfBounds(Point2D),

    #[error("obstacle {index} has {count} vertices, a polygon needs at least 3")]
    TooFewVertices { index: usize, count: usize },

    #[error("obstacle {index} is self-intersecting")]
    SelfIntersecting { index: usize },
}

/// Planner error type.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid workspace: {0}")]
    Geometry(#[from] GeometryError),

    #[error("no valid path found")]
    PathNotFound,

    #[error("visibility graph would need {nodes} nodes, exceeding the limit of {limit}")]
    CapacityExceeded { nodes: usize, limit: usize },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias for planner operations.
pub type Result<T> = std::result::Result<T, PlanError>;
