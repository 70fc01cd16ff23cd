//! Workspace model: a bounded rectangular planning area with obstacles.

mod validate;

pub use validate::ValidationWarning;

use serde::{Deserialize, Serialize};

use crate::core::{Bounds, Point2D, Polygon};

/// A bounded rectangular planning area with polygonal obstacles.
///
/// The workspace covers `[0, width] × [0, height]`. Start and goal must lie
/// inside it; obstacles may spill over the edge (that only draws a warning,
/// see [`Workspace::validate`]). A workspace is immutable once constructed
/// and safe to share read-only between planning calls.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Workspace {
    /// Start point of the requested path.
    pub start: Point2D,
    /// Goal point of the requested path.
    pub goal: Point2D,
    /// Workspace width (x extent).
    pub width: f32,
    /// Workspace height (y extent).
    pub height: f32,
    /// Obstacle polygons.
    pub obstacles: Vec<Polygon>,
    /// Robot mass. Present only when planning for travel time; currently
    /// inert in the cost model and kept for forward compatibility.
    pub mass: Option<f32>,
    /// Maximum acceleration magnitude for the travel-time cost model.
    pub max_acceleration: Option<f32>,
}

impl Workspace {
    /// Create a workspace without kinematic parameters.
    pub fn new(
        start: Point2D,
        goal: Point2D,
        width: f32,
        height: f32,
        obstacles: Vec<Polygon>,
    ) -> Self {
        Self {
            start,
            goal,
            width,
            height,
            obstacles,
            mass: None,
            max_acceleration: None,
        }
    }

    /// Attach kinematic parameters, enabling travel-time planning.
    pub fn with_kinematics(mut self, mass: f32, max_acceleration: f32) -> Self {
        self.mass = Some(mass);
        self.max_acceleration = Some(max_acceleration);
        self
    }

    /// The workspace bounds `[0, width] × [0, height]`.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(Point2D::new(0.0, 0.0), Point2D::new(self.width, self.height))
    }
}
