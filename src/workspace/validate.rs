//! Workspace validation: fatal geometry checks and non-fatal warnings.

use std::fmt;

use crate::error::GeometryError;

use super::Workspace;

/// A non-fatal finding about workspace geometry.
///
/// Warnings are returned as structured values rather than only logged, so
/// callers can inspect them and tests can assert on them directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Two obstacles intersect (shared area or touching boundaries).
    Overlap { first: usize, second: usize },
    /// An obstacle extends outside the workspace bounds.
    OutOfBounds { index: usize },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::Overlap { first, second } => {
                write!(f, "obstacle {first} overlaps obstacle {second}")
            }
            ValidationWarning::OutOfBounds { index } => {
                write!(f, "obstacle {index} exceeds the workspace bounds")
            }
        }
    }
}

impl Workspace {
    /// Validate the workspace before planning.
    ///
    /// Fails with a [`GeometryError`] if start or goal lies outside the
    /// bounds, or if any obstacle is degenerate or self-intersecting.
    /// Obstacles overlapping each other or spilling outside the bounds are
    /// legal; each such condition is reported as a [`ValidationWarning`].
    pub fn validate(&self) -> Result<Vec<ValidationWarning>, GeometryError> {
        let bounds = self.bounds();

        if !bounds.contains(self.start) {
            return Err(GeometryError::StartOutOfBounds(self.start));
        }
        if !bounds.contains(self.goal) {
            return Err(GeometryError::GoalOutOfBounds(self.goal));
        }

        for (index, obstacle) in self.obstacles.iter().enumerate() {
            if obstacle.vertex_count() < 3 {
                return Err(GeometryError::TooFewVertices {
                    index,
                    count: obstacle.vertex_count(),
                });
            }
            if !obstacle.is_simple() {
                return Err(GeometryError::SelfIntersecting { index });
            }
        }

        let mut warnings = Vec::new();
        for i in 0..self.obstacles.len() {
            for j in (i + 1)..self.obstacles.len() {
                if self.obstacles[i].intersects(&self.obstacles[j]) {
                    warnings.push(ValidationWarning::Overlap { first: i, second: j });
                }
            }
            if !bounds.encloses(&self.obstacles[i].bounds()) {
                warnings.push(ValidationWarning::OutOfBounds { index: i });
            }
        }

        Ok(warnings)
    }
}
