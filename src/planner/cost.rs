//! Edge-cost strategies for the path search.
//!
//! The search recomputes edge costs through the active strategy on every
//! traversal instead of reading the graph's stored Euclidean weights. One
//! constructed graph can therefore be searched under either strategy.

use crate::core::Point2D;
use crate::workspace::Workspace;

/// Cost model applied to graph edges during the search.
///
/// Stateless and `Copy`; selected once per planning call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CostStrategy {
    /// Pure Euclidean distance. Kinematic parameters are ignored.
    ShortestDistance,
    /// Minimum travel time under bounded acceleration, assuming the robot
    /// starts and ends each edge at rest.
    FastestTravelTime,
}

impl CostStrategy {
    /// Select the strategy for a workspace: travel time when both kinematic
    /// parameters are supplied, distance otherwise.
    pub fn for_workspace(workspace: &Workspace) -> Self {
        if workspace.mass.is_some() && workspace.max_acceleration.is_some() {
            CostStrategy::FastestTravelTime
        } else {
            CostStrategy::ShortestDistance
        }
    }

    /// Cost of traversing the straight edge from `a` to `b`.
    ///
    /// `mass` is accepted for interface uniformity but does not influence
    /// either model; it is reserved for a future dynamics model.
    pub fn cost(&self, a: Point2D, b: Point2D, mass: f32, max_acceleration: f32) -> f32 {
        let _ = mass;
        match self {
            CostStrategy::ShortestDistance => a.distance(&b),
            CostStrategy::FastestTravelTime => travel_time(a.distance(&b), max_acceleration),
        }
    }
}

/// Minimum time to cover `distance` from rest to rest with acceleration
/// bounded by `a_max`.
///
/// Uses a symmetric accelerate/cruise/decelerate (trapezoidal) velocity
/// profile, degenerating to a triangular profile when the distance is too
/// short to fit a cruise phase.
fn travel_time(distance: f32, a_max: f32) -> f32 {
    if distance == 0.0 {
        return 0.0;
    }

    let mut t_acc = (2.0 * distance / a_max).sqrt() / 2.0;
    let d_acc = 0.5 * a_max * t_acc * t_acc;

    // Deceleration mirrors acceleration.
    let t_dec;
    let t_const;
    if d_acc + d_acc >= distance {
        // No room to cruise: triangular profile.
        t_acc = (distance / a_max).sqrt();
        t_dec = t_acc;
        t_const = 0.0;
    } else {
        t_dec = t_acc;
        t_const = (distance - 2.0 * d_acc) / (a_max * t_acc);
    }

    t_acc + t_const + t_dec
}
