//! Scene configuration loading.
//!
//! A scene file is a YAML document describing one planning request:
//!
//! ```yaml
//! x_start: 2
//! y_start: 2
//! x_goal: 98
//! y_goal: 98
//! x_space_size: 100
//! y_space_size: 100
//! list_obstacles: [
//!   [[5, 5], [10, 5], [8, 12]],
//!   [[50, 60], [70, 40], [80, 90], [60, 80]]
//! ]
//! mass: 1.0              # optional; with max_acceleration selects
//! max_acceleration: 12.0 # the travel-time cost model
//! ```

mod error;
mod scene;

pub use error::ConfigLoadError;
pub use scene::SceneConfig;
