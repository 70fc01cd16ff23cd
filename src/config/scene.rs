//! Scene configuration structure and YAML loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Point2D, Polygon};
use crate::workspace::Workspace;

use super::error::ConfigLoadError;

/// A planning scene loaded from YAML.
///
/// Field names match the scene file keys. Obstacles are vertex loops; a
/// closing duplicate vertex is accepted and dropped during conversion.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneConfig {
    /// X coordinate of the start point.
    pub x_start: f32,
    /// Y coordinate of the start point.
    pub y_start: f32,
    /// X coordinate of the goal point.
    pub x_goal: f32,
    /// Y coordinate of the goal point.
    pub y_goal: f32,
    /// Workspace width.
    pub x_space_size: f32,
    /// Workspace height.
    pub y_space_size: f32,
    /// Obstacle polygons as vertex loops.
    #[serde(default)]
    pub list_obstacles: Vec<Vec<[f32; 2]>>,
    /// Robot mass (optional; inert in the current cost model).
    #[serde(default)]
    pub mass: Option<f32>,
    /// Maximum acceleration magnitude (optional).
    #[serde(default)]
    pub max_acceleration: Option<f32>,
}

impl SceneConfig {
    /// Load a scene from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a scene from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Convert the scene into a workspace value.
    pub fn to_workspace(&self) -> Workspace {
        let obstacles = self
            .list_obstacles
            .iter()
            .map(|loop_| Polygon::new(loop_.iter().map(|&[x, y]| Point2D::new(x, y)).collect()))
            .collect();

        Workspace {
            start: Point2D::new(self.x_start, self.y_start),
            goal: Point2D::new(self.x_goal, self.y_goal),
            width: self.x_space_size,
            height: self.y_space_size,
            obstacles,
            mass: self.mass,
            max_acceleration: self.max_acceleration,
        }
    }
}
