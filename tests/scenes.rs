//! Scenario tests driving the planner through YAML scene configurations.

use marga_plan::planner::{plan, segment_blocked, CostStrategy};
use marga_plan::workspace::ValidationWarning;
use marga_plan::{GeometryError, PlanError, SceneConfig};

const TWO_OBSTACLE_SCENE: &str = "
x_start: 2
y_start: 2
x_goal: 98
y_goal: 98
x_space_size: 100
y_space_size: 100
list_obstacles: [
  [[5, 5], [10, 5], [8, 12]],
  [[50, 60], [70, 40], [80, 90], [60, 80]]
]
";

#[test]
fn two_obstacle_scene_end_to_end() {
    let ws = SceneConfig::from_yaml(TWO_OBSTACLE_SCENE)
        .unwrap()
        .to_workspace();
    let strategy = CostStrategy::for_workspace(&ws);
    assert_eq!(strategy, CostStrategy::ShortestDistance);

    let path = plan(&ws, strategy).unwrap();

    assert!(path.points.len() >= 2);
    assert_eq!(path.points.first(), Some(&ws.start));
    assert_eq!(path.points.last(), Some(&ws.goal));
    // No leg of the returned path may pass through an obstacle.
    for pair in path.points.windows(2) {
        assert!(!segment_blocked(pair[0], pair[1], &ws.obstacles));
    }
    // A detour can never beat the straight line.
    assert!(path.length >= ws.start.distance(&ws.goal));
}

#[test]
fn kinematic_parameters_select_travel_time() {
    let yaml = format!("{TWO_OBSTACLE_SCENE}mass: 1.0\nmax_acceleration: 12.0\n");
    let ws = SceneConfig::from_yaml(&yaml).unwrap().to_workspace();

    let strategy = CostStrategy::for_workspace(&ws);
    assert_eq!(strategy, CostStrategy::FastestTravelTime);

    let path = plan(&ws, strategy).unwrap();
    assert!(path.cost > 0.0);
    // Travel time is not the Euclidean length.
    assert_ne!(path.cost, path.length);
}

#[test]
fn start_out_of_bounds_scene_fails() {
    let yaml = "
x_start: 200
y_start: 200
x_goal: 98
y_goal: 98
x_space_size: 100
y_space_size: 100
list_obstacles: []
";
    let ws = SceneConfig::from_yaml(yaml).unwrap().to_workspace();
    assert!(matches!(
        plan(&ws, CostStrategy::for_workspace(&ws)),
        Err(PlanError::Geometry(GeometryError::StartOutOfBounds(_)))
    ));
}

#[test]
fn goal_out_of_bounds_scene_fails() {
    let yaml = "
x_start: 2
y_start: 2
x_goal: 200
y_goal: 200
x_space_size: 100
y_space_size: 100
list_obstacles: []
";
    let ws = SceneConfig::from_yaml(yaml).unwrap().to_workspace();
    assert!(matches!(
        plan(&ws, CostStrategy::for_workspace(&ws)),
        Err(PlanError::Geometry(GeometryError::GoalOutOfBounds(_)))
    ));
}

#[test]
fn enclosed_scene_has_no_valid_path() {
    let yaml = "
x_start: 2
y_start: 2
x_goal: 98
y_goal: 98
x_space_size: 100
y_space_size: 100
list_obstacles: [
  [[0, 0], [100, 0], [100, 100], [0, 100]]
]
";
    let ws = SceneConfig::from_yaml(yaml).unwrap().to_workspace();
    let err = plan(&ws, CostStrategy::for_workspace(&ws)).unwrap_err();
    assert!(matches!(err, PlanError::PathNotFound));
    assert_eq!(err.to_string(), "no valid path found");
}

#[test]
fn overlapping_obstacles_warn_but_still_plan() {
    let yaml = "
x_start: 2
y_start: 2
x_goal: 98
y_goal: 98
x_space_size: 100
y_space_size: 100
list_obstacles: [
  [[50, 60], [70, 40], [80, 90], [60, 80]],
  [[60, 60], [60, 80], [80, 80], [80, 60]]
]
";
    let ws = SceneConfig::from_yaml(yaml).unwrap().to_workspace();

    let warnings = ws.validate().unwrap();
    assert!(warnings.contains(&ValidationWarning::Overlap { first: 0, second: 1 }));

    assert!(plan(&ws, CostStrategy::for_workspace(&ws)).is_ok());
}
