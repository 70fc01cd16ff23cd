//! SVG rendering of a planning scene.
//!
//! Renders the workspace rectangle, obstacles, start/goal markers, and
//! optionally the solution path. Coordinates are emitted in workspace
//! units inside a y-flipped group so the image matches the conventional
//! y-up view of the scene.

use crate::workspace::Workspace;
use crate::Path;

/// Render the workspace as a standalone SVG document.
///
/// Pass the solution to draw the path on top of the scene.
pub fn render_scene(workspace: &Workspace, path: Option<&Path>) -> String {
    let extent = workspace.width.max(workspace.height);
    let margin = 0.05 * extent;
    let stroke = 0.004 * extent;
    let marker = 0.012 * extent;

    let view_x = -margin;
    let view_y = -margin;
    let view_w = workspace.width + 2.0 * margin;
    let view_h = workspace.height + 2.0 * margin;

    let mut svg = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="{view_x} {view_y} {view_w} {view_h}" width="800" height="600">
  <rect x="{view_x}" y="{view_y}" width="{view_w}" height="{view_h}" fill="white"/>
  <g transform="scale(1, -1) translate(0, -{})">
"#,
        2.0 * view_y + view_h
    );

    svg.push_str("    <!-- Workspace -->\n");
    svg.push_str(&format!(
        r#"    <rect x="0" y="0" width="{}" height="{}" fill="none" stroke="black" stroke-width="{stroke}"/>"#,
        workspace.width, workspace.height
    ));
    svg.push('\n');

    svg.push_str("    <!-- Obstacles -->\n");
    for polygon in &workspace.obstacles {
        let points: Vec<String> = polygon
            .vertices()
            .iter()
            .map(|v| format!("{:.3},{:.3}", v.x, v.y))
            .collect();
        svg.push_str(&format!(
            r#"    <polygon points="{}" fill="gray" stroke="black" stroke-width="{stroke}"/>"#,
            points.join(" ")
        ));
        svg.push('\n');
    }

    if let Some(path) = path {
        svg.push_str("    <!-- Path -->\n");
        let points: Vec<String> = path
            .points
            .iter()
            .map(|p| format!("{:.3},{:.3}", p.x, p.y))
            .collect();
        svg.push_str(&format!(
            r#"    <polyline points="{}" fill="none" stroke="red" stroke-width="{}"/>"#,
            points.join(" "),
            2.0 * stroke
        ));
        svg.push('\n');
    }

    svg.push_str("    <!-- Start and goal -->\n");
    svg.push_str(&format!(
        r#"    <circle cx="{:.3}" cy="{:.3}" r="{marker}" fill="green"/>"#,
        workspace.start.x, workspace.start.y
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"    <circle cx="{:.3}" cy="{:.3}" r="{marker}" fill="blue"/>"#,
        workspace.goal.x, workspace.goal.y
    ));
    svg.push('\n');

    svg.push_str("  </g>\n</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Point2D, Polygon};

    fn workspace() -> Workspace {
        Workspace::new(
            Point2D::new(2.0, 2.0),
            Point2D::new(98.0, 98.0),
            100.0,
            100.0,
            vec![Polygon::new(vec![
                Point2D::new(5.0, 5.0),
                Point2D::new(10.0, 5.0),
                Point2D::new(8.0, 12.0),
            ])],
        )
    }

    #[test]
    fn test_scene_without_path() {
        let svg = render_scene(&workspace(), None);
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("<polygon points=\"5.000,5.000 10.000,5.000 8.000,12.000\""));
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(!svg.contains("<polyline"));
    }

    #[test]
    fn test_scene_with_path() {
        let ws = workspace();
        let path = Path {
            points: vec![ws.start, Point2D::new(10.0, 5.0), ws.goal],
            length: 0.0,
            cost: 0.0,
        };
        let svg = render_scene(&ws, Some(&path));
        assert!(svg.contains("<polyline points=\"2.000,2.000 10.000,5.000 98.000,98.000\""));
    }
}
