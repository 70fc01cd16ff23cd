//! marga-plan CLI: plan a collision-free path for a YAML scene.
//!
//! Loads a scene file, picks the cost strategy from the scene's kinematic
//! parameters, plans, and writes the waypoints as a JSON list. With
//! `--plot`, also renders SVG views of the scene and the solution.

use clap::Parser;
use tracing::{error, info};

use marga_plan::svg::render_scene;
use marga_plan::{plan, CostStrategy, Path, Result, SceneConfig};

/// Find the shortest path that avoids obstacles
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input YAML scene file
    scene: String,

    /// Path to the output solution file
    #[arg(default_value = "solution.txt")]
    output: String,

    /// Render scene.svg and solution.svg
    #[arg(long)]
    plot: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marga_plan=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let scene = SceneConfig::load(std::path::Path::new(&args.scene))?;
    let workspace = scene.to_workspace();

    let strategy = CostStrategy::for_workspace(&workspace);
    info!("planning with the {strategy:?} strategy");

    let path = plan(&workspace, strategy)?;
    info!(
        "found a path with {} waypoints, length {:.3}, cost {:.3}",
        path.points.len(),
        path.length,
        path.cost
    );

    write_solution(&path, &args.output)?;
    info!("solution written to {}", args.output);

    if args.plot {
        std::fs::write("scene.svg", render_scene(&workspace, None))?;
        std::fs::write("solution.svg", render_scene(&workspace, Some(&path)))?;
        info!("rendered scene.svg and solution.svg");
    }

    Ok(())
}

/// Write the waypoints as a JSON list of [x, y] pairs.
fn write_solution(path: &Path, output: &str) -> Result<()> {
    let waypoints: Vec<[f32; 2]> = path.points.iter().map(|p| [p.x, p.y]).collect();
    let json = serde_json::to_string(&waypoints).map_err(std::io::Error::other)?;
    std::fs::write(output, json)?;
    Ok(())
}
