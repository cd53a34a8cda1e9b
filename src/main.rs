use clap::Parser;
use env_logger::Env;
use log::info;

use fuchsian_path::animation::{FrameSequence, SvgAnimator, TrajectoryAnimator};
use fuchsian_path::config::DEFAULT_OUTPUT;
use fuchsian_path::group::FuchsianGroup;
use fuchsian_path::orbit::{GammaPath, OrbitEvaluator};
use fuchsian_path::projection::project_orbit;
use fuchsian_path::Result;

#[derive(Parser)]
#[command(name = "fuchsian-path")]
#[command(about = "Animate a gamma path on the Poincaré disk")]
#[command(version)]
struct Cli {
    /// JSON document holding the path under "gamma" (or "private_key")
    input: Option<String>,

    /// Output artifact path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting fuchsian-path v{}", fuchsian_path::VERSION);

    let gamma = match &cli.input {
        Some(path) => {
            info!("Loading gamma path from {}", path);
            GammaPath::from_json_file(path)?
        }
        None => {
            info!("No input document given, using the built-in default path");
            GammaPath::default()
        }
    };

    let group = FuchsianGroup::genus_5()?;
    let evaluator = OrbitEvaluator::new(&group);

    let orbit = evaluator.evaluate(&gamma)?;
    info!(
        "Evaluated {} orbit points for a path of length {}",
        orbit.len(),
        gamma.len()
    );

    let disk_points = project_orbit(&orbit);
    let frames = FrameSequence::new(disk_points);

    let mut animator = SvgAnimator::new(&cli.output);
    animator.animate(&frames)?;

    println!("Animation saved to {}", cli.output);

    Ok(())
}
