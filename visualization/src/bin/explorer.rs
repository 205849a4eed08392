//! Terminal driver for the exploration engine
//!
//! Runs the engine on a fixed frame timer, feeding a headless scene, and
//! prints where the helicopter ended up.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::{info, warn};
use serde::Serialize;
use tokio::time::MissedTickBehavior;

use rotor_core::{EngineSnapshot, ExplorationEngine, ExplorerConfig, TickOutcome};
use rotor_visualization::{SceneModel, SceneSummary};

#[derive(Debug, Parser)]
#[command(name = "rotor-explorer", version, about = "Fly a helicopter over a synthetic loss landscape")]
struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frames to run in stepping mode
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Milliseconds per frame
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Strategy to fly with
    #[arg(short, long)]
    strategy: Option<String>,

    /// Run this many batched steps instead of stepping
    #[arg(long)]
    fast_forward: Option<usize>,

    /// Compute the density heatmap
    #[arg(long)]
    heatmap: bool,

    /// RNG seed for a reproducible flight
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final state as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    snapshot: EngineSnapshot,
    scene: SceneSummary,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ExplorerConfig::load(path)?,
        None => ExplorerConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.heatmap {
        config.show_heatmap = true;
    }

    let scene = SceneModel::new(config.history_log_capacity);
    let mut engine = ExplorationEngine::new(config, scene)?;
    if let Some(strategy) = &args.strategy {
        engine.select_strategy(strategy)?;
    }

    match args.fast_forward {
        Some(count) => engine.fast_forward(count)?,
        None => engine.start(),
    }

    let mut interval = tokio::time::interval(Duration::from_millis(args.frame_ms.max(1)));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let flight = async {
        let mut frame = 0;
        loop {
            interval.tick().await;
            match engine.tick() {
                TickOutcome::FastForwardComplete { .. } | TickOutcome::Idle => break,
                TickOutcome::Arrived { sample, .. } => {
                    info!("{} sampled loss {:.3}", sample.strategy, sample.loss)
                }
                _ => {}
            }

            frame += 1;
            if args.fast_forward.is_none() && frame >= args.frames {
                break;
            }
        }
    };

    tokio::select! {
        _ = flight => {}
        _ = tokio::signal::ctrl_c() => warn!("Interrupted, stopping flight"),
    }
    engine.stop();

    let report = Report {
        snapshot: engine.snapshot(),
        scene: engine.renderer().summary(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", engine.renderer().readout());
    println!(
        "{} samples, {} segments ({} improving)",
        report.snapshot.samples, report.scene.segments, report.scene.improving_segments
    );
    if let Some(best) = &report.snapshot.best {
        println!("best: {} at ({:.2}, {:.2}) loss {:.3}", best.strategy, best.x, best.z, best.loss);
    }
    for line in &report.scene.log {
        println!("  {}", line);
    }

    Ok(())
}
