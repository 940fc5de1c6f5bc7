//! # rig_app — demo driver
//!
//! Plays scene scripts on a simulated animatronic rig. The composition root
//! ([`rig::Rig`]) wires simulated hardware into actors once at startup;
//! scenes are then loaded from JSON and run one after another, reusing the
//! same actors.
//!
//! The runtime is single-threaded on purpose — the engine targets a
//! one-execution-context microcontroller, and everything it does is
//! I/O-bound waiting on wall-clock time.

mod rig;
mod script;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rig::Rig;
use script::SceneSpec;

#[derive(Parser, Debug)]
#[command(about = "Play animatronic scene scripts on a simulated rig", long_about = None)]
struct Args {
    /// Scene script files, played one after another.
    scenes: Vec<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let scene_paths = if args.scenes.is_empty() {
        vec![PathBuf::from("scenes/demo.json")]
    } else {
        args.scenes
    };

    let rig = Rig::new()?;

    // Sequential playback: a scene must finish before the next one starts,
    // so the shared actors are never claimed twice.
    for path in &scene_paths {
        let spec = SceneSpec::load(path)?;
        let scene = rig.build_scene(&spec)?;
        scene.run().await?;
    }

    info!(scenes = scene_paths.len(), "all scenes complete");
    Ok(())
}
