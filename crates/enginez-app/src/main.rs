use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use enginez::{AssetSource, EngineError, GameConfig, Result, SheetManifest, World};
use enginez_app::{Autopilot, BuiltinSheets, GameRunner, LogSink};

#[derive(Parser)]
#[command(name = "enginez", about = "Headless EngineZ world loop")]
struct Cli {
    /// Game config JSON (defaults for any field it leaves out)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Sprite sheet manifest JSON
    #[arg(long)]
    manifest: Option<PathBuf>,
    /// Directory the manifest's sheet paths are relative to
    #[arg(long)]
    assets: Option<PathBuf>,
    /// Stop after this many ticks (default: run until the autopilot quits)
    #[arg(long)]
    ticks: Option<u64>,
    /// Overrides the config's RNG seed
    #[arg(long)]
    seed: Option<u64>,
    /// Pace ticks against the wall clock instead of running flat out
    #[arg(long)]
    realtime: bool,
    /// Tick at which the autopilot raises Quit
    #[arg(long, default_value_t = 3600)]
    quit_at: u64,
}

fn read_json(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| EngineError::resource_load(path, e))
}

#[cfg(feature = "image-loader")]
fn image_assets(root: PathBuf) -> Result<Box<dyn AssetSource>> {
    Ok(Box::new(enginez::ImageAssets::new(root)))
}

#[cfg(not(feature = "image-loader"))]
fn image_assets(root: PathBuf) -> Result<Box<dyn AssetSource>> {
    Err(EngineError::resource_load(root, "built without image-loader"))
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_json(&read_json(path)?)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    let manifest = match &cli.manifest {
        Some(path) => SheetManifest::from_json(&read_json(path)?)?,
        None => SheetManifest::default(),
    };
    let assets: Box<dyn AssetSource> = match cli.assets {
        Some(root) => {
            log::info!("loading sheets from {}", root.display());
            image_assets(root)?
        }
        None => Box::new(BuiltinSheets::new()),
    };

    let pilot = Autopilot::new(config.seed).with_quit_at(cli.quit_at);
    let world = World::new(config, manifest, assets)?;
    let mut runner = GameRunner::new(world, pilot, LogSink::default());
    if let Some(ticks) = cli.ticks {
        runner = runner.with_max_ticks(ticks);
    }

    let summary = if cli.realtime {
        runner.run_realtime()?
    } else {
        runner.run()?
    };
    log::info!(
        "done after {} ticks: {} spawned, {} despawned, {} collisions",
        summary.ticks,
        summary.spawned,
        summary.despawned,
        summary.collisions
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            // -1 as seen by the shell
            ExitCode::from(255)
        }
    }
}
