//! Box Game entry point
//!
//! Loads settings and sprite assets, builds the stage, then drives frames
//! from commands read on stdin (see `platform::script`).

use std::io;
use std::path::Path;

use anyhow::Context;

use box_game::assets::{AssetManifest, AssetRegistry};
use box_game::platform::{FrameDriver, run_script};
use box_game::sim::GameState;
use box_game::Settings;

fn load_assets(settings: &Settings) -> anyhow::Result<AssetRegistry> {
    let builtin = AssetManifest::builtin();
    let manifest_path = Path::new(&builtin.base_path).join(AssetManifest::FILE_NAME);

    let manifest = if manifest_path.exists() {
        AssetManifest::load_from(&manifest_path)
            .with_context(|| format!("loading {}", manifest_path.display()))?
    } else {
        log::info!("No asset manifest at {}, using built-in sizes", manifest_path.display());
        builtin
    };

    Ok(AssetRegistry::from_manifest(&manifest, settings.scaling)?)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Box Game starting...");

    let settings = Settings::load();
    let assets = load_assets(&settings).context("asset loading failed")?;
    let state = GameState::new(settings, &assets).context("stage setup failed")?;
    log::info!("{} ready ({} sprites)", state.settings().title, assets.len());

    let mut driver = FrameDriver::new(state);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_script(&mut driver, stdin.lock(), stdout.lock())?;

    let final_state = driver.state();
    log::info!(
        "Exiting after {} ticks: {} boxes, won = {}",
        final_state.time_ticks,
        final_state.box_count(),
        final_state.game_won
    );
    Ok(())
}
