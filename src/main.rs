//=========================================================================
// Thrust Demo Binary
//
// Scans the asset directory, builds the demo scene and runs the engine.
// The asset root defaults to `./assets` and can be overridden with
// `THRUST_DEMO_ASSETS`. Log filtering follows `RUST_LOG` (default info).
//
//=========================================================================

use std::process;

use env_logger::Env;
use log::{error, info};

use thrust_demo::prelude::*;

const ASSETS_ENV: &str = "THRUST_DEMO_ASSETS";
const DEFAULT_ASSETS: &str = "assets";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let root = std::env::var(ASSETS_ENV).unwrap_or_else(|_| DEFAULT_ASSETS.to_string());
    let bundle = match AssetBundle::scan(&root) {
        Ok(bundle) => bundle,
        Err(e) => {
            error!("Cannot read asset directory '{}': {}", root, e);
            process::exit(1);
        }
    };
    info!("Loaded {} assets from '{}'", bundle.len(), root);

    let world = HeadlessWorld::new(Vec2::new(800.0, 600.0), bundle);
    let scene = GameScene::new(SceneConfig::default());

    if let Err(e) = EngineBuilder::new().build(scene, world).run() {
        error!("{}", e);
        process::exit(1);
    }
}
