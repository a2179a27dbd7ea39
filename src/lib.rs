//=========================================================================
// Thrust Demo: Library Root
//
// A small callback-driven 2D scene host plus the demo scene it runs.
//
// Responsibilities:
// - Expose the engine facade (`Engine`, `EngineBuilder`)
// - Expose the scene contract and service traits (`core`)
// - Ship the tutorial-to-play thrust scene (`demo`)
// - Keep OS integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use thrust_demo::prelude::*;
//
// let bundle = AssetBundle::scan("assets")?;
// let world = HeadlessWorld::new(Vec2::new(800.0, 600.0), bundle);
// EngineBuilder::new()
//     .build(GameScene::new(SceneConfig::default()), world)
//     .run()?;
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the scene contract, service traits, the headless service
// backend and the core-thread orchestrator.
//
// `demo` is the thrust scene built on top of it.
//
pub mod core;
pub mod demo;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the Winit integration and is not part of the
// public API surface.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineError};
