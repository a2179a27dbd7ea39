//=========================================================================
// Thrust Demo Engine
//
// Main entry point and coordinator for the runtime.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              ├─ attaches the scene (fail fast)
//         ├─ with_channel_capacity() ├─ spawns the core thread
//         ├─ with_window_title()     ├─ runs the platform
//         └─ with_window_size()      └─ blocks until exit
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::scene::{Scene, SceneError, SceneHost};
use crate::core::services::HostWorld;
use crate::core::CoreSystemsOrchestrator;
use crate::platform::Platform;

//=== EngineError =========================================================

/// Fatal errors ending [`Engine::run`].
#[derive(Debug)]
pub enum EngineError {
    /// Window or event loop failure.
    Platform(PlatformError),

    /// The scene's setup hook failed (e.g. a missing asset).
    SceneSetup(SceneError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Platform(e) => write!(f, "Platform error: {}", e),
            Self::SceneSetup(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Platform(e) => Some(e),
            Self::SceneSetup(e) => Some(e),
        }
    }
}

impl From<PlatformError> for EngineError {
    fn from(e: PlatformError) -> Self {
        Self::Platform(e)
    }
}

impl From<SceneError> for EngineError {
    fn from(e: SceneError) -> Self {
        Self::SceneSetup(e)
    }
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Window**: "Thrust Demo", 800x600 logical pixels
///
/// # Examples
///
/// ```no_run
/// use thrust_demo::prelude::*;
///
/// let bundle = AssetBundle::scan("assets").expect("asset directory");
/// let world = HeadlessWorld::new(Vec2::new(800.0, 600.0), bundle);
///
/// EngineBuilder::new()
///     .with_tps(120.0)
///     .with_channel_capacity(256)
///     .build(GameScene::new(SceneConfig::default()), world)
///     .run()
///     .expect("engine run");
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    window_title: String,
    window_size: (u32, u32),
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            window_title: "Thrust Demo".into(),
            window_size: (800, 600),
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be non-zero, got {}x{}", width, height);
        self.window_size = (width, height);
        self
    }

    /// Builds the engine around a scene and its service backend.
    pub fn build<W: HostWorld>(self, scene: impl Scene + 'static, world: W) -> Engine<W> {
        info!("Building engine (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        Engine {
            host: SceneHost::new(Box::new(scene), world),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            window_title: self.window_title,
            window_size: self.window_size,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Runtime owning one scene.
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► SceneHost → Scene hooks → HostWorld
///   │
///   └─► Platform (Event Loop)
///         └─► Window, pointer input
///
/// Communication: bounded channel (PlatformEvent)
/// ```
pub struct Engine<W: HostWorld> {
    host: SceneHost<W>,
    tps: f64,
    channel_capacity: usize,
    window_title: String,
    window_size: (u32, u32),
}

impl<W: HostWorld> Engine<W> {
    /// Starts the runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Attaches the scene on the calling thread
    /// 2. Creates the channel and spawns the core thread
    /// 3. Runs the platform event loop (blocks here)
    /// 4. Joins the core thread
    ///
    /// # Errors
    ///
    /// [`EngineError::SceneSetup`] if attach fails; nothing is spawned in
    /// that case. [`EngineError::Platform`] if the event loop fails.
    pub fn run(mut self) -> Result<(), EngineError> {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Attach the scene ------------------------------------------
        self.host.attach()?;

        //--- 2. Create channel and spawn the core thread ------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        let core_handle = CoreSystemsOrchestrator::new(self.host).spawn_core_thread(rx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, self.window_title, self.window_size);
        let result = platform.run();

        info!("Platform event loop exited");

        //--- 4. Wait for the core thread ----------------------------------
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
        result.map_err(EngineError::from)
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn host(&self) -> &SceneHost<W> {
        &self.host
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Vec2;
    use crate::core::services::{AssetBundle, AssetError};
    use crate::core::world::HeadlessWorld;
    use crate::demo::{GameScene, SceneConfig};

    fn world() -> HeadlessWorld {
        HeadlessWorld::new(Vec2::new(800.0, 600.0), AssetBundle::new("assets"))
    }

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.window_title, "Thrust Demo");
        assert_eq!(builder.window_size, (800, 600));
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        EngineBuilder::new().with_tps(-60.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    #[should_panic(expected = "Window size must be non-zero")]
    fn builder_with_window_size_panics_on_zero() {
        EngineBuilder::new().with_window_size(0, 600);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::new()
            .with_tps(120.0)
            .with_channel_capacity(256)
            .with_window_title("Other")
            .with_window_size(1024, 768)
            .build(GameScene::default(), world());

        assert_eq!(engine.tps, 120.0);
        assert_eq!(engine.channel_capacity, 256);
        assert_eq!(engine.window_title, "Other");
        assert_eq!(engine.window_size, (1024, 768));
        assert!(!engine.host().is_attached());
    }

    //=====================================================================
    // Engine Tests
    //=====================================================================

    #[test]
    fn run_fails_fast_on_missing_assets() {
        let engine = EngineBuilder::new().build(GameScene::new(SceneConfig::default()), world());

        match engine.run() {
            Err(EngineError::SceneSetup(SceneError::Asset(AssetError::NotFound { .. }))) => {}
            other => panic!("Expected scene setup error, got {:?}", other),
        }
    }

    #[test]
    fn engine_error_display() {
        let err = EngineError::Platform(PlatformError::EventLoopExecution("gone".into()));
        assert_eq!(err.to_string(), "Platform error: Event loop error: gone");
    }
}
