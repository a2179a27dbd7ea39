//=========================================================================
// Scene System
//=========================================================================
//
// Defines the hook set a scene implements and the host that drives it.
//
// Architecture:
//   SceneHost<W>
//     ├─ scene: Box<dyn Scene>
//     ├─ world: W (HostWorld)
//     └─ attached: bool
//
// Flow:
//   attach() → Scene::on_attach()            (once)
//   dispatch(InputEvent) → Scene::on_pointer_*()
//   frame(t) → Scene::on_frame() → HostWorld::advance()
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use crate::core::math::Vec2;
use crate::core::services::{AssetError, SceneServices};

//=== Module Declarations =================================================

mod host;

//=== Public API ==========================================================

pub use host::SceneHost;

//=== Scene Trait =========================================================

/// Defines scene behavior as engine callbacks.
///
/// The host invokes every hook on one thread, strictly serialized, and
/// passes the service backend by exclusive reference for the duration of
/// the call. Scenes own their state; nothing is shared.
///
/// # Minimal Implementation
///
/// `on_attach`, `on_frame`, `on_pointer_down` and `on_pointer_up` are
/// required. `on_pointer_move` defaults to doing nothing:
///
/// ```rust
/// # use thrust_demo::prelude::*;
/// struct Idle;
///
/// impl Scene for Idle {
///     fn on_attach(&mut self, _services: &mut dyn SceneServices) -> Result<(), SceneError> {
///         Ok(())
///     }
///     fn on_frame(&mut self, _current_time: f64, _services: &mut dyn SceneServices) {}
///     fn on_pointer_down(&mut self, _location: Vec2, _services: &mut dyn SceneServices) {}
///     fn on_pointer_up(&mut self, _location: Vec2, _services: &mut dyn SceneServices) {}
/// }
/// ```
pub trait Scene: Send {
    /// Called once when the scene is attached to the host.
    ///
    /// Builds the scene's nodes and resolves every resource it will need.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError`] if setup cannot complete. The host treats
    /// this as fatal.
    fn on_attach(&mut self, services: &mut dyn SceneServices) -> Result<(), SceneError>;

    /// Called once per host tick with a monotonic time in seconds.
    fn on_frame(&mut self, current_time: f64, services: &mut dyn SceneServices);

    /// Touch began / primary button pressed.
    fn on_pointer_down(&mut self, location: Vec2, services: &mut dyn SceneServices);

    /// Pointer moved while the scene is attached.
    fn on_pointer_move(&mut self, _location: Vec2, _services: &mut dyn SceneServices) {}

    /// Touch ended / primary button released.
    fn on_pointer_up(&mut self, location: Vec2, services: &mut dyn SceneServices);
}

//=== SceneError ==========================================================

/// Scene setup failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// A required resource could not be resolved.
    Asset(AssetError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asset(e) => write!(f, "Scene setup failed: {}", e),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Asset(e) => Some(e),
        }
    }
}

impl From<AssetError> for SceneError {
    fn from(e: AssetError) -> Self {
        Self::Asset(e)
    }
}
