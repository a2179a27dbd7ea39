//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use thrust_demo::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder, EngineError};
pub use crate::core::PlatformError;

// Scene system
pub use crate::core::scene::{Scene, SceneError, SceneHost};

// Services
pub use crate::core::services::{
    AssetBundle, AssetError, AssetKind, AssetService, AudioService, BodySpec, Emission,
    HostWorld, NodeId, NodeKind, NodeService, ParticleService, PhysicsService, SceneServices,
};

// Geometry and input
pub use crate::core::input::InputEvent;
pub use crate::core::math::Vec2;

// Headless backend
pub use crate::core::world::HeadlessWorld;

// Demo scene
pub use crate::demo::{GameScene, GameState, SceneConfig};
