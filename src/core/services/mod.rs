//=========================================================================
// Scene Services
//=========================================================================
//
// Outbound interfaces a scene calls into. Each concern (scene graph,
// physics, particles, audio, assets) is its own trait so hosts can back
// them with different engines; `SceneServices` bundles all five.
//
// Architecture:
// ```text
//   Scene ──► &mut dyn SceneServices
//               ├─ NodeService      add/remove/tag nodes, fades
//               ├─ PhysicsService   bodies, velocity, impulses, gravity
//               ├─ ParticleService  emitters, birth rate, emission mode
//               ├─ AudioService     one-shot effects, looping music
//               └─ AssetService     name → path resolution
// ```
//
//=========================================================================

//=== Module Declarations =================================================

mod assets;
mod audio;
mod nodes;
mod particles;
mod physics;

//=== Public API ==========================================================

pub use assets::{AssetBundle, AssetError, AssetKind, AssetService};
pub use audio::AudioService;
pub use nodes::{NodeId, NodeKind, NodeService};
pub use particles::{Emission, ParticleService};
pub use physics::{BodySpec, PhysicsService};

//=== Bundles =============================================================

/// Every service a scene may call, as one object-safe trait.
///
/// Implemented automatically for any type implementing the five service
/// traits.
pub trait SceneServices:
    NodeService + PhysicsService + ParticleService + AudioService + AssetService
{
}

impl<T> SceneServices for T where
    T: NodeService + PhysicsService + ParticleService + AudioService + AssetService
{
}

/// A service backend the engine host can own and drive.
///
/// The host calls [`HostWorld::advance`] once per tick after the scene's
/// frame hook, letting the backend progress timed actions (fades).
pub trait HostWorld: SceneServices + Send + 'static {
    /// Advances timed actions by `dt` seconds.
    fn advance(&mut self, dt: f64);
}
