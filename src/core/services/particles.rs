//=========================================================================
// Particle Service
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::Path;

//=== Internal Dependencies ===============================================

use super::NodeId;

//=== Emission ============================================================

/// How many particles an emitter produces before stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emission {
    /// Emit for as long as the emitter exists.
    #[default]
    Continuous,

    /// Emit this many more particles, then stop.
    Burst(u32),
}

impl Emission {
    /// Engine-side particle budget, where `0` means "no limit".
    pub fn num_particles_to_emit(self) -> u32 {
        match self {
            Self::Continuous => 0,
            Self::Burst(count) => count,
        }
    }
}

//=== ParticleService =====================================================

/// Emitter loading and control. Playback is the backend's.
pub trait ParticleService {
    /// Loads the emitter resource at `resource` and attaches it as a child
    /// of `parent`. The returned handle is a regular node.
    fn attach_emitter(&mut self, parent: NodeId, resource: &Path) -> NodeId;

    /// Particles born per second.
    fn set_birth_rate(&mut self, emitter: NodeId, rate: f32);

    fn set_emission(&mut self, emitter: NodeId, emission: Emission);
}

//=========================================================================
// Unit Tests
//=========================================================================
