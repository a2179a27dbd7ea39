//=========================================================================
// Node Service
//=========================================================================
//
// Scene-graph operations: creating visual nodes, placing them, tagging
// them by name and running the fade-and-remove action.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::PathBuf;

//=== Internal Dependencies ===============================================

use crate::core::math::Vec2;

//=== NodeId ==============================================================

/// Opaque handle to a node owned by the service backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

//=== NodeKind ============================================================

/// What a node displays.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Invisible grouping node.
    Container,

    /// Textured quad. `size` is the unscaled texture size.
    Sprite { texture: PathBuf, size: Vec2 },

    /// Text label.
    Label {
        text: String,
        font: String,
        font_size: f32,
    },

    /// Particle emitter loaded from an emitter resource.
    ///
    /// Created through [`ParticleService::attach_emitter`](super::ParticleService::attach_emitter).
    Emitter { resource: PathBuf },
}

//=== NodeService =========================================================

/// Scene-graph operations.
///
/// Passing `None` as a parent attaches to the scene root. Calls with a
/// handle the backend does not know are precondition violations.
///
/// # Panics
///
/// Implementations panic with the operation name when handed an unknown
/// or already removed handle.
pub trait NodeService {
    /// Size of the scene frame in scene units.
    fn scene_size(&self) -> Vec2;

    /// Creates a node under `parent` and returns its handle.
    fn add_node(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId;

    /// Removes a node and all of its descendants.
    fn remove_node(&mut self, node: NodeId);

    fn set_position(&mut self, node: NodeId, position: Vec2);

    fn set_scale(&mut self, node: NodeId, scale: Vec2);

    fn set_z_position(&mut self, node: NodeId, z: f32);

    /// Tags a node with a name for later lookup.
    fn set_name(&mut self, node: NodeId, name: &str);

    /// Displayed size (content size × scale).
    fn frame_size(&self, node: NodeId) -> Vec2;

    /// Direct children of `parent` tagged `name`, in insertion order.
    fn children_named(&self, parent: NodeId, name: &str) -> Vec<NodeId>;

    /// Fades the node to transparent over `duration` seconds, then removes it.
    fn fade_out_and_remove(&mut self, node: NodeId, duration: f64);
}
