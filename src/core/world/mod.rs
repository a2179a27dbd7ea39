//=========================================================================
// Headless World
//=========================================================================
//
// In-memory backend implementing every scene service.
//
// Nothing is drawn, simulated or played: the world records what the
// scene asked for (nodes, bodies, emitter settings, audio requests) and
// progresses timed fade actions. The engine host runs on it by default
// and tests inspect it to observe scene behavior.
//
// Architecture:
// ```text
//   HeadlessWorld
//     ├─ nodes:    BTreeMap<NodeId, Node>      scene graph (id order = creation order)
//     ├─ bodies:   HashMap<NodeId, Body>       physics state per node
//     ├─ emitters: HashMap<NodeId, EmitterState>
//     ├─ fades:    Vec<Fade>                   pending fade-and-remove actions
//     ├─ audio:    AudioLog                    effects + background history
//     └─ assets:   AssetBundle                 name → path resolution
// ```
//
// A handle the world does not know (never issued, or already removed)
// is a caller bug: every service call receiving one panics with the
// operation name and the handle.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

//=== External Crates =====================================================

use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use crate::core::math::Vec2;
use crate::core::services::{
    AssetBundle, AssetError, AssetKind, AssetService, AudioService, BodySpec, Emission,
    HostWorld, NodeId, NodeKind, NodeService, ParticleService, PhysicsService,
};

//=== Records =============================================================

/// A node as stored by the headless world.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub name: Option<String>,
    pub position: Vec2,
    pub scale: Vec2,
    pub z_position: f32,
    pub alpha: f32,
}

impl Node {
    fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            parent,
            name: None,
            position: Vec2::ZERO,
            scale: Vec2::new(1.0, 1.0),
            z_position: 0.0,
            alpha: 1.0,
        }
    }

    fn content_size(&self) -> Vec2 {
        match &self.kind {
            NodeKind::Sprite { size, .. } => *size,
            _ => Vec2::ZERO,
        }
    }
}

/// Physics state recorded for a node.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub spec: BodySpec,
    pub velocity: Vec2,

    /// Sum of every impulse applied so far.
    pub total_impulse: Vec2,

    /// Number of `apply_impulse` calls.
    pub impulse_count: u32,
}

/// Emitter parameters recorded for a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitterState {
    pub birth_rate: f32,
    pub emission: Emission,
}

/// Audio requests in call order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioLog {
    pub effects: Vec<PathBuf>,
    pub background_history: Vec<PathBuf>,
}

impl AudioLog {
    /// The track currently looping, if any.
    pub fn background(&self) -> Option<&Path> {
        self.background_history.last().map(PathBuf::as_path)
    }
}

#[derive(Debug, Clone, Copy)]
struct Fade {
    node: NodeId,
    duration: f64,
    remaining: f64,
}

//=== HeadlessWorld =======================================================

/// Recording implementation of [`SceneServices`](crate::core::services::SceneServices).
pub struct HeadlessWorld {
    size: Vec2,
    assets: AssetBundle,
    next_id: u32,
    nodes: BTreeMap<NodeId, Node>,
    bodies: HashMap<NodeId, Body>,
    emitters: HashMap<NodeId, EmitterState>,
    fades: Vec<Fade>,
    gravity: Vec2,
    boundary: Option<Vec2>,
    audio: AudioLog,
}

impl HeadlessWorld {
    //--- Construction -----------------------------------------------------

    /// Creates an empty world with a scene frame of `size`.
    pub fn new(size: Vec2, assets: AssetBundle) -> Self {
        debug!(target: "world", "Headless world {}x{}", size.x, size.y);
        Self {
            size,
            assets,
            next_id: 0,
            nodes: BTreeMap::new(),
            bodies: HashMap::new(),
            emitters: HashMap::new(),
            fades: Vec::new(),
            gravity: Vec2::ZERO,
            boundary: None,
            audio: AudioLog::default(),
        }
    }

    //--- Inspection -------------------------------------------------------

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn body(&self, id: NodeId) -> Option<&Body> {
        self.bodies.get(&id)
    }

    pub fn emitter(&self, id: NodeId) -> Option<&EmitterState> {
        self.emitters.get(&id)
    }

    pub fn audio(&self) -> &AudioLog {
        &self.audio
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub fn boundary(&self) -> Option<Vec2> {
        self.boundary
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every live node, in creation order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    /// Nodes attached directly to the scene root.
    pub fn root_nodes(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(&id, _)| id)
            .collect()
    }

    /// Every node tagged `name`, anywhere in the graph.
    pub fn nodes_named(&self, name: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.name.as_deref() == Some(name))
            .map(|(&id, _)| id)
            .collect()
    }

    /// Nodes whose kind is an emitter, in creation order.
    pub fn emitter_nodes(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, node)| matches!(node.kind, NodeKind::Emitter { .. }))
            .map(|(&id, _)| id)
            .collect()
    }

    pub fn is_fading(&self, id: NodeId) -> bool {
        self.fades.iter().any(|fade| fade.node == id)
    }

    //--- Internal Helpers -------------------------------------------------

    fn allocate(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }

    fn expect_node(&self, id: NodeId, op: &str) -> &Node {
        match self.nodes.get(&id) {
            Some(node) => node,
            None => panic!("{} on unknown node {:?}", op, id),
        }
    }

    fn node_mut(&mut self, id: NodeId, op: &str) -> &mut Node {
        match self.nodes.get_mut(&id) {
            Some(node) => node,
            None => panic!("{} on unknown node {:?}", op, id),
        }
    }

    fn body_mut(&mut self, id: NodeId, op: &str) -> &mut Body {
        match self.bodies.get_mut(&id) {
            Some(body) => body,
            None => panic!("{} on node {:?} without a body", op, id),
        }
    }

    fn emitter_mut(&mut self, id: NodeId, op: &str) -> &mut EmitterState {
        match self.emitters.get_mut(&id) {
            Some(emitter) => emitter,
            None => panic!("{} on node {:?} that is not an emitter", op, id),
        }
    }

    fn descendants_of(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = vec![root];
        let mut i = 0;
        while i < out.len() {
            let parent = out[i];
            out.extend(
                self.nodes
                    .iter()
                    .filter(|(_, node)| node.parent == Some(parent))
                    .map(|(&id, _)| id),
            );
            i += 1;
        }
        out
    }
}

//=== NodeService =========================================================

impl NodeService for HeadlessWorld {
    fn scene_size(&self) -> Vec2 {
        self.size
    }

    fn add_node(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        if let Some(parent) = parent {
            self.expect_node(parent, "add_node");
        }

        let id = self.allocate(Node::new(kind, parent));
        trace!(target: "world", "Added node {:?} under {:?}", id, parent);
        id
    }

    fn remove_node(&mut self, node: NodeId) {
        self.expect_node(node, "remove_node");

        for id in self.descendants_of(node) {
            self.nodes.remove(&id);
            self.bodies.remove(&id);
            self.emitters.remove(&id);
            self.fades.retain(|fade| fade.node != id);
        }
        trace!(target: "world", "Removed node {:?}", node);
    }

    fn set_position(&mut self, node: NodeId, position: Vec2) {
        self.node_mut(node, "set_position").position = position;
    }

    fn set_scale(&mut self, node: NodeId, scale: Vec2) {
        self.node_mut(node, "set_scale").scale = scale;
    }

    fn set_z_position(&mut self, node: NodeId, z: f32) {
        self.node_mut(node, "set_z_position").z_position = z;
    }

    fn set_name(&mut self, node: NodeId, name: &str) {
        self.node_mut(node, "set_name").name = Some(name.to_owned());
    }

    fn frame_size(&self, node: NodeId) -> Vec2 {
        let n = self.expect_node(node, "frame_size");
        n.content_size().scaled(n.scale)
    }

    fn children_named(&self, parent: NodeId, name: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, n)| n.parent == Some(parent) && n.name.as_deref() == Some(name))
            .map(|(&id, _)| id)
            .collect()
    }

    fn fade_out_and_remove(&mut self, node: NodeId, duration: f64) {
        self.expect_node(node, "fade_out_and_remove");
        if self.is_fading(node) {
            return;
        }

        self.fades.push(Fade {
            node,
            duration,
            remaining: duration,
        });
    }
}

//=== PhysicsService ======================================================

impl PhysicsService for HeadlessWorld {
    fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    fn set_boundary(&mut self, size: Vec2) {
        self.boundary = Some(size);
    }

    fn attach_body(&mut self, node: NodeId, body: BodySpec) {
        self.expect_node(node, "attach_body");

        self.bodies.insert(
            node,
            Body {
                spec: body,
                velocity: Vec2::ZERO,
                total_impulse: Vec2::ZERO,
                impulse_count: 0,
            },
        );
    }

    fn set_dynamic(&mut self, node: NodeId, dynamic: bool) {
        self.body_mut(node, "set_dynamic").spec.dynamic = dynamic;
    }

    fn set_velocity(&mut self, node: NodeId, velocity: Vec2) {
        self.body_mut(node, "set_velocity").velocity = velocity;
    }

    fn apply_impulse(&mut self, node: NodeId, impulse: Vec2) {
        let body = self.body_mut(node, "apply_impulse");
        body.total_impulse = body.total_impulse + impulse;
        body.impulse_count += 1;
    }
}

//=== ParticleService =====================================================

impl ParticleService for HeadlessWorld {
    fn attach_emitter(&mut self, parent: NodeId, resource: &Path) -> NodeId {
        let id = self.add_node(
            Some(parent),
            NodeKind::Emitter {
                resource: resource.to_path_buf(),
            },
        );
        self.emitters.insert(
            id,
            EmitterState {
                birth_rate: 0.0,
                emission: Emission::Continuous,
            },
        );
        debug!(target: "world", "Emitter {} attached as {:?}", resource.display(), id);
        id
    }

    fn set_birth_rate(&mut self, emitter: NodeId, rate: f32) {
        self.emitter_mut(emitter, "set_birth_rate").birth_rate = rate;
    }

    fn set_emission(&mut self, emitter: NodeId, emission: Emission) {
        self.emitter_mut(emitter, "set_emission").emission = emission;
    }
}

//=== AudioService ========================================================

impl AudioService for HeadlessWorld {
    fn play_effect(&mut self, sound: &Path) {
        trace!(target: "audio", "Effect {}", sound.display());
        self.audio.effects.push(sound.to_path_buf());
    }

    fn play_background(&mut self, track: &Path) {
        info!(target: "audio", "Looping {}", track.display());
        self.audio.background_history.push(track.to_path_buf());
    }
}

//=== AssetService ========================================================

impl AssetService for HeadlessWorld {
    fn resolve(&self, name: &str, kind: AssetKind) -> Result<PathBuf, AssetError> {
        self.assets.resolve(name, kind)
    }
}

//=== HostWorld ===========================================================

impl HostWorld for HeadlessWorld {
    fn advance(&mut self, dt: f64) {
        if self.fades.is_empty() {
            return;
        }

        let mut finished = Vec::new();
        for fade in &mut self.fades {
            fade.remaining -= dt;
            if fade.remaining <= 0.0 {
                finished.push(fade.node);
            } else if let Some(node) = self.nodes.get_mut(&fade.node) {
                node.alpha = (fade.remaining / fade.duration) as f32;
            }
        }

        for id in finished {
            // An ancestor finishing in the same tick may have taken it already.
            if self.nodes.contains_key(&id) {
                debug!(target: "world", "Fade finished, removing {:?}", id);
                self.remove_node(id);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
