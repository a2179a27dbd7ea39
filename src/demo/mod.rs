//=========================================================================
// Thrust Demo Scene
//=========================================================================
//
// The game template's single scene: a tutorial prompt that gives way to
// a "play" state on first input, after which holding the pointer fires
// the hero's thrusters.
//
// State machine:
// ```text
//   Tutorial ──pointer down──► Play (terminal)
//                                ├─ pointer down → thrust held
//                                └─ pointer up   → thrust released
// ```
//
// Setup order (later steps reference nodes made by earlier ones):
//   world → background → playlist → ground → hero → jet → tutorial → intro
//
// Every resource is resolved before the first node is created, so a
// missing asset fails `on_attach` with nothing half-built.
//
//=========================================================================

//=== Module Declarations =================================================

mod config;
mod layers;
mod playlist;
mod state;

//=== Public API ==========================================================

pub use config::{LabelConfig, SceneConfig};
pub use layers::{Layer, PhysicsCategory};
pub use playlist::BackgroundPlaylist;
pub use state::GameState;

//=== Standard Library Imports ============================================

use std::path::PathBuf;

//=== External Crates =====================================================

use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

//=== Internal Dependencies ===============================================

use crate::core::clock::FrameClock;
use crate::core::math::Vec2;
use crate::core::scene::{Scene, SceneError};
use crate::core::services::{AssetKind, BodySpec, Emission, NodeId, NodeKind, SceneServices};

//=== Constants ===========================================================

/// Name shared by every tutorial node; used to find them for removal.
pub const TUTORIAL_TAG: &str = "Tutorial";

const BACKGROUND_TEXTURE: &str = "Background";
const GROUND_TEXTURE: &str = "Ground2";
const HERO_TEXTURE: &str = "Spaceship";
const JET_EMITTER: &str = "JetParticle";
const STAR_EMITTER: &str = "StarParticle";

//=== Resolved Resources ==================================================

struct SceneAssets {
    background: PathBuf,
    ground: PathBuf,
    hero: PathBuf,
    jet_particle: PathBuf,
    star_particle: PathBuf,
    start_sound: PathBuf,
    intro_track: PathBuf,
    background_tracks: Vec<PathBuf>,
}

impl SceneAssets {
    fn resolve(config: &SceneConfig, assets: &dyn SceneServices) -> Result<Self, SceneError> {
        let background_tracks = config
            .background_tracks
            .iter()
            .map(|name| assets.resolve(name, AssetKind::Audio))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            background: assets.resolve(BACKGROUND_TEXTURE, AssetKind::Texture)?,
            ground: assets.resolve(GROUND_TEXTURE, AssetKind::Texture)?,
            hero: assets.resolve(HERO_TEXTURE, AssetKind::Texture)?,
            jet_particle: assets.resolve(JET_EMITTER, AssetKind::Emitter)?,
            star_particle: assets.resolve(STAR_EMITTER, AssetKind::Emitter)?,
            start_sound: assets.resolve(&config.start_sound, AssetKind::Audio)?,
            intro_track: assets.resolve(&config.intro_track, AssetKind::Audio)?,
            background_tracks,
        })
    }
}

/// Handles created during setup.
#[derive(Debug, Clone, Copy)]
struct SceneNodes {
    world: NodeId,
    hero: NodeId,
    jet: NodeId,
}

//=== GameScene ===========================================================

/// Scene controller for the thrust demo.
pub struct GameScene {
    config: SceneConfig,
    state: GameState,
    thrust_held: bool,
    clock: FrameClock,
    rng: StdRng,
    playlist: BackgroundPlaylist<PathBuf>,
    nodes: Option<SceneNodes>,
    start_sound: PathBuf,
    star_particle: PathBuf,
    star: Option<NodeId>,
}

impl GameScene {
    //--- Construction -----------------------------------------------------

    pub fn new(config: SceneConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            state: GameState::Tutorial,
            thrust_held: false,
            clock: FrameClock::new(),
            rng,
            playlist: BackgroundPlaylist::default(),
            nodes: None,
            start_sound: PathBuf::new(),
            star_particle: PathBuf::new(),
            star: None,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn thrust_held(&self) -> bool {
        self.thrust_held
    }

    /// Delta time computed by the most recent frame.
    pub fn dt(&self) -> f64 {
        self.clock.dt()
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn playlist(&self) -> &BackgroundPlaylist<PathBuf> {
        &self.playlist
    }

    pub fn world_node(&self) -> Option<NodeId> {
        self.nodes.map(|n| n.world)
    }

    pub fn hero(&self) -> Option<NodeId> {
        self.nodes.map(|n| n.hero)
    }

    pub fn jet(&self) -> Option<NodeId> {
        self.nodes.map(|n| n.jet)
    }

    /// Star-field emitter, present once play has started.
    pub fn star(&self) -> Option<NodeId> {
        self.star
    }

    //--- Setup ------------------------------------------------------------

    fn setup_world(&self, services: &mut dyn SceneServices, size: Vec2) -> NodeId {
        services.set_boundary(size);
        services.set_gravity(self.config.gravity);
        services.add_node(None, NodeKind::Container)
    }

    fn setup_background(&self, services: &mut dyn SceneServices, world: NodeId, texture: PathBuf, size: Vec2) {
        let background = services.add_node(
            Some(world),
            NodeKind::Sprite {
                texture,
                size: self.config.background_texture_size,
            },
        );
        services.set_position(background, size.center());
        services.set_z_position(background, Layer::Background.z());
    }

    fn setup_background_music(&mut self, tracks: Vec<PathBuf>) {
        debug!(target: "scene", "Playlist configured with {} tracks", tracks.len());
        self.playlist = BackgroundPlaylist::new(tracks);
    }

    fn setup_ground(&self, services: &mut dyn SceneServices, world: NodeId, texture: PathBuf, size: Vec2) {
        let ground = services.add_node(
            Some(world),
            NodeKind::Sprite {
                texture,
                size: self.config.ground_texture_size,
            },
        );
        services.set_z_position(ground, Layer::Ground.z());

        let frame = services.frame_size(ground);
        services.set_position(ground, Vec2::new(size.x / 2.0, frame.y / 4.0));

        services.attach_body(
            ground,
            BodySpec::rectangle(frame)
                .dynamic(false)
                .category(PhysicsCategory::GROUND)
                .collides_with(PhysicsCategory::HERO),
        );
    }

    fn setup_hero(&self, services: &mut dyn SceneServices, world: NodeId, texture: PathBuf, size: Vec2) -> NodeId {
        let hero = services.add_node(
            Some(world),
            NodeKind::Sprite {
                texture,
                size: self.config.hero_texture_size,
            },
        );
        let scale = self.config.hero_scale;
        services.set_scale(hero, Vec2::new(scale, scale));
        services.set_z_position(hero, Layer::Hero.z());
        services.set_position(hero, Vec2::new(size.x / 2.0, size.y * 0.4));

        // Frozen until play starts.
        let frame = services.frame_size(hero);
        services.attach_body(
            hero,
            BodySpec::rectangle(frame)
                .dynamic(false)
                .category(PhysicsCategory::HERO)
                .collides_with(PhysicsCategory::GROUND),
        );
        hero
    }

    fn setup_jet_particle(&self, services: &mut dyn SceneServices, hero: NodeId, resource: PathBuf) -> NodeId {
        let jet = services.attach_emitter(hero, &resource);
        let hero_frame = services.frame_size(hero);
        services.set_position(jet, Vec2::new(0.0, -hero_frame.y));
        services.set_z_position(jet, Layer::Hero.z());
        services.set_birth_rate(jet, self.config.jet_idle_birth_rate);
        jet
    }

    fn setup_tutorial(&self, services: &mut dyn SceneServices, world: NodeId, size: Vec2) {
        for label in [&self.config.title, &self.config.prompt] {
            let node = services.add_node(
                Some(world),
                NodeKind::Label {
                    text: label.text.clone(),
                    font: self.config.label_font.clone(),
                    font_size: label.font_size,
                },
            );
            services.set_z_position(node, Layer::Ui.z());
            services.set_position(node, Vec2::new(size.x / 2.0, size.y * label.height_fraction));
            services.set_name(node, TUTORIAL_TAG);
        }
    }

    fn setup_star_particle(&mut self, services: &mut dyn SceneServices, world: NodeId) {
        let center = services.scene_size().center();
        let star = services.attach_emitter(world, &self.star_particle);
        services.set_position(star, center);
        services.set_z_position(star, Layer::Ground.z());
        self.star = Some(star);
    }

    //--- Gameplay ---------------------------------------------------------

    fn fire_thrusters(&self, services: &mut dyn SceneServices, nodes: SceneNodes) {
        services.set_velocity(nodes.hero, Vec2::up(self.config.base_velocity()));
        services.apply_impulse(nodes.hero, Vec2::up(self.config.impulse));
        services.set_emission(nodes.jet, Emission::Continuous);
    }

    fn release_thrusters(&self, services: &mut dyn SceneServices, nodes: SceneNodes) {
        services.set_emission(nodes.jet, Emission::Burst(self.config.jet_tail_particles));
    }

    fn update_hero(&self, services: &mut dyn SceneServices) {
        let Some(nodes) = self.nodes else {
            return;
        };

        if self.thrust_held {
            self.fire_thrusters(services, nodes);
        } else {
            self.release_thrusters(services, nodes);
        }
    }

    //--- Music ------------------------------------------------------------

    fn play_random_background_music(&mut self, services: &mut dyn SceneServices) {
        let track = self.playlist.pick(&mut self.rng);
        services.play_background(track);
        info!(target: "scene", "Background music: {}", track.display());
    }

    //--- State Transitions ------------------------------------------------

    fn switch_to_play(&mut self, services: &mut dyn SceneServices) {
        let Some(nodes) = self.nodes else {
            warn!(target: "scene", "Pointer down before setup, ignoring");
            return;
        };

        self.state = GameState::Play;
        info!(target: "scene", "Tutorial -> Play");

        services.play_effect(&self.start_sound);
        if self.config.music_enabled {
            self.play_random_background_music(services);
        }

        services.set_dynamic(nodes.hero, true);

        self.setup_star_particle(services, nodes.world);
        services.set_birth_rate(nodes.jet, self.config.jet_thrust_birth_rate);

        for node in services.children_named(nodes.world, TUTORIAL_TAG) {
            services.fade_out_and_remove(node, self.config.tutorial_fade);
        }
    }
}

impl Default for GameScene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

//=== Scene Hooks =========================================================

impl Scene for GameScene {
    fn on_attach(&mut self, services: &mut dyn SceneServices) -> Result<(), SceneError> {
        if self.nodes.is_some() {
            warn!(target: "scene", "GameScene already set up");
            return Ok(());
        }

        let assets = SceneAssets::resolve(&self.config, services)?;
        let size = services.scene_size();

        let world = self.setup_world(services, size);
        self.setup_background(services, world, assets.background, size);
        self.setup_background_music(assets.background_tracks);
        self.setup_ground(services, world, assets.ground, size);
        let hero = self.setup_hero(services, world, assets.hero, size);
        let jet = self.setup_jet_particle(services, hero, assets.jet_particle);
        self.setup_tutorial(services, world, size);

        self.start_sound = assets.start_sound;
        self.star_particle = assets.star_particle;
        self.nodes = Some(SceneNodes { world, hero, jet });

        if self.config.music_enabled {
            services.play_background(&assets.intro_track);
        }

        info!(target: "scene", "Scene ready ({}x{})", size.x, size.y);
        Ok(())
    }

    fn on_frame(&mut self, current_time: f64, services: &mut dyn SceneServices) {
        let dt = self.clock.tick(current_time);
        trace!(target: "scene", "frame t={:.4} dt={:.4}", current_time, dt);

        match self.state {
            GameState::Tutorial => {}
            GameState::Play => self.update_hero(services),
        }
    }

    fn on_pointer_down(&mut self, _location: Vec2, services: &mut dyn SceneServices) {
        match self.state {
            GameState::Tutorial => self.switch_to_play(services),
            GameState::Play => self.thrust_held = true,
        }
    }

    fn on_pointer_up(&mut self, _location: Vec2, _services: &mut dyn SceneServices) {
        self.thrust_held = false;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use crate::core::services::{AssetBundle, AssetError, HostWorld};
    use crate::core::world::HeadlessWorld;

    //--- Test Helpers -----------------------------------------------------

    const TRACKS: [&str; 3] = [
        "SillyGameMusic_120bpm.mp3",
        "Serious-Game-Music.mp3",
        "UplifitingGameMusic.mp3",
    ];

    fn bundle() -> AssetBundle {
        let mut bundle = AssetBundle::new("assets")
            .with_entry("Background.png")
            .with_entry("Ground2.png")
            .with_entry("Spaceship.png")
            .with_entry("JetParticle.sks")
            .with_entry("StarParticle.sks")
            .with_entry("sfx_point.wav")
            .with_entry("PositiveGameMusic.mp3");
        for track in TRACKS {
            bundle = bundle.with_entry(track);
        }
        bundle
    }

    fn world() -> HeadlessWorld {
        HeadlessWorld::new(Vec2::new(800.0, 600.0), bundle())
    }

    fn attached(config: SceneConfig) -> (GameScene, HeadlessWorld) {
        let mut world = world();
        let mut scene = GameScene::new(config.with_seed(11));
        scene.on_attach(&mut world).unwrap();
        (scene, world)
    }

    fn down(scene: &mut GameScene, world: &mut HeadlessWorld) {
        scene.on_pointer_down(Vec2::new(400.0, 300.0), world);
    }

    fn up(scene: &mut GameScene, world: &mut HeadlessWorld) {
        scene.on_pointer_up(Vec2::new(400.0, 300.0), world);
    }

    fn track_paths() -> Vec<PathBuf> {
        TRACKS.iter().map(|t| Path::new("assets").join(t)).collect()
    }

    //=====================================================================
    // Setup Tests
    //=====================================================================

    #[test]
    fn setup_configures_world_physics() {
        let (_, world) = attached(SceneConfig::default());
        assert_eq!(world.gravity(), Vec2::new(0.0, -2.5));
        assert_eq!(world.boundary(), Some(Vec2::new(800.0, 600.0)));
    }

    #[test]
    fn setup_builds_expected_nodes() {
        let (scene, world) = attached(SceneConfig::default());

        // world, background, ground, hero, jet, two labels
        assert_eq!(world.node_count(), 7);
        assert_eq!(world.root_nodes(), vec![scene.world_node().unwrap()]);
        assert_eq!(world.nodes_named(TUTORIAL_TAG).len(), 2);
    }

    #[test]
    fn hero_starts_frozen_with_scaled_body() {
        let (scene, world) = attached(SceneConfig::default());
        let hero = scene.hero().unwrap();

        let node = world.node(hero).unwrap();
        assert_eq!(node.position, Vec2::new(400.0, 240.0));
        assert_eq!(node.z_position, Layer::Hero.z());

        let body = world.body(hero).unwrap();
        assert!(!body.spec.dynamic);
        assert_eq!(body.spec.size, Vec2::new(197.0, 173.5));
        assert_eq!(body.spec.category, PhysicsCategory::HERO);
        assert_eq!(body.spec.collision, PhysicsCategory::GROUND);
    }

    #[test]
    fn ground_is_static_and_collides_with_hero() {
        let (scene, world) = attached(SceneConfig::default());
        let world_node = scene.world_node().unwrap();

        let ground = world
            .node_ids()
            .into_iter()
            .find(|&id| world.body(id).map(|b| b.spec.category) == Some(PhysicsCategory::GROUND))
            .unwrap();

        let node = world.node(ground).unwrap();
        assert_eq!(node.parent, Some(world_node));
        assert_eq!(node.position, Vec2::new(400.0, 40.0));

        let body = world.body(ground).unwrap();
        assert!(!body.spec.dynamic);
        assert_eq!(body.spec.collision, PhysicsCategory::HERO);
    }

    #[test]
    fn jet_attaches_below_hero_at_idle_rate() {
        let (scene, world) = attached(SceneConfig::default());
        let jet = scene.jet().unwrap();

        let node = world.node(jet).unwrap();
        assert_eq!(node.parent, scene.hero());
        assert_eq!(node.position, Vec2::new(0.0, -173.5));
        assert_eq!(world.emitter(jet).unwrap().birth_rate, 50.0);
    }

    #[test]
    fn setup_plays_intro_and_fills_playlist() {
        let (scene, world) = attached(SceneConfig::default());
        assert_eq!(
            world.audio().background(),
            Some(Path::new("assets/PositiveGameMusic.mp3"))
        );
        assert_eq!(scene.playlist().tracks(), track_paths().as_slice());
    }

    #[test]
    fn music_disabled_skips_intro() {
        let (_, world) = attached(SceneConfig::default().with_music(false));
        assert!(world.audio().background_history.is_empty());
    }

    #[test]
    fn missing_asset_fails_before_building_nodes() {
        let mut world = HeadlessWorld::new(
            Vec2::new(800.0, 600.0),
            AssetBundle::new("assets").with_entry("Background.png"),
        );
        let mut scene = GameScene::default();

        let err = scene.on_attach(&mut world).unwrap_err();

        assert!(matches!(err, SceneError::Asset(AssetError::NotFound { .. })));
        assert_eq!(world.node_count(), 0);
        assert!(scene.hero().is_none());
    }

    #[test]
    fn second_attach_is_ignored() {
        let (mut scene, mut world) = attached(SceneConfig::default());
        scene.on_attach(&mut world).unwrap();
        assert_eq!(world.node_count(), 7);
    }

    //=====================================================================
    // State Machine Tests
    //=====================================================================

    #[test]
    fn first_pointer_down_switches_to_play() {
        let (mut scene, mut world) = attached(SceneConfig::default());
        let history_before = world.audio().background_history.len();

        down(&mut scene, &mut world);

        assert_eq!(scene.state(), GameState::Play);
        assert!(!scene.thrust_held(), "the switching tap does not hold thrust");
        assert!(world.body(scene.hero().unwrap()).unwrap().spec.dynamic);
        assert_eq!(world.emitter(scene.jet().unwrap()).unwrap().birth_rate, 450.0);
        assert_eq!(world.audio().effects, vec![PathBuf::from("assets/sfx_point.wav")]);

        let history = &world.audio().background_history;
        assert_eq!(history.len(), history_before + 1, "exactly one track started");
        assert!(track_paths().contains(history.last().unwrap()));
    }

    #[test]
    fn play_switch_starts_star_field() {
        let (mut scene, mut world) = attached(SceneConfig::default());
        assert!(scene.star().is_none());

        down(&mut scene, &mut world);

        let star = scene.star().unwrap();
        let node = world.node(star).unwrap();
        assert_eq!(node.parent, scene.world_node());
        assert_eq!(node.position, Vec2::new(400.0, 300.0));
        assert_eq!(node.z_position, Layer::Ground.z());
        assert_eq!(world.emitter_nodes().len(), 2);
    }

    #[test]
    fn play_switch_fades_out_tutorial_labels() {
        let (mut scene, mut world) = attached(SceneConfig::default());
        let labels = world.nodes_named(TUTORIAL_TAG);

        down(&mut scene, &mut world);

        for &label in &labels {
            assert!(world.is_fading(label));
        }

        world.advance(0.5);
        assert!(world.nodes_named(TUTORIAL_TAG).is_empty());
    }

    #[test]
    fn play_switch_without_music_plays_no_track() {
        let (mut scene, mut world) = attached(SceneConfig::default().with_music(false));
        down(&mut scene, &mut world);
        assert!(world.audio().background_history.is_empty());
        assert_eq!(world.audio().effects.len(), 1);
    }

    #[test]
    fn play_is_terminal() {
        let (mut scene, mut world) = attached(SceneConfig::default());
        down(&mut scene, &mut world);
        let tracks_after_switch = world.audio().background_history.len();

        for _ in 0..5 {
            down(&mut scene, &mut world);
            up(&mut scene, &mut world);
            scene.on_pointer_move(Vec2::ZERO, &mut world);
            scene.on_frame(1.0, &mut world);
            assert_eq!(scene.state(), GameState::Play);
        }

        assert_eq!(world.audio().background_history.len(), tracks_after_switch);
        assert_eq!(world.audio().effects.len(), 1);
    }

    #[test]
    fn thrust_follows_latest_pointer_event() {
        let (mut scene, mut world) = attached(SceneConfig::default());
        down(&mut scene, &mut world);

        down(&mut scene, &mut world);
        assert!(scene.thrust_held());

        scene.on_pointer_move(Vec2::new(10.0, 10.0), &mut world);
        assert!(scene.thrust_held(), "move never changes thrust");

        up(&mut scene, &mut world);
        assert!(!scene.thrust_held());

        scene.on_pointer_move(Vec2::new(20.0, 20.0), &mut world);
        assert!(!scene.thrust_held());
    }

    #[test]
    fn pointer_up_in_tutorial_keeps_tutorial() {
        let (mut scene, mut world) = attached(SceneConfig::default());
        up(&mut scene, &mut world);
        scene.on_pointer_move(Vec2::ZERO, &mut world);
        assert_eq!(scene.state(), GameState::Tutorial);
        assert!(!scene.thrust_held());
    }

    //=====================================================================
    // Frame Update Tests
    //=====================================================================

    #[test]
    fn tutorial_frames_touch_nothing() {
        let (mut scene, mut world) = attached(SceneConfig::default());
        let jet = scene.jet().unwrap();
        let hero = scene.hero().unwrap();

        scene.on_frame(1.0, &mut world);
        scene.on_frame(2.0, &mut world);

        assert_eq!(world.emitter(jet).unwrap().emission, Emission::Continuous);
        assert_eq!(world.body(hero).unwrap().impulse_count, 0);
    }

    #[test]
    fn held_thrust_sets_velocity_impulse_and_infinite_emission() {
        let (mut scene, mut world) = attached(SceneConfig::default());
        down(&mut scene, &mut world);
        down(&mut scene, &mut world);

        scene.on_frame(1.0, &mut world);

        let body = world.body(scene.hero().unwrap()).unwrap();
        assert_eq!(body.velocity, Vec2::up(100.0));
        assert_eq!(body.total_impulse, Vec2::up(200.0));
        assert_eq!(body.impulse_count, 1);

        let emitter = world.emitter(scene.jet().unwrap()).unwrap();
        assert_eq!(emitter.emission.num_particles_to_emit(), 0);
    }

    #[test]
    fn impulse_is_per_frame_not_per_second() {
        let (mut scene, mut world) = attached(SceneConfig::default());
        down(&mut scene, &mut world);
        down(&mut scene, &mut world);

        scene.on_frame(1.0, &mut world);
        scene.on_frame(1.001, &mut world);
        scene.on_frame(5.0, &mut world);

        let body = world.body(scene.hero().unwrap()).unwrap();
        assert_eq!(body.total_impulse, Vec2::up(600.0));
    }

    #[test]
    fn released_thrust_tapers_without_impulse() {
        let (mut scene, mut world) = attached(SceneConfig::default());
        down(&mut scene, &mut world);

        scene.on_frame(1.0, &mut world);

        let body = world.body(scene.hero().unwrap()).unwrap();
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.impulse_count, 0);
        assert_eq!(
            world.emitter(scene.jet().unwrap()).unwrap().emission.num_particles_to_emit(),
            20
        );
    }

    #[test]
    fn delta_time_is_zero_then_difference() {
        let (mut scene, mut world) = attached(SceneConfig::default());

        scene.on_frame(3.0, &mut world);
        assert_eq!(scene.dt(), 0.0);

        scene.on_frame(3.5, &mut world);
        assert_eq!(scene.dt(), 0.5);

        scene.on_frame(4.25, &mut world);
        assert_eq!(scene.dt(), 0.75);
    }

    #[test]
    fn attach_down_frame_up_frame_scenario() {
        let (mut scene, mut world) = attached(SceneConfig::default());
        let hero = scene.hero().unwrap();
        let jet = scene.jet().unwrap();

        // pointer down switches state; the tap itself does not hold thrust
        down(&mut scene, &mut world);
        assert_eq!(scene.state(), GameState::Play);

        // a second press holds thrust for frame t=1
        down(&mut scene, &mut world);
        scene.on_frame(1.0, &mut world);
        assert_eq!(world.body(hero).unwrap().impulse_count, 1);
        assert_eq!(world.emitter(jet).unwrap().emission, Emission::Continuous);

        up(&mut scene, &mut world);
        scene.on_frame(2.0, &mut world);
        assert_eq!(world.body(hero).unwrap().impulse_count, 1);
        assert_eq!(world.emitter(jet).unwrap().emission, Emission::Burst(20));
        assert_eq!(scene.dt(), 1.0);
    }

    #[test]
    fn hooks_before_attach_are_harmless() {
        let mut world = world();
        let mut scene = GameScene::default();

        scene.on_pointer_down(Vec2::ZERO, &mut world);
        scene.on_frame(1.0, &mut world);

        assert_eq!(scene.state(), GameState::Tutorial);
        assert_eq!(world.node_count(), 0);
    }
}
