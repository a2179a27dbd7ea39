//=========================================================================
// Scene Configuration
//=========================================================================
//
// Compiled-in tuning for the demo scene. `SceneConfig::default()` holds
// the shipped values; the fluent `with_*` setters exist for tests and
// alternative builds and assert their preconditions eagerly.
//
//=========================================================================

use crate::core::math::Vec2;

//=== Label ===============================================================

/// Text and placement of one tutorial label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelConfig {
    pub text: String,
    pub font_size: f32,

    /// Vertical position as a fraction of the scene height.
    pub height_fraction: f32,
}

//=== SceneConfig =========================================================

/// Demo scene settings.
///
/// # Default Values
///
/// - **Impulse**: 200 (base velocity is half of it)
/// - **Gravity**: (0, -2.5)
/// - **Jet birth rate**: 50 idle, 450 once playing
/// - **Thrust release tail**: 20 particles
/// - **Tutorial fade**: 0.5 s
/// - **Music**: enabled, intro `PositiveGameMusic.mp3`
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    //--- Physics ----------------------------------------------------------
    pub impulse: f32,
    pub gravity: Vec2,

    //--- Particles --------------------------------------------------------
    pub jet_idle_birth_rate: f32,
    pub jet_thrust_birth_rate: f32,
    pub jet_tail_particles: u32,

    //--- Audio ------------------------------------------------------------
    pub music_enabled: bool,
    pub intro_track: String,
    pub background_tracks: Vec<String>,
    pub start_sound: String,

    //--- Sprites ----------------------------------------------------------
    pub hero_scale: f32,
    pub hero_texture_size: Vec2,
    pub ground_texture_size: Vec2,
    pub background_texture_size: Vec2,

    //--- Tutorial ---------------------------------------------------------
    pub label_font: String,
    pub title: LabelConfig,
    pub prompt: LabelConfig,
    pub tutorial_fade: f64,

    //--- Randomness -------------------------------------------------------
    /// Fixed seed for track selection; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            impulse: 200.0,
            gravity: Vec2::new(0.0, -2.5),

            jet_idle_birth_rate: 50.0,
            jet_thrust_birth_rate: 450.0,
            jet_tail_particles: 20,

            music_enabled: true,
            intro_track: "PositiveGameMusic.mp3".into(),
            background_tracks: vec![
                "SillyGameMusic_120bpm.mp3".into(),
                "Serious-Game-Music.mp3".into(),
                "UplifitingGameMusic.mp3".into(),
            ],
            start_sound: "sfx_point.wav".into(),

            hero_scale: 0.5,
            hero_texture_size: Vec2::new(394.0, 347.0),
            ground_texture_size: Vec2::new(1024.0, 160.0),
            background_texture_size: Vec2::new(1024.0, 768.0),

            label_font: "AvenirNext-Regular".into(),
            title: LabelConfig {
                text: "Ready, Player One!".into(),
                font_size: 36.0,
                height_fraction: 0.6,
            },
            prompt: LabelConfig {
                text: "Tap or click to begin".into(),
                font_size: 18.0,
                height_fraction: 0.55,
            },
            tutorial_fade: 0.5,

            seed: None,
        }
    }
}

impl SceneConfig {
    /// Vertical velocity set while thrust is held.
    pub fn base_velocity(&self) -> f32 {
        self.impulse / 2.0
    }

    /// Sets the thrust impulse magnitude.
    ///
    /// # Panics
    ///
    /// Panics if `impulse <= 0.0`.
    pub fn with_impulse(mut self, impulse: f32) -> Self {
        assert!(impulse > 0.0, "Impulse must be positive, got {}", impulse);
        self.impulse = impulse;
        self
    }

    pub fn with_music(mut self, enabled: bool) -> Self {
        self.music_enabled = enabled;
        self
    }

    /// Replaces the background track list.
    ///
    /// # Panics
    ///
    /// Panics if `tracks` is empty.
    pub fn with_background_tracks<I, S>(mut self, tracks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tracks: Vec<String> = tracks.into_iter().map(Into::into).collect();
        assert!(!tracks.is_empty(), "Background track list must not be empty");
        self.background_tracks = tracks;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
