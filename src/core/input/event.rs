//=========================================================================
// Pointer Event Types
//
// Defines the internal representation of pointer input (mouse and touch).
//
// This module abstracts platform-specific input (Winit mouse buttons,
// cursor motion and touch phases) into three portable events that map
// one-to-one onto the scene's pointer hooks.
//
// Responsibilities:
// - Represent begin/move/end interactions with a scene-space location
// - Provide equality and hashing semantics for deduplication
// - Enable move coalescing (many PointerMoved → last position)
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    SceneHost (dispatch)
//         ↓
//    Scene::on_pointer_down / move / up
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== Internal Dependencies ===============================================

use crate::core::math::Vec2;

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// Only [`MouseButton::Left`] acts as a touch; the platform layer drops
/// presses of the other buttons before they reach the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button / wheel click.
    Middle,

    /// Side buttons and anything else.
    Other,
}

//=== InputEvent ==========================================================

/// Normalized pointer event in scene coordinates (y-up).
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Touch began or primary button pressed.
    PointerDown { location: Vec2 },

    /// Pointer moved. Coalesced per frame by the platform buffer.
    PointerMoved { location: Vec2 },

    /// Touch ended/cancelled or primary button released.
    PointerUp { location: Vec2 },
}

//--- Implementation ------------------------------------------------------

impl InputEvent {
    /// Scene-space location carried by every variant.
    pub fn location(&self) -> Vec2 {
        match *self {
            Self::PointerDown { location }
            | Self::PointerMoved { location }
            | Self::PointerUp { location } => location,
        }
    }

    /// True for events whose order matters (down/up).
    pub fn is_discrete(&self) -> bool {
        !matches!(self, Self::PointerMoved { .. })
    }
}

//--- Trait Implementations -----------------------------------------------

/// Equality implementation for InputEvent.
///
/// Rules:
/// - Same discriminant
/// - Down/Up: same location (bitwise)
/// - PointerMoved always equal (coordinates ignored for coalescing)
impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (PointerDown { location: a }, PointerDown { location: b })
            | (PointerUp { location: a }, PointerUp { location: b }) => {
                location_bits(*a) == location_bits(*b)
            }
            (PointerMoved { .. }, PointerMoved { .. }) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

/// Hashes discriminant, plus location bits for down/up. Consistent with
/// equality: moves hash identically regardless of coordinates.
impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::PointerDown { location } | Self::PointerUp { location } => {
                location_bits(*location).hash(state);
            }
            Self::PointerMoved { .. } => {}
        }
    }
}

fn location_bits(v: Vec2) -> (u32, u32) {
    (v.x.to_bits(), v.y.to_bits())
}

//=========================================================================
// Unit Tests
//=========================================================================
