//=========================================================================
// Input Processor
//=========================================================================
//
// Converts platform-specific Winit events into engine pointer events.
//
// Architecture:
//   Winit Events → InputProcessor → InputEvent (scene space) → InputBuffer
//
// Stateful tracking:
// - Cursor position, cached from CursorMoved and stamped onto button
//   presses (Winit reports buttons without a location)
// - Viewport (logical height + scale factor) for the y-flip into
//   scene space, which is y-up with the origin bottom-left
// - The first active touch; later simultaneous touches are ignored
//
// Only the left mouse button counts as a touch. Everything else is
// filtered (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;
use winit::event::{ElementState, MouseButton as WinitMouseButton, TouchPhase};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, MouseButton};
use crate::core::math::Vec2;

//=== InputProcessor ======================================================

/// Converts Winit events to scene-space pointer events.
pub(crate) struct InputProcessor {
    cursor: Vec2,
    logical_height: f64,
    scale_factor: f64,
    active_touch: Option<u64>,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            cursor: Vec2::ZERO,
            logical_height: 0.0,
            scale_factor: 1.0,
            active_touch: None,
        }
    }

    //--- Viewport State ---------------------------------------------------

    /// Updates the viewport used for the physical → scene conversion.
    pub(crate) fn set_viewport(&mut self, physical_height: u32, scale_factor: f64) {
        self.scale_factor = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        self.logical_height = physical_height as f64 / self.scale_factor;
        trace!(
            target: "platform::input",
            "Viewport height {} @ {}x",
            self.logical_height,
            self.scale_factor
        );
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> Vec2 {
        self.cursor
    }

    //--- Event Processing -------------------------------------------------

    /// Caches the cursor and emits a move event.
    pub(crate) fn process_cursor_moved(&mut self, x: f64, y: f64) -> InputEvent {
        self.cursor = self.to_scene(x, y);
        InputEvent::PointerMoved { location: self.cursor }
    }

    /// Converts a mouse button change (left button only).
    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> Option<InputEvent> {
        if MouseButton::from(button) != MouseButton::Left {
            return None;
        }

        let location = self.cursor;
        Some(match state {
            ElementState::Pressed => InputEvent::PointerDown { location },
            ElementState::Released => InputEvent::PointerUp { location },
        })
    }

    /// Converts a touch phase for the tracked touch.
    pub(crate) fn process_touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        x: f64,
        y: f64,
    ) -> Option<InputEvent> {
        let location = self.to_scene(x, y);

        match phase {
            TouchPhase::Started => {
                if self.active_touch.is_some() {
                    return None;
                }
                self.active_touch = Some(id);
                Some(InputEvent::PointerDown { location })
            }
            TouchPhase::Moved if self.active_touch == Some(id) => {
                Some(InputEvent::PointerMoved { location })
            }
            TouchPhase::Ended | TouchPhase::Cancelled if self.active_touch == Some(id) => {
                self.active_touch = None;
                Some(InputEvent::PointerUp { location })
            }
            _ => None,
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn to_scene(&self, x: f64, y: f64) -> Vec2 {
        let lx = x / self.scale_factor;
        let ly = y / self.scale_factor;
        Vec2::new(lx as f32, (self.logical_height - ly) as f32)
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit mouse buttons to engine buttons.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn processor() -> InputProcessor {
        let mut p = InputProcessor::new();
        p.set_viewport(1200, 2.0);
        p
    }

    #[test]
    fn cursor_is_flipped_into_scene_space() {
        let mut p = processor();
        let event = p.process_cursor_moved(200.0, 100.0);
        assert_eq!(event.location(), Vec2::new(100.0, 550.0));
        assert_eq!(p.cursor(), Vec2::new(100.0, 550.0));
    }

    #[test]
    fn left_button_uses_cached_cursor() {
        let mut p = processor();
        p.process_cursor_moved(0.0, 1200.0);

        let down = p.process_mouse_button(WinitMouseButton::Left, ElementState::Pressed);
        let up = p.process_mouse_button(WinitMouseButton::Left, ElementState::Released);

        assert_eq!(down, Some(InputEvent::PointerDown { location: Vec2::ZERO }));
        assert_eq!(up, Some(InputEvent::PointerUp { location: Vec2::ZERO }));
    }

    #[test]
    fn other_buttons_are_filtered() {
        let p = processor();
        assert!(p.process_mouse_button(WinitMouseButton::Right, ElementState::Pressed).is_none());
        assert!(p.process_mouse_button(WinitMouseButton::Other(7), ElementState::Pressed).is_none());
    }

    #[test]
    fn touch_lifecycle_maps_to_pointer_events() {
        let mut p = processor();

        let began = p.process_touch(1, TouchPhase::Started, 20.0, 20.0);
        let moved = p.process_touch(1, TouchPhase::Moved, 40.0, 40.0);
        let ended = p.process_touch(1, TouchPhase::Ended, 40.0, 40.0);

        assert!(matches!(began, Some(InputEvent::PointerDown { .. })));
        assert!(matches!(moved, Some(InputEvent::PointerMoved { .. })));
        assert_eq!(ended, Some(InputEvent::PointerUp { location: Vec2::new(20.0, 580.0) }));
    }

    #[test]
    fn second_touch_is_ignored_until_first_ends() {
        let mut p = processor();

        assert!(p.process_touch(1, TouchPhase::Started, 0.0, 0.0).is_some());
        assert!(p.process_touch(2, TouchPhase::Started, 0.0, 0.0).is_none());
        assert!(p.process_touch(2, TouchPhase::Ended, 0.0, 0.0).is_none());
        assert!(p.process_touch(1, TouchPhase::Cancelled, 0.0, 0.0).is_some());
        assert!(p.process_touch(2, TouchPhase::Started, 0.0, 0.0).is_some());
    }

    #[test]
    fn non_positive_scale_factor_falls_back_to_one() {
        let mut p = InputProcessor::new();
        p.set_viewport(600, 0.0);
        let event = p.process_cursor_moved(10.0, 0.0);
        assert_eq!(event.location(), Vec2::new(10.0, 600.0));
    }

    #[test]
    fn mouse_button_conversion() {
        assert_eq!(MouseButton::from(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(MouseButton::from(WinitMouseButton::Right), MouseButton::Right);
        assert_eq!(MouseButton::from(WinitMouseButton::Middle), MouseButton::Middle);
        assert_eq!(MouseButton::from(WinitMouseButton::Back), MouseButton::Other);
    }
}
