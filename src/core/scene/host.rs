//=========================================================================
// Scene Host
//=========================================================================
//
// Owns one scene and its service backend, and turns host-level inputs
// (attach, pointer events, ticks) into scene hook calls.
//
// The host is the only place the scene is reachable from, so hooks run
// strictly one after another on whichever thread owns the host.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::clock::FrameClock;
use crate::core::input::InputEvent;
use crate::core::services::HostWorld;
use super::{Scene, SceneError};

//=== SceneHost ===========================================================

/// Drives a boxed [`Scene`] against a [`HostWorld`] backend.
pub struct SceneHost<W: HostWorld> {
    scene: Box<dyn Scene>,
    world: W,
    attached: bool,
    clock: FrameClock,
}

impl<W: HostWorld> SceneHost<W> {
    //--- Construction -----------------------------------------------------

    /// Wraps a scene and backend. The scene is not attached yet.
    pub fn new(scene: Box<dyn Scene>, world: W) -> Self {
        Self {
            scene,
            world,
            attached: false,
            clock: FrameClock::new(),
        }
    }

    //--- Lifecycle --------------------------------------------------------

    /// Runs the scene's setup hook. Only the first call has any effect.
    ///
    /// # Errors
    ///
    /// Propagates the scene's [`SceneError`]; the scene stays detached.
    pub fn attach(&mut self) -> Result<(), SceneError> {
        if self.attached {
            warn!(target: "scene", "Scene already attached, skipping setup");
            return Ok(());
        }

        debug!(target: "scene", "Attaching scene");
        self.scene.on_attach(&mut self.world)?;
        self.attached = true;
        info!(target: "scene", "Scene attached");
        Ok(())
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    //--- Dispatch ---------------------------------------------------------

    /// Routes a pointer event to the matching hook.
    ///
    /// Events arriving before attach are dropped.
    pub fn dispatch(&mut self, event: InputEvent) {
        if !self.attached {
            trace!(target: "scene", "Dropping {:?} before attach", event);
            return;
        }

        match event {
            InputEvent::PointerDown { location } => {
                self.scene.on_pointer_down(location, &mut self.world)
            }
            InputEvent::PointerMoved { location } => {
                self.scene.on_pointer_move(location, &mut self.world)
            }
            InputEvent::PointerUp { location } => {
                self.scene.on_pointer_up(location, &mut self.world)
            }
        }
    }

    /// Runs one tick: the scene's frame hook, then backend actions.
    pub fn frame(&mut self, current_time: f64) {
        if !self.attached {
            return;
        }

        self.scene.on_frame(current_time, &mut self.world);

        let dt = self.clock.tick(current_time);
        self.world.advance(dt);
    }

    //--- Accessors --------------------------------------------------------

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
