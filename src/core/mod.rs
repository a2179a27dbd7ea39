//=========================================================================
// Core Systems Orchestrator
//
// Runs the scene host on the logic (non-platform) thread.
//
// Responsibilities:
// - Receive platform events via the bounded channel
// - Dispatch pointer events to the scene in arrival order
// - Tick the scene once per iteration with the elapsed run time
// - Maintain pacing using a fixed tick rate (TPS)
//
// Notes:
// The orchestrator runs independently from the platform layer and owns
// the scene host outright. Communication with the platform occurs only
// through message passing, so scene hooks never run concurrently.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod clock;
pub mod input;
pub mod math;
pub(crate) mod platform_bridge;
pub mod scene;
pub mod services;
pub mod world;

//=== Public API ==========================================================

pub use platform_bridge::PlatformError;

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::{debug, info};

//=== Internal Modules ====================================================

use crate::core::platform_bridge::{EventCollector, PlatformEvent, TickControl};
use crate::core::scene::SceneHost;
use crate::core::services::HostWorld;

//=== CoreSystemsOrchestrator =============================================

/// Owns the scene host and drives it at a fixed rate.
pub(crate) struct CoreSystemsOrchestrator<W: HostWorld> {
    host: SceneHost<W>,
}

impl<W: HostWorld> CoreSystemsOrchestrator<W> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(host: SceneHost<W>) -> Self {
        Self { host }
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Each tick:
    //  1. Collects platform events (exits on close or disconnect)
    //  2. Dispatches pointer events to the scene
    //  3. Runs the scene's frame hook with seconds since start
    //  4. Sleeps to maintain fixed pacing
    //
    pub(crate) fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut host = self.host;
            let mut collector = EventCollector::new(receiver);
            let start = Instant::now();

            loop {
                let frame_start = Instant::now();

                if Self::tick(&mut host, &mut collector, start.elapsed().as_secs_f64())
                    == TickControl::Exit
                {
                    info!(target: "core", "Core thread exiting");
                    break;
                }

                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }

    //--- tick() -----------------------------------------------------------

    fn tick(host: &mut SceneHost<W>, collector: &mut EventCollector, now: f64) -> TickControl {
        if collector.collect_frame() == TickControl::Exit {
            return TickControl::Exit;
        }

        let events = collector.take_events();
        if !events.is_empty() {
            debug!(target: "core", "Dispatching {} pointer events", events.len());
        }
        for event in events {
            host.dispatch(event);
        }

        host.frame(now);
        TickControl::Continue
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
