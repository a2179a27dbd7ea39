//=========================================================================
// Input Buffer
//
// Collects pointer events between frame boundaries, split into two
// categories: discrete (down/up) and continuous (moves). Acts as a
// transient aggregator between the Winit callbacks and the channel.
//
// Responsibilities:
// - Keep discrete events in arrival order
// - Drop exact consecutive duplicates of discrete events
// - Coalesce moves so only the latest position survives a frame
// - Hand everything over atomically via `drain()`
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashSet;

//=== Internal Modules ====================================================

use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 32;
        const CONTINUOUS_BASE: usize = 4;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: HashSet::with_capacity(CONTINUOUS_BASE),
        }
    }

    //--- Event Handling ---------------------------------------------------

    /// Inserts or replaces a continuous event (latest wins).
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        self.continuous.replace(event);
    }

    /// Appends a discrete event unless it repeats the previous one exactly.
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    /// Routes an event to the matching category.
    pub(crate) fn push(&mut self, event: InputEvent) {
        if event.is_discrete() {
            self.push_discrete(event);
        } else {
            self.push_continuous(event);
        }
    }

    //--- Drain ------------------------------------------------------------

    /// Returns `(discrete, continuous)` and clears the buffer, or `None`
    /// when nothing was buffered.
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }

        let capacity = self.discrete.capacity();
        let discrete = std::mem::replace(&mut self.discrete, Vec::with_capacity(capacity));
        let continuous = self.continuous.drain().collect();
        Some((discrete, continuous))
    }

    //--- Utilities --------------------------------------------------------

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.discrete.len() + self.continuous.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
