//=========================================================================
// Frame Clock
//=========================================================================
//
// Derives per-frame delta time from successive timestamps.
//
// The first frame has no prior timestamp and reports a delta of zero.
// Every later frame reports `current - previous`, including when the
// first timestamp was exactly zero.
//
//=========================================================================

/// Tracks the previous frame timestamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last: Option<f64>,
    dt: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `current_time` and returns the delta since the last tick.
    pub fn tick(&mut self, current_time: f64) -> f64 {
        self.dt = match self.last {
            Some(last) => current_time - last,
            None => 0.0,
        };
        self.last = Some(current_time);
        self.dt
    }

    /// Delta computed by the most recent [`tick`](Self::tick).
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Timestamp of the most recent tick, if any.
    pub fn last_time(&self) -> Option<f64> {
        self.last
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(12.5), 0.0);
        assert_eq!(clock.last_time(), Some(12.5));
    }

    #[test]
    fn later_ticks_report_difference() {
        let mut clock = FrameClock::new();
        clock.tick(1.0);
        assert_eq!(clock.tick(1.5), 0.5);
        assert_eq!(clock.tick(3.0), 1.5);
        assert_eq!(clock.dt(), 1.5);
    }

    #[test]
    fn zero_first_timestamp_still_counts() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        assert_eq!(clock.tick(0.25), 0.25);
    }
}
