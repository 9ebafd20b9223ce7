//! Fixed-rate frame clock
//!
//! Turns wall-clock time into a whole number of simulation ticks, capping the
//! catch-up after a stall so a slow frame can't snowball.

use std::time::Duration;

use crate::consts::{MAX_CATCHUP_TICKS, TICK_RATE};

#[derive(Debug, Clone)]
pub struct FrameClock {
    step: Duration,
    accumulator: Duration,
    max_catchup: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TICK_RATE, MAX_CATCHUP_TICKS)
    }
}

impl FrameClock {
    pub fn new(tick_rate: u32, max_catchup: u32) -> Self {
        Self {
            step: Duration::from_secs(1) / tick_rate.max(1),
            accumulator: Duration::ZERO,
            max_catchup: max_catchup.max(1),
        }
    }

    /// Duration of one tick
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Add `elapsed` wall time and return how many ticks to run now
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_catchup {
            self.accumulator -= self.step;
            ticks += 1;
        }

        // Drop whatever backlog the cap left behind
        if self.accumulator >= self.step {
            log::debug!("Frame clock dropped {:?} of backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }
        ticks
    }

    /// Time left until the next tick is due
    pub fn until_next_tick(&self) -> Duration {
        self.step.saturating_sub(self.accumulator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_tick_per_step() {
        let mut clock = FrameClock::new(60, 4);
        let step = clock.step();
        assert_eq!(clock.advance(step), 1);
        assert_eq!(clock.advance(step / 2), 0);
        assert_eq!(clock.advance(step / 2), 1);
    }

    #[test]
    fn test_catchup_is_capped() {
        let mut clock = FrameClock::new(60, 4);
        assert_eq!(clock.advance(Duration::from_secs(1)), 4);
        // Backlog was dropped
        assert_eq!(clock.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_until_next_tick() {
        let mut clock = FrameClock::new(50, 4);
        assert_eq!(clock.until_next_tick(), Duration::from_millis(20));
        assert_eq!(clock.advance(Duration::from_millis(5)), 0);
        assert_eq!(clock.until_next_tick(), Duration::from_millis(15));
    }
}
