use std::time::Duration;

/// Most ticks a single frame may schedule before the backlog is dropped.
pub const MAX_CATCH_UP: u32 = 10;

/// Fixed timestep accumulator.
/// Turns variable wall-clock frame times into a whole number of world ticks.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    tick: Duration,
    accumulator: Duration,
}

impl FixedTimestep {
    pub fn new(tick: Duration) -> Self {
        Self {
            tick: tick.max(Duration::from_micros(1)),
            accumulator: Duration::ZERO,
        }
    }

    /// Falls back to 60 Hz when `dt` is negative or not finite.
    pub fn from_secs_f32(dt: f32) -> Self {
        Self::new(Duration::try_from_secs_f32(dt).unwrap_or(Duration::from_micros(16_667)))
    }

    /// Add elapsed time. Returns the number of ticks to run now.
    pub fn accumulate(&mut self, elapsed: Duration) -> u32 {
        let cap = self.tick.checked_mul(MAX_CATCH_UP).unwrap_or(Duration::MAX);
        self.accumulator = self.accumulator.saturating_add(elapsed).min(cap);
        let mut steps = 0;
        while self.accumulator >= self.tick {
            self.accumulator -= self.tick;
            steps += 1;
        }
        steps
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self) -> Duration {
        self.tick.saturating_sub(self.accumulator)
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }
}
