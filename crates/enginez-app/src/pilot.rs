//! Input sources for headless runs.

use enginez::{InputEvent, InputQueue, Key, Rng};

/// Anything that feeds input events into the runner.
pub trait InputSource {
    /// Push the events for the upcoming tick. `tick` is the number of ticks
    /// already run.
    fn poll(&mut self, tick: u64, queue: &mut InputQueue);
}

impl<F> InputSource for F
where
    F: FnMut(u64, &mut InputQueue),
{
    fn poll(&mut self, tick: u64, queue: &mut InputQueue) {
        self(tick, queue)
    }
}

const KEYS: [Key; 4] = [Key::Up, Key::Down, Key::Left, Key::Right];

/// Seeded stand-in for a keyboard: holds one random direction key for a
/// fixed number of ticks, then switches. Optionally quits at a given tick.
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Rng,
    hold: u64,
    held: Option<Key>,
    quit_at: Option<u64>,
}

impl Autopilot {
    pub const DEFAULT_HOLD: u64 = 20;

    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rng::new(seed),
            hold: Self::DEFAULT_HOLD,
            held: None,
            quit_at: None,
        }
    }

    /// Ticks each key is held before switching (min 1).
    pub fn with_hold(mut self, ticks: u64) -> Self {
        self.hold = ticks.max(1);
        self
    }

    /// Raise `Quit` once `tick` ticks have run.
    pub fn with_quit_at(mut self, tick: u64) -> Self {
        self.quit_at = Some(tick);
        self
    }

    pub fn held(&self) -> Option<Key> {
        self.held
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, tick: u64, queue: &mut InputQueue) {
        if self.quit_at.is_some_and(|at| tick >= at) {
            queue.push(InputEvent::Quit);
            return;
        }
        if tick % self.hold != 0 {
            return;
        }
        if let Some(key) = self.held.take() {
            queue.push(InputEvent::KeyUp(key));
        }
        let key = KEYS[self.rng.next_int(KEYS.len() as u32) as usize];
        queue.push(InputEvent::KeyDown(key));
        self.held = Some(key);
    }
}
