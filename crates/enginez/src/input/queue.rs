use glam::IVec2;

/// Direction keys the player can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

/// Input event types the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// The window was closed or the driver asked to stop.
    Quit,
}

/// Snapshot of which direction keys are held, sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl KeyState {
    pub fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::Up => self.up = held,
            Key::Down => self.down = held,
            Key::Left => self.left = held,
            Key::Right => self.right = held,
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up,
            Key::Down => self.down,
            Key::Left => self.left,
            Key::Right => self.right,
        }
    }

    /// Movement for this tick. Each key is checked on its own, so opposite
    /// keys cancel and diagonals combine.
    pub fn player_delta(&self, speed: i32) -> IVec2 {
        let mut delta = IVec2::ZERO;
        if self.up {
            delta.y -= speed;
        }
        if self.down {
            delta.y += speed;
        }
        if self.left {
            delta.x -= speed;
        }
        if self.right {
            delta.x += speed;
        }
        delta
    }
}

/// A queue of input events.
/// The driver pushes events as they arrive; the world folds them into a
/// `KeyState` once per tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
    keys: KeyState,
    quit: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
            keys: KeyState::default(),
            quit: false,
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Apply pending events and return the key snapshot for this tick.
    pub fn sample(&mut self) -> KeyState {
        for event in self.events.drain(..) {
            match event {
                InputEvent::KeyDown(key) => self.keys.set(key, true),
                InputEvent::KeyUp(key) => self.keys.set(key, false),
                InputEvent::Quit => self.quit = true,
            }
        }
        self.keys
    }

    /// Whether a `Quit` event has been sampled.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
