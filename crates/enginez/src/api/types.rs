use bytemuck::{Pod, Zeroable};

/// Unique identifier for an entity in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifies which sprite sheet an entity is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(transparent)]
pub struct SheetId(pub u32);

impl SheetId {
    pub const PLAYER: SheetId = SheetId(0);
    pub const HOSTILE: SheetId = SheetId(1);
}

/// A game event produced by a tick, for whoever drives the loop.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: u32,
    pub a: i32,
    pub b: i32,
    pub c: i32,
}

impl GameEvent {
    pub const COLLISION: u32 = 1;
    pub const SPAWN: u32 = 2;
    pub const DESPAWN: u32 = 3;

    /// Player touched a hostile: `a` = hostile id, `b/c` = hostile position.
    pub fn collision(hostile: EntityId, x: i32, y: i32) -> Self {
        Self { kind: Self::COLLISION, a: hostile.0 as i32, b: x, c: y }
    }

    pub fn spawn(id: EntityId, x: i32, y: i32) -> Self {
        Self { kind: Self::SPAWN, a: id.0 as i32, b: x, c: y }
    }

    pub fn despawn(id: EntityId, x: i32, y: i32) -> Self {
        Self { kind: Self::DESPAWN, a: id.0 as i32, b: x, c: y }
    }
}
