//! Integer screen-space geometry and colour helpers shared by the entity
//! model, the mask provider and the collision engine.

use bytemuck::{Pod, Zeroable};
use glam::{IVec2, UVec2};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen pixels. `pos` is the top-left corner.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_pos_size(pos: IVec2, size: UVec2) -> Self {
        Self::new(pos.x, pos.y, size.x as i32, size.y as i32)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    /// Exclusive right edge, saturating at `i32::MAX`.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// Exclusive bottom edge, saturating at `i32::MAX`.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Length of the shared span on each axis, clamped at zero.
    pub fn overlap(&self, other: &Rect) -> IVec2 {
        let x = (self.right().min(other.right()))
            .saturating_sub(self.left().max(other.left()))
            .max(0);
        let y = (self.bottom().min(other.bottom()))
            .saturating_sub(self.top().max(other.top()))
            .max(0);
        IVec2::new(x, y)
    }

    /// The intersecting rectangle, or `None` when either overlap is zero.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let overlap = self.overlap(other);
        if overlap.x == 0 || overlap.y == 0 {
            return None;
        }
        Some(Rect::new(
            self.left().max(other.left()),
            self.top().max(other.top()),
            overlap.x,
            overlap.y,
        ))
    }
}

/// An RGB triple. Alpha never takes part in classification.
/// Serialized as a `[r, g, b]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as `0xRRGGBBAA`.
    pub fn pack(self, alpha: u8) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, alpha])
    }

    /// Unpack a `0xRRGGBBAA` pixel, dropping alpha.
    pub fn unpack(pixel: u32) -> Self {
        let [r, g, b, _] = pixel.to_be_bytes();
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}
