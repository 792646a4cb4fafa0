use bytemuck::{Pod, Zeroable};

use crate::api::types::SheetId;
use crate::core::geometry::Rect;

/// One sprite blit: copy `source` from a sheet to `dest` on screen, unscaled.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct DrawCommand {
    pub sheet: SheetId,
    /// Frame rectangle inside the sheet.
    pub source: Rect,
    /// Destination rectangle on screen.
    pub dest: Rect,
}

impl DrawCommand {
    pub const WORDS: usize = 9;
    pub const STRIDE_BYTES: usize = Self::WORDS * 4;
}

/// Draw commands collected for one tick, in draw order.
pub struct RenderBuffer {
    pub commands: Vec<DrawCommand>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(64),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn command_count(&self) -> u32 {
        self.commands.len() as u32
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    /// Commands as raw bytes, for sinks that upload a whole batch at once.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.commands)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
