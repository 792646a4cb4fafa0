//! Render sink contract.
//!
//! The engine never owns a window or graphics context. Whoever drives the
//! loop implements `RenderSink` over their backend and passes it by reference
//! into `World::draw`.

use super::instance::{DrawCommand, RenderBuffer};
use crate::api::types::SheetId;
use crate::core::geometry::Rect;

pub trait RenderSink {
    /// Called once before the tick's draw commands.
    fn begin_frame(&mut self) {}

    /// Blit one sprite frame. `source` and `dest` always have the same size.
    fn draw_frame(&mut self, sheet: SheetId, source: Rect, dest: Rect);

    /// Called once after the last draw command of the tick.
    fn present(&mut self) {}

    /// Submit a whole buffer, framed by `begin_frame`/`present`.
    fn submit(&mut self, buffer: &RenderBuffer) {
        self.begin_frame();
        for &DrawCommand { sheet, source, dest } in buffer.iter() {
            self.draw_frame(sheet, source, dest);
        }
        self.present();
    }
}

/// Sink that keeps every command of the last frame. Useful for headless runs.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: u64,
    pub last_frame: Vec<DrawCommand>,
}

impl RenderSink for RecordingSink {
    fn begin_frame(&mut self) {
        self.last_frame.clear();
    }

    fn draw_frame(&mut self, sheet: SheetId, source: Rect, dest: Rect) {
        self.last_frame.push(DrawCommand { sheet, source, dest });
    }

    fn present(&mut self) {
        self.frames += 1;
    }
}
