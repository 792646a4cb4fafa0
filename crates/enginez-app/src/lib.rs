pub mod builtin;
pub mod pilot;
pub mod runner;

pub use builtin::BuiltinSheets;
pub use pilot::{Autopilot, InputSource};
pub use runner::{GameRunner, RunSummary};

use enginez::{Rect, RenderSink, SheetId};

/// Sink that reports each frame through the log instead of a window.
#[derive(Debug, Default)]
pub struct LogSink {
    frames: u64,
    commands: usize,
}

impl LogSink {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for LogSink {
    fn begin_frame(&mut self) {
        self.commands = 0;
    }

    fn draw_frame(&mut self, sheet: SheetId, source: Rect, dest: Rect) {
        log::trace!(
            "blit sheet {} ({}, {}) -> ({}, {}) {}x{}",
            sheet.0,
            source.x,
            source.y,
            dest.x,
            dest.y,
            dest.w,
            dest.h
        );
        self.commands += 1;
    }

    fn present(&mut self) {
        self.frames += 1;
        if self.frames % 60 == 0 {
            log::debug!("frame {}: {} sprites", self.frames, self.commands);
        }
    }
}
