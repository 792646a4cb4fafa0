use std::time::Instant;

use enginez::{
    FixedTimestep, GameEvent, InputQueue, RenderBuffer, RenderSink, Result, TickReport, World,
};

use crate::pilot::InputSource;

/// Totals over a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub spawned: u64,
    pub despawned: u64,
    pub collisions: u64,
    /// Whether the run ended on a `Quit` event rather than the tick limit.
    pub quit: bool,
}

impl RunSummary {
    fn record(&mut self, report: &TickReport) {
        self.ticks += 1;
        self.spawned += report.spawned.len() as u64;
        self.despawned += report.despawned.len() as u64;
        self.collisions += report.collisions.len() as u64;
    }
}

/// Owns the world and everything around it: input, the draw buffer and the
/// sink, and the fixed timestep used when pacing against the wall clock.
///
/// Each tick runs input sampling, one world tick, then draw. The loop stops on
/// `Quit` or when the tick limit is reached; a world error ends it at once.
pub struct GameRunner<I: InputSource, S: RenderSink> {
    world: World,
    source: I,
    sink: S,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    max_ticks: Option<u64>,
    summary: RunSummary,
}

impl<I: InputSource, S: RenderSink> GameRunner<I, S> {
    pub fn new(world: World, source: I, sink: S) -> Self {
        let timestep = FixedTimestep::from_secs_f32(world.config().fixed_dt);
        Self {
            world,
            source,
            sink,
            input: InputQueue::new(),
            render_buffer: RenderBuffer::new(),
            timestep,
            max_ticks: None,
            summary: RunSummary::default(),
        }
    }

    /// Stop after `ticks` ticks even if nobody quits.
    pub fn with_max_ticks(mut self, ticks: u64) -> Self {
        self.max_ticks = Some(ticks);
        self
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    fn finished(&self) -> bool {
        self.summary.quit || self.max_ticks.is_some_and(|max| self.summary.ticks >= max)
    }

    /// Run a single tick. Returns `None` once the run is over.
    pub fn step(&mut self) -> Result<Option<TickReport>> {
        if self.finished() {
            return Ok(None);
        }

        self.source.poll(self.world.tick_count(), &mut self.input);
        let keys = self.input.sample();
        if self.input.quit_requested() {
            log::info!("quit requested after {} ticks", self.summary.ticks);
            self.summary.quit = true;
            return Ok(None);
        }

        let report = self.world.tick(keys)?;
        for event in self.world.events() {
            if event.kind == GameEvent::COLLISION {
                log::debug!(
                    "tick {}: hit hostile #{} at ({}, {})",
                    report.tick,
                    event.a,
                    event.b,
                    event.c
                );
            }
        }
        self.world.draw(&mut self.render_buffer, &mut self.sink);
        self.summary.record(&report);
        Ok(Some(report))
    }

    /// Run ticks back to back until the run is over.
    pub fn run(&mut self) -> Result<RunSummary> {
        while self.step()?.is_some() {}
        Ok(self.summary)
    }

    /// Run ticks at the configured rate against the wall clock.
    pub fn run_realtime(&mut self) -> Result<RunSummary> {
        let mut last = Instant::now();
        loop {
            let now = Instant::now();
            let steps = self.timestep.accumulate(now - last);
            last = now;
            for _ in 0..steps {
                if self.step()?.is_none() {
                    return Ok(self.summary);
                }
            }
            if self.finished() {
                return Ok(self.summary);
            }
            std::thread::sleep(self.timestep.until_next());
        }
    }
}
