//! Frame driver
//!
//! Glues the simulation to a drawing surface: one step, then one render.
//! Pacing belongs to whoever calls [`FrameDriver::frame`] (the browser's
//! animation-frame callback, or a plain loop when headless).

use rand::Rng;
use rand_pcg::Pcg32;

use crate::render::{Canvas, draw};
use crate::sim::{Simulation, StepEvents};

#[derive(Debug)]
pub struct FrameDriver<R = Pcg32> {
    sim: Simulation<R>,
    respawns: u64,
    paddle_hits: u64,
}

impl<R: Rng> FrameDriver<R> {
    pub fn new(sim: Simulation<R>) -> Self {
        Self {
            sim,
            respawns: 0,
            paddle_hits: 0,
        }
    }

    /// Advance one frame and paint the result
    pub fn frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> StepEvents {
        let events = self.sim.step();
        if events.respawned {
            self.respawns += 1;
        }
        if events.player_hit || events.opponent_hit {
            self.paddle_hits += 1;
        }
        draw(&self.sim.snapshot(), canvas);
        events
    }

    /// Run `frames` frames back to back without any pacing
    pub fn run_headless<C: Canvas + ?Sized>(&mut self, frames: u64, canvas: &mut C) {
        for _ in 0..frames {
            self.frame(canvas);
        }
        log::info!(
            "Ran {} frames: {} paddle hits, {} respawns",
            frames,
            self.paddle_hits,
            self.respawns
        );
    }

    /// Forward pointer input to the simulation
    pub fn set_player_target_y(&mut self, y: f32) {
        self.sim.set_player_target_y(y);
    }

    pub fn simulation(&self) -> &Simulation<R> {
        &self.sim
    }

    /// Balls lost off either side so far
    pub fn respawns(&self) -> u64 {
        self.respawns
    }

    /// Paddle returns (either side) so far
    pub fn paddle_hits(&self) -> u64 {
        self.paddle_hits
    }
}
