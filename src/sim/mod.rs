//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per display frame, no wall-clock time
//! - Injected RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod opponent;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::overlaps;
pub use opponent::step_opponent;
pub use snapshot::{CircleView, NetView, RectView, Snapshot};
pub use state::{Ball, GameState, Paddle, Side};
pub use tick::{Simulation, StepEvents, step};
