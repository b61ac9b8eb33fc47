//! Canvas Pong - classic two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, opponent)
//! - `config`: Startup configuration and validation
//! - `input`: Pointer-to-playfield coordinate mapping
//! - `render`: Canvas drawing of a simulation snapshot
//! - `driver`: One step plus one render per frame

pub mod config;
pub mod driver;
pub mod input;
pub mod render;
pub mod sim;

pub use config::{ConfigError, GameConfig, Palette};
pub use driver::FrameDriver;
pub use sim::{Simulation, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (canvas pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Opponent pursuit speed (pixels per frame)
    pub const PADDLE_SPEED: f32 = 5.0;
    /// Gap between each paddle and its side wall
    pub const PADDLE_MARGIN: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.0;
    /// Serve speed (pixels per frame, horizontal component)
    pub const BALL_SPEED: f32 = 5.0;
    /// Max vertical nudge added on each paddle hit (exclusive upper bound)
    pub const PADDLE_SPIN: f32 = 1.0;

    /// Colors
    pub const PLAYER_COLOR: &str = "#31c48d";
    pub const OPPONENT_COLOR: &str = "#f43f5e";
    pub const BALL_COLOR: &str = "#fee440";
    pub const NET_COLOR: &str = "#fff4";

    /// Centerline dash pattern (dash, gap)
    pub const NET_DASH: [f32; 2] = [10.0, 15.0];
}
