//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`].

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{GameConfig, clamp_paddle_y};

/// Which side of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle, driven by the pointer
    Player,
    /// Right paddle, driven by the tracking controller
    Opponent,
}

/// A vertical paddle. `pos` is the top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Create a vertically centered paddle for `side`
    pub fn new(side: Side, config: &GameConfig) -> Self {
        let x = match side {
            Side::Player => config.player_x(),
            Side::Opponent => config.opponent_x(),
        };
        Self {
            side,
            pos: Vec2::new(x, config.centered_paddle_y()),
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    /// Move the paddle's top edge to `y`, kept inside the field
    pub fn set_y(&mut self, y: f32, field_height: f32) {
        self.pos.y = clamp_paddle_y(y, self.height, field_height);
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }
}

/// The ball. Velocity is in pixels per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at the center of the field with a freshly served velocity
    pub fn served<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: config.ball_radius,
        };
        ball.serve(config, rng);
        ball
    }

    /// Recenter and pick a new direction: horizontal speed is always
    /// `ball_speed` toward a random side, vertical is in `[-speed, speed)`.
    pub fn serve<R: Rng>(&mut self, config: &GameConfig, rng: &mut R) {
        let speed = config.ball_speed;
        self.pos = Vec2::new(config.width / 2.0, config.height / 2.0);
        let dir = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(speed * dir, speed * rng.random_range(-1.0f32..1.0));
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    /// Latest pointer target for the player paddle, consumed by the next step
    pub player_target_y: Option<f32>,
}

impl GameState {
    /// Fresh state: centered paddles, ball served from the middle.
    ///
    /// `config` is assumed valid; see [`GameConfig::validate`].
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        let player = Paddle::new(Side::Player, &config);
        let opponent = Paddle::new(Side::Opponent, &config);
        let ball = Ball::served(&config, rng);
        Self {
            config,
            player,
            opponent,
            ball,
            player_target_y: None,
        }
    }

    /// Record where the pointer wants the player paddle. Last write wins.
    pub fn set_player_target_y(&mut self, y: f32) {
        if !y.is_finite() {
            log::warn!("Ignoring non-finite paddle target {}", y);
            return;
        }
        self.player_target_y = Some(self.config.clamp_paddle_y(y));
    }

    /// Move the player paddle to the pending target, if any
    pub fn apply_player_target(&mut self) {
        if let Some(y) = self.player_target_y.take() {
            self.player.set_y(y, self.config.height);
        }
    }

    /// Put the ball back in the middle with a new random velocity
    pub fn respawn_ball<R: Rng>(&mut self, rng: &mut R) {
        self.ball.serve(&self.config, rng);
    }

    /// Paddle by side
    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }
}
