//! Startup configuration
//!
//! Fixed for the lifetime of a game. Built from `consts` by default and
//! checked once before the first frame.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Fill and stroke colors (CSS color strings)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub player: String,
    pub opponent: String,
    pub ball: String,
    pub net: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            player: PLAYER_COLOR.to_owned(),
            opponent: OPPONENT_COLOR.to_owned(),
            ball: BALL_COLOR.to_owned(),
            net: NET_COLOR.to_owned(),
        }
    }
}

/// Playfield, paddle and ball parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Opponent max movement per frame
    pub paddle_speed: f32,
    /// Distance between each paddle and its side wall
    pub paddle_margin: f32,
    pub ball_radius: f32,
    /// Serve speed per frame
    pub ball_speed: f32,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_margin: PADDLE_MARGIN,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            palette: Palette::default(),
        }
    }
}

/// A configuration that would make the simulation misbehave
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("ball diameter {diameter} must be smaller than the playfield {axis} {extent}")]
    BallTooLarge {
        axis: &'static str,
        diameter: f32,
        extent: f32,
    },

    #[error("paddle height {paddle_height} exceeds playfield height {height}")]
    PaddleTooTall { paddle_height: f32, height: f32 },

    #[error("paddles ({paddle_width} wide, {paddle_margin} margin) do not fit in width {width}")]
    PaddlesTooWide {
        paddle_width: f32,
        paddle_margin: f32,
        width: f32,
    },
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the startup contract. Called once before the game starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        if !self.paddle_margin.is_finite() || self.paddle_margin < 0.0 {
            return Err(ConfigError::NotPositive {
                name: "paddle_margin",
                value: self.paddle_margin,
            });
        }

        let diameter = 2.0 * self.ball_radius;
        if diameter >= self.height {
            return Err(ConfigError::BallTooLarge {
                axis: "height",
                diameter,
                extent: self.height,
            });
        }
        if diameter >= self.width {
            return Err(ConfigError::BallTooLarge {
                axis: "width",
                diameter,
                extent: self.width,
            });
        }

        if self.paddle_height > self.height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                height: self.height,
            });
        }

        // Both paddles plus margins must leave room between them
        if 2.0 * (self.paddle_width + self.paddle_margin) >= self.width {
            return Err(ConfigError::PaddlesTooWide {
                paddle_width: self.paddle_width,
                paddle_margin: self.paddle_margin,
                width: self.width,
            });
        }

        Ok(())
    }

    /// Left edge of the player (left) paddle
    pub fn player_x(&self) -> f32 {
        self.paddle_margin
    }

    /// Left edge of the opponent (right) paddle
    pub fn opponent_x(&self) -> f32 {
        self.width - self.paddle_width - self.paddle_margin
    }

    /// Paddle top coordinate that centers it vertically
    pub fn centered_paddle_y(&self) -> f32 {
        self.height / 2.0 - self.paddle_height / 2.0
    }

    /// Clamp a paddle's top coordinate into `[0, height - paddle_height]`
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        clamp_paddle_y(y, self.paddle_height, self.height)
    }
}

/// Keep a paddle of `paddle_height` fully inside a field of `field_height`
#[inline]
pub fn clamp_paddle_y(y: f32, paddle_height: f32, field_height: f32) -> f32 {
    let max = field_height - paddle_height;
    if y < 0.0 {
        0.0
    } else if y > max {
        max
    } else {
        y
    }
}
