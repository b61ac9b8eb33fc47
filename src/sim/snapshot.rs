//! Read-only view of the game for rendering

use glam::Vec2;
use serde::Serialize;

use super::state::{Ball, GameState, Paddle};
use crate::consts::NET_DASH;

/// A filled rectangle (paddle)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectView<'a> {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: &'a str,
}

impl<'a> RectView<'a> {
    fn of(paddle: &Paddle, color: &'a str) -> Self {
        Self {
            pos: paddle.pos,
            size: Vec2::new(paddle.width, paddle.height),
            color,
        }
    }
}

/// A filled circle (ball)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircleView<'a> {
    pub center: Vec2,
    pub radius: f32,
    pub color: &'a str,
}

impl<'a> CircleView<'a> {
    fn of(ball: &Ball, color: &'a str) -> Self {
        Self {
            center: ball.pos,
            radius: ball.radius,
            color,
        }
    }
}

/// The static dashed centerline
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NetView<'a> {
    pub from: Vec2,
    pub to: Vec2,
    pub dash: [f32; 2],
    pub color: &'a str,
}

/// Everything needed to paint one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot<'a> {
    pub width: f32,
    pub height: f32,
    pub net: NetView<'a>,
    pub player: RectView<'a>,
    pub opponent: RectView<'a>,
    pub ball: CircleView<'a>,
}

impl<'a> Snapshot<'a> {
    pub fn capture(state: &'a GameState) -> Self {
        let config = &state.config;
        let palette = &config.palette;
        let mid_x = config.width / 2.0;
        Self {
            width: config.width,
            height: config.height,
            net: NetView {
                from: Vec2::new(mid_x, 0.0),
                to: Vec2::new(mid_x, config.height),
                dash: NET_DASH,
                color: &palette.net,
            },
            player: RectView::of(&state.player, &palette.player),
            opponent: RectView::of(&state.opponent, &palette.opponent),
            ball: CircleView::of(&state.ball, &palette.ball),
        }
    }
}
