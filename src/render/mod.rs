//! Rendering module
//!
//! Paints a [`Snapshot`] onto anything implementing [`Canvas`]. The browser
//! build uses the Canvas 2D context; tests and headless runs record the
//! commands instead.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;

use glam::Vec2;

use crate::sim::Snapshot;

/// The handful of drawing primitives the game needs
pub trait Canvas {
    /// Erase the whole surface
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    /// Stroke a line with a `[dash, gap]` pattern
    fn dashed_line(&mut self, from: Vec2, to: Vec2, dash: [f32; 2], color: &str);
}

/// Paint one frame: clear, centerline, paddles, then the ball on top
pub fn draw<C: Canvas + ?Sized>(snapshot: &Snapshot<'_>, canvas: &mut C) {
    canvas.clear(snapshot.width, snapshot.height);

    let net = &snapshot.net;
    canvas.dashed_line(net.from, net.to, net.dash, net.color);

    for paddle in [&snapshot.player, &snapshot.opponent] {
        canvas.fill_rect(paddle.pos, paddle.size, paddle.color);
    }

    let ball = &snapshot.ball;
    canvas.fill_circle(ball.center, ball.radius, ball.color);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Rect { pos: Vec2, size: Vec2, color: String },
    Circle { center: Vec2, radius: f32, color: String },
    DashedLine { from: Vec2, to: Vec2, dash: [f32; 2], color: String },
}

/// Canvas that records commands instead of drawing.
///
/// Like a real surface, `clear` wipes everything drawn before it, so
/// [`RecordingCanvas::commands`] always holds the latest frame.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.commands.push(DrawCommand::Rect {
            pos,
            size,
            color: color.to_owned(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: color.to_owned(),
        });
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, dash: [f32; 2], color: &str) {
        self.commands.push(DrawCommand::DashedLine {
            from,
            to,
            dash,
            color: color.to_owned(),
        });
    }
}
