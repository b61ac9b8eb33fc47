//! Opponent paddle controller
//!
//! Chases the ball's height at a capped speed per frame, so fast vertical
//! balls can outrun it.

use super::state::{Ball, Paddle};

/// Move `paddle` toward the ball by at most `speed`, never past the target,
/// then keep it inside a field of `field_height`.
pub fn step_opponent(paddle: &mut Paddle, ball: &Ball, speed: f32, field_height: f32) {
    let target = ball.pos.y - paddle.height / 2.0;
    let mut y = paddle.pos.y;

    if y < target {
        y += speed;
        if y > target {
            y = target;
        }
    } else if y > target {
        y -= speed;
        if y < target {
            y = target;
        }
    }

    paddle.set_y(y, field_height);
}
