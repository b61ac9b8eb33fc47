//! Circle vs axis-aligned rectangle overlap

use glam::Vec2;

use super::state::{Ball, Paddle};

/// Closest point on the paddle rectangle to `point`
#[inline]
pub fn closest_point_on_paddle(point: Vec2, paddle: &Paddle) -> Vec2 {
    Vec2::new(
        point.x.max(paddle.left()).min(paddle.right()),
        point.y.max(paddle.top()).min(paddle.bottom()),
    )
}

/// Check whether the ball touches or overlaps the paddle.
///
/// Clamps the ball center onto the rectangle and compares the squared
/// distance to that point against the squared radius. Touching counts.
pub fn overlaps(ball: &Ball, paddle: &Paddle) -> bool {
    let closest = closest_point_on_paddle(ball.pos, paddle);
    ball.pos.distance_squared(closest) <= ball.radius * ball.radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Side;

    fn paddle(x: f32, y: f32, width: f32, height: f32) -> Paddle {
        Paddle {
            side: Side::Player,
            pos: Vec2::new(x, y),
            width,
            height,
        }
    }

    fn ball(x: f32, y: f32, radius: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            radius,
        }
    }

    #[test]
    fn test_overlap_right_edge() {
        let p = paddle(0.0, 0.0, 10.0, 10.0);
        assert!(overlaps(&ball(10.5, 5.0, 1.0), &p));
        assert!(!overlaps(&ball(12.0, 5.0, 1.0), &p));
    }

    #[test]
    fn test_touching_counts() {
        let p = paddle(0.0, 0.0, 10.0, 10.0);
        assert!(overlaps(&ball(11.0, 5.0, 1.0), &p));
        assert!(overlaps(&ball(5.0, -1.0, 1.0), &p));
    }

    #[test]
    fn test_center_inside_rectangle() {
        let p = paddle(0.0, 0.0, 10.0, 10.0);
        assert!(overlaps(&ball(5.0, 5.0, 1.0), &p));
    }

    #[test]
    fn test_corner_uses_euclidean_distance() {
        let p = paddle(0.0, 0.0, 10.0, 10.0);
        // Diagonal gap of sqrt(0.8² + 0.8²) ≈ 1.13 > radius 1
        assert!(!overlaps(&ball(10.8, 10.8, 1.0), &p));
        // sqrt(0.6² + 0.6²) ≈ 0.85 < radius 1
        assert!(overlaps(&ball(10.6, 10.6, 1.0), &p));
    }

    #[test]
    fn test_closest_point() {
        let p = paddle(10.0, 200.0, 15.0, 100.0);
        assert_eq!(
            closest_point_on_paddle(Vec2::new(40.0, 150.0), &p),
            Vec2::new(25.0, 200.0)
        );
        assert_eq!(
            closest_point_on_paddle(Vec2::new(20.0, 250.0), &p),
            Vec2::new(20.0, 250.0)
        );
    }
}
