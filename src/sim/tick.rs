//! Per-frame simulation step
//!
//! Advances the game by exactly one display frame. Velocities are in pixels
//! per frame, so there is no timestep parameter.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::overlaps;
use super::opponent::step_opponent;
use super::snapshot::Snapshot;
use super::state::GameState;
use crate::config::{ConfigError, GameConfig};
use crate::consts::PADDLE_SPIN;

/// What happened during one step (for logging and tests)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEvents {
    /// Ball bounced off the top or bottom wall
    pub wall_bounce: bool,
    pub player_hit: bool,
    pub opponent_hit: bool,
    /// Ball left the field and was served again from the center
    pub respawned: bool,
}

impl StepEvents {
    pub fn any(&self) -> bool {
        self.wall_bounce || self.player_hit || self.opponent_hit || self.respawned
    }
}

/// Advance the game state by one frame.
///
/// Order matters and is fixed: pending player input, ball integration,
/// top/bottom walls, player paddle, opponent paddle, out-of-bounds respawn,
/// then the opponent controller. Positions are not re-checked after a
/// paddle bounce, so a very fast ball can pass through a paddle.
pub fn step<R: Rng>(state: &mut GameState, rng: &mut R) -> StepEvents {
    let mut events = StepEvents::default();
    let width = state.config.width;
    let height = state.config.height;

    state.apply_player_target();

    let ball = &mut state.ball;
    ball.pos += ball.vel;

    // Top/bottom walls
    if ball.top() < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
        events.wall_bounce = true;
    }
    if ball.bottom() > height {
        ball.pos.y = height - ball.radius;
        ball.vel.y = -ball.vel.y;
        events.wall_bounce = true;
    }

    // Paddles: push the ball clear of the face it hit and add a little spin
    if overlaps(&state.ball, &state.player) {
        let ball = &mut state.ball;
        ball.pos.x = state.player.right() + ball.radius;
        ball.vel.x = -ball.vel.x;
        ball.vel.y += rng.random_range(-PADDLE_SPIN..PADDLE_SPIN);
        events.player_hit = true;
    }
    if overlaps(&state.ball, &state.opponent) {
        let ball = &mut state.ball;
        ball.pos.x = state.opponent.left() - ball.radius;
        ball.vel.x = -ball.vel.x;
        ball.vel.y += rng.random_range(-PADDLE_SPIN..PADDLE_SPIN);
        events.opponent_hit = true;
    }

    // Out of bounds: no scoring, just serve again
    if state.ball.left() < 0.0 || state.ball.right() > width {
        log::debug!(
            "Ball out at ({:.1}, {:.1}), respawning",
            state.ball.pos.x,
            state.ball.pos.y
        );
        state.respawn_ball(rng);
        events.respawned = true;
    }

    step_opponent(
        &mut state.opponent,
        &state.ball,
        state.config.paddle_speed,
        height,
    );

    events
}

/// A running game: state plus the random source that drives it.
///
/// The RNG is injected so tests and replays can fix the sequence of serve
/// directions and paddle spins.
#[derive(Debug, Clone)]
pub struct Simulation<R = Pcg32> {
    state: GameState,
    rng: R,
    frame: u64,
}

impl Simulation<Pcg32> {
    /// Validated simulation with a PCG generator seeded from `seed`
    pub fn from_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulation<R> {
    /// Validate `config` and serve the first ball
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(config, &mut rng);
        Ok(Self {
            state,
            rng,
            frame: 0,
        })
    }

    /// Advance one frame
    pub fn step(&mut self) -> StepEvents {
        self.frame += 1;
        let events = step(&mut self.state, &mut self.rng);
        if events.any() {
            log::trace!("Frame {}: {:?}", self.frame, events);
        }
        events
    }

    /// Pointer input: desired top edge of the player paddle, in playfield
    /// coordinates. Applied at the start of the next step.
    pub fn set_player_target_y(&mut self, y: f32) {
        self.state.set_player_target_y(y);
    }

    /// Read-only copy of everything the renderer needs
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::capture(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.state.config
    }

    /// Number of steps taken so far
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::Rng;

    fn new_state(seed: u64) -> (GameState, Pcg32) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = GameState::new(GameConfig::default(), &mut rng);
        (state, rng)
    }

    #[test]
    fn test_integrates_velocity() {
        let (mut state, mut rng) = new_state(1);
        state.ball.pos = Vec2::new(400.0, 250.0);
        state.ball.vel = Vec2::new(5.0, -2.5);

        let events = step(&mut state, &mut rng);
        assert_eq!(state.ball.pos, Vec2::new(405.0, 247.5));
        assert!(!events.any());
    }

    #[test]
    fn test_top_wall_reflection() {
        let (mut state, mut rng) = new_state(1);
        state.ball.pos = Vec2::new(400.0, BALL_RADIUS - 1.0);
        state.ball.vel = Vec2::new(0.0, -3.0);

        let events = step(&mut state, &mut rng);
        assert_eq!(state.ball.pos.y, BALL_RADIUS);
        assert_eq!(state.ball.vel.y, 3.0);
        assert!(events.wall_bounce);
    }

    #[test]
    fn test_bottom_wall_reflection() {
        let (mut state, mut rng) = new_state(1);
        state.ball.pos = Vec2::new(400.0, FIELD_HEIGHT - BALL_RADIUS - 1.0);
        state.ball.vel = Vec2::new(5.0, 4.0);

        step(&mut state, &mut rng);
        assert_eq!(state.ball.pos.y, FIELD_HEIGHT - BALL_RADIUS);
        assert_eq!(state.ball.vel, Vec2::new(5.0, -4.0));
    }

    #[test]
    fn test_player_paddle_reflection() {
        let (mut state, mut rng) = new_state(3);
        // Player paddle spans x 10..25, y 200..300
        state.ball.pos = Vec2::new(35.0, 250.0);
        state.ball.vel = Vec2::new(-5.0, 1.5);

        // The spin is the next draw from the generator
        let mut probe = rng.clone();
        let spin: f32 = probe.random_range(-PADDLE_SPIN..PADDLE_SPIN);

        let events = step(&mut state, &mut rng);
        assert!(events.player_hit);
        assert!(!events.respawned);
        assert_eq!(
            state.ball.pos.x,
            state.player.pos.x + state.player.width + state.ball.radius
        );
        assert_eq!(state.ball.vel.x, 5.0);
        assert_eq!(state.ball.vel.y, 1.5 + spin);
        assert!((state.ball.vel.y - 1.5).abs() <= 1.0);
    }

    #[test]
    fn test_opponent_paddle_reflection() {
        let (mut state, mut rng) = new_state(4);
        // Opponent paddle spans x 775..790, y 200..300
        state.ball.pos = Vec2::new(760.0, 250.0);
        state.ball.vel = Vec2::new(5.0, 0.0);

        let events = step(&mut state, &mut rng);
        assert!(events.opponent_hit);
        assert_eq!(state.ball.pos.x, state.opponent.pos.x - state.ball.radius);
        assert_eq!(state.ball.vel.x, -5.0);
        assert!(state.ball.vel.y.abs() <= 1.0);
    }

    #[test]
    fn test_respawn_left() {
        let (mut state, mut rng) = new_state(5);
        state.ball.pos = Vec2::new(-1.0, 100.0);
        state.ball.vel = Vec2::new(-3.0, 2.0);

        let mut probe = rng.clone();
        let right = probe.random_bool(0.5);
        let vy = BALL_SPEED * probe.random_range(-1.0f32..1.0);

        let events = step(&mut state, &mut rng);
        assert!(events.respawned);
        assert_eq!(state.ball.pos, Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0));
        assert_eq!(state.ball.vel.x.abs(), BALL_SPEED);
        assert_eq!(state.ball.vel.x > 0.0, right);
        assert_eq!(state.ball.vel.y, vy);
    }

    #[test]
    fn test_respawn_right() {
        let (mut state, mut rng) = new_state(6);
        state.ball.pos = Vec2::new(FIELD_WIDTH - 5.0, 60.0);
        state.ball.vel = Vec2::new(5.0, 0.0);

        let events = step(&mut state, &mut rng);
        assert!(events.respawned);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 250.0));
    }

    #[test]
    fn test_player_input_applied_before_collision() {
        let (mut state, mut rng) = new_state(7);
        // Ball next to where the paddle is about to be, not where it is now
        state.ball.pos = Vec2::new(35.0, 60.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);
        state.set_player_target_y(10.0);

        let events = step(&mut state, &mut rng);
        assert_eq!(state.player.pos.y, 10.0);
        assert!(events.player_hit);
        assert_eq!(state.ball.vel.x, 5.0);
    }

    #[test]
    fn test_opponent_moves_after_ball() {
        let (mut state, mut rng) = new_state(8);
        state.ball.pos = Vec2::new(400.0, 100.0);
        state.ball.vel = Vec2::new(5.0, 0.0);

        step(&mut state, &mut rng);
        // Opponent started centered at 200, target is 100 - 50 = 50
        assert_eq!(state.opponent.pos.y, 195.0);
        // Player has no pending input
        assert_eq!(state.player.pos.y, 200.0);
    }

    #[test]
    fn test_simulation_rejects_bad_config() {
        let config = GameConfig {
            ball_radius: 300.0,
            ..Default::default()
        };
        assert!(matches!(
            Simulation::from_seed(config, 1),
            Err(ConfigError::BallTooLarge { .. })
        ));
    }

    #[test]
    fn test_simulation_counts_frames() {
        let mut sim = Simulation::from_seed(GameConfig::default(), 11).unwrap();
        assert_eq!(sim.frame(), 0);
        for _ in 0..10 {
            sim.step();
        }
        assert_eq!(sim.frame(), 10);
    }

    #[test]
    fn test_determinism() {
        // Same seed and input should produce identical results
        let mut sim1 = Simulation::from_seed(GameConfig::default(), 99999).unwrap();
        let mut sim2 = Simulation::from_seed(GameConfig::default(), 99999).unwrap();

        for frame in 0..2000 {
            if frame % 7 == 0 {
                let y = (frame % 400) as f32;
                sim1.set_player_target_y(y);
                sim2.set_player_target_y(y);
            }
            assert_eq!(sim1.step(), sim2.step());
        }

        assert_eq!(sim1.state().ball, sim2.state().ball);
        assert_eq!(sim1.state().player, sim2.state().player);
        assert_eq!(sim1.state().opponent, sim2.state().opponent);
    }

    #[test]
    fn test_rally_with_tracking_player() {
        // A player that follows the ball exactly keeps returning it
        let mut sim = Simulation::from_seed(GameConfig::default(), 2024).unwrap();
        let mut player_hits = 0;
        for _ in 0..3000 {
            let ball_y = sim.state().ball.pos.y;
            sim.set_player_target_y(ball_y - PADDLE_HEIGHT / 2.0);
            if sim.step().player_hit {
                player_hits += 1;
            }
        }
        assert!(player_hits > 0);
    }

    proptest! {
        #[test]
        fn prop_paddles_stay_in_bounds(
            seed in any::<u64>(),
            targets in prop::collection::vec(proptest::option::of(-1000.0f32..1500.0), 1..400),
        ) {
            let mut sim = Simulation::from_seed(GameConfig::default(), seed).unwrap();
            for target in targets {
                if let Some(y) = target {
                    sim.set_player_target_y(y);
                }
                sim.step();
                let state = sim.state();
                for paddle in [&state.player, &state.opponent] {
                    prop_assert!(paddle.pos.y >= 0.0);
                    prop_assert!(paddle.pos.y <= FIELD_HEIGHT - PADDLE_HEIGHT);
                }
            }
        }

        #[test]
        fn prop_horizontal_speed_only_flips(seed in any::<u64>(), frames in 1usize..1500) {
            let mut sim = Simulation::from_seed(GameConfig::default(), seed).unwrap();
            for _ in 0..frames {
                let before = sim.state().ball.vel.x;
                let events = sim.step();
                let after = sim.state().ball.vel.x;
                prop_assert_eq!(after.abs(), BALL_SPEED);
                if !events.respawned && !events.player_hit && !events.opponent_hit {
                    prop_assert_eq!(after, before);
                }
            }
        }

        #[test]
        fn prop_ball_inside_vertical_walls(seed in any::<u64>(), frames in 1usize..1500) {
            let mut sim = Simulation::from_seed(GameConfig::default(), seed).unwrap();
            for _ in 0..frames {
                sim.step();
                let ball = &sim.state().ball;
                prop_assert!(ball.top() >= 0.0);
                prop_assert!(ball.bottom() <= FIELD_HEIGHT);
            }
        }
    }
}
