//! Game state and core simulation types
//!
//! Positions are relative to the arena center with the screen's y-down
//! orientation, so 270 degrees is the top of the screen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arc::ArcSpan;
use super::collision::{WallContact, ball_wall_contact, deflect_velocity};
use super::random::RandomSource;
use crate::consts::*;
use crate::{polar_to_cartesian, wrap_degrees};

/// Gameplay tunables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub arena_radius: f32,
    pub ball_radius: f32,
    pub ball_start_speed: f32,
    pub speed_increment: f32,
    /// Max random rotation after a paddle bounce (degrees)
    pub max_deflection: f32,
    /// Paddle arc width (degrees)
    pub paddle_arc_width: f32,
    pub paddle_start_angle: f32,
    /// Paddle movement per frame while a direction is held (degrees)
    pub paddle_step: f32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            arena_radius: ARENA_RADIUS,
            ball_radius: BALL_RADIUS,
            ball_start_speed: BALL_START_SPEED,
            speed_increment: BALL_SPEED_INCREMENT,
            max_deflection: MAX_DEFLECTION,
            paddle_arc_width: PADDLE_ARC_WIDTH,
            paddle_start_angle: PADDLE_START_ANGLE,
            paddle_step: PADDLE_STEP,
        }
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start input
    NotStarted,
    /// Active gameplay (misses reset in place, there is no game over)
    Playing,
}

/// What happened to the ball this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Inside,
    Hit,
    Miss,
}

/// Notifications produced by a tick, consumed by the orchestration layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Left the NotStarted phase
    Started,
    /// Ball bounced off the paddle
    PaddleHit { score: u32, speed: f32 },
    /// Ball left the arena; score was reset
    Missed { lost_score: u32 },
    /// High score was beaten and should be persisted
    NewHighScore(u32),
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Velocity magnitude after the next bounce; grows with every hit
    pub speed: f32,
}

impl Ball {
    pub fn new(rules: &Rules, rng: &mut impl RandomSource) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: rules.ball_radius,
            speed: rules.ball_start_speed,
        };
        ball.reset(rng);
        ball
    }

    /// Back to the center with a random heading. Speed is kept.
    pub fn reset(&mut self, rng: &mut impl RandomSource) {
        self.pos = Vec2::ZERO;
        self.vel = polar_to_cartesian(self.speed, rng.launch_angle());
    }

    /// Advance one frame and resolve contact with the arena wall
    pub fn update(&mut self, paddle: &Paddle, rules: &Rules, rng: &mut impl RandomSource) -> Contact {
        self.pos += self.vel;

        match ball_wall_contact(self.pos, self.radius, rules.arena_radius, &paddle.span()) {
            WallContact::Clear => Contact::Inside,
            WallContact::Paddle { normal, .. } => {
                let deflection = rng.deflection(rules.max_deflection);
                self.vel = deflect_velocity(self.vel, normal, deflection, self.speed);
                self.speed += rules.speed_increment;
                Contact::Hit
            }
            WallContact::Open { .. } => {
                self.reset(rng);
                Contact::Miss
            }
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Current angle (degrees, center of paddle arc, in [0, 360))
    pub angle: f32,
    /// Angular width of paddle (degrees)
    pub arc_width: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            angle: PADDLE_START_ANGLE,
            arc_width: PADDLE_ARC_WIDTH,
        }
    }
}

impl Paddle {
    pub fn new(rules: &Rules) -> Self {
        Self {
            angle: wrap_degrees(rules.paddle_start_angle),
            arc_width: rules.paddle_arc_width,
        }
    }

    /// The paddle's hit-test span
    pub fn span(&self) -> ArcSpan {
        ArcSpan::centered(self.angle, self.arc_width)
    }

    /// Move by `step` degrees per held direction; both held cancel out
    pub fn steer(&mut self, left: bool, right: bool, step: f32) {
        if left {
            self.angle -= step;
        }
        if right {
            self.angle += step;
        }
        self.angle = wrap_degrees(self.angle);
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub rules: Rules,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    pub score: u32,
    pub high_score: u32,
}

impl GameState {
    pub fn new(rules: Rules, high_score: u32, rng: &mut impl RandomSource) -> Self {
        Self {
            rules,
            phase: GamePhase::NotStarted,
            ball: Ball::new(&rules, rng),
            paddle: Paddle::new(&rules),
            score: 0,
            high_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::ScriptedSource;
    use proptest::prelude::*;

    #[test]
    fn test_ball_reset_keeps_speed() {
        let rules = Rules::default();
        let mut rng = ScriptedSource::new(&[0.0, 90.0], &[]);
        let mut ball = Ball::new(&rules, &mut rng);
        assert!((ball.vel.x - 5.0).abs() < 1e-5);

        ball.pos = Vec2::new(40.0, 12.0);
        ball.speed = 7.4;
        ball.reset(&mut rng);
        assert_eq!(ball.pos, Vec2::ZERO);
        assert_eq!(ball.speed, 7.4);
        assert_eq!(ball.radius, rules.ball_radius);
        assert!(ball.vel.x.abs() < 1e-4);
        assert!((ball.vel.y - 7.4).abs() < 1e-4);
    }

    #[test]
    fn test_ball_inside_moves_only() {
        let rules = Rules::default();
        let mut rng = ScriptedSource::constant(0.0);
        let mut ball = Ball::new(&rules, &mut rng);
        let paddle = Paddle::new(&rules);

        assert_eq!(ball.update(&paddle, &rules, &mut rng), Contact::Inside);
        assert_eq!(ball.pos, Vec2::new(5.0, 0.0));
        assert_eq!(ball.speed, 5.0);
    }

    #[test]
    fn test_ball_hit_reflects_and_speeds_up() {
        let rules = Rules::default();
        let mut rng = ScriptedSource::constant(0.0);
        let mut ball = Ball::new(&rules, &mut rng);
        let paddle = Paddle::new(&rules);

        ball.pos = Vec2::new(0.0, -288.0);
        ball.vel = Vec2::new(0.0, -5.0);
        assert_eq!(ball.update(&paddle, &rules, &mut rng), Contact::Hit);
        assert!(ball.vel.x.abs() < 1e-4);
        assert!((ball.vel.y - 5.0).abs() < 1e-4);
        assert!((ball.speed - 5.2).abs() < 1e-5);
    }

    #[test]
    fn test_ball_miss_resets_position_not_speed() {
        let rules = Rules::default();
        let mut rng = ScriptedSource::constant(0.0);
        let mut ball = Ball::new(&rules, &mut rng);
        let paddle = Paddle::new(&rules);

        ball.speed = 6.0;
        ball.pos = Vec2::new(0.0, 288.0);
        ball.vel = Vec2::new(0.0, 5.0);
        assert_eq!(ball.update(&paddle, &rules, &mut rng), Contact::Miss);
        assert_eq!(ball.pos, Vec2::ZERO);
        assert_eq!(ball.speed, 6.0);
        assert!((ball.vel.length() - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_ball_past_seam_misses_paddle_at_5_degrees() {
        let rules = Rules::default();
        let mut rng = ScriptedSource::constant(0.0);
        let mut ball = Ball::new(&rules, &mut rng);
        let paddle = Paddle {
            angle: 5.0,
            arc_width: 30.0,
        };

        let pos = polar_to_cartesian(288.0, 355.0);
        ball.pos = pos;
        ball.vel = pos.normalize() * 5.0;
        assert_eq!(ball.update(&paddle, &rules, &mut rng), Contact::Miss);
        assert_eq!(ball.pos, Vec2::ZERO);

        // Same paddle still catches a ball on its own side of the seam
        let pos = polar_to_cartesian(288.0, 15.0);
        ball.pos = pos;
        ball.vel = pos.normalize() * 5.0;
        assert_eq!(ball.update(&paddle, &rules, &mut rng), Contact::Hit);
    }

    #[test]
    fn test_paddle_wraps_past_360() {
        let mut paddle = Paddle {
            angle: 357.0,
            arc_width: 30.0,
        };
        paddle.steer(false, true, 6.0);
        assert!((paddle.angle - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_paddle_wraps_below_zero() {
        let mut paddle = Paddle {
            angle: 2.0,
            arc_width: 30.0,
        };
        paddle.steer(true, false, 6.0);
        assert!((paddle.angle - 356.0).abs() < 1e-4);
    }

    #[test]
    fn test_paddle_exactly_360_wraps_to_zero() {
        let mut paddle = Paddle {
            angle: 354.0,
            arc_width: 30.0,
        };
        paddle.steer(false, true, 6.0);
        assert_eq!(paddle.angle, 0.0);
    }

    #[test]
    fn test_paddle_both_directions_cancel() {
        let mut paddle = Paddle::default();
        paddle.steer(true, true, 6.0);
        assert_eq!(paddle.angle, 270.0);
    }

    #[test]
    fn test_new_state() {
        let mut rng = ScriptedSource::constant(0.0);
        let state = GameState::new(Rules::default(), 12, &mut rng);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 12);
        assert_eq!(state.paddle.angle, 270.0);
        assert_eq!(state.ball.pos, Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_paddle_angle_stays_in_range(
            start in 0.0f32..360.0,
            moves in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..200),
        ) {
            let mut paddle = Paddle { angle: start, arc_width: 30.0 };
            for (left, right) in moves {
                paddle.steer(left, right, 6.0);
                prop_assert!(paddle.angle >= 0.0 && paddle.angle < 360.0);
            }
        }
    }
}
