//! Idle/demo driver
//!
//! Produces the input a player would: press start, then chase the point where
//! the ball will meet the wall.

use glam::Vec2;

use super::state::{GamePhase, GameState};
use super::tick::TickInput;
use crate::{cartesian_to_polar, shortest_angle_delta};

/// Angle (degrees) where the ball's straight-line path meets the wall
///
/// The ball touches the wall when its center reaches `arena_radius - ball_radius`.
/// Returns `None` for a stationary ball.
pub fn predict_wall_angle(pos: Vec2, vel: Vec2, contact_radius: f32) -> Option<f32> {
    let a = vel.length_squared();
    if a < f32::EPSILON {
        return None;
    }
    let b = 2.0 * pos.dot(vel);
    let c = pos.length_squared() - contact_radius * contact_radius;
    let discriminant = (b * b - 4.0 * a * c).max(0.0);
    let t = ((-b + discriminant.sqrt()) / (2.0 * a)).max(0.0);

    let (_, angle) = cartesian_to_polar(pos + vel * t);
    Some(angle)
}

/// Derive this frame's input from the state
pub fn drive(state: &GameState) -> TickInput {
    let mut input = TickInput::default();

    match state.phase {
        GamePhase::NotStarted => input.start = true,
        GamePhase::Playing => {
            let contact_radius = state.rules.arena_radius - state.ball.radius;
            if let Some(target) = predict_wall_angle(state.ball.pos, state.ball.vel, contact_radius)
            {
                let delta = shortest_angle_delta(state.paddle.angle, target);
                // Hold still once a single step would overshoot
                let dead_zone = state.rules.paddle_step / 2.0;
                if delta < -dead_zone {
                    input.left = true;
                } else if delta > dead_zone {
                    input.right = true;
                }
            }
        }
    }

    input
}
