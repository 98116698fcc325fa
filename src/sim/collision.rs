//! Collision detection and response against the arena wall
//!
//! The wall is a circle centered on the origin. A ball touching or crossing it
//! either bounces off the paddle or is lost.

use glam::Vec2;

use super::arc::ArcSpan;
use crate::cartesian_to_polar;

/// Result of checking the ball against the arena wall
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WallContact {
    /// Ball is fully inside the arena
    Clear,
    /// Ball crossed the wall inside the paddle span
    Paddle {
        /// Outward unit normal at the crossing point
        normal: Vec2,
        /// Angular position of the ball (degrees)
        angle: f32,
    },
    /// Ball crossed the wall outside the paddle span
    Open { angle: f32 },
}

/// Check the ball against the arena wall and the paddle span
pub fn ball_wall_contact(
    ball_pos: Vec2,
    ball_radius: f32,
    arena_radius: f32,
    paddle: &ArcSpan,
) -> WallContact {
    let (distance, angle) = cartesian_to_polar(ball_pos);

    if distance + ball_radius <= arena_radius {
        return WallContact::Clear;
    }

    if paddle.contains_angle(angle) {
        // The ball is never at the center when crossing, so distance > 0
        WallContact::Paddle {
            normal: ball_pos / distance,
            angle,
        }
    } else {
        WallContact::Open { angle }
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Rotate a vector by the given number of degrees
#[inline]
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Paddle bounce: reflect, rotate by `deflection` degrees, rescale to `speed`
pub fn deflect_velocity(velocity: Vec2, normal: Vec2, deflection: f32, speed: f32) -> Vec2 {
    let reflected = reflect_velocity(velocity, normal);
    rotate_degrees(reflected, deflection).normalize_or_zero() * speed
}
