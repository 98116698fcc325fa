//! Circle Pong - keep the ball inside the ring
//!
//! Core modules:
//! - `sim`: Simulation (ball, paddle, collisions, game state)
//! - `renderer`: Backend-agnostic draw lists and tessellation
//! - `platform`: Window/input abstraction
//! - `persistence`: High score storage
//! - `settings`: Tunables loaded from disk
//! - `app`: Frame loop tying everything together

pub mod app;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::App;
pub use persistence::{HighScoreFile, HighScoreStore, MemoryStore};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Window dimensions (logical pixels)
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 800;
    /// Frame rate the platform is asked to hold; the sim steps once per frame
    pub const TARGET_FPS: u32 = 60;

    /// Arena dimensions
    pub const ARENA_RADIUS: f32 = 300.0;
    /// Outline is drawn as a regular polygon with this many sides
    pub const ARENA_SIDES: usize = 100;
    pub const ARENA_THICKNESS: f32 = 6.0;

    /// Paddle defaults (degrees)
    pub const PADDLE_ARC_WIDTH: f32 = 30.0;
    pub const PADDLE_START_ANGLE: f32 = 270.0;
    pub const PADDLE_STEP: f32 = 6.0;
    /// Paddle dots sit just outside the arena wall
    pub const PADDLE_DOT_OFFSET: f32 = 5.0;
    pub const PADDLE_DOT_RADIUS: f32 = 8.0;

    /// Ball defaults (pixels, pixels per frame)
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_SPEED: f32 = 5.0;
    /// Added to ball speed on every paddle hit
    pub const BALL_SPEED_INCREMENT: f32 = 0.2;
    /// Random rotation applied after a paddle bounce (± degrees)
    pub const MAX_DEFLECTION: f32 = 10.0;

    /// Where the high score lives
    pub const HIGHSCORE_FILE: &str = "highscore.txt";
    pub const SETTINGS_FILE: &str = "settings.json";
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Signed shortest rotation from `from` to `to`, in (-180, 180]
#[inline]
pub fn shortest_angle_delta(from: f32, to: f32) -> f32 {
    let delta = wrap_degrees(to - from);
    if delta > 180.0 { delta - 360.0 } else { delta }
}

/// Convert polar (r, degrees) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, degrees: f32) -> Vec2 {
    let theta = degrees.to_radians();
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, degrees in [0, 360))
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), wrap_degrees(pos.y.atan2(pos.x).to_degrees()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(366.0), 6.0);
        assert_eq!(wrap_degrees(-6.0), 354.0);
        assert_eq!(wrap_degrees(-720.0), 0.0);
        // Must never return 360 itself
        assert!(wrap_degrees(-1e-7) < 360.0);
    }

    #[test]
    fn test_shortest_angle_delta() {
        assert_eq!(shortest_angle_delta(350.0, 10.0), 20.0);
        assert_eq!(shortest_angle_delta(10.0, 350.0), -20.0);
        assert_eq!(shortest_angle_delta(90.0, 270.0), 180.0);
        assert_eq!(shortest_angle_delta(45.0, 45.0), 0.0);
    }

    #[test]
    fn test_polar_roundtrip_bottom() {
        // y-down screen orientation: 90 degrees points toward the bottom
        let p = polar_to_cartesian(300.0, 90.0);
        assert!(p.x.abs() < 1e-3);
        assert!((p.y - 300.0).abs() < 1e-3);

        let (r, deg) = cartesian_to_polar(Vec2::new(0.0, -100.0));
        assert!((r - 100.0).abs() < 1e-4);
        assert!((deg - 270.0).abs() < 1e-4);
    }
}
