//! Angular span of the paddle arc
//!
//! The paddle lives on the arena wall, so only its angular extent matters for
//! hit testing. Angles are degrees in [0, 360).

use serde::{Deserialize, Serialize};

use crate::wrap_degrees;

/// An inclusive angular interval on the arena wall
///
/// Bounds are kept unwrapped: a paddle at 5 degrees spans [-10, 20], and a
/// ball angle in [0, 360) is compared against that range as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSpan {
    /// Start angle (degrees, center - width/2)
    pub start: f32,
    /// End angle (degrees, center + width/2)
    pub end: f32,
    /// Width in degrees
    pub width: f32,
}

impl ArcSpan {
    /// Span of `width` degrees centered on `center`
    pub fn centered(center: f32, width: f32) -> Self {
        Self {
            start: center - width / 2.0,
            end: center + width / 2.0,
            width,
        }
    }

    /// Check if an angle is within the span, edges included
    pub fn contains_angle(&self, degrees: f32) -> bool {
        let theta = wrap_degrees(degrees);
        theta >= self.start && theta <= self.end
    }

    /// Sample angles from start to end every `step` degrees, inclusive of start
    pub fn sample_angles(&self, step: f32) -> Vec<f32> {
        if step <= 0.0 {
            return Vec::new();
        }
        let count = (self.width / step).floor() as usize + 1;
        (0..count)
            .map(|i| wrap_degrees(self.start + i as f32 * step))
            .collect()
    }
}
