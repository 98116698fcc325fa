//! Random draws used by the simulation
//!
//! The sim never touches a global RNG. Everything random goes through
//! [`RandomSource`] so runs can be seeded and tests can script exact values.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of the two random angles the game needs
pub trait RandomSource {
    /// Launch direction in degrees, uniform over [0, 360)
    fn launch_angle(&mut self) -> f32;

    /// Post-bounce rotation in degrees, uniform over [-max, max]
    fn deflection(&mut self, max: f32) -> f32;
}

/// Seeded PCG generator
#[derive(Debug, Clone)]
pub struct PcgSource {
    rng: Pcg32,
}

impl PcgSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl RandomSource for PcgSource {
    fn launch_angle(&mut self) -> f32 {
        self.rng.random_range(0.0..360.0)
    }

    fn deflection(&mut self, max: f32) -> f32 {
        let max = clamp_max_deflection(max);
        if max <= 0.0 {
            return 0.0;
        }
        self.rng.random_range(-max..=max)
    }
}

/// Keep a settings-supplied bound usable as a sampling range: NaN means no
/// deflection and anything past half a turn is capped
fn clamp_max_deflection(max: f32) -> f32 {
    if max.is_nan() { 0.0 } else { max.clamp(0.0, 180.0) }
}

/// Replays fixed angles, falling back to a constant once exhausted
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    launches: VecDeque<f32>,
    deflections: VecDeque<f32>,
    fallback: f32,
}

impl ScriptedSource {
    pub fn new(launches: &[f32], deflections: &[f32]) -> Self {
        Self {
            launches: launches.iter().copied().collect(),
            deflections: deflections.iter().copied().collect(),
            fallback: 0.0,
        }
    }

    /// Every draw returns `angle`
    pub fn constant(angle: f32) -> Self {
        Self {
            fallback: angle,
            ..Self::default()
        }
    }
}

impl RandomSource for ScriptedSource {
    fn launch_angle(&mut self) -> f32 {
        self.launches.pop_front().unwrap_or(self.fallback)
    }

    fn deflection(&mut self, max: f32) -> f32 {
        let value = self.deflections.pop_front().unwrap_or(self.fallback);
        let max = clamp_max_deflection(max.abs());
        value.clamp(-max, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcg_ranges() {
        let mut source = PcgSource::new(42);
        for _ in 0..1000 {
            let launch = source.launch_angle();
            assert!((0.0..360.0).contains(&launch));
            let deflection = source.deflection(10.0);
            assert!((-10.0..=10.0).contains(&deflection));
        }
    }

    #[test]
    fn test_pcg_is_deterministic() {
        let mut a = PcgSource::new(7);
        let mut b = PcgSource::new(7);
        for _ in 0..16 {
            assert_eq!(a.launch_angle(), b.launch_angle());
            assert_eq!(a.deflection(10.0), b.deflection(10.0));
        }
    }

    #[test]
    fn test_pcg_zero_max() {
        assert_eq!(PcgSource::new(1).deflection(0.0), 0.0);
    }

    #[test]
    fn test_pcg_non_finite_max() {
        let mut source = PcgSource::new(5);
        for max in [f32::INFINITY, 1e39_f64 as f32] {
            let deflection = source.deflection(max);
            assert!((-180.0..=180.0).contains(&deflection));
        }
        assert_eq!(source.deflection(f32::NAN), 0.0);
        assert_eq!(source.deflection(f32::NEG_INFINITY), 0.0);

        let mut scripted = ScriptedSource::constant(5.0);
        assert_eq!(scripted.deflection(f32::NAN), 0.0);
    }

    #[test]
    fn test_scripted_replays_then_falls_back() {
        let mut source = ScriptedSource::new(&[90.0, 180.0], &[3.0, -25.0]);
        assert_eq!(source.launch_angle(), 90.0);
        assert_eq!(source.launch_angle(), 180.0);
        assert_eq!(source.launch_angle(), 0.0);
        assert_eq!(source.deflection(10.0), 3.0);
        // Clamped to the allowed range
        assert_eq!(source.deflection(10.0), -10.0);
        assert_eq!(source.deflection(10.0), 0.0);
    }
}
