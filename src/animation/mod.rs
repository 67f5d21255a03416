//! Time-parameterized animation: motion strategies and color oscillation.
//!
//! Everything here is driven by an elapsed-time snapshot the scene takes
//! once per accepted frame, so evaluation order inside a frame cannot skew
//! results and irregular call rates are safe.

pub mod color;
pub mod motion;

pub use color::{ColorOscillator, ColorSample};
pub use motion::{Follow, MotionInput, MotionSample, MotionState, Oscillation};

use std::f32::consts::{FRAC_PI_2, TAU};

/// One sinusoidal component: `amplitude * sin(t * frequency + phase)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    /// Peak offset from the midline.
    pub amplitude: f32,
    /// Angular frequency applied to elapsed seconds.
    pub frequency: f32,
    /// Phase shift in radians.
    pub phase: f32,
}

impl Wave {
    /// Sine wave with zero phase.
    #[must_use]
    pub fn sine(amplitude: f32, frequency: f32) -> Self {
        Self {
            amplitude,
            frequency,
            phase: 0.0,
        }
    }

    /// Cosine wave, expressed as a quarter-turn phase lead.
    #[must_use]
    pub fn cosine(amplitude: f32, frequency: f32) -> Self {
        Self {
            amplitude,
            frequency,
            phase: FRAC_PI_2,
        }
    }

    /// Evaluate the wave at `elapsed` seconds.
    #[must_use]
    pub fn eval(&self, elapsed: f32) -> f32 {
        self.amplitude * (elapsed * self.frequency + self.phase).sin()
    }

    /// Length of one full cycle in seconds.
    #[must_use]
    pub fn period(&self) -> f32 {
        TAU / self.frequency
    }
}
