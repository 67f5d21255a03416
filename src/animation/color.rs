//! Time-driven color and emissive oscillation.
//!
//! Every channel is a pure function of the scene clock: the displayed RGB is
//! the base color plus one low-amplitude [`Wave`] per channel, the emissive
//! RGB is the displayed color scaled down per channel with an extra glow wave
//! on blue, and the emissive intensity breathes around its configured base.
//! Two samples taken at the same elapsed time are identical.

use super::Wave;

/// Per-channel display waves, tuned so the color never leaves warm territory.
const RED_WAVE: Wave = Wave {
    amplitude: 0.1,
    frequency: 0.15,
    phase: 0.0,
};
const GREEN_WAVE: Wave = Wave {
    amplitude: 0.15,
    frequency: 0.25,
    phase: 0.0,
};
const BLUE_WAVE: Wave = Wave {
    amplitude: 0.05,
    frequency: 0.35,
    phase: 0.0,
};

/// Per-channel attenuation from display color to emissive color.
const EMISSIVE_SCALE: [f32; 3] = [0.5, 0.3, 0.2];

/// Intensity wave around the configured base emissive intensity.
const INTENSITY_WAVE: Wave = Wave {
    amplitude: 0.5,
    frequency: 0.4,
    phase: 0.0,
};

/// Snapshot of every oscillating color quantity at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample {
    /// Surface color handed to the material.
    pub display_rgb: [f32; 3],
    /// Emissive color, attenuated from the display color.
    pub emissive_rgb: [f32; 3],
    /// Emissive intensity around the configured base.
    pub emissive_intensity: f32,
}

/// Deterministic color animator for a glowing object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorOscillator {
    base_rgb: [f32; 3],
    base_intensity: f32,
    glow: Wave,
}

impl ColorOscillator {
    /// Oscillator around `base_rgb`, glowing on blue with the given wave.
    #[must_use]
    pub fn new(base_rgb: [f32; 3], base_intensity: f32, glow: Wave) -> Self {
        Self {
            base_rgb,
            base_intensity,
            glow,
        }
    }

    /// All color quantities at `elapsed` seconds.
    #[must_use]
    pub fn sample(&self, elapsed: f32) -> ColorSample {
        let display_rgb = [
            self.base_rgb[0] + RED_WAVE.eval(elapsed),
            self.base_rgb[1] + GREEN_WAVE.eval(elapsed),
            self.base_rgb[2] + BLUE_WAVE.eval(elapsed),
        ];
        let emissive_rgb = [
            display_rgb[0] * EMISSIVE_SCALE[0],
            display_rgb[1] * EMISSIVE_SCALE[1],
            display_rgb[2] * EMISSIVE_SCALE[2] + self.glow.eval(elapsed),
        ];
        ColorSample {
            display_rgb,
            emissive_rgb,
            emissive_intensity: self.base_intensity
                + INTENSITY_WAVE.eval(elapsed),
        }
    }
}
