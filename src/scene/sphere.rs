use glam::{Vec2, Vec3};

use crate::animation::{
    ColorOscillator, ColorSample, Follow, MotionInput, MotionState,
    Oscillation, Wave,
};
use crate::options::{MotionMode, SphereOptions};

/// Depth plane the sphere moves in.
pub const SPHERE_Z: f32 = -1.0;
/// Radius multiplier for the outer glow shell.
pub const HALO_SCALE: f32 = 1.5;

/// Gentle rocking applied to the sphere's x and z rotation.
const WOBBLE_X: Wave = Wave {
    amplitude: 0.05,
    frequency: 0.5,
    phase: 0.0,
};
const WOBBLE_Z: Wave = Wave {
    amplitude: 0.05,
    frequency: 0.4,
    phase: std::f32::consts::FRAC_PI_2,
};

/// Everything the renderer needs to draw the sphere for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereFrame {
    /// World position.
    pub position: Vec3,
    /// Euler rotation in radians.
    pub rotation: Vec3,
    /// Oscillated color state.
    pub color: ColorSample,
    /// Sphere radius in scene units.
    pub radius: f32,
    /// Tessellation segments on both axes.
    pub segments: u32,
    /// Opacity of the outer glow shell.
    pub glow_opacity: f32,
}

impl SphereFrame {
    /// Radius of the outer glow shell around the sphere.
    #[must_use]
    pub fn halo_radius(&self) -> f32 {
        self.radius * HALO_SCALE
    }
}

/// The glowing sphere behind the panel: motion strategy, color oscillator,
/// and the material/geometry values passed through per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowSphere {
    motion: MotionState,
    color: ColorOscillator,
    last_position: Vec2,
    radius: f32,
    segments: u32,
    glow_opacity: f32,
}

impl GlowSphere {
    /// Sphere configured from options, resting at its base position.
    #[must_use]
    pub fn new(options: &SphereOptions) -> Self {
        let base = Vec2::from(options.base_position);
        let motion = match options.motion_mode {
            MotionMode::Drift => MotionState::Drift(Self::drift(options)),
            MotionMode::Follow => MotionState::Follow(Follow::new(base)),
        };
        Self {
            motion,
            color: Self::oscillator(options),
            last_position: base,
            radius: options.radius,
            segments: options.segments,
            glow_opacity: options.glow_opacity,
        }
    }

    /// Apply new options.
    ///
    /// Drift parameters take effect immediately (the strategy is stateless).
    /// A switch into follow mode seeds the filter at the current position so
    /// the sphere glides rather than jumps; staying in follow mode keeps the
    /// filter state untouched.
    pub fn apply_options(&mut self, options: &SphereOptions) {
        self.color = Self::oscillator(options);
        self.radius = options.radius;
        self.segments = options.segments;
        self.glow_opacity = options.glow_opacity;
        match options.motion_mode {
            MotionMode::Drift => {
                self.motion = MotionState::Drift(Self::drift(options));
            }
            MotionMode::Follow => {
                if !matches!(self.motion, MotionState::Follow(_)) {
                    self.motion = MotionState::Follow(Follow::new(
                        self.last_position,
                    ));
                }
            }
        }
    }

    /// Advance one tick and assemble the frame values.
    pub fn update(&mut self, input: &MotionInput) -> SphereFrame {
        let planar = self.motion.update(input);
        self.last_position = planar;
        SphereFrame {
            position: Vec3::new(planar.x, planar.y, SPHERE_Z),
            rotation: Vec3::new(
                WOBBLE_X.eval(input.elapsed),
                0.0,
                WOBBLE_Z.eval(input.elapsed),
            ),
            color: self.color.sample(input.elapsed),
            radius: self.radius,
            segments: self.segments,
            glow_opacity: self.glow_opacity,
        }
    }

    /// Planar position from the most recent update.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.last_position
    }

    fn drift(options: &SphereOptions) -> Oscillation {
        Oscillation {
            base: Vec2::from(options.base_position),
            x: Wave::sine(
                options.drift_amplitude_x,
                options.drift_frequency_x,
            ),
            y: Wave::cosine(
                options.drift_amplitude_y,
                options.drift_frequency_y,
            ),
        }
    }

    fn oscillator(options: &SphereOptions) -> ColorOscillator {
        ColorOscillator::new(
            options.base_rgb(),
            options.emissive_intensity,
            Wave::sine(options.glow_intensity, options.glow_speed),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn input(elapsed: f32, raw_target: Vec2) -> MotionInput {
        MotionInput {
            raw_target,
            dt: 1.0 / 30.0,
            elapsed,
        }
    }

    #[test]
    fn test_drift_rests_on_its_waves_at_zero() {
        let mut sphere = GlowSphere::new(&SphereOptions::default());
        let frame = sphere.update(&input(0.0, Vec2::ZERO));

        // x wave is a sine (zero at t = 0), y wave a cosine (peak at t = 0).
        assert!((frame.position.x - 0.6).abs() < EPSILON);
        assert!((frame.position.y - -1.0).abs() < EPSILON);
        assert!((frame.position.z - SPHERE_Z).abs() < EPSILON);

        // Same structure for the wobble: sine on x, cosine on z.
        assert!(frame.rotation.x.abs() < EPSILON);
        assert!(frame.rotation.y.abs() < EPSILON);
        assert!((frame.rotation.z - 0.05).abs() < EPSILON);
    }

    #[test]
    fn test_follow_mode_pursues_the_pointer() {
        let options = SphereOptions {
            motion_mode: MotionMode::Follow,
            ..SphereOptions::default()
        };
        let mut sphere = GlowSphere::new(&options);
        let target = Vec2::new(0.9, -0.6);

        let start = (target - sphere.position()).length();
        for i in 0..200 {
            let _ = sphere.update(&input(i as f32 / 30.0, target));
        }
        let end = (target - sphere.position()).length();
        assert!(end < start * 0.01, "sphere did not close in: {end}");
    }

    #[test]
    fn test_switch_to_follow_keeps_the_position() {
        let mut sphere = GlowSphere::new(&SphereOptions::default());
        let drifted = sphere.update(&input(7.0, Vec2::ZERO)).position;

        let options = SphereOptions {
            motion_mode: MotionMode::Follow,
            ..SphereOptions::default()
        };
        sphere.apply_options(&options);
        let frame = sphere.update(&input(7.03, Vec2::new(1.0, -0.5)));

        // One easing step away from where the drift left it, at most.
        let step = (frame.position - drifted).truncate().length();
        assert!(step < 0.05, "sphere jumped on mode switch: {step}");
    }

    #[test]
    fn test_follow_options_update_keeps_filter_state() {
        let options = SphereOptions {
            motion_mode: MotionMode::Follow,
            ..SphereOptions::default()
        };
        let mut sphere = GlowSphere::new(&options);
        let mut reference = GlowSphere::new(&options);
        let target = Vec2::new(0.5, -0.7);
        for i in 0..50 {
            let tick = input(i as f32 / 30.0, target);
            let _ = sphere.update(&tick);
            let _ = reference.update(&tick);
        }

        // A radius tweak must not reset the pursuit.
        let resized = SphereOptions {
            motion_mode: MotionMode::Follow,
            radius: 0.5,
            ..SphereOptions::default()
        };
        sphere.apply_options(&resized);

        let tick = input(51.0 / 30.0, target);
        let frame = sphere.update(&tick);
        let expected = reference.update(&tick);
        assert!((frame.radius - 0.5).abs() < EPSILON);
        assert_eq!(frame.position, expected.position);
    }

    #[test]
    fn test_frame_passes_material_values_through() {
        let options = SphereOptions {
            radius: 0.4,
            segments: 16,
            glow_opacity: 0.6,
            ..SphereOptions::default()
        };
        let mut sphere = GlowSphere::new(&options);
        let frame = sphere.update(&input(0.0, Vec2::ZERO));

        assert_eq!(frame.segments, 16);
        assert!((frame.radius - 0.4).abs() < EPSILON);
        assert!((frame.glow_opacity - 0.6).abs() < EPSILON);
        assert!((frame.halo_radius() - 0.6).abs() < EPSILON);
    }

    #[test]
    fn test_color_comes_from_the_oscillator() {
        let options = SphereOptions::default();
        let mut sphere = GlowSphere::new(&options);
        let expected = ColorOscillator::new(
            options.base_rgb(),
            options.emissive_intensity,
            Wave::sine(options.glow_intensity, options.glow_speed),
        )
        .sample(4.2);
        let frame = sphere.update(&input(4.2, Vec2::ZERO));
        assert_eq!(frame.color, expected);
    }
}
