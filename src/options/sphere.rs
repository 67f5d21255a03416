use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the sphere picks its position each frame.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MotionMode {
    /// Oscillate around the base position on independent waves.
    #[default]
    Drift,
    /// Pursue the pointer target through the smoothing filter.
    Follow,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Sphere", inline)]
#[serde(default)]
/// Glowing-sphere color, material, geometry, and motion parameters.
pub struct SphereOptions {
    /// Red component of the base color.
    #[schemars(title = "Base Red", range(min = 0.0, max = 1.0), extend("step" = 0.1))]
    pub base_red: f32,
    /// Green component of the base color.
    #[schemars(title = "Base Green", range(min = 0.0, max = 1.0), extend("step" = 0.1))]
    pub base_green: f32,
    /// Blue component of the base color.
    #[schemars(title = "Base Blue", range(min = 0.0, max = 1.0), extend("step" = 0.1))]
    pub base_blue: f32,
    /// Frequency of the extra blue-channel emissive wave.
    #[schemars(title = "Glow Speed", range(min = 0.1, max = 2.0), extend("step" = 0.1))]
    pub glow_speed: f32,
    /// Amplitude of the extra blue-channel emissive wave.
    #[schemars(title = "Glow Intensity", range(min = 0.0, max = 2.0), extend("step" = 0.1))]
    pub glow_intensity: f32,
    /// Surface metalness, passed through to the renderer.
    #[schemars(title = "Metalness", range(min = 0.0, max = 1.0), extend("step" = 0.1))]
    pub metalness: f32,
    /// Surface roughness, passed through to the renderer.
    #[schemars(title = "Roughness", range(min = 0.0, max = 1.0), extend("step" = 0.1))]
    pub roughness: f32,
    /// Base emissive intensity the breathing wave oscillates around.
    #[schemars(title = "Emissive Intensity", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub emissive_intensity: f32,
    /// Opacity of the outer glow shell.
    #[schemars(title = "Glow Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub glow_opacity: f32,
    /// Sphere radius in scene units.
    #[schemars(title = "Size", range(min = 0.1, max = 1.0), extend("step" = 0.1))]
    pub radius: f32,
    /// Latitude/longitude tessellation segments.
    #[schemars(title = "Segments", range(min = 8, max = 64), extend("step" = 1))]
    pub segments: u32,
    /// Position strategy.
    #[schemars(title = "Motion")]
    pub motion_mode: MotionMode,
    /// Horizontal drift amplitude.
    #[schemars(title = "Drift Amplitude X", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub drift_amplitude_x: f32,
    /// Vertical drift amplitude.
    #[schemars(title = "Drift Amplitude Y", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub drift_amplitude_y: f32,
    /// Horizontal drift frequency in radians per second.
    #[schemars(title = "Drift Frequency X", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub drift_frequency_x: f32,
    /// Vertical drift frequency in radians per second.
    #[schemars(title = "Drift Frequency Y", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub drift_frequency_y: f32,
    /// Center the drift oscillates around, in scene units.
    #[schemars(skip)]
    pub base_position: [f32; 2],
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            base_red: 1.0,
            base_green: 0.3,
            base_blue: 0.1,
            glow_speed: 0.5,
            glow_intensity: 0.1,
            metalness: 0.0,
            roughness: 0.0,
            emissive_intensity: 2.0,
            glow_opacity: 0.3,
            radius: 0.3,
            segments: 8,
            motion_mode: MotionMode::Drift,
            drift_amplitude_x: 0.4,
            drift_amplitude_y: 0.2,
            drift_frequency_x: 0.07,
            drift_frequency_y: 0.05,
            base_position: [0.6, -1.2],
        }
    }
}

impl SphereOptions {
    /// Base color as an RGB triple.
    #[must_use]
    pub fn base_rgb(&self) -> [f32; 3] {
        [self.base_red, self.base_green, self.base_blue]
    }
}
