use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Transmission-material parameters for the glass panel. The renderer owns
/// shading; every value here passes through unmodified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Material", inline)]
#[serde(default)]
pub struct MaterialOptions {
    /// Refraction sample count.
    #[schemars(title = "Samples", range(min = 1, max = 1024), extend("step" = 1))]
    pub samples: u32,
    /// Transmission buffer resolution in pixels.
    #[schemars(title = "Resolution", range(min = 256, max = 2048), extend("step" = 256))]
    pub resolution: u32,
    /// Refraction thickness of the glass volume.
    #[schemars(title = "Thickness", range(min = 0.0, max = 1.0), extend("step" = 0.1))]
    pub thickness: f32,
    /// Surface roughness.
    #[schemars(title = "Roughness", range(min = 0.0, max = 1.0), extend("step" = 0.1))]
    pub roughness: f32,
    /// Light transmission factor.
    #[schemars(title = "Transmission", range(min = 0.0, max = 1.0), extend("step" = 0.1))]
    pub transmission: f32,
    /// Index of refraction.
    #[schemars(title = "IOR", range(min = 1.0, max = 3.0), extend("step" = 0.1))]
    pub ior: f32,
    /// Refraction distortion strength.
    #[schemars(title = "Distortion", range(min = 0.0, max = 1.0), extend("step" = 0.1))]
    pub distortion: f32,
    /// Noise scale of the distortion field.
    #[schemars(title = "Distortion Scale", range(min = 0.0, max = 1.0), extend("step" = 0.1))]
    pub distortion_scale: f32,
    /// Animation speed of the distortion field.
    #[schemars(title = "Temporal Distortion", range(min = 0.0, max = 1.0), extend("step" = 0.1))]
    pub temporal_distortion: f32,
    /// Clearcoat layer strength.
    #[schemars(title = "Clearcoat", range(min = 0.0, max = 1.0), extend("step" = 0.1))]
    pub clearcoat: f32,
    /// Beer-Lambert attenuation distance through the volume.
    #[schemars(title = "Attenuation Distance", range(min = 0.0, max = 2.0), extend("step" = 0.1))]
    pub attenuation_distance: f32,
    /// Whether to shade the far side of the volume too.
    #[schemars(title = "Backside")]
    pub backside: bool,
    /// Attenuation tint through the volume.
    #[schemars(skip)]
    pub attenuation_color: [f32; 3],
}

impl Default for MaterialOptions {
    fn default() -> Self {
        Self {
            samples: 32,
            resolution: 256,
            thickness: 1.0,
            roughness: 0.4,
            transmission: 1.0,
            ior: 1.5,
            distortion: 1.0,
            distortion_scale: 1.0,
            temporal_distortion: 0.1,
            clearcoat: 0.0,
            attenuation_distance: 0.5,
            backside: true,
            attenuation_color: [1.0, 1.0, 1.0],
        }
    }
}
