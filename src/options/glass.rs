use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geometry::PanelShape;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Glass", inline)]
#[serde(default)]
/// Fluted-panel shape parameters.
pub struct GlassOptions {
    /// Number of corrugation units across the panel width.
    #[schemars(title = "Flutes", range(min = 5, max = 50), extend("step" = 1))]
    pub flutes: u32,
    /// Flute apex height above the profile baseline.
    #[schemars(title = "Depth", range(min = 0.01, max = 0.2), extend("step" = 0.01))]
    pub depth: f32,
    /// Control-point inset as a fraction of one flute width.
    #[schemars(title = "Curvature", range(min = 0.1, max = 0.5), extend("step" = 0.01))]
    pub curvature: f32,
}

impl Default for GlassOptions {
    fn default() -> Self {
        Self {
            flutes: 20,
            depth: 0.2,
            curvature: 0.5,
        }
    }
}

impl GlassOptions {
    /// Shape for these options at the given panel dimensions.
    #[must_use]
    pub fn shape(&self, width: f32, height: f32) -> PanelShape {
        PanelShape {
            width,
            height,
            flutes: self.flutes,
            depth: self.depth,
            curvature: self.curvature,
        }
    }
}
