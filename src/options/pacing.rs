use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Pacing", inline)]
#[serde(default)]
/// Frame-pacing parameters.
pub struct PacingOptions {
    /// Upper bound on scene updates per second.
    #[schemars(title = "Target FPS", range(min = 1, max = 240), extend("step" = 1))]
    pub target_fps: u32,
}

impl Default for PacingOptions {
    fn default() -> Self {
        Self { target_fps: 30 }
    }
}
