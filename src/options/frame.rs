use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Frame", inline)]
#[serde(default)]
/// Driver tick parameters.
pub struct FrameOptions {
    /// Milliseconds between driver ticks.
    #[schemars(title = "Step (ms)", range(min = 1.0, max = 1000.0), extend("step" = 1.0))]
    pub step_ms: f64,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self { step_ms: 20.0 }
    }
}
