use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::color::Paint;
use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Demo", inline)]
#[serde(default)]
/// Parameters of the demo scene.
pub struct DemoOptions {
    /// Base scale of the heart particle.
    #[schemars(title = "Particle Scale", range(min = 1.0, max = 100.0))]
    pub particle_scale: f64,
    /// Canvas color behind the particle.
    #[schemars(title = "Background")]
    pub background: Paint,
    /// Fill color the particle starts with.
    #[schemars(title = "Start Fill")]
    pub start_fill: Paint,
    /// Fill color the particle cycles toward.
    #[schemars(title = "End Fill")]
    pub end_fill: Paint,
    /// Duration of one fill color sweep in ms.
    #[schemars(title = "Color Cycle (ms)", range(min = 1.0))]
    pub color_cycle_ms: f64,
    /// Duration of one horizontal sweep in ms.
    #[schemars(title = "Movement (ms)", range(min = 1.0))]
    pub movement_ms: f64,
    /// Easing of the horizontal sweep.
    #[schemars(title = "Movement Easing")]
    pub movement_easing: EasingFunction,
    /// Delay before the scale pulse starts, in ms.
    #[schemars(title = "Scale Delay (ms)", range(min = 0.0))]
    pub scale_delay_ms: f64,
    /// Scale the pulse grows to.
    #[schemars(title = "Pulse Scale", range(min = 0.0, max = 100.0))]
    pub pulse_scale: f64,
    /// Duration of one pulse in ms.
    #[schemars(title = "Pulse (ms)", range(min = 1.0))]
    pub pulse_ms: f64,
    /// Duration of one full clockwise turn in ms.
    #[schemars(title = "Rotation Cycle (ms)", range(min = 1.0))]
    pub rotation_cycle_ms: f64,
    /// Scene time at which the continuous rotation hands over to the swing.
    #[schemars(title = "Rotation Hand-off (ms)", range(min = 0.0))]
    pub rotation_handoff_ms: f64,
    /// Duration of one swing in ms.
    #[schemars(title = "Swing (ms)", range(min = 1.0))]
    pub swing_ms: f64,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            particle_scale: 10.0,
            background: Paint::Rgba([255.0, 255.0, 255.0, 1.0]),
            start_fill: Paint::Rgba([0.0, 255.0, 0.0, 1.0]),
            end_fill: Paint::Rgba([0.0, 0.0, 255.0, 1.0]),
            color_cycle_ms: 3000.0,
            movement_ms: 1000.0,
            movement_easing: EasingFunction::EaseInOutCubic,
            scale_delay_ms: 3000.0,
            pulse_scale: 5.0,
            pulse_ms: 200.0,
            rotation_cycle_ms: 10000.0,
            rotation_handoff_ms: 5000.0,
            swing_ms: 1000.0,
        }
    }
}
