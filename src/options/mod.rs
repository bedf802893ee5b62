//! Driver and demo options with TOML preset support.
//!
//! Everything a driver can tune (tick interval, chain advance policy, demo
//! scene parameters) lives here. Options serialize to and from TOML, and
//! every section falls back to its defaults so partial files work.

mod animation;
mod demo;
mod frame;

use std::path::Path;

pub use animation::AnimationOptions;
pub use demo::DemoOptions;
pub use frame::FrameOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MotionError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[frame]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Driver tick parameters.
    pub frame: FrameOptions,
    /// Chain behavior.
    pub animation: AnimationOptions,
    /// Demo scene parameters.
    pub demo: DemoOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// The result is [`validate`](Self::validate)d.
    pub fn from_toml(content: &str) -> Result<Self, MotionError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| MotionError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Check that every duration is finite, that periods are positive and
    /// that delays are not negative.
    pub fn validate(&self) -> Result<(), MotionError> {
        let demo = &self.demo;
        let periods = [
            ("frame.step_ms", self.frame.step_ms),
            ("demo.color_cycle_ms", demo.color_cycle_ms),
            ("demo.movement_ms", demo.movement_ms),
            ("demo.pulse_ms", demo.pulse_ms),
            ("demo.rotation_cycle_ms", demo.rotation_cycle_ms),
            ("demo.swing_ms", demo.swing_ms),
        ];
        for (name, value) in periods {
            if !value.is_finite() || value <= 0.0 {
                return Err(MotionError::OptionsParse(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        let delays = [
            ("demo.scale_delay_ms", demo.scale_delay_ms),
            ("demo.rotation_handoff_ms", demo.rotation_handoff_ms),
        ];
        for (name, value) in delays {
            if !value.is_finite() || value < 0.0 {
                return Err(MotionError::OptionsParse(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, MotionError> {
        let content = std::fs::read_to_string(path).map_err(MotionError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), MotionError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MotionError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MotionError::Io)?;
        }
        std::fs::write(path, content).map_err(MotionError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ChainAdvance;
    use crate::util::color::Paint;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[animation]
advance = "deferred"

[demo]
end_fill = [255.0, 0.0, 0.0, 0.5]
movement_easing = "easeOutQuint"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.animation.advance, ChainAdvance::Deferred);
        assert_eq!(opts.demo.end_fill, Paint::Rgba([255.0, 0.0, 0.0, 0.5]));
        assert_eq!(opts.demo.movement_easing, EasingFunction::EaseOutQuint);
        // Everything else should be default
        assert_eq!(opts.frame.step_ms, 20.0);
        assert_eq!(opts.demo.rotation_handoff_ms, 5000.0);
        assert_eq!(opts.demo.start_fill, Paint::Rgba([0.0, 255.0, 0.0, 1.0]));
    }

    #[test]
    fn css_paint_survives_toml() {
        let opts = Options::from_toml("[demo]\nbackground = \"papayawhip\"\n")
            .unwrap();
        assert_eq!(opts.demo.background, Paint::Css("papayawhip".to_owned()));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml("[frame]\nstep_ms = \"fast\"\n")
            .unwrap_err();
        assert!(matches!(err, MotionError::OptionsParse(_)));
    }

    #[test]
    fn non_positive_periods_are_rejected() {
        for toml_str in [
            "[demo]\nrotation_cycle_ms = 0.0\n",
            "[demo]\ncolor_cycle_ms = -5.0\n",
            "[demo]\nmovement_ms = 0.0\n",
            "[frame]\nstep_ms = 0.0\n",
            "[demo]\nscale_delay_ms = -1.0\n",
        ] {
            let err = Options::from_toml(toml_str).unwrap_err();
            assert!(matches!(err, MotionError::OptionsParse(_)), "{toml_str}");
        }
        assert!(Options::default().validate().is_ok());
        assert!(Options::from_toml("[demo]\nscale_delay_ms = 0.0\n").is_ok());
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("tween-canvas-options-{}", std::process::id()));
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.frame.step_ms = 16.0;
        opts.demo.swing_ms = 750.0;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/tween-canvas.toml"))
            .unwrap_err();
        assert!(matches!(err, MotionError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("frame"));
        assert!(props.contains_key("animation"));
        assert!(props.contains_key("demo"));

        let demo = &props["demo"]["properties"];
        assert!(demo.get("rotation_handoff_ms").is_some());
        assert!(demo.get("movement_easing").is_some());
        assert!(props["frame"]["properties"].get("step_ms").is_some());
    }
}
