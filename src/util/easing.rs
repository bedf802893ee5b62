//! Easing functions for animation interpolation.
//!
//! Polynomial ease-in / ease-out / ease-in-out curves of degree two through
//! five, plus linear. Each curve maps progress `t` in `[0, 1]` onto eased
//! progress with `f(0) = 0` and `f(1) = 1`. Inputs outside that range are
//! evaluated as-is; nothing is clamped.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
///
/// Serialized by their camelCase names (`"easeInOutCubic"`), so options
/// files can refer to them directly.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum EasingFunction {
    /// No easing, no acceleration.
    #[default]
    Linear,
    /// Accelerating from zero velocity.
    EaseInQuad,
    /// Decelerating to zero velocity.
    EaseOutQuad,
    /// Acceleration until halfway, then deceleration.
    EaseInOutQuad,
    /// Accelerating from zero velocity.
    EaseInCubic,
    /// Decelerating to zero velocity.
    EaseOutCubic,
    /// Acceleration until halfway, then deceleration.
    EaseInOutCubic,
    /// Accelerating from zero velocity.
    EaseInQuart,
    /// Decelerating to zero velocity.
    EaseOutQuart,
    /// Acceleration until halfway, then deceleration.
    EaseInOutQuart,
    /// Accelerating from zero velocity.
    EaseInQuint,
    /// Decelerating to zero velocity.
    EaseOutQuint,
    /// Acceleration until halfway, then deceleration.
    EaseInOutQuint,
}

impl EasingFunction {
    /// Every easing curve, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Linear,
        Self::EaseInQuad,
        Self::EaseOutQuad,
        Self::EaseInOutQuad,
        Self::EaseInCubic,
        Self::EaseOutCubic,
        Self::EaseInOutCubic,
        Self::EaseInQuart,
        Self::EaseOutQuart,
        Self::EaseInOutQuart,
        Self::EaseInQuint,
        Self::EaseOutQuint,
        Self::EaseInOutQuint,
    ];

    /// Evaluate the easing function at progress `t`.
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f64) -> f64 {
        // `u` is the distance back from the end, `t - 1`.
        let u = t - 1.0;
        match self {
            Self::Linear => t,
            Self::EaseInQuad => t * t,
            Self::EaseOutQuad => t * (2.0 - t),
            Self::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::EaseInCubic => t * t * t,
            Self::EaseOutCubic => u * u * u + 1.0,
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    u * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
                }
            }
            Self::EaseInQuart => t * t * t * t,
            Self::EaseOutQuart => 1.0 - u * u * u * u,
            Self::EaseInOutQuart => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    1.0 - 8.0 * u * u * u * u
                }
            }
            Self::EaseInQuint => t * t * t * t * t,
            Self::EaseOutQuint => 1.0 + u * u * u * u * u,
            Self::EaseInOutQuint => {
                if t < 0.5 {
                    16.0 * t * t * t * t * t
                } else {
                    1.0 + 16.0 * u * u * u * u * u
                }
            }
        }
    }

    /// The camelCase name used in options files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInQuad => "easeInQuad",
            Self::EaseOutQuad => "easeOutQuad",
            Self::EaseInOutQuad => "easeInOutQuad",
            Self::EaseInCubic => "easeInCubic",
            Self::EaseOutCubic => "easeOutCubic",
            Self::EaseInOutCubic => "easeInOutCubic",
            Self::EaseInQuart => "easeInQuart",
            Self::EaseOutQuart => "easeOutQuart",
            Self::EaseInOutQuart => "easeInOutQuart",
            Self::EaseInQuint => "easeInQuint",
            Self::EaseOutQuint => "easeOutQuint",
            Self::EaseInOutQuint => "easeInOutQuint",
        }
    }
}

impl fmt::Display for EasingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown easing name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEasing(pub String);

impl fmt::Display for UnknownEasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown easing function '{}'", self.0)
    }
}

impl std::error::Error for UnknownEasing {}

impl FromStr for EasingFunction {
    type Err = UnknownEasing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|easing| easing.name() == s)
            .ok_or_else(|| UnknownEasing(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_endpoints() {
        for easing in EasingFunction::ALL {
            assert_eq!(easing.evaluate(0.0), 0.0, "{easing} at 0");
            assert_eq!(easing.evaluate(1.0), 1.0, "{easing} at 1");
        }
    }

    #[test]
    fn test_linear_midpoint() {
        assert_eq!(EasingFunction::Linear.evaluate(0.5), 0.5);
    }

    #[test]
    fn test_quadratic() {
        assert_eq!(EasingFunction::EaseInQuad.evaluate(0.5), 0.25);
        assert_eq!(EasingFunction::EaseOutQuad.evaluate(0.5), 0.75);
        assert_eq!(EasingFunction::EaseInOutQuad.evaluate(0.25), 0.125);
        assert_eq!(EasingFunction::EaseInOutQuad.evaluate(0.75), 0.875);
    }

    #[test]
    fn test_in_out_curves_pass_through_half() {
        for easing in [
            EasingFunction::EaseInOutQuad,
            EasingFunction::EaseInOutCubic,
            EasingFunction::EaseInOutQuart,
            EasingFunction::EaseInOutQuint,
        ] {
            assert!((easing.evaluate(0.5) - 0.5).abs() < 1e-12, "{easing}");
        }
    }

    #[test]
    fn test_in_and_out_are_mirrored() {
        let pairs = [
            (EasingFunction::EaseInCubic, EasingFunction::EaseOutCubic),
            (EasingFunction::EaseInQuart, EasingFunction::EaseOutQuart),
            (EasingFunction::EaseInQuint, EasingFunction::EaseOutQuint),
        ];
        for (ease_in, ease_out) in pairs {
            for t in [0.1, 0.3, 0.6, 0.9] {
                let mirrored = 1.0 - ease_in.evaluate(1.0 - t);
                assert!(
                    (ease_out.evaluate(t) - mirrored).abs() < 1e-12,
                    "{ease_out} at {t}"
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        assert_eq!(EasingFunction::EaseInQuad.evaluate(2.0), 4.0);
        assert_eq!(EasingFunction::Linear.evaluate(-0.5), -0.5);
    }

    #[test]
    fn test_names_round_trip() {
        for easing in EasingFunction::ALL {
            assert_eq!(easing.name().parse::<EasingFunction>(), Ok(easing));
        }
        assert_eq!(
            "bounce".parse::<EasingFunction>(),
            Err(UnknownEasing("bounce".to_owned()))
        );
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&EasingFunction::EaseInOutCubic).unwrap();
        assert_eq!(json, "\"easeInOutCubic\"");
    }
}
