//! Crate-level error types.

use std::fmt;

/// Errors raised by the animation core.
///
/// Both variants signal a logic mistake in how a chain was built or driven;
/// neither is transient, so callers propagate them instead of retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    /// A timed step was stepped before `init` captured its start snapshot.
    NotInitialized {
        /// Property group the step animates.
        group: &'static str,
    },
    /// A color step was asked to interpolate a paint that is not RGBA.
    UnsupportedPaint {
        /// Property group the step animates.
        group: &'static str,
    },
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized { group } => {
                write!(f, "{group} animation stepped without initialization")
            }
            Self::UnsupportedPaint { group } => {
                write!(f, "{group} animation only supports rgba colors")
            }
        }
    }
}

impl std::error::Error for AnimationError {}

/// Failure reported by a drawing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError(pub String);

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render error: {}", self.0)
    }
}

impl std::error::Error for RenderError {}

/// Errors produced by the tween-canvas crate.
#[derive(Debug)]
pub enum MotionError {
    /// Animation chain failure.
    Animation(AnimationError),
    /// Drawing surface failure.
    Render(RenderError),
    /// The element meant to host the canvas could not be found.
    MissingContainer(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML/JSON options parsing or serialization failure.
    OptionsParse(String),
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Animation(e) => write!(f, "animation error: {e}"),
            Self::Render(e) => write!(f, "{e}"),
            Self::MissingContainer(selector) => {
                write!(f, "cannot find the container element '{selector}'")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for MotionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Animation(e) => Some(e),
            Self::Render(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AnimationError> for MotionError {
    fn from(e: AnimationError) -> Self {
        Self::Animation(e)
    }
}

impl From<RenderError> for MotionError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

impl From<std::io::Error> for MotionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_error_names_group() {
        let e = AnimationError::UnsupportedPaint { group: "fill color" };
        assert_eq!(e.to_string(), "fill color animation only supports rgba colors");
    }

    #[test]
    fn motion_error_wraps_sources() {
        let e: MotionError =
            AnimationError::NotInitialized { group: "position" }.into();
        assert!(std::error::Error::source(&e).is_some());

        let e = MotionError::MissingContainer("#app".to_owned());
        assert!(std::error::Error::source(&e).is_none());
        assert_eq!(e.to_string(), "cannot find the container element '#app'");
    }
}
