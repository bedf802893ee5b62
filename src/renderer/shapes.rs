//! Unit-sized path builders.
//!
//! Shapes are drawn around the origin at unit size; the drawable's scale,
//! rotation and offsets position them.

use std::f64::consts::{PI, SQRT_2};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Surface;
use crate::error::RenderError;

/// Outline drawn for a drawable.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Empty path: begins a path and adds nothing.
    #[default]
    None,
    /// Heart with its tip at the origin, pointing down, lobes at `y = -1.5`.
    Heart,
    /// Unit circle centered on the origin.
    Circle,
    /// Axis-aligned rectangle anchored at the origin.
    Rect {
        /// Width in surface units.
        width: f64,
        /// Height in surface units.
        height: f64,
    },
}

impl Shape {
    /// Build this shape's path on `surface`.
    pub fn build_path<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
    ) -> Result<(), RenderError> {
        surface.begin_path();
        match *self {
            Self::None => {}
            Self::Heart => {
                surface.move_to(0.0, 0.0);
                surface.line_to(-1.0, -1.0);
                surface.arc(-0.5, -1.5, 0.5 * SQRT_2, 0.75 * PI, -0.25 * PI)?;
                surface.arc(0.5, -1.5, 0.5 * SQRT_2, -0.75 * PI, 0.25 * PI)?;
                surface.close_path();
            }
            Self::Circle => {
                surface.move_to(1.0, 0.0);
                surface.arc(0.0, 0.0, 1.0, 2.0 * PI, 0.0)?;
                surface.close_path();
            }
            Self::Rect { width, height } => {
                surface.rect(0.0, 0.0, width, height);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{RecordingSurface, SurfaceCall};

    #[test]
    fn none_only_begins_path() {
        let mut surface = RecordingSurface::new();
        Shape::None.build_path(&mut surface).unwrap();
        assert_eq!(surface.calls(), &[SurfaceCall::BeginPath]);
    }

    #[test]
    fn heart_is_closed_with_two_lobes() {
        let mut surface = RecordingSurface::new();
        Shape::Heart.build_path(&mut surface).unwrap();
        let arcs = surface
            .calls()
            .iter()
            .filter(|c| matches!(c, SurfaceCall::Arc { .. }))
            .count();
        assert_eq!(arcs, 2);
        assert_eq!(surface.calls().last(), Some(&SurfaceCall::ClosePath));
    }

    #[test]
    fn rect_uses_its_size() {
        let mut surface = RecordingSurface::new();
        Shape::Rect { width: 640.0, height: 480.0 }
            .build_path(&mut surface)
            .unwrap();
        assert_eq!(
            surface.calls()[1],
            SurfaceCall::Rect { x: 0.0, y: 0.0, width: 640.0, height: 480.0 }
        );
    }

    #[test]
    fn shape_names_in_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            shape: Shape,
        }
        let w: Wrapper = toml::from_str("shape = \"circle\"").unwrap();
        assert_eq!(w.shape, Shape::Circle);
        let w: Wrapper =
            toml::from_str("shape = { rect = { width = 2.0, height = 3.0 } }")
                .unwrap();
        assert_eq!(w.shape, Shape::Rect { width: 2.0, height: 3.0 });
    }
}
