//! A surface that records what was drawn.

use glam::{DAffine2, DVec2};

use super::Surface;
use crate::error::RenderError;
use crate::util::color::Paint;

/// One call made on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    /// `save()`.
    Save,
    /// `restore()`.
    Restore,
    /// `translate(x, y)`.
    Translate {
        /// Horizontal translation.
        x: f64,
        /// Vertical translation.
        y: f64,
    },
    /// `scale(x, y)`.
    Scale {
        /// Horizontal factor.
        x: f64,
        /// Vertical factor.
        y: f64,
    },
    /// `rotate(angle)`.
    Rotate {
        /// Angle in radians.
        angle: f64,
    },
    /// `begin_path()`.
    BeginPath,
    /// `move_to(x, y)`.
    MoveTo {
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// `line_to(x, y)`.
    LineTo {
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// `arc(x, y, radius, start, end)`.
    Arc {
        /// Center, horizontal.
        x: f64,
        /// Center, vertical.
        y: f64,
        /// Radius.
        radius: f64,
        /// Start angle in radians.
        start: f64,
        /// End angle in radians.
        end: f64,
    },
    /// `rect(x, y, width, height)`.
    Rect {
        /// Origin, horizontal.
        x: f64,
        /// Origin, vertical.
        y: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
    },
    /// `close_path()`.
    ClosePath,
    /// `clear_rect(x, y, width, height)`.
    ClearRect {
        /// Origin, horizontal.
        x: f64,
        /// Origin, vertical.
        y: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
    },
    /// `set_fill_style(..)` with the resolved style string.
    SetFillStyle(String),
    /// `fill()`.
    Fill,
    /// `set_stroke_style(..)` with the resolved style string.
    SetStrokeStyle(String),
    /// `stroke()`.
    Stroke,
}

/// In-memory [`Surface`].
///
/// Besides the raw call log it keeps the canvas transform stack, so path
/// points can be checked in surface coordinates.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    transform: DAffine2,
    stack: Vec<DAffine2>,
    path_points: Vec<DVec2>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// Empty surface with an identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            transform: DAffine2::IDENTITY,
            stack: Vec::new(),
            path_points: Vec::new(),
        }
    }

    /// Calls made so far, in order.
    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// `move_to`, `line_to` and `rect` origins of the current path, mapped
    /// through the transform active when each was added.
    #[must_use]
    pub fn path_points(&self) -> &[DVec2] {
        &self.path_points
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> DAffine2 {
        self.transform
    }

    /// Number of unmatched `save` calls.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Forget recorded calls and path points, keeping the transform state.
    pub fn clear(&mut self) {
        self.calls.clear();
        self.path_points.clear();
    }

    fn push_point(&mut self, x: f64, y: f64) {
        let p = self.transform.transform_point2(DVec2::new(x, y));
        self.path_points.push(p);
    }
}

fn check_finite(values: &[f64]) -> Result<(), RenderError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(RenderError(format!("non-finite argument in {values:?}")))
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.stack.push(self.transform);
        self.calls.push(SurfaceCall::Save);
    }

    fn restore(&mut self) {
        // Canvas ignores an unmatched restore.
        if let Some(t) = self.stack.pop() {
            self.transform = t;
        }
        self.calls.push(SurfaceCall::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), RenderError> {
        check_finite(&[x, y])?;
        self.transform =
            self.transform * DAffine2::from_translation(DVec2::new(x, y));
        self.calls.push(SurfaceCall::Translate { x, y });
        Ok(())
    }

    fn scale(&mut self, x: f64, y: f64) -> Result<(), RenderError> {
        check_finite(&[x, y])?;
        self.transform = self.transform * DAffine2::from_scale(DVec2::new(x, y));
        self.calls.push(SurfaceCall::Scale { x, y });
        Ok(())
    }

    fn rotate(&mut self, angle: f64) -> Result<(), RenderError> {
        check_finite(&[angle])?;
        self.transform = self.transform * DAffine2::from_angle(angle);
        self.calls.push(SurfaceCall::Rotate { angle });
        Ok(())
    }

    fn begin_path(&mut self) {
        self.path_points.clear();
        self.calls.push(SurfaceCall::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push_point(x, y);
        self.calls.push(SurfaceCall::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push_point(x, y);
        self.calls.push(SurfaceCall::LineTo { x, y });
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start: f64,
        end: f64,
    ) -> Result<(), RenderError> {
        check_finite(&[x, y, radius, start, end])?;
        if radius < 0.0 {
            return Err(RenderError(format!("negative arc radius {radius}")));
        }
        self.calls.push(SurfaceCall::Arc {
            x,
            y,
            radius,
            start,
            end,
        });
        Ok(())
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.push_point(x, y);
        self.calls.push(SurfaceCall::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn close_path(&mut self) {
        self.calls.push(SurfaceCall::ClosePath);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(SurfaceCall::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn set_fill_style(&mut self, paint: &Paint) {
        self.calls.push(SurfaceCall::SetFillStyle(paint.to_css()));
    }

    fn fill(&mut self) {
        self.calls.push(SurfaceCall::Fill);
    }

    fn set_stroke_style(&mut self, paint: &Paint) {
        self.calls.push(SurfaceCall::SetStrokeStyle(paint.to_css()));
    }

    fn stroke(&mut self) {
        self.calls.push(SurfaceCall::Stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_restore_round_trips_transform() {
        let mut surface = RecordingSurface::new();
        surface.save();
        surface.translate(5.0, 6.0).unwrap();
        assert_eq!(surface.transform().translation, DVec2::new(5.0, 6.0));
        surface.restore();
        assert_eq!(surface.transform(), DAffine2::IDENTITY);
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn unmatched_restore_is_ignored() {
        let mut surface = RecordingSurface::new();
        surface.restore();
        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.calls(), &[SurfaceCall::Restore]);
    }

    #[test]
    fn non_finite_transform_is_rejected() {
        let mut surface = RecordingSurface::new();
        assert!(surface.scale(f64::NAN, 1.0).is_err());
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn clear_keeps_transform() {
        let mut surface = RecordingSurface::new();
        surface.translate(1.0, 1.0).unwrap();
        surface.move_to(0.0, 0.0);
        surface.clear();
        assert!(surface.calls().is_empty());
        assert!(surface.path_points().is_empty());
        assert_eq!(surface.transform().translation, DVec2::ONE);
    }
}
