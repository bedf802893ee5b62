//! Drawing surfaces and the shape renderer.
//!
//! [`Surface`] is the slice of the 2D canvas API the renderer uses.
//! [`draw_shape`] turns a [`DrawableState`] into calls on it.
//!
//! - [`recording::RecordingSurface`] records calls and tracks the current
//!   transform, for tests and headless runs.
//! - `canvas::CanvasSurface` (feature `web`) draws into a browser canvas.

#[cfg(feature = "web")]
pub mod canvas;
pub mod recording;
pub mod shapes;

use crate::animation::DrawableState;
use crate::error::RenderError;
use crate::util::color::Paint;

/// Subset of a 2D canvas context.
///
/// Transform and arc calls can fail on real canvases (non-finite values),
/// so they return a [`RenderError`]; the rest are infallible.
pub trait Surface {
    /// Push the current transform and styles.
    fn save(&mut self);
    /// Pop the transform and styles pushed by the matching [`save`](Self::save).
    fn restore(&mut self);
    /// Translate the current transform.
    fn translate(&mut self, x: f64, y: f64) -> Result<(), RenderError>;
    /// Scale the current transform.
    fn scale(&mut self, x: f64, y: f64) -> Result<(), RenderError>;
    /// Rotate the current transform by `angle` radians.
    fn rotate(&mut self, angle: f64) -> Result<(), RenderError>;
    /// Start a new path.
    fn begin_path(&mut self);
    /// Start a subpath at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64);
    /// Line to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);
    /// Clockwise arc around `(x, y)` from `start` to `end` radians.
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start: f64,
        end: f64,
    ) -> Result<(), RenderError>;
    /// Rectangle subpath.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    /// Close the current subpath.
    fn close_path(&mut self);
    /// Erase a rectangle to transparent black.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    /// Set the fill paint.
    fn set_fill_style(&mut self, paint: &Paint);
    /// Fill the current path.
    fn fill(&mut self);
    /// Set the stroke paint.
    fn set_stroke_style(&mut self, paint: &Paint);
    /// Stroke the current path.
    fn stroke(&mut self);
}

/// Draw `state` onto `surface`.
///
/// The path is built under `translate(x, y)`, then `scale`, `rotate` and
/// `translate(offset)`, so the offset is expressed in shape units. Fill and
/// stroke run after both transforms are popped and only when their flag is
/// set. Reads `state` only.
pub fn draw_shape<S: Surface + ?Sized>(
    surface: &mut S,
    state: &DrawableState,
) -> Result<(), RenderError> {
    surface.save();
    surface.translate(state.x, state.y)?;
    surface.save();
    surface.scale(state.scale, state.scale)?;
    surface.rotate(state.rotate)?;
    surface.translate(state.offset_x, state.offset_y)?;
    state.shape.build_path(surface)?;
    surface.restore();
    surface.restore();
    if state.fill {
        surface.set_fill_style(&state.fill_color);
        surface.fill();
    }
    if state.stroke {
        surface.set_stroke_style(&state.stroke_color);
        surface.stroke();
    }
    Ok(())
}
