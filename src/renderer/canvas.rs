//! [`Surface`] over a browser 2D canvas context.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::Surface;
use crate::error::RenderError;
use crate::util::color::Paint;

/// Draws into a `CanvasRenderingContext2d`.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap `ctx`.
    #[must_use]
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// The wrapped context.
    #[must_use]
    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

fn js_error(op: &str, err: &JsValue) -> RenderError {
    RenderError(format!("{op} failed: {err:?}"))
}

impl Surface for CanvasSurface {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), RenderError> {
        self.ctx.translate(x, y).map_err(|e| js_error("translate", &e))
    }

    fn scale(&mut self, x: f64, y: f64) -> Result<(), RenderError> {
        self.ctx.scale(x, y).map_err(|e| js_error("scale", &e))
    }

    fn rotate(&mut self, angle: f64) -> Result<(), RenderError> {
        self.ctx.rotate(angle).map_err(|e| js_error("rotate", &e))
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start: f64,
        end: f64,
    ) -> Result<(), RenderError> {
        self.ctx
            .arc(x, y, radius, start, end)
            .map_err(|e| js_error("arc", &e))
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.rect(x, y, width, height);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn set_fill_style(&mut self, paint: &Paint) {
        self.ctx.set_fill_style_str(&paint.to_css());
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn set_stroke_style(&mut self, paint: &Paint) {
        self.ctx.set_stroke_style_str(&paint.to_css());
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}
