//! Canvas element sized to its container.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, Window,
};

use crate::error::{MotionError, RenderError};
use crate::renderer::canvas::CanvasSurface;

fn js_error(op: &str, err: &JsValue) -> MotionError {
    MotionError::Render(RenderError(format!("{op} failed: {err:?}")))
}

fn window() -> Result<Window, MotionError> {
    web_sys::window()
        .ok_or_else(|| MotionError::Render(RenderError("no global window".to_owned())))
}

fn document(window: &Window) -> Result<Document, MotionError> {
    window
        .document()
        .ok_or_else(|| MotionError::Render(RenderError("no document".to_owned())))
}

/// Resize the canvas backing store to the container size times the pixel
/// ratio, and its CSS box to the container size.
fn fit_canvas(
    container: &HtmlElement,
    canvas: &HtmlCanvasElement,
    pixel_ratio: f64,
) -> Result<(), MotionError> {
    let width = f64::from(container.client_width());
    let height = f64::from(container.client_height());
    let style = canvas.style();
    style
        .set_property("width", &format!("{width}px"))
        .map_err(|e| js_error("style.width", &e))?;
    style
        .set_property("height", &format!("{height}px"))
        .map_err(|e| js_error("style.height", &e))?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let backing = |css: f64| (css * pixel_ratio).floor().max(0.0) as u32;
    canvas.set_width(backing(width));
    canvas.set_height(backing(height));
    Ok(())
}

/// A canvas appended to a container element and kept at the container's
/// size, scaled by the device pixel ratio.
///
/// The canvas is resized on window `resize` events until
/// [`dispose`](Self::dispose) removes it and its listener.
#[derive(Debug)]
pub struct Stage {
    window: Window,
    container: HtmlElement,
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
    pixel_ratio: f64,
    on_resize: Closure<dyn FnMut()>,
}

impl Stage {
    /// Create a stage inside the element matching `selector`.
    ///
    /// Fails with [`MotionError::MissingContainer`] when nothing matches.
    pub fn new(selector: &str) -> Result<Self, MotionError> {
        let window = window()?;
        let document = document(&window)?;
        let container = document
            .query_selector(selector)
            .map_err(|e| js_error("querySelector", &e))?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| MotionError::MissingContainer(selector.to_owned()))?;
        let pixel_ratio = window.device_pixel_ratio();

        let canvas = document
            .create_element("canvas")
            .map_err(|e| js_error("createElement", &e))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|e| js_error("canvas cast", &e))?;
        fit_canvas(&container, &canvas, pixel_ratio)?;
        let _ = container
            .append_child(&canvas)
            .map_err(|e| js_error("appendChild", &e))?;

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| js_error("getContext", &e))?
            .ok_or_else(|| {
                MotionError::Render(RenderError(
                    "unable to get 2d canvas context".to_owned(),
                ))
            })?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|e| js_error("context cast", &e))?;

        let on_resize = {
            let container = container.clone();
            let canvas = canvas.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Err(e) = fit_canvas(&container, &canvas, pixel_ratio) {
                    log::error!("canvas resize failed: {e}");
                }
            })
        };
        window
            .add_event_listener_with_callback(
                "resize",
                on_resize.as_ref().unchecked_ref(),
            )
            .map_err(|e| js_error("addEventListener", &e))?;

        log::info!(
            "stage created in '{selector}' at pixel ratio {pixel_ratio}"
        );
        Ok(Self {
            window,
            container,
            canvas,
            surface: CanvasSurface::new(ctx),
            pixel_ratio,
            on_resize,
        })
    }

    /// Container width in CSS pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        f64::from(self.container.client_width())
    }

    /// Container height in CSS pixels.
    #[must_use]
    pub fn height(&self) -> f64 {
        f64::from(self.container.client_height())
    }

    /// Device pixels per CSS pixel, captured at construction.
    #[must_use]
    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// The canvas element.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Drawing surface over the canvas context.
    #[must_use]
    pub fn surface_mut(&mut self) -> &mut CanvasSurface {
        &mut self.surface
    }

    /// Resize the canvas to the container now.
    pub fn resize(&self) -> Result<(), MotionError> {
        fit_canvas(&self.container, &self.canvas, self.pixel_ratio)
    }

    /// Remove the resize listener and the canvas.
    pub fn dispose(self) -> Result<(), MotionError> {
        self.window
            .remove_event_listener_with_callback(
                "resize",
                self.on_resize.as_ref().unchecked_ref(),
            )
            .map_err(|e| js_error("removeEventListener", &e))?;
        let _ = self
            .container
            .remove_child(&self.canvas)
            .map_err(|e| js_error("removeChild", &e))?;
        log::debug!("stage disposed");
        Ok(())
    }
}
