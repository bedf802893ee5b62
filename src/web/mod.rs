//! Browser driver.
//!
//! [`start`] mounts a [`Stage`] in a container element and runs the
//! [`DemoScene`] on a fixed interval, feeding it the wall-clock time between
//! ticks.

mod stage;

use std::cell::RefCell;
use std::rc::Rc;

pub use stage::Stage;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};

use crate::demo::DemoScene;
use crate::error::{MotionError, RenderError};
use crate::options::Options;
use crate::util::frame_timing::FrameTiming;

struct Driver {
    stage: Stage,
    scene: DemoScene,
    clock: FrameTiming,
}

impl Driver {
    fn tick(&mut self) -> Result<(), MotionError> {
        let elapsed = self.clock.tick();
        let size = (self.stage.width(), self.stage.height());
        if size != self.scene.size() {
            self.scene.resize(size.0, size.1);
        }
        self.scene.step(elapsed)?;
        let pixel_ratio = self.stage.pixel_ratio();
        self.scene.render(self.stage.surface_mut(), pixel_ratio)?;
        if self.clock.ticks() % 500 == 0 {
            log::debug!("{:.1} fps", self.clock.fps());
        }
        Ok(())
    }
}

fn to_js(err: &MotionError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Run the demo inside the element matching `selector` with default
/// options.
#[wasm_bindgen]
pub fn start(selector: &str) -> Result<(), JsValue> {
    run(selector, Options::default()).map_err(|e| to_js(&e))
}

/// Run the demo inside the element matching `selector` with options parsed
/// from TOML text.
#[wasm_bindgen(js_name = startWithOptions)]
pub fn start_with_options(selector: &str, toml: &str) -> Result<(), JsValue> {
    Options::from_toml(toml)
        .and_then(|options| run(selector, options))
        .map_err(|e| to_js(&e))
}

fn run(selector: &str, options: Options) -> Result<(), MotionError> {
    console_error_panic_hook::set_once();
    // A second start on the same page keeps the first logger.
    let _ = console_log::init_with_level(log::Level::Info);

    let stage = Stage::new(selector)?;
    let scene = DemoScene::new(&options, stage.width(), stage.height());
    let driver = Rc::new(RefCell::new(Driver {
        stage,
        scene,
        clock: FrameTiming::new(),
    }));

    let on_tick = {
        let driver = Rc::clone(&driver);
        Closure::<dyn FnMut()>::new(move || {
            if let Err(e) = driver.borrow_mut().tick() {
                log::error!("tick failed: {e}");
            }
        })
    };
    let window = web_sys::window().ok_or_else(|| {
        MotionError::Render(RenderError("no global window".to_owned()))
    })?;
    #[allow(clippy::cast_possible_truncation)]
    let interval_ms = options.frame.step_ms.round() as i32;
    let _ = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            on_tick.as_ref().unchecked_ref(),
            interval_ms,
        )
        .map_err(|e| {
            MotionError::Render(RenderError(format!("setInterval failed: {e:?}")))
        })?;
    window
        .add_event_listener_with_callback(
            "resize",
            on_tick.as_ref().unchecked_ref(),
        )
        .map_err(|e| {
            MotionError::Render(RenderError(format!(
                "addEventListener failed: {e:?}"
            )))
        })?;
    on_tick.forget();

    log::info!("demo running every {interval_ms} ms");
    Ok(())
}
