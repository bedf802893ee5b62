//! The demo scene: a heart particle moving, pulsing, spinning and changing
//! color over a plain background.
//!
//! The scene owns its drawables and the scene clock. Drivers feed it the
//! milliseconds elapsed between ticks and render it onto any [`Surface`];
//! the native binary and the browser entry point share it.

use std::cell::Cell;
use std::f64::consts::FRAC_PI_2;
use std::rc::Rc;

use glam::DVec2;

use crate::animation::{
    AnimationStep, ChainAdvance, CycleDirection, Drawable, DrawableConfig,
    FillColorAnimation, PositionAnimation, RotateAnimation, Rotation, Scale,
    ScaleAnimation,
};
use crate::error::{AnimationError, RenderError};
use crate::options::{DemoOptions, Options};
use crate::renderer::shapes::Shape;
use crate::renderer::Surface;

/// Background plus one animated particle.
#[derive(Debug)]
pub struct DemoScene {
    /// Full-canvas rectangle drawn first.
    pub background: Drawable,
    /// The animated heart.
    pub particle: Drawable,
    options: DemoOptions,
    width: f64,
    height: f64,
    clock: f64,
    swing_queued: bool,
    callbacks_fired: Rc<Cell<u32>>,
}

impl DemoScene {
    /// Scene for a `width` x `height` canvas (CSS pixels).
    #[must_use]
    pub fn new(options: &Options, width: f64, height: f64) -> Self {
        let demo = options.demo.clone();
        let advance = options.animation.advance;

        let background = Drawable::with_advance(
            DrawableConfig {
                shape: Some(Shape::Rect { width, height }),
                fill: Some(true),
                fill_color: Some(demo.background.clone()),
                ..Default::default()
            },
            advance,
        );
        let mut particle = Drawable::with_advance(
            DrawableConfig {
                x: Some(width / 2.0),
                y: Some(height / 2.0),
                scale: Some(demo.particle_scale),
                shape: Some(Shape::Heart),
                offset_y: Some(1.0),
                fill: Some(true),
                fill_color: Some(demo.start_fill.clone()),
                ..Default::default()
            },
            advance,
        );

        let callbacks_fired = Rc::new(Cell::new(0));
        queue_particle_chains(&mut particle, &demo, width, height, &callbacks_fired);
        log::debug!(
            "demo scene {width}x{height}, {advance:?} chain advance"
        );

        Self {
            background,
            particle,
            options: demo,
            width,
            height,
            clock: 0.0,
            swing_queued: false,
            callbacks_fired,
        }
    }

    /// Scene with default options and the given advance policy.
    #[must_use]
    pub fn with_advance(advance: ChainAdvance, width: f64, height: f64) -> Self {
        let mut options = Options::default();
        options.animation.advance = advance;
        Self::new(&options, width, height)
    }

    /// Follow a canvas resize: the background keeps covering the canvas.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.background.state.shape = Shape::Rect { width, height };
    }

    /// Canvas size in CSS pixels.
    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Milliseconds of scene time fed through [`step`](Self::step).
    #[must_use]
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Times the scale chain's callback has run.
    #[must_use]
    pub fn callbacks_fired(&self) -> u32 {
        self.callbacks_fired.get()
    }

    /// Whether the rotation swing has been queued behind the spin.
    #[must_use]
    pub fn swing_queued(&self) -> bool {
        self.swing_queued
    }

    /// Advance the scene by `elapsed` milliseconds.
    ///
    /// Once the scene clock reaches the configured hand-off time, a looping
    /// swing is queued behind the continuous rotation, which then completes
    /// and hands over.
    pub fn step(&mut self, elapsed: f64) -> Result<(), AnimationError> {
        self.clock += elapsed;
        if !self.swing_queued && self.clock >= self.options.rotation_handoff_ms {
            let _ = self.particle.rotate_animation.queued(
                RotateAnimation::new(self.options.swing_ms, -FRAC_PI_2)
                    .from_value(FRAC_PI_2)
                    .looped(),
            );
            self.swing_queued = true;
            log::debug!("rotation swing queued at {} ms", self.clock);
        }
        self.background.step(elapsed)?;
        self.particle.step(elapsed)
    }

    /// Clear the canvas and draw the scene at `pixel_ratio` device pixels
    /// per CSS pixel.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        pixel_ratio: f64,
    ) -> Result<(), RenderError> {
        surface.save();
        let drawn = self.draw(surface, pixel_ratio);
        surface.restore();
        drawn
    }

    fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        pixel_ratio: f64,
    ) -> Result<(), RenderError> {
        surface.scale(pixel_ratio, pixel_ratio)?;
        surface.clear_rect(0.0, 0.0, self.width, self.height);
        self.background.render(surface)?;
        self.particle.render(surface)
    }
}

fn queue_particle_chains(
    particle: &mut Drawable,
    demo: &DemoOptions,
    width: f64,
    height: f64,
    callbacks_fired: &Rc<Cell<u32>>,
) {
    let _ = particle.position_animation.queued(
        PositionAnimation::new(demo.movement_ms, DVec2::new(width, height / 2.0))
            .with_easing(demo.movement_easing)
            .looped(),
    );

    let fired = Rc::clone(callbacks_fired);
    let _ = particle
        .scale_animation
        .queued(AnimationStep::<Scale>::delay(demo.scale_delay_ms))
        .queued(AnimationStep::<Scale>::callback(move |state| {
            fired.set(fired.get() + 1);
            log::info!("scale pulse starting at scale {}", state.scale);
        }))
        .queued(ScaleAnimation::new(demo.pulse_ms, demo.pulse_scale).looped());

    let _ = particle.rotate_animation.queued(AnimationStep::<Rotation>::cycle(
        demo.rotation_cycle_ms,
        CycleDirection::Clockwise,
    ));

    let _ = particle.fill_color_animation.queued(
        FillColorAnimation::new(demo.color_cycle_ms, demo.end_fill.clone()).looped(),
    );
}
