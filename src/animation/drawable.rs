//! A shape together with the animations that move it.

use super::group::{FillColor, Position, Rotation, Scale, StrokeColor};
use super::manager::{AnimationManager, ChainAdvance};
use super::state::{DrawableConfig, DrawableState};
use crate::error::{AnimationError, RenderError};
use crate::renderer::{draw_shape, Surface};

/// One animated shape: a state bag and one manager per property group.
///
/// Managers touch disjoint fields, so the order they run in does not change
/// the outcome; it is still fixed (position, scale, rotation, fill color,
/// stroke color) so runs are reproducible.
#[derive(Debug)]
pub struct Drawable {
    /// Current values, read by the renderer.
    pub state: DrawableState,
    /// Chain for `x` and `y`.
    pub position_animation: AnimationManager<Position>,
    /// Chain for `scale`.
    pub scale_animation: AnimationManager<Scale>,
    /// Chain for `rotate`.
    pub rotate_animation: AnimationManager<Rotation>,
    /// Chain for `fill_color`.
    pub fill_color_animation: AnimationManager<FillColor>,
    /// Chain for `stroke_color`.
    pub stroke_color_animation: AnimationManager<StrokeColor>,
}

impl Drawable {
    /// Drawable built from `config` over the defaults, with idle managers.
    #[must_use]
    pub fn new(config: DrawableConfig) -> Self {
        Self::with_advance(config, ChainAdvance::default())
    }

    /// Like [`new`](Self::new), with every manager using `advance`.
    #[must_use]
    pub fn with_advance(config: DrawableConfig, advance: ChainAdvance) -> Self {
        Self {
            state: config.resolve(),
            position_animation: AnimationManager::with_advance(advance),
            scale_animation: AnimationManager::with_advance(advance),
            rotate_animation: AnimationManager::with_advance(advance),
            fill_color_animation: AnimationManager::with_advance(advance),
            stroke_color_animation: AnimationManager::with_advance(advance),
        }
    }

    /// Advance every manager by `elapsed` milliseconds.
    pub fn step(&mut self, elapsed: f64) -> Result<(), AnimationError> {
        self.position_animation.step(&mut self.state, elapsed)?;
        self.scale_animation.step(&mut self.state, elapsed)?;
        self.rotate_animation.step(&mut self.state, elapsed)?;
        self.fill_color_animation.step(&mut self.state, elapsed)?;
        self.stroke_color_animation.step(&mut self.state, elapsed)?;
        Ok(())
    }

    /// Draw the current state onto `surface`.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
    ) -> Result<(), RenderError> {
        draw_shape(surface, &self.state)
    }

    /// Whether any manager still holds a chain.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !(self.position_animation.is_idle()
            && self.scale_animation.is_idle()
            && self.rotate_animation.is_idle()
            && self.fill_color_animation.is_idle()
            && self.stroke_color_animation.is_idle())
    }
}

impl Default for Drawable {
    fn default() -> Self {
        Self::new(DrawableConfig::default())
    }
}
