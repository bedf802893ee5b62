//! The state bag a drawable's animations read from and write into.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::renderer::shapes::Shape;
use crate::util::color::Paint;

/// Everything the renderer needs to draw one shape.
///
/// Owned by a single [`Drawable`](super::Drawable). Animation steps mutate
/// it in place each tick and only ever keep copies of the fields belonging
/// to their own property group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawableState {
    /// Path builder for the outline.
    pub shape: Shape,
    /// Horizontal translation.
    pub x: f64,
    /// Vertical translation.
    pub y: f64,
    /// Uniform scale applied around the translated origin.
    pub scale: f64,
    /// Horizontal offset applied after scale and rotation.
    pub offset_x: f64,
    /// Vertical offset applied after scale and rotation.
    pub offset_y: f64,
    /// Rotation in radians.
    pub rotate: f64,
    /// Whether the path is filled.
    pub fill: bool,
    /// Whether the path is stroked.
    pub stroke: bool,
    /// Fill paint.
    pub fill_color: Paint,
    /// Stroke paint.
    pub stroke_color: Paint,
}

impl Default for DrawableState {
    fn default() -> Self {
        Self {
            shape: Shape::None,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            rotate: 0.0,
            fill: false,
            stroke: false,
            fill_color: Paint::BLACK,
            stroke_color: Paint::BLACK,
        }
    }
}

/// Caller overrides for a new drawable. Unset fields take the
/// [`DrawableState::default`] values.
#[derive(
    Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(default)]
pub struct DrawableConfig {
    /// Path builder for the outline.
    pub shape: Option<Shape>,
    /// Horizontal translation.
    pub x: Option<f64>,
    /// Vertical translation.
    pub y: Option<f64>,
    /// Uniform scale.
    pub scale: Option<f64>,
    /// Horizontal offset after scale and rotation.
    pub offset_x: Option<f64>,
    /// Vertical offset after scale and rotation.
    pub offset_y: Option<f64>,
    /// Rotation in radians.
    pub rotate: Option<f64>,
    /// Whether the path is filled.
    pub fill: Option<bool>,
    /// Whether the path is stroked.
    pub stroke: Option<bool>,
    /// Fill paint.
    pub fill_color: Option<Paint>,
    /// Stroke paint.
    pub stroke_color: Option<Paint>,
}

impl DrawableConfig {
    /// Resolve the overrides against the defaults, field by field.
    #[must_use]
    pub fn resolve(self) -> DrawableState {
        let d = DrawableState::default();
        DrawableState {
            shape: self.shape.unwrap_or(d.shape),
            x: self.x.unwrap_or(d.x),
            y: self.y.unwrap_or(d.y),
            scale: self.scale.unwrap_or(d.scale),
            offset_x: self.offset_x.unwrap_or(d.offset_x),
            offset_y: self.offset_y.unwrap_or(d.offset_y),
            rotate: self.rotate.unwrap_or(d.rotate),
            fill: self.fill.unwrap_or(d.fill),
            stroke: self.stroke.unwrap_or(d.stroke),
            fill_color: self.fill_color.unwrap_or(d.fill_color),
            stroke_color: self.stroke_color.unwrap_or(d.stroke_color),
        }
    }
}

impl From<DrawableConfig> for DrawableState {
    fn from(config: DrawableConfig) -> Self {
        config.resolve()
    }
}
