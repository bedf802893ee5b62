//! Property groups: the disjoint slices of [`DrawableState`] that each
//! animation manager owns.

use std::f64::consts::TAU;
use std::fmt;

use glam::DVec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::state::DrawableState;
use crate::error::AnimationError;
use crate::util::color::{color_mix, Paint};

/// A set of state fields animated together by one manager.
///
/// Implementors are zero-sized markers; the associated functions move the
/// group's [`Value`](Self::Value) in and out of the state bag and blend two
/// values.
pub trait PropertyGroup: fmt::Debug + Clone + 'static {
    /// Snapshot of the group's fields.
    type Value: Clone + fmt::Debug + PartialEq;

    /// Name used in logs and errors.
    const NAME: &'static str;

    /// Copy the group's fields out of `state`.
    fn read(state: &DrawableState) -> Self::Value;

    /// Write `value` into the group's fields of `state`.
    fn write(state: &mut DrawableState, value: Self::Value);

    /// Blend `start` and `end` as `start * (1 - v) + end * v`.
    fn interpolate(
        start: &Self::Value,
        end: &Self::Value,
        v: f64,
    ) -> Result<Self::Value, AnimationError>;
}

/// A group whose value lives on a circle and can advance without end.
pub trait CyclicGroup: PropertyGroup {
    /// Advance `state` by `fraction` of one full cycle in `direction`,
    /// wrapping back by one cycle when it passes a full turn.
    fn advance(state: &mut DrawableState, fraction: f64, direction: CycleDirection);
}

/// Direction of a cyclic animation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CycleDirection {
    /// Increasing angle (clockwise on a y-down canvas).
    Clockwise,
    /// Decreasing angle.
    #[default]
    CounterClockwise,
}

/// `x` and `y`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Position;

/// `scale`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scale;

/// `rotate`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rotation;

/// `fill_color`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FillColor;

/// `stroke_color`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrokeColor;

#[inline]
fn lerp(start: f64, end: f64, v: f64) -> f64 {
    start * (1.0 - v) + end * v
}

impl PropertyGroup for Position {
    type Value = DVec2;

    const NAME: &'static str = "position";

    fn read(state: &DrawableState) -> DVec2 {
        DVec2::new(state.x, state.y)
    }

    fn write(state: &mut DrawableState, value: DVec2) {
        state.x = value.x;
        state.y = value.y;
    }

    fn interpolate(
        start: &DVec2,
        end: &DVec2,
        v: f64,
    ) -> Result<DVec2, AnimationError> {
        Ok(*start * (1.0 - v) + *end * v)
    }
}

impl PropertyGroup for Scale {
    type Value = f64;

    const NAME: &'static str = "scale";

    fn read(state: &DrawableState) -> f64 {
        state.scale
    }

    fn write(state: &mut DrawableState, value: f64) {
        state.scale = value;
    }

    fn interpolate(start: &f64, end: &f64, v: f64) -> Result<f64, AnimationError> {
        Ok(lerp(*start, *end, v))
    }
}

impl PropertyGroup for Rotation {
    type Value = f64;

    const NAME: &'static str = "rotation";

    fn read(state: &DrawableState) -> f64 {
        state.rotate
    }

    fn write(state: &mut DrawableState, value: f64) {
        state.rotate = value;
    }

    fn interpolate(start: &f64, end: &f64, v: f64) -> Result<f64, AnimationError> {
        Ok(lerp(*start, *end, v))
    }
}

impl CyclicGroup for Rotation {
    fn advance(state: &mut DrawableState, fraction: f64, direction: CycleDirection) {
        let angle = TAU * fraction;
        match direction {
            CycleDirection::Clockwise => {
                state.rotate += angle;
                if state.rotate >= TAU {
                    state.rotate -= TAU;
                }
            }
            CycleDirection::CounterClockwise => {
                state.rotate -= angle;
                if state.rotate <= -TAU {
                    state.rotate += TAU;
                }
            }
        }
    }
}

fn mix_paint(
    group: &'static str,
    start: &Paint,
    end: &Paint,
    v: f64,
) -> Result<Paint, AnimationError> {
    match (start.as_rgba(), end.as_rgba()) {
        (Some(c1), Some(c2)) => Ok(Paint::Rgba(color_mix(c1, c2, v))),
        _ => Err(AnimationError::UnsupportedPaint { group }),
    }
}

impl PropertyGroup for FillColor {
    type Value = Paint;

    const NAME: &'static str = "fill color";

    fn read(state: &DrawableState) -> Paint {
        state.fill_color.clone()
    }

    fn write(state: &mut DrawableState, value: Paint) {
        state.fill_color = value;
    }

    fn interpolate(
        start: &Paint,
        end: &Paint,
        v: f64,
    ) -> Result<Paint, AnimationError> {
        mix_paint(Self::NAME, start, end, v)
    }
}

impl PropertyGroup for StrokeColor {
    type Value = Paint;

    const NAME: &'static str = "stroke color";

    fn read(state: &DrawableState) -> Paint {
        state.stroke_color.clone()
    }

    fn write(state: &mut DrawableState, value: Paint) {
        state.stroke_color = value;
    }

    fn interpolate(
        start: &Paint,
        end: &Paint,
        v: f64,
    ) -> Result<Paint, AnimationError> {
        mix_paint(Self::NAME, start, end, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_reads_and_writes_xy() {
        let mut state = DrawableState::default();
        Position::write(&mut state, DVec2::new(3.0, 4.0));
        assert_eq!((state.x, state.y), (3.0, 4.0));
        assert_eq!(Position::read(&state), DVec2::new(3.0, 4.0));
    }

    #[test]
    fn groups_touch_disjoint_fields() {
        let mut state = DrawableState::default();
        Scale::write(&mut state, 7.0);
        Rotation::write(&mut state, 1.5);
        assert_eq!(state.x, 0.0);
        assert_eq!(state.scale, 7.0);
        assert_eq!(state.rotate, 1.5);
        assert_eq!(state.fill_color, Paint::BLACK);
    }

    #[test]
    fn clockwise_wraps_below_full_turn() {
        let mut state = DrawableState {
            rotate: 6.0,
            ..Default::default()
        };
        Rotation::advance(&mut state, 0.1, CycleDirection::Clockwise);
        let expected = 6.0 + TAU * 0.1 - TAU;
        assert!((state.rotate - expected).abs() < 1e-12);
    }

    #[test]
    fn counter_clockwise_wraps_above_negative_turn() {
        let mut state = DrawableState {
            rotate: -6.0,
            ..Default::default()
        };
        Rotation::advance(&mut state, 0.1, CycleDirection::CounterClockwise);
        let expected = -6.0 - TAU * 0.1 + TAU;
        assert!((state.rotate - expected).abs() < 1e-12);
    }

    #[test]
    fn color_groups_reject_opaque_paint() {
        let rgba = Paint::BLACK;
        let css = Paint::Css("red".to_owned());
        assert_eq!(
            FillColor::interpolate(&rgba, &css, 0.5),
            Err(AnimationError::UnsupportedPaint { group: "fill color" })
        );
        assert_eq!(
            StrokeColor::interpolate(&css, &rgba, 0.5),
            Err(AnimationError::UnsupportedPaint { group: "stroke color" })
        );
    }
}
