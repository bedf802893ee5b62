//! Chained per-property animation.
//!
//! A [`Drawable`] owns a [`DrawableState`] and one [`AnimationManager`] per
//! property group. Each manager runs a chain of [`AnimationStep`]s, one
//! after another, against its own fields of the state:
//!
//! ```
//! use tween_canvas::animation::{
//!     AnimationStep, Drawable, DrawableConfig, PositionAnimation, Scale,
//! };
//! use glam::DVec2;
//!
//! let mut particle = Drawable::new(DrawableConfig::default());
//! let _ = particle
//!     .position_animation
//!     .queued(PositionAnimation::new(1000.0, DVec2::new(100.0, 0.0)));
//! let _ = particle
//!     .scale_animation
//!     .queued(AnimationStep::<Scale>::delay(500.0))
//!     .queued(AnimationStep::<Scale>::callback(|state| state.fill = true));
//!
//! particle.step(0.0)?; // init tick
//! particle.step(500.0)?;
//! assert_eq!(particle.state.x, 50.0);
//! # Ok::<(), tween_canvas::error::AnimationError>(())
//! ```

pub mod drawable;
pub mod group;
pub mod manager;
pub mod state;
pub mod step;

pub use drawable::Drawable;
pub use group::{
    CycleDirection, CyclicGroup, FillColor, Position, PropertyGroup, Rotation,
    Scale, StrokeColor,
};
pub use manager::{AnimationManager, ChainAdvance, StepId};
pub use state::{DrawableConfig, DrawableState};
pub use step::{
    Animation, AnimationStep, CallbackStep, CyclicStep, DelayStep, TimedStep,
};

/// Eased move of `x` and `y`.
pub type PositionAnimation = TimedStep<Position>;
/// Eased change of `scale`.
pub type ScaleAnimation = TimedStep<Scale>;
/// Eased change of `rotate`.
pub type RotateAnimation = TimedStep<Rotation>;
/// Continuous rotation.
pub type CycledRotateAnimation = CyclicStep<Rotation>;
/// Gamma-correct fill color transition.
pub type FillColorAnimation = TimedStep<FillColor>;
/// Gamma-correct stroke color transition.
pub type StrokeColorAnimation = TimedStep<StrokeColor>;
