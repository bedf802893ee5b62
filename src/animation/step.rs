//! Animation steps: the units an [`AnimationManager`](super::AnimationManager)
//! chains together.
//!
//! Every step follows the same two-call contract ([`Animation`]): `init`
//! once when it becomes the head of its chain, then `step` once per tick
//! until it reports completion.

use std::fmt;
use std::marker::PhantomData;

use super::group::{CycleDirection, CyclicGroup, PropertyGroup};
use super::state::DrawableState;
use crate::error::AnimationError;
use crate::util::easing::EasingFunction;

/// Contract shared by all step kinds.
pub trait Animation<G: PropertyGroup> {
    /// Called once when the step becomes active.
    fn init(&mut self, state: &mut DrawableState);

    /// Advance by `elapsed` milliseconds. `has_next` tells the step whether
    /// a successor is queued behind it. Returns `true` once the step is done
    /// and the chain should move on.
    fn step(
        &mut self,
        state: &mut DrawableState,
        elapsed: f64,
        has_next: bool,
    ) -> Result<bool, AnimationError>;
}

/// Eased interpolation between two snapshots of a property group.
///
/// The start snapshot is optional at construction; when absent it is taken
/// from the state bag on the first [`init`](Animation::init). A looping step
/// bounces between its endpoints for as long as nothing is queued behind it.
#[derive(Debug, Clone)]
pub struct TimedStep<G: PropertyGroup> {
    total_time: f64,
    easing: EasingFunction,
    looping: bool,
    t: f64,
    start: Option<G::Value>,
    end: G::Value,
}

impl<G: PropertyGroup> TimedStep<G> {
    /// Animate to `end` over `total_time` milliseconds, starting from
    /// wherever the state is at `init`, with linear easing.
    #[must_use]
    pub fn new(total_time: f64, end: G::Value) -> Self {
        Self {
            total_time,
            easing: EasingFunction::Linear,
            looping: false,
            t: 0.0,
            start: None,
            end,
        }
    }

    /// Fix the start snapshot instead of capturing it at `init`.
    #[must_use]
    pub fn from_value(mut self, start: G::Value) -> Self {
        self.start = Some(start);
        self
    }

    /// Use `easing` instead of linear progress.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Ping-pong between the endpoints while this is the last step.
    #[must_use]
    pub fn looped(mut self) -> Self {
        self.looping = true;
        self
    }

    /// Raw progress of the current leg, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.t
    }

    /// Start snapshot, once known.
    #[must_use]
    pub fn start(&self) -> Option<&G::Value> {
        self.start.as_ref()
    }

    /// Target snapshot of the current leg.
    #[must_use]
    pub fn end(&self) -> &G::Value {
        &self.end
    }

    /// Whether the step loops.
    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.looping
    }
}

impl<G: PropertyGroup> Animation<G> for TimedStep<G> {
    fn init(&mut self, state: &mut DrawableState) {
        self.t = 0.0;
        if self.start.is_none() {
            self.start = Some(G::read(state));
        }
    }

    fn step(
        &mut self,
        state: &mut DrawableState,
        elapsed: f64,
        has_next: bool,
    ) -> Result<bool, AnimationError> {
        let Some(start) = self.start.as_ref() else {
            return Err(AnimationError::NotInitialized { group: G::NAME });
        };
        // A zero-length step completes on its first tick.
        let mut t = self.t
            + if self.total_time > 0.0 {
                elapsed / self.total_time
            } else {
                1.0
            };
        let swap = t >= 1.0 && self.looping && !has_next;
        if t >= 1.0 {
            t = if swap { 0.0 } else { 1.0 };
        }
        let (from, to) = if swap {
            (&self.end, start)
        } else {
            (start, &self.end)
        };
        // Nothing is committed until the value is known to blend.
        let value = G::interpolate(from, to, self.easing.evaluate(t))?;
        if swap {
            if let Some(start) = self.start.as_mut() {
                std::mem::swap(start, &mut self.end);
            }
        }
        self.t = t;
        G::write(state, value);
        Ok(t == 1.0)
    }
}

/// Open-ended advance around a cyclic group, one full cycle every
/// `cycle_time` milliseconds.
///
/// Runs forever while it is the last step of its chain. Once something is
/// queued behind it, it advances for one more tick and completes.
#[derive(Clone)]
pub struct CyclicStep<G: PropertyGroup> {
    cycle_time: f64,
    direction: CycleDirection,
    advance: fn(&mut DrawableState, f64, CycleDirection),
    _group: PhantomData<fn() -> G>,
}

impl<G: CyclicGroup> CyclicStep<G> {
    /// One full cycle per `cycle_time` milliseconds in `direction`.
    #[must_use]
    pub fn new(cycle_time: f64, direction: CycleDirection) -> Self {
        Self {
            cycle_time,
            direction,
            advance: G::advance,
            _group: PhantomData,
        }
    }
}

impl<G: PropertyGroup> CyclicStep<G> {
    /// Milliseconds per full cycle.
    #[must_use]
    pub fn cycle_time(&self) -> f64 {
        self.cycle_time
    }

    /// Direction of travel.
    #[must_use]
    pub fn direction(&self) -> CycleDirection {
        self.direction
    }
}

impl<G: PropertyGroup> fmt::Debug for CyclicStep<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CyclicStep")
            .field("group", &G::NAME)
            .field("cycle_time", &self.cycle_time)
            .field("direction", &self.direction)
            .finish()
    }
}

impl<G: PropertyGroup> Animation<G> for CyclicStep<G> {
    fn init(&mut self, _state: &mut DrawableState) {}

    fn step(
        &mut self,
        state: &mut DrawableState,
        elapsed: f64,
        has_next: bool,
    ) -> Result<bool, AnimationError> {
        // A non-positive cycle time never advances.
        if self.cycle_time > 0.0 {
            (self.advance)(state, elapsed / self.cycle_time, self.direction);
        }
        Ok(has_next)
    }
}

/// Waits `delay` milliseconds without touching the state.
#[derive(Debug, Clone, PartialEq)]
pub struct DelayStep {
    delay: f64,
    time: f64,
}

impl DelayStep {
    /// Wait for `delay` milliseconds.
    #[must_use]
    pub fn new(delay: f64) -> Self {
        Self { delay, time: 0.0 }
    }

    /// Milliseconds accumulated since `init`.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.time
    }
}

impl<G: PropertyGroup> Animation<G> for DelayStep {
    fn init(&mut self, _state: &mut DrawableState) {
        self.time = 0.0;
    }

    fn step(
        &mut self,
        _state: &mut DrawableState,
        elapsed: f64,
        _has_next: bool,
    ) -> Result<bool, AnimationError> {
        self.time += elapsed;
        Ok(self.time >= self.delay)
    }
}

/// Side-effecting function signature for [`CallbackStep`].
pub type Callback = Box<dyn FnMut(&mut DrawableState)>;

/// Runs a function once, when it becomes active, then completes on its
/// first tick.
pub struct CallbackStep {
    callback: Callback,
}

impl CallbackStep {
    /// Wrap `callback`.
    #[must_use]
    pub fn new(callback: impl FnMut(&mut DrawableState) + 'static) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl fmt::Debug for CallbackStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackStep").finish_non_exhaustive()
    }
}

impl<G: PropertyGroup> Animation<G> for CallbackStep {
    fn init(&mut self, state: &mut DrawableState) {
        (self.callback)(state);
    }

    fn step(
        &mut self,
        _state: &mut DrawableState,
        _elapsed: f64,
        _has_next: bool,
    ) -> Result<bool, AnimationError> {
        Ok(true)
    }
}

/// Any step a manager can hold for group `G`.
#[derive(Debug)]
pub enum AnimationStep<G: PropertyGroup> {
    /// Eased interpolation.
    Timed(TimedStep<G>),
    /// Open-ended cyclic advance.
    Cyclic(CyclicStep<G>),
    /// Pause.
    Delay(DelayStep),
    /// One-shot side effect.
    Callback(CallbackStep),
}

impl<G: PropertyGroup> AnimationStep<G> {
    /// Pause for `delay` milliseconds.
    #[must_use]
    pub fn delay(delay: f64) -> Self {
        Self::Delay(DelayStep::new(delay))
    }

    /// Run `callback` once when the step becomes active.
    #[must_use]
    pub fn callback(callback: impl FnMut(&mut DrawableState) + 'static) -> Self {
        Self::Callback(CallbackStep::new(callback))
    }

    /// Short name of the step kind, for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timed(_) => "timed",
            Self::Cyclic(_) => "cyclic",
            Self::Delay(_) => "delay",
            Self::Callback(_) => "callback",
        }
    }
}

impl<G: CyclicGroup> AnimationStep<G> {
    /// Advance one full cycle per `cycle_time` milliseconds.
    #[must_use]
    pub fn cycle(cycle_time: f64, direction: CycleDirection) -> Self {
        Self::Cyclic(CyclicStep::new(cycle_time, direction))
    }
}

impl<G: PropertyGroup> Animation<G> for AnimationStep<G> {
    fn init(&mut self, state: &mut DrawableState) {
        match self {
            Self::Timed(s) => s.init(state),
            Self::Cyclic(s) => s.init(state),
            Self::Delay(s) => Animation::<G>::init(s, state),
            Self::Callback(s) => Animation::<G>::init(s, state),
        }
    }

    fn step(
        &mut self,
        state: &mut DrawableState,
        elapsed: f64,
        has_next: bool,
    ) -> Result<bool, AnimationError> {
        match self {
            Self::Timed(s) => s.step(state, elapsed, has_next),
            Self::Cyclic(s) => s.step(state, elapsed, has_next),
            Self::Delay(s) => Animation::<G>::step(s, state, elapsed, has_next),
            Self::Callback(s) => {
                Animation::<G>::step(s, state, elapsed, has_next)
            }
        }
    }
}

impl<G: PropertyGroup> From<TimedStep<G>> for AnimationStep<G> {
    fn from(step: TimedStep<G>) -> Self {
        Self::Timed(step)
    }
}

impl<G: PropertyGroup> From<CyclicStep<G>> for AnimationStep<G> {
    fn from(step: CyclicStep<G>) -> Self {
        Self::Cyclic(step)
    }
}

impl<G: PropertyGroup> From<DelayStep> for AnimationStep<G> {
    fn from(step: DelayStep) -> Self {
        Self::Delay(step)
    }
}

impl<G: PropertyGroup> From<CallbackStep> for AnimationStep<G> {
    fn from(step: CallbackStep) -> Self {
        Self::Callback(step)
    }
}
