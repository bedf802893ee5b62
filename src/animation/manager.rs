//! Per-group animation chains.
//!
//! A manager holds one chain of steps for one property group. Steps live in
//! a slot-map arena; the manager keeps the head handle and each node keeps
//! the handle of its successor. Completed or replaced steps are removed from
//! the arena as soon as they leave the chain.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};

use super::group::PropertyGroup;
use super::state::DrawableState;
use super::step::{Animation, AnimationStep};
use crate::error::AnimationError;

new_key_type! {
    /// Handle to a step stored in a manager's chain.
    pub struct StepId;
}

/// When a successor receives `init` after its predecessor completes.
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
pub enum ChainAdvance {
    /// On the same tick the predecessor completes.
    #[default]
    Immediate,
    /// On the following tick, so every step gets a tick of its own for
    /// `init`.
    Deferred,
}

#[derive(Debug)]
struct ChainNode<G: PropertyGroup> {
    step: AnimationStep<G>,
    next: Option<StepId>,
}

/// Drives at most one chain of steps against group `G` of a state bag.
#[derive(Debug)]
pub struct AnimationManager<G: PropertyGroup> {
    steps: SlotMap<StepId, ChainNode<G>>,
    head: Option<StepId>,
    initialized: bool,
    advance: ChainAdvance,
}

impl<G: PropertyGroup> Default for AnimationManager<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: PropertyGroup> AnimationManager<G> {
    /// Idle manager with [`ChainAdvance::Immediate`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_advance(ChainAdvance::default())
    }

    /// Idle manager with the given advance policy.
    #[must_use]
    pub fn with_advance(advance: ChainAdvance) -> Self {
        Self {
            steps: SlotMap::with_key(),
            head: None,
            initialized: false,
            advance,
        }
    }

    /// Advance policy in use.
    #[must_use]
    pub fn advance(&self) -> ChainAdvance {
        self.advance
    }

    /// Change the advance policy. Takes effect at the next completion.
    pub fn set_advance(&mut self, advance: ChainAdvance) {
        self.advance = advance;
    }

    /// Drop the current chain and make `step` the new, uninitialized head.
    pub fn instant(&mut self, step: impl Into<AnimationStep<G>>) -> &mut Self {
        self.steps.clear();
        let step = step.into();
        log::trace!("{}: chain replaced by {} step", G::NAME, step.kind());
        self.head = Some(self.steps.insert(ChainNode { step, next: None }));
        self.initialized = false;
        self
    }

    /// Append `step` after the last step of the chain. On an idle manager
    /// this is the same as [`instant`](Self::instant).
    pub fn queued(&mut self, step: impl Into<AnimationStep<G>>) -> &mut Self {
        let Some(mut tail) = self.head else {
            return self.instant(step);
        };
        while let Some(next) = self.steps.get(tail).and_then(|n| n.next) {
            tail = next;
        }
        let id = self.steps.insert(ChainNode {
            step: step.into(),
            next: None,
        });
        if let Some(node) = self.steps.get_mut(tail) {
            node.next = Some(id);
        }
        self
    }

    /// Remove every step.
    pub fn clear(&mut self) {
        self.steps.clear();
        self.head = None;
        self.initialized = false;
    }

    /// Run one tick of the chain against `state`.
    ///
    /// An uninitialized head only receives `init` this tick. An initialized
    /// head is stepped by `elapsed` milliseconds; when it completes the chain
    /// moves to its successor, which is initialized according to the
    /// [`ChainAdvance`] policy, or the manager goes idle.
    pub fn step(
        &mut self,
        state: &mut DrawableState,
        elapsed: f64,
    ) -> Result<(), AnimationError> {
        let Some(head) = self.head else {
            return Ok(());
        };
        let Some(node) = self.steps.get_mut(head) else {
            self.head = None;
            self.initialized = false;
            return Ok(());
        };

        if !self.initialized {
            node.step.init(state);
            self.initialized = true;
            return Ok(());
        }

        let has_next = node.next.is_some();
        if !node.step.step(state, elapsed, has_next)? {
            return Ok(());
        }

        let next = self.steps.remove(head).and_then(|n| n.next);
        self.head = next;
        self.initialized = false;

        let Some(next) = next else {
            log::debug!("{}: chain finished", G::NAME);
            return Ok(());
        };
        if self.advance == ChainAdvance::Immediate {
            if let Some(node) = self.steps.get_mut(next) {
                log::trace!("{}: advancing to {} step", G::NAME, node.step.kind());
                node.step.init(state);
                self.initialized = true;
            }
        }
        Ok(())
    }

    /// Whether no chain is present.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.head.is_none()
    }

    /// Whether the head has received `init` and not yet completed.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of steps left in the chain, the head included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Same as [`is_idle`](Self::is_idle).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Handle of the head step.
    #[must_use]
    pub fn head(&self) -> Option<StepId> {
        self.head
    }

    /// The head step.
    #[must_use]
    pub fn active(&self) -> Option<&AnimationStep<G>> {
        self.head
            .and_then(|id| self.steps.get(id))
            .map(|node| &node.step)
    }

    /// Step kinds from head to tail.
    #[must_use]
    pub fn chain_kinds(&self) -> Vec<&'static str> {
        let mut kinds = Vec::with_capacity(self.steps.len());
        let mut cursor = self.head;
        while let Some(node) = cursor.and_then(|id| self.steps.get(id)) {
            kinds.push(node.step.kind());
            cursor = node.next;
        }
        kinds
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use glam::DVec2;

    use super::*;
    use crate::animation::group::{
        CycleDirection, FillColor, Position, Rotation, Scale,
    };
    use crate::animation::step::TimedStep;
    use crate::util::color::Paint;

    #[test]
    fn idle_manager_is_noop() {
        let mut manager = AnimationManager::<Scale>::new();
        let mut state = DrawableState::default();
        manager.step(&mut state, 100.0).unwrap();
        assert!(manager.is_idle());
        assert_eq!(state, DrawableState::default());
    }

    #[test]
    fn queued_on_idle_matches_instant() {
        let mut queued = AnimationManager::<Scale>::new();
        let _ = queued.queued(TimedStep::<Scale>::new(100.0, 2.0));
        let mut instant = AnimationManager::<Scale>::new();
        let _ = instant.instant(TimedStep::<Scale>::new(100.0, 2.0));

        for manager in [&queued, &instant] {
            assert_eq!(manager.len(), 1);
            assert!(!manager.is_initialized());
            assert_eq!(manager.chain_kinds(), vec!["timed"]);
        }
    }

    #[test]
    fn first_tick_only_initializes() {
        let mut manager = AnimationManager::<Scale>::new();
        let _ = manager.instant(TimedStep::<Scale>::new(100.0, 2.0));
        let mut state = DrawableState::default();
        manager.step(&mut state, 50.0).unwrap();
        assert!(manager.is_initialized());
        assert_eq!(state.scale, 1.0);
        manager.step(&mut state, 50.0).unwrap();
        assert!((state.scale - 1.5).abs() < 1e-12);
    }

    #[test]
    fn instant_replaces_chain_and_reclaims_steps() {
        let mut manager = AnimationManager::<Scale>::new();
        let _ = manager
            .queued(TimedStep::<Scale>::new(100.0, 2.0))
            .queued(AnimationStep::<Scale>::delay(10.0))
            .queued(TimedStep::<Scale>::new(100.0, 3.0));
        let old_head = manager.head();
        let mut state = DrawableState::default();
        manager.step(&mut state, 0.0).unwrap();

        let _ = manager.instant(AnimationStep::<Scale>::delay(5.0));
        assert_eq!(manager.len(), 1);
        assert!(!manager.is_initialized());
        assert_ne!(manager.head(), old_head);
        assert_eq!(manager.chain_kinds(), vec!["delay"]);
    }

    #[test]
    fn queueing_preserves_progress_and_order() {
        let mut manager = AnimationManager::<Position>::new();
        let mut state = DrawableState::default();
        let _ = manager.queued(TimedStep::<Position>::new(1000.0, DVec2::new(100.0, 0.0)));
        manager.step(&mut state, 0.0).unwrap();
        manager.step(&mut state, 400.0).unwrap();
        assert!((state.x - 40.0).abs() < 1e-9);

        let _ = manager
            .queued(TimedStep::<Position>::new(100.0, DVec2::new(200.0, 0.0)))
            .queued(TimedStep::<Position>::new(100.0, DVec2::new(300.0, 0.0)))
            .queued(TimedStep::<Position>::new(100.0, DVec2::new(400.0, 0.0)));
        assert_eq!(manager.len(), 4);

        manager.step(&mut state, 100.0).unwrap();
        assert!((state.x - 50.0).abs() < 1e-9, "A kept its progress");

        // A completes; B starts from where A ended.
        manager.step(&mut state, 500.0).unwrap();
        assert_eq!(state.x, 100.0);
        assert_eq!(manager.len(), 3);
        assert!(manager.is_initialized());

        manager.step(&mut state, 100.0).unwrap();
        assert_eq!(state.x, 200.0);
        manager.step(&mut state, 100.0).unwrap();
        assert_eq!(state.x, 300.0);
        manager.step(&mut state, 100.0).unwrap();
        assert_eq!(state.x, 400.0);
        assert!(manager.is_idle());
        assert!(!manager.is_initialized());
        assert!(manager.is_empty());
    }

    #[test]
    fn completion_order_is_queue_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut manager = AnimationManager::<Scale>::new();
        for name in ["A", "B", "C"] {
            let log = Rc::clone(&log);
            let _ = manager
                .queued(AnimationStep::<Scale>::callback(move |_| log.borrow_mut().push(name)))
                .queued(AnimationStep::<Scale>::delay(10.0));
        }
        let mut state = DrawableState::default();
        for _ in 0..20 {
            manager.step(&mut state, 10.0).unwrap();
        }
        assert_eq!(*log.borrow(), vec!["A", "B", "C"]);
        assert!(manager.is_idle());
    }

    #[test]
    fn delay_then_callback_fires_on_fourth_tick() {
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        let mut manager = AnimationManager::<Scale>::new();
        let _ = manager
            .queued(AnimationStep::<Scale>::delay(300.0))
            .queued(AnimationStep::<Scale>::callback(move |_| {
                counter.set(counter.get() + 1);
            }));
        let mut state = DrawableState::default();

        // Tick 1 initializes the delay; ticks 2-3 accumulate 200 ms.
        for _ in 0..3 {
            manager.step(&mut state, 100.0).unwrap();
            assert_eq!(fired.get(), 0);
        }
        // Tick 4 completes the delay and initializes the callback.
        manager.step(&mut state, 100.0).unwrap();
        assert_eq!(fired.get(), 1);
        // Tick 5 completes the callback without firing again.
        manager.step(&mut state, 100.0).unwrap();
        assert_eq!(fired.get(), 1);
        assert!(manager.is_idle());
    }

    #[test]
    fn deferred_advance_gives_successor_its_own_init_tick() {
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        let mut manager = AnimationManager::<Scale>::with_advance(ChainAdvance::Deferred);
        let _ = manager
            .queued(AnimationStep::<Scale>::delay(300.0))
            .queued(AnimationStep::<Scale>::callback(move |_| {
                counter.set(counter.get() + 1);
            }));
        let mut state = DrawableState::default();
        for _ in 0..4 {
            manager.step(&mut state, 100.0).unwrap();
        }
        assert_eq!(fired.get(), 0);
        assert!(!manager.is_initialized());
        assert_eq!(manager.chain_kinds(), vec!["callback"]);

        manager.step(&mut state, 100.0).unwrap();
        assert_eq!(fired.get(), 1);
        assert!(manager.is_initialized());
    }

    #[test]
    fn cyclic_hands_over_when_successor_queued() {
        let mut manager = AnimationManager::<Rotation>::new();
        let mut state = DrawableState::default();
        let _ = manager.queued(AnimationStep::<Rotation>::cycle(1000.0, CycleDirection::Clockwise));
        for _ in 0..11 {
            manager.step(&mut state, 100.0).unwrap();
        }
        assert_eq!(manager.chain_kinds(), vec!["cyclic"]);

        let _ = manager.queued(TimedStep::<Rotation>::new(100.0, 0.0).from_value(1.0));
        manager.step(&mut state, 100.0).unwrap();
        assert_eq!(manager.chain_kinds(), vec!["timed"]);
        assert!(manager.is_initialized());
        manager.step(&mut state, 100.0).unwrap();
        assert_eq!(state.rotate, 0.0);
        assert!(manager.is_idle());
    }

    #[test]
    fn errors_propagate_without_advancing() {
        let mut manager = AnimationManager::<FillColor>::new();
        let mut state = DrawableState {
            fill_color: Paint::Css("red".to_owned()),
            ..Default::default()
        };
        let _ = manager.queued(TimedStep::<FillColor>::new(100.0, Paint::BLACK));
        manager.step(&mut state, 10.0).unwrap();
        assert!(manager.step(&mut state, 10.0).is_err());
        assert_eq!(manager.len(), 1);
    }
}
