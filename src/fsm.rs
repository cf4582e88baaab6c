//! Generic finite-state-machine engine.
//!
//! The machine is a registry of state objects keyed by an explicit enum tag
//! plus current/previous bookkeeping. **Transition logic is intentionally
//! kept out of the machine itself** — it lives in each state's `tick`, which
//! returns the key it wants to move to.
//!
//! # Usage
//! ```ignore
//! let mut fsm: StateMachine<MyKey, MyCtx> = StateMachine::new();
//! fsm.register(Box::new(SomeState))?;
//! fsm.start(MyKey::Initial, &mut ctx)?;
//! // Each frame:
//! fsm.tick(&mut ctx)?;
//! ```

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::trace;
use thiserror::Error;

/// Bounds every registry key must satisfy. Blanket-implemented; use a small
/// `Copy` enum as the key type.
pub trait StateKey: Copy + Eq + Hash + Debug + 'static {}

impl<T: Copy + Eq + Hash + Debug + 'static> StateKey for T {}

/// One state in the machine. `Ctx` is the shared context passed by reference
/// into every callback; states never own or cache it.
pub trait State {
    type Key: StateKey;
    type Ctx;

    /// The registry key this state is filed under.
    fn key(&self) -> Self::Key;

    /// Fired once when the machine moves into this state.
    fn enter(&mut self, _ctx: &mut Self::Ctx) {}

    /// Fired once when the machine moves out of this state, before the next
    /// state's `enter`.
    fn exit(&mut self, _ctx: &mut Self::Ctx) {}

    /// Per-frame update. Return `Some(key)` to request a transition, `None`
    /// to stay.
    fn tick(&mut self, ctx: &mut Self::Ctx) -> Option<Self::Key>;
}

/// Setup/wiring defects. None of these are recoverable runtime conditions;
/// callers propagate them and fail loudly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FsmError<K: StateKey> {
    #[error("state {0:?} is already registered")]
    DuplicateState(K),
    #[error("no state registered under {0:?}")]
    UnknownState(K),
    #[error("state machine used before start()")]
    NotStarted,
}

/// The machine: exclusive owner of its state table, pure bookkeeping
/// otherwise. All side effects happen inside state callbacks.
pub struct StateMachine<K: StateKey, C> {
    states: HashMap<K, Box<dyn State<Key = K, Ctx = C> + Send + Sync>>,
    current: Option<K>,
    previous: Option<K>,
}

impl<K: StateKey, C> StateMachine<K, C> {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            current: None,
            previous: None,
        }
    }

    /// Add a state under its own key. Each key may be registered once.
    pub fn register(
        &mut self,
        state: Box<dyn State<Key = K, Ctx = C> + Send + Sync>,
    ) -> Result<(), FsmError<K>> {
        let key = state.key();
        if self.states.contains_key(&key) {
            return Err(FsmError::DuplicateState(key));
        }
        self.states.insert(key, state);
        Ok(())
    }

    /// Switch the machine on: set the current state and fire its `enter`.
    /// Every other operation fails with [`FsmError::NotStarted`] until this
    /// has run.
    pub fn start(&mut self, initial: K, ctx: &mut C) -> Result<(), FsmError<K>> {
        if !self.states.contains_key(&initial) {
            return Err(FsmError::UnknownState(initial));
        }
        self.current = Some(initial);
        if let Some(state) = self.states.get_mut(&initial) {
            state.enter(ctx);
        }
        trace!("fsm: start -> {:?}", initial);
        Ok(())
    }

    /// Move to `target`: fire `exit` on the current state, record it as
    /// previous, then fire `enter` on the target. Exit and enter run exactly
    /// once each, in that order — **also when `target` equals the current
    /// key** (re-entry is allowed and never deduplicated).
    pub fn transition(&mut self, target: K, ctx: &mut C) -> Result<(), FsmError<K>> {
        let current = self.current.ok_or(FsmError::NotStarted)?;
        if !self.states.contains_key(&target) {
            return Err(FsmError::UnknownState(target));
        }
        if let Some(state) = self.states.get_mut(&current) {
            state.exit(ctx);
        }
        self.previous = Some(current);
        self.current = Some(target);
        if let Some(state) = self.states.get_mut(&target) {
            state.enter(ctx);
        }
        trace!("fsm: {:?} -> {:?}", current, target);
        Ok(())
    }

    /// Go back to the previous state via a normal [`transition`] (the state
    /// left behind becomes the new previous). No-op before the first
    /// transition.
    ///
    /// [`transition`]: Self::transition
    pub fn revert_to_previous(&mut self, ctx: &mut C) -> Result<(), FsmError<K>> {
        match self.previous {
            Some(prev) => self.transition(prev, ctx),
            None => Ok(()),
        }
    }

    /// Forward one frame to the current state and apply the transition it
    /// requests, if any. Returns the key transitioned to.
    pub fn tick(&mut self, ctx: &mut C) -> Result<Option<K>, FsmError<K>> {
        let current = self.current.ok_or(FsmError::NotStarted)?;
        let requested = match self.states.get_mut(&current) {
            Some(state) => state.tick(ctx),
            None => None,
        };
        if let Some(next) = requested {
            self.transition(next, ctx)?;
        }
        Ok(requested)
    }

    /// Current state key. None only before `start`.
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// State the machine most recently left. None until the first transition.
    pub fn previous(&self) -> Option<K> {
        self.previous
    }

    pub fn is_registered(&self, key: K) -> bool {
        self.states.contains_key(&key)
    }
}

impl<K: StateKey, C> Default for StateMachine<K, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Key {
        A,
        B,
    }

    /// Probe state that appends its lifecycle events to the context.
    struct Probe {
        key: Key,
        next: Option<Key>,
    }

    impl State for Probe {
        type Key = Key;
        type Ctx = Vec<String>;

        fn key(&self) -> Key {
            self.key
        }

        fn enter(&mut self, ctx: &mut Vec<String>) {
            ctx.push(format!("enter {:?}", self.key));
        }

        fn exit(&mut self, ctx: &mut Vec<String>) {
            ctx.push(format!("exit {:?}", self.key));
        }

        fn tick(&mut self, ctx: &mut Vec<String>) -> Option<Key> {
            ctx.push(format!("tick {:?}", self.key));
            self.next
        }
    }

    fn machine_with(states: &[(Key, Option<Key>)]) -> StateMachine<Key, Vec<String>> {
        let mut fsm = StateMachine::new();
        for &(key, next) in states {
            fsm.register(Box::new(Probe { key, next })).unwrap();
        }
        fsm
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut fsm = machine_with(&[(Key::A, None)]);
        let err = fsm
            .register(Box::new(Probe {
                key: Key::A,
                next: None,
            }))
            .unwrap_err();
        assert_eq!(err, FsmError::DuplicateState(Key::A));
    }

    #[test]
    fn operations_before_start_fail() {
        let mut fsm = machine_with(&[(Key::A, None)]);
        let mut log = Vec::new();
        assert_eq!(fsm.tick(&mut log), Err(FsmError::NotStarted));
        assert_eq!(fsm.transition(Key::A, &mut log), Err(FsmError::NotStarted));
        assert!(log.is_empty());
    }

    #[test]
    fn start_requires_registration_and_fires_enter() {
        let mut fsm = machine_with(&[(Key::A, None)]);
        let mut log = Vec::new();
        assert_eq!(
            fsm.start(Key::B, &mut log),
            Err(FsmError::UnknownState(Key::B))
        );
        fsm.start(Key::A, &mut log).unwrap();
        assert_eq!(log, vec!["enter A"]);
        assert_eq!(fsm.current(), Some(Key::A));
        assert_eq!(fsm.previous(), None);
    }

    #[test]
    fn transition_fires_exit_then_enter_and_tracks_previous() {
        let mut fsm = machine_with(&[(Key::A, None), (Key::B, None)]);
        let mut log = Vec::new();
        fsm.start(Key::A, &mut log).unwrap();
        fsm.transition(Key::B, &mut log).unwrap();
        assert_eq!(log, vec!["enter A", "exit A", "enter B"]);
        assert_eq!(fsm.current(), Some(Key::B));
        assert_eq!(fsm.previous(), Some(Key::A));
    }

    #[test]
    fn transition_to_unknown_state_fails() {
        let mut fsm = machine_with(&[(Key::A, None)]);
        let mut log = Vec::new();
        fsm.start(Key::A, &mut log).unwrap();
        assert_eq!(
            fsm.transition(Key::B, &mut log),
            Err(FsmError::UnknownState(Key::B))
        );
        // A failed transition leaves the bookkeeping untouched.
        assert_eq!(fsm.current(), Some(Key::A));
        assert_eq!(fsm.previous(), None);
    }

    #[test]
    fn self_transition_refires_exit_and_enter() {
        let mut fsm = machine_with(&[(Key::A, None)]);
        let mut log = Vec::new();
        fsm.start(Key::A, &mut log).unwrap();
        fsm.transition(Key::A, &mut log).unwrap();
        fsm.transition(Key::A, &mut log).unwrap();
        assert_eq!(
            log,
            vec!["enter A", "exit A", "enter A", "exit A", "enter A"]
        );
        assert_eq!(fsm.previous(), Some(Key::A));
    }

    #[test]
    fn revert_is_noop_without_history() {
        let mut fsm = machine_with(&[(Key::A, None)]);
        let mut log = Vec::new();
        fsm.start(Key::A, &mut log).unwrap();
        fsm.revert_to_previous(&mut log).unwrap();
        assert_eq!(log, vec!["enter A"]);
        assert_eq!(fsm.current(), Some(Key::A));
    }

    #[test]
    fn revert_returns_to_previous_by_the_normal_rule() {
        let mut fsm = machine_with(&[(Key::A, None), (Key::B, None)]);
        let mut log = Vec::new();
        fsm.start(Key::A, &mut log).unwrap();
        fsm.transition(Key::B, &mut log).unwrap();
        fsm.revert_to_previous(&mut log).unwrap();
        assert_eq!(fsm.current(), Some(Key::A));
        // B is now the previous state, by the normal transition rule.
        assert_eq!(fsm.previous(), Some(Key::B));
    }

    #[test]
    fn tick_applies_the_requested_transition() {
        let mut fsm = machine_with(&[(Key::A, Some(Key::B)), (Key::B, None)]);
        let mut log = Vec::new();
        fsm.start(Key::A, &mut log).unwrap();
        let taken = fsm.tick(&mut log).unwrap();
        assert_eq!(taken, Some(Key::B));
        assert_eq!(log, vec!["enter A", "tick A", "exit A", "enter B"]);
        // B requests nothing; the machine stays put.
        assert_eq!(fsm.tick(&mut log).unwrap(), None);
        assert_eq!(fsm.current(), Some(Key::B));
    }
}
