//! The construction boundary for transducer objects.
//!
//! Callers build transitions, tables and machines through a [`Factory`]
//! rather than invoking constructors directly, so an alternative
//! implementation of the whole family can be substituted at a single seam.
//! The factory is an injectable value, not a global: tests construct
//! independent instances with no cross-test interference.

use crate::core::{FiniteStateMachine, StateId, Transition, TransitionTable};

/// Single access point for constructing transducer objects.
///
/// Implementations perform no validation of their own; invariants live in
/// the constructed objects.
///
/// # Example
///
/// ```rust
/// use mealy::factory::{DefaultFactory, Factory};
///
/// let factory = DefaultFactory;
/// let mut fsm = factory.make_finite_state_machine();
/// fsm.add_transition(factory.make_transition(1, 'a', 'e', 1));
///
/// assert_eq!(fsm.interpret("aa"), Some("ee".to_string()));
/// ```
pub trait Factory {
    /// Build a rule from its four fields.
    fn make_transition(
        &self,
        current_state: StateId,
        input: char,
        output: char,
        next_state: StateId,
    ) -> Transition;

    /// Build an empty transition table.
    fn make_transition_table(&self) -> TransitionTable;

    /// Build an empty finite-state machine.
    fn make_finite_state_machine(&self) -> FiniteStateMachine;
}

/// The stock [`Factory`]: constructs the crate's own types directly.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultFactory;

impl Factory for DefaultFactory {
    fn make_transition(
        &self,
        current_state: StateId,
        input: char,
        output: char,
        next_state: StateId,
    ) -> Transition {
        Transition::new(current_state, input, output, next_state)
    }

    fn make_transition_table(&self) -> TransitionTable {
        TransitionTable::new()
    }

    fn make_finite_state_machine(&self) -> FiniteStateMachine {
        FiniteStateMachine::new()
    }
}
