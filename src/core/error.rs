//! Error types for transition table construction and lookup.

use super::transition::StateId;
use thiserror::Error;

/// Errors raised by [`TransitionTable`](super::TransitionTable) operations.
///
/// Both variants carry the offending `(state, input)` pair. The machine's
/// "no output" outcome is not an error — `interpret` models it as an absent
/// result, keeping hard construction/lookup failures distinct from input that
/// is simply not accepted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A rule for this `(state, input)` pair already exists in the table.
    #[error("non-deterministic transition: state {state} already has a rule for input '{input}'")]
    NonDeterministicTransition { state: StateId, input: char },

    /// No rule matches this `(state, input)` pair.
    #[error("no transition from state {state} on input '{input}'")]
    BadInput { state: StateId, input: char },
}
