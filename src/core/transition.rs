//! The transition record: a single row of a Mealy-machine rule table.

use serde::{Deserialize, Serialize};

/// Opaque integer identifier for a machine state.
///
/// States carry no structure beyond identity; they are whatever numbers the
/// rule author chose. There is no requirement that they start at zero or be
/// contiguous.
pub type StateId = u32;

/// A single transducer rule: `(current_state, input) -> (output, next_state)`.
///
/// Transitions are immutable values. Two transitions compete for the same
/// lookup slot when their `(current_state, input)` pairs match, regardless of
/// output and next state — see [`Transition::matches`].
///
/// # Example
///
/// ```rust
/// use mealy::core::Transition;
///
/// let rule = Transition::new(1, 'a', 'e', 2);
/// assert_eq!(rule.current_state(), 1);
/// assert_eq!(rule.input(), 'a');
/// assert_eq!(rule.output(), 'e');
/// assert_eq!(rule.next_state(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Transition {
    current_state: StateId,
    input: char,
    output: char,
    next_state: StateId,
}

impl Transition {
    /// Create a rule mapping `(current_state, input)` to `(output, next_state)`.
    ///
    /// A transition performs no validation; determinism is the concern of the
    /// collection it is inserted into.
    pub fn new(current_state: StateId, input: char, output: char, next_state: StateId) -> Self {
        Self {
            current_state,
            input,
            output,
            next_state,
        }
    }

    /// The state this rule fires from.
    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    /// The input symbol this rule consumes.
    pub fn input(&self) -> char {
        self.input
    }

    /// The output symbol this rule emits.
    pub fn output(&self) -> char {
        self.output
    }

    /// The state the machine moves to after this rule fires.
    pub fn next_state(&self) -> StateId {
        self.next_state
    }

    /// Check whether this rule fires for the given `(state, input)` pair.
    ///
    /// This is the lookup key: output and next state play no part.
    pub fn matches(&self, state: StateId, input: char) -> bool {
        self.current_state == state && self.input == input
    }
}
