//! The finite-state machine: a permissive rule list plus the interpretation loop.

use super::trace::{Trace, TraceStep};
use super::transition::Transition;
use serde::{Deserialize, Serialize};

/// A deterministic Mealy-machine transducer.
///
/// The machine owns its own insertion-ordered rule list and, unlike
/// [`TransitionTable`](super::TransitionTable), performs no determinism check
/// on insertion. If duplicate `(state, input)` rules are present, the first
/// one added wins during interpretation — an observable guarantee, covered by
/// tests.
///
/// A machine holds no cursor between runs: each call to
/// [`interpret`](FiniteStateMachine::interpret) starts from the
/// `current_state` of the first rule ever added and walks the input from
/// there, so repeated calls with the same input always produce the same
/// output.
///
/// # Example
///
/// ```rust
/// use mealy::core::{FiniteStateMachine, Transition};
///
/// let mut fsm = FiniteStateMachine::new();
/// fsm.add_transition(Transition::new(1, 'a', 'e', 1));
/// fsm.add_transition(Transition::new(1, 'b', 'o', 2));
/// fsm.add_transition(Transition::new(2, 'a', 'o', 2));
/// fsm.add_transition(Transition::new(2, 'b', 'e', 1));
///
/// assert_eq!(fsm.interpret("aba"), Some("eoo".to_string()));
/// assert_eq!(fsm.interpret("aca"), None); // no rule for 'c' from state 1
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FiniteStateMachine {
    transitions: Vec<Transition>,
}

impl FiniteStateMachine {
    /// Create a machine with no rules.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a rule to the machine.
    ///
    /// No duplicate check is performed at this layer; the machine is
    /// permissive where the table is strict.
    pub fn add_transition(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    /// Transduce `input` into an output string.
    ///
    /// Returns `None` when the machine holds no rules, for any input
    /// including the empty string. Otherwise the walk starts from the
    /// `current_state` of the first rule ever added; for each input symbol
    /// the first rule (in insertion order) matching the current state and
    /// symbol emits its output and advances the state. A single symbol with
    /// no matching rule nulls the entire run — the result is never partial.
    ///
    /// On success the output has the same length (in symbols) as the input.
    pub fn interpret(&self, input: &str) -> Option<String> {
        let first = self.transitions.first()?;

        let mut current = first.current_state();
        let mut output = String::with_capacity(input.len());

        for c in input.chars() {
            let rule = self.transitions.iter().find(|t| t.matches(current, c))?;
            output.push(rule.output());
            current = rule.next_state();
        }

        Some(output)
    }

    /// Transduce `input`, recording every applied rule.
    ///
    /// Absent under exactly the same conditions as
    /// [`interpret`](FiniteStateMachine::interpret); on success the returned
    /// [`Trace`] carries one step per input symbol. Use `interpret` when only
    /// the output string is wanted.
    pub fn interpret_trace(&self, input: &str) -> Option<Trace> {
        let first = self.transitions.first()?;

        let mut current = first.current_state();
        let mut trace = Trace::new();

        for c in input.chars() {
            let rule = self.transitions.iter().find(|t| t.matches(current, c))?;
            trace.record(TraceStep {
                from: current,
                input: c,
                output: rule.output(),
                to: rule.next_state(),
            });
            current = rule.next_state();
        }

        Some(trace)
    }

    /// All rules in insertion order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Number of rules held by the machine.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Check whether the machine holds no rules.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
