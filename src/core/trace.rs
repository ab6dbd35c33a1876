//! Step-by-step record of a single interpretation run.

use super::transition::StateId;
use serde::{Deserialize, Serialize};

/// One applied rule during an interpretation run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TraceStep {
    /// The state the machine was in when the symbol arrived
    pub from: StateId,
    /// The input symbol consumed
    pub input: char,
    /// The output symbol emitted
    pub output: char,
    /// The state the machine moved to
    pub to: StateId,
}

/// Ordered record of the rules applied by one interpretation run.
///
/// Produced by
/// [`FiniteStateMachine::interpret_trace`](super::FiniteStateMachine::interpret_trace);
/// one step per input symbol.
///
/// # Example
///
/// ```rust
/// use mealy::core::{FiniteStateMachine, Transition};
///
/// let mut fsm = FiniteStateMachine::new();
/// fsm.add_transition(Transition::new(1, 'a', 'e', 2));
/// fsm.add_transition(Transition::new(2, 'a', 'o', 1));
///
/// let trace = fsm.interpret_trace("aa").unwrap();
/// assert_eq!(trace.output(), "eo");
/// assert_eq!(trace.path(), vec![1, 2, 1]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step to the trace.
    pub(crate) fn record(&mut self, step: TraceStep) {
        self.steps.push(step);
    }

    /// All steps in application order.
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// The states visited, starting state first.
    ///
    /// Empty when the run consumed no input.
    pub fn path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.first() {
            path.push(first.from);
        }
        for step in &self.steps {
            path.push(step.to);
        }
        path
    }

    /// The accumulated output string.
    pub fn output(&self) -> String {
        self.steps.iter().map(|step| step.output).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_trace_has_empty_path_and_output() {
        let trace = Trace::new();
        assert!(trace.steps().is_empty());
        assert!(trace.path().is_empty());
        assert_eq!(trace.output(), "");
    }

    #[test]
    fn path_prepends_the_origin_state() {
        let mut trace = Trace::new();
        trace.record(TraceStep {
            from: 7,
            input: '1',
            output: '1',
            to: 5,
        });
        trace.record(TraceStep {
            from: 5,
            input: '1',
            output: '2',
            to: 6,
        });

        assert_eq!(trace.path(), vec![7, 5, 6]);
        assert_eq!(trace.output(), "12");
    }

    #[test]
    fn trace_serializes_correctly() {
        let mut trace = Trace::new();
        trace.record(TraceStep {
            from: 1,
            input: 'a',
            output: 'e',
            to: 1,
        });

        let json = serde_json::to_string(&trace).unwrap();
        let deserialized: Trace = serde_json::from_str(&json).unwrap();

        assert_eq!(trace.steps(), deserialized.steps());
    }
}
