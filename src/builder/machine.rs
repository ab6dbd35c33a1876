//! Builder for constructing finite-state machines.

use crate::core::{FiniteStateMachine, StateId, Transition};

/// Builder for constructing a [`FiniteStateMachine`] with a fluent API.
///
/// The machine is permissive, so building never fails; rule order is
/// preserved and determines both the start state (first rule added) and
/// first-match lookup among any duplicates.
///
/// # Example
///
/// ```rust
/// use mealy::builder::MachineBuilder;
///
/// let fsm = MachineBuilder::new()
///     .rule(1, 'a', 'e', 1)
///     .rule(1, 'b', 'o', 2)
///     .rule(2, 'a', 'o', 2)
///     .rule(2, 'b', 'e', 1)
///     .build();
///
/// assert_eq!(fsm.interpret("aba"), Some("eoo".to_string()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MachineBuilder {
    rules: Vec<Transition>,
}

impl MachineBuilder {
    /// Create a new machine builder.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule from its four fields.
    pub fn rule(mut self, state: StateId, input: char, output: char, next: StateId) -> Self {
        self.rules.push(Transition::new(state, input, output, next));
        self
    }

    /// Add a pre-built transition.
    pub fn transition(mut self, transition: Transition) -> Self {
        self.rules.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn rules(mut self, rules: Vec<Transition>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Build the machine.
    pub fn build(self) -> FiniteStateMachine {
        let mut machine = FiniteStateMachine::new();
        for rule in self.rules {
            machine.add_transition(rule);
        }
        machine
    }
}
