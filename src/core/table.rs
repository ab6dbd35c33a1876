//! The strict transition table: determinism enforced at insertion.

use super::error::TableError;
use super::transition::{StateId, Transition};
use serde::{Deserialize, Serialize};

/// An insertion-ordered collection of rules with a determinism invariant.
///
/// No two rules in a table may share the same `(current_state, input)` pair;
/// [`add_transition`](TransitionTable::add_transition) rejects the duplicate
/// and leaves the table unchanged. Lookup is a linear scan in insertion order
/// — tables are bounded by states × alphabet and stay small.
///
/// Contrast with [`FiniteStateMachine`](super::FiniteStateMachine), which
/// keeps its own rule list and accepts duplicates; the strict table and the
/// permissive machine are deliberately distinct types.
///
/// # Example
///
/// ```rust
/// use mealy::core::{Transition, TransitionTable};
///
/// let mut table = TransitionTable::new();
/// table.add_transition(Transition::new(1, 'a', 'e', 2))?;
///
/// let rule = table.get_transition(1, 'a')?;
/// assert_eq!(rule.next_state(), 2);
///
/// // A second rule for (1, 'a') is non-deterministic and rejected.
/// assert!(table.add_transition(Transition::new(1, 'a', 'x', 3)).is_err());
/// assert_eq!(table.len(), 1);
/// # Ok::<(), mealy::core::TableError>(())
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionTable {
    transitions: Vec<Transition>,
}

impl TransitionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a rule to the table.
    ///
    /// Fails with [`TableError::NonDeterministicTransition`] when an existing
    /// rule already covers the same `(current_state, input)` pair; the table
    /// is left unchanged in that case.
    pub fn add_transition(&mut self, transition: Transition) -> Result<(), TableError> {
        if self
            .transitions
            .iter()
            .any(|existing| existing.matches(transition.current_state(), transition.input()))
        {
            return Err(TableError::NonDeterministicTransition {
                state: transition.current_state(),
                input: transition.input(),
            });
        }
        self.transitions.push(transition);
        Ok(())
    }

    /// Look up the rule for `(state, input)`.
    ///
    /// Scans in insertion order and returns the first match. Fails with
    /// [`TableError::BadInput`] when no rule matches.
    pub fn get_transition(&self, state: StateId, input: char) -> Result<&Transition, TableError> {
        self.transitions
            .iter()
            .find(|t| t.matches(state, input))
            .ok_or(TableError::BadInput { state, input })
    }

    /// Check whether any rule leads to a state the table never fires from.
    ///
    /// Returns true iff some rule's `next_state` does not appear as the
    /// `current_state` of any rule in the table. Such a destination is a dead
    /// end: once reached, no input can be consumed.
    pub fn has_transitions_to_illegal_states(&self) -> bool {
        self.transitions.iter().any(|t| {
            !self
                .transitions
                .iter()
                .any(|origin| origin.current_state() == t.next_state())
        })
    }

    /// Check the table's input alphabet for missing symbols.
    ///
    /// The alphabet is derived from the table's own rules: every distinct
    /// input symbol observed across all transitions. Each collected symbol is
    /// then checked to appear as some rule's input. Because the alphabet comes
    /// from the rules themselves, every collected symbol trivially appears, so
    /// under normal construction this always returns false — it can only
    /// signal an internal bookkeeping fault, not genuine per-state
    /// incompleteness against an externally declared alphabet. The weak
    /// semantics are deliberate and are not widened into a per-state
    /// completeness check.
    pub fn has_missing_inputs(&self) -> bool {
        let alphabet: Vec<char> = self.transitions.iter().map(Transition::input).collect();

        alphabet
            .iter()
            .any(|&symbol| !self.transitions.iter().any(|t| t.input() == symbol))
    }

    /// All rules in insertion order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Check whether the table holds no rules.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_is_empty() {
        let table = TransitionTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.transitions().is_empty());
    }

    #[test]
    fn add_then_get_returns_the_rule() {
        let mut table = TransitionTable::new();
        let rule = Transition::new(1, 'a', 'b', 2);
        table.add_transition(rule).unwrap();

        assert_eq!(table.get_transition(1, 'a'), Ok(&rule));
    }

    #[test]
    fn duplicate_pair_is_rejected_atomically() {
        let mut table = TransitionTable::new();
        table.add_transition(Transition::new(1, 'a', 'b', 2)).unwrap();

        let result = table.add_transition(Transition::new(1, 'a', 'c', 3));

        assert_eq!(
            result,
            Err(TableError::NonDeterministicTransition {
                state: 1,
                input: 'a'
            })
        );
        // Rejection left the table unchanged.
        assert_eq!(table.len(), 1);
        assert_eq!(table.get_transition(1, 'a').unwrap().next_state(), 2);
    }

    #[test]
    fn same_state_different_input_is_deterministic() {
        let mut table = TransitionTable::new();
        table.add_transition(Transition::new(1, 'a', 'b', 2)).unwrap();
        table.add_transition(Transition::new(1, 'b', 'c', 2)).unwrap();
        table.add_transition(Transition::new(2, 'a', 'b', 1)).unwrap();

        assert_eq!(table.len(), 3);
    }

    #[test]
    fn lookup_misses_fail_with_bad_input() {
        let mut table = TransitionTable::new();
        table.add_transition(Transition::new(1, 'a', 'b', 2)).unwrap();

        assert_eq!(
            table.get_transition(1, 'z'),
            Err(TableError::BadInput {
                state: 1,
                input: 'z'
            })
        );
        assert_eq!(
            table.get_transition(9, 'a'),
            Err(TableError::BadInput {
                state: 9,
                input: 'a'
            })
        );
    }

    #[test]
    fn lookup_on_empty_table_fails() {
        let table = TransitionTable::new();
        assert!(table.get_transition(1, 'a').is_err());
    }

    #[test]
    fn detects_transition_to_illegal_state() {
        let mut table = TransitionTable::new();
        // State 2 is a destination but never an origin.
        table.add_transition(Transition::new(1, 'a', 'b', 2)).unwrap();

        assert!(table.has_transitions_to_illegal_states());
    }

    #[test]
    fn closed_table_has_no_illegal_states() {
        let mut table = TransitionTable::new();
        table.add_transition(Transition::new(1, 'a', 'e', 1)).unwrap();
        table.add_transition(Transition::new(1, 'b', 'o', 2)).unwrap();
        table.add_transition(Transition::new(2, 'a', 'o', 2)).unwrap();
        table.add_transition(Transition::new(2, 'b', 'e', 1)).unwrap();

        assert!(!table.has_transitions_to_illegal_states());
    }

    #[test]
    fn empty_table_has_no_illegal_states() {
        let table = TransitionTable::new();
        assert!(!table.has_transitions_to_illegal_states());
    }

    #[test]
    fn self_loop_is_a_legal_destination() {
        let mut table = TransitionTable::new();
        table.add_transition(Transition::new(1, 'a', 'e', 1)).unwrap();

        assert!(!table.has_transitions_to_illegal_states());
    }

    #[test]
    fn derived_alphabet_reports_no_missing_inputs() {
        let mut table = TransitionTable::new();
        table.add_transition(Transition::new(1, 'a', 'b', 2)).unwrap();
        table.add_transition(Transition::new(1, 'b', 'c', 2)).unwrap();

        assert!(!table.has_missing_inputs());
    }

    #[test]
    fn empty_table_has_no_missing_inputs() {
        let table = TransitionTable::new();
        assert!(!table.has_missing_inputs());
    }

    #[test]
    fn table_serializes_correctly() {
        let mut table = TransitionTable::new();
        table.add_transition(Transition::new(1, 'a', 'b', 2)).unwrap();
        table.add_transition(Transition::new(2, 'b', 'c', 1)).unwrap();

        let json = serde_json::to_string(&table).unwrap();
        let deserialized: TransitionTable = serde_json::from_str(&json).unwrap();

        assert_eq!(table.transitions(), deserialized.transitions());
    }
}
