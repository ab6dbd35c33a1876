//! Builder for constructing transition tables.

use crate::core::{StateId, TableError, Transition, TransitionTable};

/// Builder for constructing a [`TransitionTable`] with a fluent API.
///
/// Rules are collected in order and inserted at
/// [`build`](TableBuilder::build), so the first duplicated `(state, input)`
/// pair fails exactly as direct table insertion would.
///
/// # Example
///
/// ```rust
/// use mealy::builder::TableBuilder;
///
/// let table = TableBuilder::new()
///     .rule(1, 'a', 'e', 1)
///     .rule(1, 'b', 'o', 2)
///     .build()?;
///
/// assert_eq!(table.len(), 2);
/// # Ok::<(), mealy::core::TableError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct TableBuilder {
    rules: Vec<Transition>,
}

impl TableBuilder {
    /// Create a new table builder.
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

    /// Build the table.
    ///
    /// Fails with [`TableError::NonDeterministicTransition`] on the first
    /// rule whose `(state, input)` pair duplicates an earlier one.
    pub fn build(self) -> Result<TransitionTable, TableError> {
        let mut table = TransitionTable::new();
        for rule in self.rules {
            table.add_transition(rule)?;
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fluent_api_builds_table() {
        let table = TableBuilder::new()
            .rule(1, 'a', 'e', 1)
            .rule(1, 'b', 'o', 2)
            .transition(Transition::new(2, 'a', 'o', 2))
            .build()
            .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.get_transition(2, 'a').unwrap().output(), 'o');
    }

    #[test]
    fn build_rejects_duplicate_pairs() {
        let result = TableBuilder::new()
            .rule(1, 'a', 'e', 1)
            .rule(1, 'a', 'x', 2)
            .build();

        assert_eq!(
            result.unwrap_err(),
            TableError::NonDeterministicTransition {
                state: 1,
                input: 'a'
            }
        );
    }

    #[test]
    fn empty_builder_builds_empty_table() {
        let table = TableBuilder::new().build().unwrap();
        assert!(table.is_empty());
    }
}
