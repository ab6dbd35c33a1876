//! Macros for ergonomic rule-list construction.

/// Build a `Vec<Transition>` from literal rule arms.
///
/// Each arm reads `(state, input) => (output, next_state)`. The result feeds
/// a [`TableBuilder`](crate::builder::TableBuilder) or
/// [`MachineBuilder`](crate::builder::MachineBuilder), or the collections'
/// own insert methods.
///
/// # Example
///
/// ```
/// use mealy::builder::MachineBuilder;
/// use mealy::rules;
///
/// let fsm = MachineBuilder::new()
///     .rules(rules! {
///         (1, 'a') => ('e', 1),
///         (1, 'b') => ('o', 2),
///         (2, 'a') => ('o', 2),
///         (2, 'b') => ('e', 1),
///     })
///     .build();
///
/// assert_eq!(fsm.interpret("aba"), Some("eoo".to_string()));
/// ```
#[macro_export]
macro_rules! rules {
    (
        $(
            ($state:expr, $input:expr) => ($output:expr, $next:expr)
        ),* $(,)?
    ) => {
        vec![
            $( $crate::core::Transition::new($state, $input, $output, $next) ),*
        ]
    };
}
