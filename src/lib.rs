//! Mealy: a deterministic finite-state transducer library
//!
//! A Mealy machine converts an input symbol sequence into an output symbol
//! sequence by repeatedly applying `(state, input) -> (output, next_state)`
//! rules. This crate provides the rule record, a strict rule table that
//! rejects non-determinism at insertion, and a machine that interprets input
//! against its own (permissive) rule list.
//!
//! # Core Concepts
//!
//! - **Transition**: one immutable rule, keyed by its `(state, input)` pair
//! - **TransitionTable**: insertion-ordered rules with a determinism invariant
//!   and structural-health queries
//! - **FiniteStateMachine**: a pure transducer — no accepting states, no
//!   cursor surviving between runs; an input with no matching rule yields an
//!   absent result, never partial output
//! - **Factory**: an injectable construction boundary for all three
//!
//! # Example
//!
//! ```rust
//! use mealy::builder::MachineBuilder;
//! use mealy::core::{Transition, TransitionTable};
//!
//! // Strict table: duplicate (state, input) pairs are rejected.
//! let mut table = TransitionTable::new();
//! table.add_transition(Transition::new(1, 'a', 'e', 1))?;
//! assert!(table.add_transition(Transition::new(1, 'a', 'x', 2)).is_err());
//!
//! // Permissive machine: walks input from the first rule's state.
//! let fsm = MachineBuilder::new()
//!     .rule(1, 'a', 'e', 1)
//!     .rule(1, 'b', 'o', 2)
//!     .rule(2, 'a', 'o', 2)
//!     .rule(2, 'b', 'e', 1)
//!     .build();
//!
//! assert_eq!(fsm.interpret("aba"), Some("eoo".to_string()));
//! assert_eq!(fsm.interpret("aca"), None);
//! # Ok::<(), mealy::core::TableError>(())
//! ```

pub mod builder;
pub mod core;
pub mod factory;

// Re-export commonly used types
pub use crate::core::{
    FiniteStateMachine, StateId, TableError, Trace, TraceStep, Transition, TransitionTable,
};
pub use crate::factory::{DefaultFactory, Factory};
