//! Core transducer types and logic.
//!
//! This module contains the pure core of the Mealy-machine engine:
//! - The [`Transition`] rule record and [`StateId`] identifiers
//! - The strict, determinism-checked [`TransitionTable`]
//! - The permissive [`FiniteStateMachine`] and its interpretation loop
//! - The [`Trace`] record of a single run
//!
//! Everything here is synchronous and side-effect free; the only failure
//! channels are [`TableError`] and the absent interpretation result.

mod error;
mod machine;
mod table;
mod trace;
mod transition;

pub use error::TableError;
pub use machine::FiniteStateMachine;
pub use table::TransitionTable;
pub use trace::{Trace, TraceStep};
pub use transition::{StateId, Transition};
