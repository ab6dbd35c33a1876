//! Fluent construction for tables and machines.
//!
//! Builders collect rules and hand them to the core collections at build
//! time; [`TableBuilder::build`] surfaces the table's determinism check,
//! while [`MachineBuilder::build`] is infallible because the machine is
//! permissive. The [`rules!`](crate::rules) macro covers literal rule lists.

mod machine;
pub mod macros;
mod table;

pub use machine::MachineBuilder;
pub use table::TableBuilder;
