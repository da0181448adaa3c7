//! Repository modules for every tracker table.
//!
//! Each module adds methods to `TrackerService` via `impl TrackerService`
//! blocks. Plain settings CRUD goes through the generic operations in
//! [`catalog`]; the other modules add the table-specific queries.

pub mod catalog;
pub mod component;
pub mod dashboard;
pub mod developer;
pub mod matrix;
pub mod release;
pub mod ticket;
