//! Update builder types for record mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields generate SET clauses in the dynamic UPDATE SQL. Nullable columns use
//! `Option<Option<T>>` so "clear" (`Some(None)`) differs from "unchanged".

pub mod component;
pub mod developer;
pub mod module;
pub mod named;
pub mod release;
pub mod status;
pub mod ticket;
