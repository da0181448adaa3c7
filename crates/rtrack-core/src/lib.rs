//! # rtrack-core
//!
//! Core types and pure logic for the release tracker.
//!
//! This crate provides the foundational types shared across all rtrack crates:
//! - Record structs for every catalog table (modules, components, releases, tickets, ...)
//! - Draft types mapping form input to the persisted field set
//! - ID prefix constants
//! - Release scoping: which release (and therefore which tickets) a module view shows
//! - The sparse ticket x component matrix and its optimistic cell state machine
//! - The two-phase component reorder plan
//! - Cross-cutting error types

pub mod drafts;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod matrix;
pub mod reorder;
pub mod scoping;
pub mod views;
