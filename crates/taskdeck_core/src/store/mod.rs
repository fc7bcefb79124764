//! In-memory task collection and derived views.
//!
//! # Responsibility
//! - Own the ordered task collection and apply every mutation to it.
//! - Compute the filtered view and running counts on demand.
//!
//! # Invariants
//! - The store performs no I/O; callers persist when an operation reports
//!   a change.
//! - Collection order is newest-first; mutations never reorder surviving
//!   tasks.

pub mod task_store;
