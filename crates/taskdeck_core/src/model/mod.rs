//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record and its closed enums.
//! - Keep validation rules next to the data they guard.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - `Priority` and `CategoryFilter` are closed sets; unknown string input
//!   never produces a value silently.

pub mod task;
