//! Use-case orchestration over store and persistence.
//!
//! # Responsibility
//! - Bind a `TaskStore` to a `StorageAdapter` and keep them in sync.
//! - Own the first-run seeding policy.
//!
//! # Invariants
//! - Every operation that changes the collection persists the full
//!   collection before returning.
//! - The service layer stays storage-agnostic; it only sees the adapter
//!   trait.

pub mod task_service;
