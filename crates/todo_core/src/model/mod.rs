//! Domain model for the to-do list.
//!
//! # Responsibility
//! - Define the canonical task record shared by operations and storage.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Tasks are removed only in bulk by clearing completed ones.

pub mod task;
