//! Repository layer over injected data contexts.
//!
//! # Responsibility
//! - Define the CRUD-style contract consumed by application code.
//! - Keep locking discipline inside the repository boundary.
//!
//! # Invariants
//! - Missing ids and duplicate ids are normal outcomes, never errors.
//! - Save/Delete are mutually exclusive per repository instance.

pub mod memory_repo;
