//! Entity model shared by context and repository layers.
//!
//! # Responsibility
//! - Define the identity contract every stored value satisfies.
//! - Provide a generic record type for callers without their own entity.
//!
//! # Invariants
//! - Identity is carried by the id alone, never by payload fields.

pub mod entity;
pub mod record;
