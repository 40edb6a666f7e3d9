//! Ready-made entity wrapper.
//!
//! # Responsibility
//! - Give callers a storeable value without writing their own id plumbing.
//!
//! # Invariants
//! - `id` is never the nil UUID.
//! - `payload` is opaque; the repository never inspects it.

use crate::model::entity::Storeable;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for records.
pub type RecordId = Uuid;

/// Validation errors for record construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordValidationError {
    NilId,
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "record id must not be the nil uuid"),
        }
    }
}

impl Error for RecordValidationError {}

/// Identified payload that can be saved into any repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<P> {
    pub id: RecordId,
    pub payload: P,
}

impl<P> Record<P> {
    /// Creates a record with a generated v4 id.
    pub fn new(payload: P) -> Self {
        Self {
            id: Uuid::new_v4(),
            payload,
        }
    }

    /// Creates a record with a caller-provided id.
    ///
    /// Used by import paths where identity already exists externally.
    ///
    /// # Errors
    /// - Returns `RecordValidationError::NilId` for `Uuid::nil()`.
    pub fn with_id(id: RecordId, payload: P) -> Result<Self, RecordValidationError> {
        if id.is_nil() {
            return Err(RecordValidationError::NilId);
        }
        Ok(Self { id, payload })
    }
}

impl<P> Storeable for Record<P> {
    type Id = RecordId;

    fn id(&self) -> &RecordId {
        &self.id
    }
}
