//! Backing-store contracts consumed by repositories.
//!
//! # Responsibility
//! - Define the externally owned, ordered entity sequence a repository wraps.
//! - Provide an in-memory implementation shareable across threads.
//!
//! # Invariants
//! - Context implementations keep insertion order.
//! - Whole-sequence replacement rejects input that itself repeats an id.
//!   It does not take any repository's write lock, so uniqueness against
//!   concurrent repository writes is the caller's concern.
//! - A context's internal synchronization is independent from any
//!   repository write lock.

use crate::model::entity::Storeable;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

mod memory;

pub use memory::InMemoryDataContext;

pub type ContextResult<T> = Result<T, ContextError>;

/// Errors raised while seeding or replacing a context's sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    /// The entity at `index` repeats an id seen earlier in the same input.
    DuplicateId { index: usize },
}

impl Display for ContextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId { index } => {
                write!(f, "entity at index {index} repeats an earlier id")
            }
        }
    }
}

impl Error for ContextError {}

/// Mutable, ordered sequence of entity handles backing a repository.
///
/// Every method takes `&self`; implementations supply their own interior
/// synchronization so one context can be shared through `Arc`.
pub trait DataContext<T: Storeable>: Send + Sync {
    /// Returns every handle in current order.
    fn data(&self) -> Vec<Arc<T>>;

    /// Replaces the whole sequence.
    ///
    /// Only `data` itself is checked for repeated ids. A repository `save`
    /// racing with this call can still append an id that `data` contains.
    ///
    /// # Errors
    /// - `ContextError::DuplicateId` when `data` repeats an id; the previous
    ///   sequence is kept.
    fn set_data(&self, data: Vec<Arc<T>>) -> ContextResult<()>;

    /// Returns the first handle whose id equals `id`.
    fn find(&self, id: &T::Id) -> Option<Arc<T>>;

    /// Appends one handle.
    fn push(&self, item: Arc<T>);

    /// Removes the first element that is the same handle as `item`.
    ///
    /// Returns `false` when no element shares the allocation.
    fn remove(&self, item: &Arc<T>) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Returns the index of the first entity that repeats an earlier id.
pub(crate) fn first_duplicate_index<T: Storeable>(items: &[Arc<T>]) -> Option<usize> {
    items.iter().enumerate().find_map(|(index, item)| {
        items[..index]
            .iter()
            .any(|earlier| earlier.id() == item.id())
            .then_some(index)
    })
}
