//! `RwLock`-backed data context.

use super::{first_duplicate_index, ContextError, ContextResult, DataContext};
use crate::model::entity::Storeable;
use log::warn;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory entity sequence shared between repositories and their owner.
///
/// The inner lock only keeps the vector itself consistent for concurrent
/// readers and writers. Check-then-act atomicity is the repository's job.
pub struct InMemoryDataContext<T> {
    data: RwLock<Vec<Arc<T>>>,
}

impl<T> Default for InMemoryDataContext<T> {
    fn default() -> Self {
        Self {
            data: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Storeable> InMemoryDataContext<T> {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context pre-populated with `items` in the given order.
    ///
    /// # Errors
    /// - `ContextError::DuplicateId` when two items share an id.
    pub fn with_data(items: Vec<T>) -> ContextResult<Self> {
        let handles: Vec<Arc<T>> = items.into_iter().map(Arc::new).collect();
        if let Some(index) = first_duplicate_index(&handles) {
            warn!(
                "event=context_seed module=context status=rejected reason=duplicate_id index={}",
                index
            );
            return Err(ContextError::DuplicateId { index });
        }

        Ok(Self {
            data: RwLock::new(handles),
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Arc<T>>> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Arc<T>>> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> DataContext<T> for InMemoryDataContext<T>
where
    T: Storeable + Send + Sync,
{
    fn data(&self) -> Vec<Arc<T>> {
        self.read().clone()
    }

    fn set_data(&self, data: Vec<Arc<T>>) -> ContextResult<()> {
        if let Some(index) = first_duplicate_index(&data) {
            warn!(
                "event=context_replace module=context status=rejected reason=duplicate_id index={}",
                index
            );
            return Err(ContextError::DuplicateId { index });
        }

        *self.write() = data;
        Ok(())
    }

    fn find(&self, id: &T::Id) -> Option<Arc<T>> {
        self.read().iter().find(|item| item.id() == id).cloned()
    }

    fn push(&self, item: Arc<T>) {
        self.write().push(item);
    }

    fn remove(&self, item: &Arc<T>) -> bool {
        let mut data = self.write();
        match data.iter().position(|existing| Arc::ptr_eq(existing, item)) {
            Some(index) => {
                data.remove(index);
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
