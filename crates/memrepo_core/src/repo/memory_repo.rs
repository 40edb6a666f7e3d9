//! Repository contract and lock-guarded in-memory implementation.
//!
//! # Responsibility
//! - Provide Save/Delete/FindById/All over an injected data context.
//! - Serialize find-then-mutate sequences with one lock per repository.
//!
//! # Invariants
//! - After `save` returns, no two entities in the context share an id,
//!   provided every writer goes through repositories sharing the lock.
//! - `save` is insert-if-absent: an existing entity is never replaced.
//! - `delete` and `find_by_id` treat a missing id as a normal outcome.
//! - `find_by_id` and `all` never take the write lock.

use crate::context::{DataContext, InMemoryDataContext};
use crate::model::entity::Storeable;
use log::debug;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Create/read/delete access to a collection of identified entities.
pub trait Repository<T: Storeable> {
    /// Returns every entity in the context's current order.
    fn all(&self) -> Vec<Arc<T>>;

    /// Returns the stored handle whose id equals `id`, if any.
    fn find_by_id(&self, id: &T::Id) -> Option<Arc<T>>;

    /// Inserts `item` unless an entity with the same id is already stored.
    fn save(&self, item: Arc<T>);

    /// Removes the entity with `id`; does nothing when none exists.
    fn delete(&self, id: &T::Id);
}

/// Repository over a shared [`DataContext`].
///
/// The repository owns no entities. Its only state is the write lock that
/// makes `save` and `delete` atomic with respect to each other. Reads go
/// straight to the context and may observe a write that lands concurrently.
pub struct InMemoryRepository<T, C = InMemoryDataContext<T>> {
    context: Arc<C>,
    write_lock: Mutex<()>,
    _entity: PhantomData<fn() -> T>,
}

impl<T, C> InMemoryRepository<T, C>
where
    T: Storeable,
    C: DataContext<T>,
{
    /// Creates a repository over an externally owned context.
    pub fn new(context: Arc<C>) -> Self {
        Self {
            context,
            write_lock: Mutex::new(()),
            _entity: PhantomData,
        }
    }

    /// Returns the injected context handle.
    pub fn context(&self) -> &Arc<C> {
        &self.context
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        // The guarded value is `()`; a panicking writer cannot leave it torn.
        self.write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> InMemoryRepository<T, InMemoryDataContext<T>>
where
    T: Storeable + Send + Sync,
{
    /// Creates a repository over a fresh, empty in-memory context.
    pub fn standalone() -> Self {
        Self::new(Arc::new(InMemoryDataContext::new()))
    }
}

impl<T> Default for InMemoryRepository<T, InMemoryDataContext<T>>
where
    T: Storeable + Send + Sync,
{
    fn default() -> Self {
        Self::standalone()
    }
}

impl<T, C> Repository<T> for InMemoryRepository<T, C>
where
    T: Storeable,
    C: DataContext<T>,
{
    fn all(&self) -> Vec<Arc<T>> {
        self.context.data()
    }

    fn find_by_id(&self, id: &T::Id) -> Option<Arc<T>> {
        self.context.find(id)
    }

    fn save(&self, item: Arc<T>) {
        let _guard = self.lock_writes();

        if self.find_by_id(item.id()).is_some() {
            debug!("event=repo_save module=repo status=skipped reason=duplicate_id");
            return;
        }

        self.context.push(item);
        debug!(
            "event=repo_save module=repo status=inserted len={}",
            self.context.len()
        );
    }

    fn delete(&self, id: &T::Id) {
        let _guard = self.lock_writes();

        let Some(existing) = self.find_by_id(id) else {
            debug!("event=repo_delete module=repo status=noop reason=not_found");
            return;
        };

        if self.context.remove(&existing) {
            debug!(
                "event=repo_delete module=repo status=removed len={}",
                self.context.len()
            );
        } else {
            // Only reachable when something bypassed the repository lock.
            debug!("event=repo_delete module=repo status=noop reason=removed_elsewhere");
        }
    }
}
