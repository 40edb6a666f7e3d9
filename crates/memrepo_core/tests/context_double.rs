use memrepo_core::{
    ContextError, ContextResult, DataContext, InMemoryRepository, Repository, Storeable,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug)]
struct Note {
    id: u8,
}

impl Storeable for Note {
    type Id = u8;

    fn id(&self) -> &u8 {
        &self.id
    }
}

/// Context double that records every call the repository makes.
#[derive(Default)]
struct RecordingContext {
    items: Mutex<Vec<Arc<Note>>>,
    finds: AtomicUsize,
    pushes: AtomicUsize,
    removes: AtomicUsize,
}

impl RecordingContext {
    fn items(&self) -> MutexGuard<'_, Vec<Arc<Note>>> {
        self.items
            .lock()
            .expect("recording context lock should not be poisoned")
    }

    fn seeded(ids: &[u8]) -> Self {
        let context = Self::default();
        *context.items() = ids.iter().map(|&id| Arc::new(Note { id })).collect();
        context
    }
}

impl DataContext<Note> for RecordingContext {
    fn data(&self) -> Vec<Arc<Note>> {
        self.items().clone()
    }

    fn set_data(&self, data: Vec<Arc<Note>>) -> ContextResult<()> {
        if data.len() > 1 && data[0].id == data[1].id {
            return Err(ContextError::DuplicateId { index: 1 });
        }
        *self.items() = data;
        Ok(())
    }

    fn find(&self, id: &u8) -> Option<Arc<Note>> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        self.items()
            .iter()
            .find(|item| item.id == *id)
            .cloned()
    }

    fn push(&self, item: Arc<Note>) {
        self.pushes.fetch_add(1, Ordering::SeqCst);
        self.items().push(item);
    }

    fn remove(&self, item: &Arc<Note>) -> bool {
        self.removes.fetch_add(1, Ordering::SeqCst);
        let mut items = self.items();
        match items.iter().position(|existing| Arc::ptr_eq(existing, item)) {
            Some(index) => {
                items.remove(index);
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.items().len()
    }
}

#[test]
fn all_returns_context_data() {
    let context = Arc::new(RecordingContext::seeded(&[1, 2]));
    let repo = InMemoryRepository::<Note, _>::new(Arc::clone(&context));

    let all = repo.all();

    assert_eq!(all.len(), 2);
    assert!(Arc::ptr_eq(&all[0], &context.data()[0]));
}

#[test]
fn find_by_id_delegates_to_context() {
    let context = Arc::new(RecordingContext::seeded(&[1, 2]));
    let repo = InMemoryRepository::<Note, _>::new(Arc::clone(&context));

    let found = repo.find_by_id(&2).expect("seeded note should be found");

    assert_eq!(found.id, 2);
    assert_eq!(context.finds.load(Ordering::SeqCst), 1);
}

#[test]
fn save_checks_for_duplicate_before_push() {
    let context = Arc::new(RecordingContext::seeded(&[1]));
    let repo = InMemoryRepository::<Note, _>::new(Arc::clone(&context));

    repo.save(Arc::new(Note { id: 1 }));
    assert_eq!(context.finds.load(Ordering::SeqCst), 1);
    assert_eq!(context.pushes.load(Ordering::SeqCst), 0);

    repo.save(Arc::new(Note { id: 2 }));
    assert_eq!(context.pushes.load(Ordering::SeqCst), 1);
    assert_eq!(context.len(), 2);
}

#[test]
fn delete_removes_the_found_handle() {
    let context = Arc::new(RecordingContext::seeded(&[1, 2]));
    let repo = InMemoryRepository::<Note, _>::new(Arc::clone(&context));

    repo.delete(&2);

    assert_eq!(context.removes.load(Ordering::SeqCst), 1);
    let ids: Vec<u8> = context.data().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn delete_missing_id_never_touches_remove() {
    let context = Arc::new(RecordingContext::default());
    let repo = InMemoryRepository::<Note, _>::new(Arc::clone(&context));

    repo.delete(&1);

    assert_eq!(context.finds.load(Ordering::SeqCst), 1);
    assert_eq!(context.removes.load(Ordering::SeqCst), 0);
    assert!(context.is_empty());
}

#[test]
fn replaced_context_data_is_seen_by_repository() {
    let context = Arc::new(RecordingContext::seeded(&[1]));
    let repo = InMemoryRepository::<Note, _>::new(Arc::clone(&context));

    context
        .set_data(vec![Arc::new(Note { id: 7 }), Arc::new(Note { id: 8 })])
        .expect("distinct ids should replace");

    assert!(repo.find_by_id(&1).is_none());
    assert_eq!(repo.all().len(), 2);
}
