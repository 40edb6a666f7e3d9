//! Entity identity contract.
//!
//! # Responsibility
//! - Define what a value must expose to be stored in a repository.
//!
//! # Invariants
//! - Identity equality is defined solely by `Storeable::id()` equality.
//! - Fields beyond the id are opaque to the storage layer.

use std::fmt::Debug;

/// Capability for values with a stable, comparable identifier.
///
/// Implementors must keep `Id` equality reflexive, symmetric and transitive;
/// duplicate detection and lookup rely on it.
pub trait Storeable {
    type Id: Eq + Debug + Send + Sync;

    /// Returns the identifier used for lookup and duplicate detection.
    fn id(&self) -> &Self::Id;
}

/// Returns whether two entities share the same identity.
pub fn same_identity<T: Storeable>(left: &T, right: &T) -> bool {
    left.id() == right.id()
}

#[cfg(test)]
mod tests {
    use super::{same_identity, Storeable};

    struct Pair {
        id: u32,
        label: &'static str,
    }

    impl Storeable for Pair {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    #[test]
    fn identity_ignores_payload_fields() {
        let left = Pair { id: 7, label: "a" };
        let right = Pair { id: 7, label: "b" };
        assert_ne!(left.label, right.label);
        assert!(same_identity(&left, &right));
    }

    #[test]
    fn different_ids_are_different_identities() {
        let left = Pair { id: 1, label: "a" };
        let right = Pair { id: 2, label: "a" };
        assert!(!same_identity(&left, &right));
    }
}
