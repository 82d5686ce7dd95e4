//! Storage seam for the user collection.
//!
//! Traversal and scoring only ever see an `Arc<GraphSnapshot>`, so a backend
//! other than memory can sit behind [`UserRepository`] without touching them.

use std::sync::Arc;

use parking_lot::RwLock;

use friendgraph_core::{GraphResult, User};

use super::snapshot::GraphSnapshot;

/// Source of graph snapshots and sink of atomic updates.
pub trait UserRepository: Send + Sync {
    /// A consistent view of the collection as of this call.
    fn snapshot(&self) -> Arc<GraphSnapshot>;

    /// Run a read-modify-write step as one critical section.
    ///
    /// `apply` receives a private copy of the current snapshot. If it returns
    /// `true` the copy replaces the current snapshot; on `false` it is
    /// discarded. Returns whatever `apply` returned.
    fn update(&self, apply: &mut dyn FnMut(&mut GraphSnapshot) -> bool) -> bool;
}

/// Copy-on-write in-memory repository.
///
/// Readers clone the current `Arc` and never block on each other. Writers
/// hold the write lock for the whole clone, mutate and swap sequence, so two
/// updates never interleave.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    state: RwLock<Arc<GraphSnapshot>>,
}

impl InMemoryRepository {
    /// Wrap an existing snapshot.
    pub fn new(snapshot: GraphSnapshot) -> Self {
        Self {
            state: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Build from a user collection.
    pub fn from_users(users: Vec<User>) -> GraphResult<Self> {
        Ok(Self::new(GraphSnapshot::from_users(users)?))
    }
}

impl UserRepository for InMemoryRepository {
    fn snapshot(&self) -> Arc<GraphSnapshot> {
        self.state.read().clone()
    }

    fn update(&self, apply: &mut dyn FnMut(&mut GraphSnapshot) -> bool) -> bool {
        let mut current = self.state.write();
        let mut next = GraphSnapshot::clone(&current);
        if !apply(&mut next) {
            return false;
        }
        *current = Arc::new(next);
        true
    }
}
