//! Friendship graph over an in-memory user collection.
//!
//! Users and their `friends` lists form an undirected graph. Reads take a
//! snapshot from the [`UserRepository`] and run entirely against it, so
//! traversals and suggestions are consistent even while mutations land.
//! Mutations go through a single repository update each, keeping both
//! directions of an edge in step.

pub mod repository;
pub mod snapshot;
pub mod suggest;
pub mod traversal;
pub mod types;

mod mutate;

use std::sync::Arc;

use friendgraph_core::{ExplorerConfig, GraphResult, User, UserId};

pub use repository::{InMemoryRepository, UserRepository};
pub use snapshot::GraphSnapshot;

/// Graph store providing lookups, traversals, suggestions and friendship edits.
///
/// Cloning is cheap; clones share the same repository.
#[derive(Clone)]
pub struct FriendGraph {
    repo: Arc<dyn UserRepository>,
    default_interaction_weight: u32,
}

impl std::fmt::Debug for FriendGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FriendGraph")
            .field("users", &self.repo.snapshot().user_count())
            .field("default_interaction_weight", &self.default_interaction_weight)
            .finish()
    }
}

impl FriendGraph {
    /// Create a graph backed by the given repository, with default settings.
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self::with_config(repo, &ExplorerConfig::default())
    }

    /// Create a graph backed by the given repository.
    pub fn with_config(repo: Arc<dyn UserRepository>, config: &ExplorerConfig) -> Self {
        Self {
            repo,
            default_interaction_weight: config.default_interaction_weight,
        }
    }

    /// Build an in-memory graph from a user collection.
    pub fn from_users(users: Vec<User>) -> GraphResult<Self> {
        let repo = InMemoryRepository::from_users(users)?;
        Ok(Self::new(Arc::new(repo)))
    }

    /// A consistent view of the current graph.
    pub fn snapshot(&self) -> Arc<GraphSnapshot> {
        self.repo.snapshot()
    }

    /// Weight given to both directions of a newly created friendship.
    pub fn default_interaction_weight(&self) -> u32 {
        self.default_interaction_weight
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Every user, in load order.
    pub fn get_all_users(&self) -> Vec<User> {
        self.snapshot().users().to_vec()
    }

    pub fn get_user_by_id(&self, id: UserId) -> Option<User> {
        self.snapshot().user(id).cloned()
    }

    /// Exact, case-sensitive username match.
    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.snapshot().user_by_username(username).cloned()
    }
}
