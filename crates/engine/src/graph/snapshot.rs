//! Immutable view of the user collection with id and username indexes.
//!
//! Every read operation runs against one `GraphSnapshot`, so a traversal never
//! observes a mutation that lands while it is running.

use std::collections::HashMap;
use std::path::Path;

use friendgraph_core::{Dataset, GraphError, GraphResult, User, UserId};

/// Users in load order plus lookup indexes.
#[derive(Debug, Clone, Default)]
pub struct GraphSnapshot {
    users: Vec<User>,
    by_id: HashMap<UserId, usize>,
    by_username: HashMap<String, usize>,
}

impl GraphSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from a user collection.
    ///
    /// Duplicate ids and duplicate usernames are rejected. Self references in
    /// `friends` are dropped. Dangling friend ids are kept and filtered out
    /// at query time.
    pub fn from_users(users: Vec<User>) -> GraphResult<Self> {
        let mut snapshot = GraphSnapshot {
            users: Vec::with_capacity(users.len()),
            by_id: HashMap::with_capacity(users.len()),
            by_username: HashMap::with_capacity(users.len()),
        };

        for mut user in users {
            if snapshot.by_id.contains_key(&user.id) {
                return Err(GraphError::invalid_input(format!(
                    "duplicate user id {}",
                    user.id
                )));
            }
            if snapshot.by_username.contains_key(&user.username) {
                return Err(GraphError::invalid_input(format!(
                    "duplicate username '{}'",
                    user.username
                )));
            }

            if user.friends.contains(&user.id) {
                tracing::warn!(user_id = user.id, "Dropping self reference from friends");
                let own = user.id;
                user.friends.retain(|&f| f != own);
                user.interactions.remove(&own);
            }

            let idx = snapshot.users.len();
            snapshot.by_id.insert(user.id, idx);
            snapshot.by_username.insert(user.username.clone(), idx);
            snapshot.users.push(user);
        }

        Ok(snapshot)
    }

    /// All users in load order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Look up a user by id.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.by_id.get(&id).map(|&idx| &self.users[idx])
    }

    /// Look up a user by exact, case-sensitive username.
    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.by_username.get(username).map(|&idx| &self.users[idx])
    }

    /// Whether a user with this id exists.
    pub fn contains(&self, id: UserId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Number of users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of friendship entries across all users (each symmetric edge counts twice).
    pub fn friend_entry_count(&self) -> usize {
        self.users.iter().map(|u| u.friends.len()).sum()
    }

    /// Resolve ids to owned users, silently dropping ids that do not resolve.
    pub fn resolve(&self, ids: &[UserId]) -> Vec<User> {
        ids.iter().filter_map(|&id| self.user(id).cloned()).collect()
    }

    /// The serializable form of this snapshot.
    pub fn to_dataset(&self) -> Dataset {
        Dataset {
            users: self.users.clone(),
        }
    }

    pub(crate) fn user_mut(&mut self, id: UserId) -> Option<&mut User> {
        let idx = *self.by_id.get(&id)?;
        Some(&mut self.users[idx])
    }
}

/// Parse a JSON dataset (`{"users": [...]}`) into a snapshot.
pub fn load_dataset_str(json: &str) -> GraphResult<GraphSnapshot> {
    let dataset: Dataset = serde_json::from_str(json)?;
    GraphSnapshot::from_users(dataset.users)
}

/// Read and parse a JSON dataset file.
pub fn load_dataset_file(path: impl AsRef<Path>) -> GraphResult<GraphSnapshot> {
    let content = std::fs::read_to_string(path)?;
    load_dataset_str(&content)
}
