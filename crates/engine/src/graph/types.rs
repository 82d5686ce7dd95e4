//! Traversal and suggestion parameter types.

use std::collections::HashMap;

use friendgraph_core::{FriendSuggestion, SuggestionDefaults, UserId};

/// Options for the shared BFS primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsOptions {
    /// Nodes at this depth are recorded but not expanded.
    pub max_depth: usize,
    /// Stop as soon as this user is seen as a neighbor of the node being expanded.
    pub target: Option<UserId>,
}

impl Default for BfsOptions {
    fn default() -> Self {
        Self {
            max_depth: usize::MAX,
            target: None,
        }
    }
}

impl BfsOptions {
    /// Early-exit search for one user, unbounded depth.
    pub fn to_target(target: UserId) -> Self {
        Self {
            target: Some(target),
            ..Default::default()
        }
    }

    /// Full-frontier scan down to `max_depth` hops.
    pub fn levels(max_depth: usize) -> Self {
        Self {
            max_depth,
            target: None,
        }
    }
}

/// Result of a BFS run.
#[derive(Debug, Clone, PartialEq)]
pub struct BfsResult {
    /// The start node.
    pub start: UserId,
    /// Users discovered, in discovery (FIFO) order. Excludes the start node.
    pub discovered: Vec<UserId>,
    /// Depth at which each node was first discovered. The start node is at 0.
    pub depths: HashMap<UserId, usize>,
    /// Node that discovered each entry of `discovered`.
    pub parents: HashMap<UserId, UserId>,
}

impl BfsResult {
    pub(crate) fn new(start: UserId) -> Self {
        let mut depths = HashMap::new();
        depths.insert(start, 0);
        Self {
            start,
            discovered: Vec::new(),
            depths,
            parents: HashMap::new(),
        }
    }

    pub(crate) fn record(&mut self, id: UserId, parent: UserId, depth: usize) {
        self.discovered.push(id);
        self.depths.insert(id, depth);
        self.parents.insert(id, parent);
    }

    /// Depth of `id`, if it was reached.
    pub fn depth(&self, id: UserId) -> Option<usize> {
        self.depths.get(&id).copied()
    }

    /// Ids from the start node to `id`, both included. Empty if `id` was not reached.
    pub fn path_to(&self, id: UserId) -> Vec<UserId> {
        if !self.depths.contains_key(&id) {
            return Vec::new();
        }
        let mut path = vec![id];
        let mut current = id;
        while let Some(&parent) = self.parents.get(&current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }
}

/// Parameters of a suggestion request.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionQuery {
    /// Deepest connection level considered, inclusive.
    pub max_level: usize,
    /// Weight of the mutual-friend count.
    pub alpha: f64,
    /// Weight of the aggregate interaction strength.
    pub beta: f64,
}

impl Default for SuggestionQuery {
    fn default() -> Self {
        Self {
            max_level: 2,
            alpha: 2.0,
            beta: 1.0,
        }
    }
}

impl From<&SuggestionDefaults> for SuggestionQuery {
    fn from(d: &SuggestionDefaults) -> Self {
        Self {
            max_level: d.max_level,
            alpha: d.alpha,
            beta: d.beta,
        }
    }
}

/// Caller-side post-filter over a ranked suggestion list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionFilter {
    /// Keep only candidates at or below this connection level.
    pub max_level: Option<usize>,
    /// Keep only candidates with at least this many mutual friends.
    pub min_mutual_friends: usize,
}

impl SuggestionFilter {
    /// Whether a suggestion passes the filter.
    pub fn matches(&self, s: &FriendSuggestion) -> bool {
        self.max_level.map_or(true, |max| s.connection_level <= max)
            && s.mutual_friends.len() >= self.min_mutual_friends
    }

    /// Keep matching suggestions, preserving rank order.
    pub fn apply(&self, suggestions: Vec<FriendSuggestion>) -> Vec<FriendSuggestion> {
        suggestions.into_iter().filter(|s| self.matches(s)).collect()
    }
}
