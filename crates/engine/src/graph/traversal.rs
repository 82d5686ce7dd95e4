//! Graph traversal operations: direct friends, connection paths, mutual friends, BFS.

use std::collections::{HashSet, VecDeque};

use friendgraph_core::{User, UserId};

use super::snapshot::GraphSnapshot;
use super::types::{BfsOptions, BfsResult};
use super::FriendGraph;

impl GraphSnapshot {
    /// Breadth-first search from a start user.
    ///
    /// Neighbors are expanded in their stored `friends` order. Each newly seen
    /// id is marked visited immediately; ids that do not resolve to a user are
    /// marked but never scheduled. With a `target`, the search stops the moment
    /// the target shows up as a neighbor of the node being expanded.
    pub fn bfs(&self, start: UserId, opts: &BfsOptions) -> BfsResult {
        let mut result = BfsResult::new(start);
        let mut seen: HashSet<UserId> = HashSet::new();
        let mut queue: VecDeque<(UserId, usize)> = VecDeque::new();

        seen.insert(start);
        queue.push_back((start, 0));

        while let Some((current, depth)) = queue.pop_front() {
            // Don't explore further if at max depth
            if depth >= opts.max_depth {
                continue;
            }
            let Some(user) = self.user(current) else {
                continue;
            };

            for &friend_id in &user.friends {
                if opts.target == Some(friend_id)
                    && !seen.contains(&friend_id)
                    && self.contains(friend_id)
                {
                    result.record(friend_id, current, depth + 1);
                    return result;
                }
                if seen.insert(friend_id) && self.contains(friend_id) {
                    result.record(friend_id, current, depth + 1);
                    queue.push_back((friend_id, depth + 1));
                }
            }
        }

        result
    }

    /// Friends of `user_id` in stored order. Dangling ids are dropped; unknown users have none.
    pub fn direct_friends(&self, user_id: UserId) -> Vec<User> {
        match self.user(user_id) {
            Some(user) => self.resolve(&user.friends),
            None => Vec::new(),
        }
    }

    /// One shortest path from `start` to `end`, both included.
    ///
    /// Returns `[start]` when the ids are equal, and an empty path when either
    /// user is unknown or `end` is unreachable.
    pub fn connection_path(&self, start: UserId, end: UserId) -> Vec<User> {
        let Some(start_user) = self.user(start) else {
            return Vec::new();
        };
        if start == end {
            return vec![start_user.clone()];
        }
        if !self.contains(end) {
            return Vec::new();
        }

        let result = self.bfs(start, &BfsOptions::to_target(end));
        self.resolve(&result.path_to(end))
    }

    /// Users adjacent to both `a` and `b`, in the order of `a`'s friend list.
    pub fn mutual_friends(&self, a: UserId, b: UserId) -> Vec<User> {
        let (Some(first), Some(second)) = (self.user(a), self.user(b)) else {
            return Vec::new();
        };
        let theirs: HashSet<UserId> = second.friends.iter().copied().collect();
        let shared: Vec<UserId> = first
            .friends
            .iter()
            .copied()
            .filter(|id| theirs.contains(id))
            .collect();
        self.resolve(&shared)
    }

    /// Every user reachable from `start` within `max_level` hops, with discovery
    /// depth and parent links. Nodes at `max_level` are not expanded.
    pub fn level_scan(&self, start: UserId, max_level: usize) -> BfsResult {
        self.bfs(start, &BfsOptions::levels(max_level))
    }
}

impl FriendGraph {
    /// Friends of `user_id` in stored order. Empty for unknown users.
    pub fn get_direct_friends(&self, user_id: UserId) -> Vec<User> {
        self.snapshot().direct_friends(user_id)
    }

    /// One shortest path between two users, or an empty path if none exists.
    pub fn find_connection_path(&self, start: UserId, end: UserId) -> Vec<User> {
        self.snapshot().connection_path(start, end)
    }

    /// Users who are friends with both `a` and `b`.
    pub fn find_mutual_friends(&self, a: UserId, b: UserId) -> Vec<User> {
        self.snapshot().mutual_friends(a, b)
    }
}
