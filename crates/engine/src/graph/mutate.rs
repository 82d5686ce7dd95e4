//! Friendship mutations.
//!
//! Every edit touches both endpoints inside a single repository update, so
//! `friends` stays symmetric and no reader ever sees half an edge.

use friendgraph_core::UserId;

use super::snapshot::GraphSnapshot;
use super::FriendGraph;

impl GraphSnapshot {
    /// Add `to` to `from`'s friends (once) and seed an interaction weight if none exists.
    pub(crate) fn connect(&mut self, from: UserId, to: UserId, seed_weight: u32) {
        if let Some(user) = self.user_mut(from) {
            if !user.friends.contains(&to) {
                user.friends.push(to);
            }
            user.interactions.entry(to).or_insert(seed_weight);
        }
    }

    /// Drop `to` from `from`'s friends and interactions.
    pub(crate) fn disconnect(&mut self, from: UserId, to: UserId) {
        if let Some(user) = self.user_mut(from) {
            user.friends.retain(|&id| id != to);
            user.interactions.remove(&to);
        }
    }

    pub(crate) fn set_interaction(&mut self, from: UserId, to: UserId, weight: u32) {
        if let Some(user) = self.user_mut(from) {
            user.interactions.insert(to, weight);
        }
    }
}

impl FriendGraph {
    /// Make two users friends.
    ///
    /// Returns `false` without changing anything if either user is unknown or
    /// both ids are the same. Repeated calls are no-ops that still return `true`.
    /// Both directions get the default interaction weight where none is set.
    pub fn add_friend(&self, user_id: UserId, friend_id: UserId) -> bool {
        if user_id == friend_id {
            tracing::warn!(user_id, "Refusing to add a user as their own friend");
            return false;
        }

        let seed = self.default_interaction_weight;
        let added = self.repo.update(&mut |snap| {
            if !snap.contains(user_id) || !snap.contains(friend_id) {
                return false;
            }
            snap.connect(user_id, friend_id, seed);
            snap.connect(friend_id, user_id, seed);
            true
        });

        if added {
            tracing::info!(user_id, friend_id, "Added friendship");
        } else {
            tracing::warn!(user_id, friend_id, "Add friend failed: user or friend not found");
        }
        added
    }

    /// End a friendship in both directions, along with both interaction entries.
    ///
    /// Returns `false` if either user is unknown. Removing a friendship that
    /// does not exist succeeds and changes nothing.
    pub fn remove_friend(&self, user_id: UserId, friend_id: UserId) -> bool {
        let removed = self.repo.update(&mut |snap| {
            if !snap.contains(user_id) || !snap.contains(friend_id) {
                return false;
            }
            snap.disconnect(user_id, friend_id);
            snap.disconnect(friend_id, user_id);
            true
        });

        if removed {
            tracing::info!(user_id, friend_id, "Removed friendship");
        } else {
            tracing::warn!(user_id, friend_id, "Remove friend failed: user or friend not found");
        }
        removed
    }

    /// Set the interaction weight between two users, in both directions.
    ///
    /// Returns `false` for unknown users, identical ids, or a zero weight.
    pub fn update_interaction_weight(&self, user_id: UserId, friend_id: UserId, weight: u32) -> bool {
        if user_id == friend_id || weight == 0 {
            tracing::warn!(user_id, friend_id, weight, "Rejected interaction weight update");
            return false;
        }

        let updated = self.repo.update(&mut |snap| {
            if !snap.contains(user_id) || !snap.contains(friend_id) {
                return false;
            }
            snap.set_interaction(user_id, friend_id, weight);
            snap.set_interaction(friend_id, user_id, weight);
            true
        });

        if updated {
            tracing::info!(user_id, friend_id, weight, "Updated interaction weight");
        } else {
            tracing::warn!(user_id, friend_id, "Weight update failed: user or friend not found");
        }
        updated
    }
}
