//! "People you may know" scoring.
//!
//! Candidates come from a level scan around the query user. Each candidate is
//! scored by how many friends it shares with the query user and how strong
//! the two-hop paths through those shared friends are:
//!
//! `score = alpha * |mutual_friends| + beta * interaction_weight`
//!
//! where `interaction_weight` sums, over every mutual friend `m`,
//! `min(w(user, m), w(m, candidate))`.

use friendgraph_core::{FriendSuggestion, User, UserId};

use super::snapshot::GraphSnapshot;
use super::types::{SuggestionFilter, SuggestionQuery};
use super::FriendGraph;

/// Lowest connection level that is suggested. Level 1 users are already friends.
pub const MIN_SUGGESTION_LEVEL: usize = 2;

/// `alpha * mutual_count + beta * interaction_weight`.
pub fn suggestion_score(alpha: f64, beta: f64, mutual_count: usize, interaction_weight: u64) -> f64 {
    alpha * mutual_count as f64 + beta * interaction_weight as f64
}

impl GraphSnapshot {
    /// `from`'s interaction weight toward `to`, 0 if either side has no entry.
    pub fn interaction_weight(&self, from: UserId, to: UserId) -> u32 {
        self.user(from).map_or(0, |u| u.interaction_weight(to))
    }

    /// Sum of bottleneck weights over the two-hop paths `user -> m -> candidate`.
    pub fn path_interaction_weight(
        &self,
        user_id: UserId,
        candidate_id: UserId,
        mutual_friends: &[User],
    ) -> u64 {
        mutual_friends
            .iter()
            .map(|m| {
                let inbound = self.interaction_weight(user_id, m.id);
                let outbound = self.interaction_weight(m.id, candidate_id);
                u64::from(inbound.min(outbound))
            })
            .sum()
    }

    /// Ranked suggestions for `user_id`, highest score first.
    ///
    /// Only users discovered at levels `2..=query.max_level` are candidates.
    /// Equal scores keep BFS discovery order.
    pub fn friend_suggestions(&self, user_id: UserId, query: &SuggestionQuery) -> Vec<FriendSuggestion> {
        if !self.contains(user_id) {
            return Vec::new();
        }

        let scan = self.level_scan(user_id, query.max_level);
        let mut suggestions: Vec<FriendSuggestion> = scan
            .discovered
            .iter()
            .filter_map(|&candidate_id| {
                let level = scan.depth(candidate_id)?;
                if level < MIN_SUGGESTION_LEVEL {
                    return None;
                }
                let user = self.user(candidate_id)?.clone();
                let mutual_friends = self.mutual_friends(user_id, candidate_id);
                let interaction_weight =
                    self.path_interaction_weight(user_id, candidate_id, &mutual_friends);
                let score = suggestion_score(
                    query.alpha,
                    query.beta,
                    mutual_friends.len(),
                    interaction_weight,
                );
                Some(FriendSuggestion {
                    user,
                    mutual_friends,
                    connection_level: level,
                    connection_path: self.resolve(&scan.path_to(candidate_id)),
                    score,
                    interaction_weight,
                })
            })
            .collect();

        // sort_by is stable, so ties stay in discovery order
        suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
        suggestions
    }
}

impl FriendGraph {
    /// Ranked suggestions for `user_id`. Empty for unknown users.
    pub fn get_friend_suggestions(
        &self,
        user_id: UserId,
        query: &SuggestionQuery,
    ) -> Vec<FriendSuggestion> {
        let snapshot = self.snapshot();
        let suggestions = snapshot.friend_suggestions(user_id, query);
        tracing::debug!(
            user_id,
            max_level = query.max_level,
            candidates = suggestions.len(),
            "Computed friend suggestions"
        );
        suggestions
    }

    /// Ranked suggestions with a caller-side post-filter applied.
    pub fn get_filtered_suggestions(
        &self,
        user_id: UserId,
        query: &SuggestionQuery,
        filter: &SuggestionFilter,
    ) -> Vec<FriendSuggestion> {
        filter.apply(self.get_friend_suggestions(user_id, query))
    }

    /// `from`'s interaction weight toward `to`.
    pub fn interaction_weight(&self, from: UserId, to: UserId) -> u32 {
        self.snapshot().interaction_weight(from, to)
    }
}
