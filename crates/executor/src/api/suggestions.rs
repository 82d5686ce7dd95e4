//! Suggestion operations on the Explorer API surface.

use friendgraph_core::{FriendSuggestion, UserId};
use friendgraph_engine::MIN_SUGGESTION_LEVEL;

use super::Explorer;
use crate::{Command, Error, Output, Result};

impl Explorer {
    // =========================================================================
    // Suggestions (3)
    // =========================================================================

    /// Ranked suggestions using the configured defaults.
    pub fn get_friend_suggestions(&self, user_id: UserId) -> Result<Vec<FriendSuggestion>> {
        self.get_friend_suggestions_with(user_id, None, None, None)
    }

    /// Ranked suggestions with explicit scoring parameters. `None` falls back
    /// to the configured default.
    pub fn get_friend_suggestions_with(
        &self,
        user_id: UserId,
        max_level: Option<usize>,
        alpha: Option<f64>,
        beta: Option<f64>,
    ) -> Result<Vec<FriendSuggestion>> {
        self.suggestions_output(Command::GetFriendSuggestions {
            user_id,
            max_level,
            alpha,
            beta,
            min_mutual_friends: None,
            max_connection_level: None,
        })
    }

    /// Ranked suggestions narrowed by mutual-friend count and connection level.
    ///
    /// The level bound only filters. The scan goes at least as deep as the
    /// bound, or to the configured depth when there is none, so a bound below
    /// the first suggestion level yields an empty list.
    pub fn get_filtered_suggestions(
        &self,
        user_id: UserId,
        min_mutual_friends: usize,
        max_connection_level: Option<usize>,
    ) -> Result<Vec<FriendSuggestion>> {
        self.suggestions_output(Command::GetFriendSuggestions {
            user_id,
            max_level: max_connection_level.map(|bound| bound.max(MIN_SUGGESTION_LEVEL)),
            alpha: None,
            beta: None,
            min_mutual_friends: Some(min_mutual_friends),
            max_connection_level,
        })
    }

    /// One user's interaction weight toward another, 0 when absent.
    pub fn interaction_weight(&self, user_id: UserId, friend_id: UserId) -> Result<u32> {
        match self
            .executor
            .execute(Command::InteractionWeight { user_id, friend_id })?
        {
            Output::Weight(w) => Ok(w),
            _ => Err(Error::Internal {
                reason: "Unexpected output for InteractionWeight".into(),
            }),
        }
    }

    fn suggestions_output(&self, cmd: Command) -> Result<Vec<FriendSuggestion>> {
        match self.executor.execute(cmd)? {
            Output::Suggestions(s) => Ok(s),
            _ => Err(Error::Internal {
                reason: "Unexpected output for GetFriendSuggestions".into(),
            }),
        }
    }
}
