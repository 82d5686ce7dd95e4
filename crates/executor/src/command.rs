//! Command definitions.
//!
//! Commands serialize as JSON objects tagged by `command`, for example
//! `{"command": "AddFriend", "user_id": 1, "friend_id": 4}`.

use serde::{Deserialize, Serialize};

use friendgraph_core::UserId;

/// One request to the explorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Command {
    // ==================== Users (3) ====================
    /// Every user, in load order.
    GetAllUsers,

    /// Look up a user by id.
    GetUserById { id: UserId },

    /// Look up a user by exact username.
    GetUserByUsername { username: String },

    // ==================== Traversal (3) ====================
    /// Friends of a user, in stored order.
    GetDirectFriends { user_id: UserId },

    /// One shortest path between two users, both included.
    FindConnectionPath { start: UserId, end: UserId },

    /// Users who are friends with both.
    FindMutualFriends { user_id: UserId, other_id: UserId },

    // ==================== Suggestions (2) ====================
    /// Ranked "people you may know". Unset parameters fall back to the
    /// executor's configuration.
    GetFriendSuggestions {
        user_id: UserId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_level: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alpha: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        beta: Option<f64>,
        /// Keep only candidates with at least this many mutual friends.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_mutual_friends: Option<usize>,
        /// Keep only candidates at or below this connection level.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_connection_level: Option<usize>,
    },

    /// One user's interaction weight toward another.
    InteractionWeight { user_id: UserId, friend_id: UserId },

    // ==================== Mutations (3) ====================
    AddFriend { user_id: UserId, friend_id: UserId },

    RemoveFriend { user_id: UserId, friend_id: UserId },

    /// Set the interaction weight in both directions.
    UpdateInteractionWeight {
        user_id: UserId,
        friend_id: UserId,
        weight: u32,
    },
}

impl Command {
    /// Variant name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::GetAllUsers => "GetAllUsers",
            Command::GetUserById { .. } => "GetUserById",
            Command::GetUserByUsername { .. } => "GetUserByUsername",
            Command::GetDirectFriends { .. } => "GetDirectFriends",
            Command::FindConnectionPath { .. } => "FindConnectionPath",
            Command::FindMutualFriends { .. } => "FindMutualFriends",
            Command::GetFriendSuggestions { .. } => "GetFriendSuggestions",
            Command::InteractionWeight { .. } => "InteractionWeight",
            Command::AddFriend { .. } => "AddFriend",
            Command::RemoveFriend { .. } => "RemoveFriend",
            Command::UpdateInteractionWeight { .. } => "UpdateInteractionWeight",
        }
    }

    /// Whether the command changes the graph.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::AddFriend { .. }
                | Command::RemoveFriend { .. }
                | Command::UpdateInteractionWeight { .. }
        )
    }
}
