//! Traversal and friendship operations on the Explorer API surface.

use friendgraph_core::{User, UserId};

use super::Explorer;
use crate::{Command, Error, Output, Result};

impl Explorer {
    // =========================================================================
    // Traversal (3)
    // =========================================================================

    /// Friends of a user, in stored order. Empty for unknown users.
    pub fn get_direct_friends(&self, user_id: UserId) -> Result<Vec<User>> {
        self.users_output(
            Command::GetDirectFriends { user_id },
            "GetDirectFriends",
        )
    }

    /// One shortest path between two users. Empty if they are not connected.
    pub fn find_connection_path(&self, start: UserId, end: UserId) -> Result<Vec<User>> {
        self.users_output(
            Command::FindConnectionPath { start, end },
            "FindConnectionPath",
        )
    }

    /// Users who are friends with both.
    pub fn find_mutual_friends(&self, user_id: UserId, other_id: UserId) -> Result<Vec<User>> {
        self.users_output(
            Command::FindMutualFriends { user_id, other_id },
            "FindMutualFriends",
        )
    }

    // =========================================================================
    // Mutations (3)
    // =========================================================================

    /// Make two users friends. `false` if either is unknown or they are the same user.
    pub fn add_friend(&self, user_id: UserId, friend_id: UserId) -> Result<bool> {
        self.bool_output(Command::AddFriend { user_id, friend_id }, "AddFriend")
    }

    /// End a friendship. `false` if either user is unknown.
    pub fn remove_friend(&self, user_id: UserId, friend_id: UserId) -> Result<bool> {
        self.bool_output(Command::RemoveFriend { user_id, friend_id }, "RemoveFriend")
    }

    /// Set the interaction weight between two users in both directions.
    pub fn update_interaction_weight(
        &self,
        user_id: UserId,
        friend_id: UserId,
        weight: u32,
    ) -> Result<bool> {
        self.bool_output(
            Command::UpdateInteractionWeight {
                user_id,
                friend_id,
                weight,
            },
            "UpdateInteractionWeight",
        )
    }

    fn users_output(&self, cmd: Command, name: &str) -> Result<Vec<User>> {
        match self.executor.execute(cmd)? {
            Output::Users(users) => Ok(users),
            _ => Err(Error::Internal {
                reason: format!("Unexpected output for {}", name),
            }),
        }
    }

    fn bool_output(&self, cmd: Command, name: &str) -> Result<bool> {
        match self.executor.execute(cmd)? {
            Output::Bool(b) => Ok(b),
            _ => Err(Error::Internal {
                reason: format!("Unexpected output for {}", name),
            }),
        }
    }
}
