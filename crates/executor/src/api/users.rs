//! User lookups on the Explorer API surface.

use friendgraph_core::{User, UserId};

use super::Explorer;
use crate::{Command, Error, Output, Result};

impl Explorer {
    // =========================================================================
    // Users (3)
    // =========================================================================

    /// Every user, in load order.
    pub fn get_all_users(&self) -> Result<Vec<User>> {
        match self.executor.execute(Command::GetAllUsers)? {
            Output::Users(users) => Ok(users),
            _ => Err(Error::Internal {
                reason: "Unexpected output for GetAllUsers".into(),
            }),
        }
    }

    /// Look up a user by id.
    pub fn get_user_by_id(&self, id: UserId) -> Result<Option<User>> {
        match self.executor.execute(Command::GetUserById { id })? {
            Output::MaybeUser(user) => Ok(user),
            _ => Err(Error::Internal {
                reason: "Unexpected output for GetUserById".into(),
            }),
        }
    }

    /// Look up a user by exact, case-sensitive username.
    pub fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        match self.executor.execute(Command::GetUserByUsername {
            username: username.to_string(),
        })? {
            Output::MaybeUser(user) => Ok(user),
            _ => Err(Error::Internal {
                reason: "Unexpected output for GetUserByUsername".into(),
            }),
        }
    }
}
