//! Graph Store command handlers.

use friendgraph_core::UserId;
use friendgraph_engine::FriendGraph;

use crate::{Output, Result};

/// Handle GetAllUsers command.
pub fn get_all_users(g: &FriendGraph) -> Result<Output> {
    Ok(Output::Users(g.get_all_users()))
}

/// Handle GetUserById command.
pub fn get_user_by_id(g: &FriendGraph, id: UserId) -> Result<Output> {
    Ok(Output::MaybeUser(g.get_user_by_id(id)))
}

/// Handle GetUserByUsername command.
pub fn get_user_by_username(g: &FriendGraph, username: String) -> Result<Output> {
    Ok(Output::MaybeUser(g.get_user_by_username(&username)))
}
