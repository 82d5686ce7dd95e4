//! Traversal and friendship mutation handlers.

use friendgraph_core::UserId;
use friendgraph_engine::FriendGraph;

use crate::{Error, Output, Result};

/// Handle GetDirectFriends command.
pub fn get_direct_friends(g: &FriendGraph, user_id: UserId) -> Result<Output> {
    Ok(Output::Users(g.get_direct_friends(user_id)))
}

/// Handle FindConnectionPath command.
pub fn find_connection_path(g: &FriendGraph, start: UserId, end: UserId) -> Result<Output> {
    Ok(Output::Users(g.find_connection_path(start, end)))
}

/// Handle FindMutualFriends command.
pub fn find_mutual_friends(g: &FriendGraph, user_id: UserId, other_id: UserId) -> Result<Output> {
    Ok(Output::Users(g.find_mutual_friends(user_id, other_id)))
}

/// Handle AddFriend command.
pub fn add_friend(g: &FriendGraph, user_id: UserId, friend_id: UserId) -> Result<Output> {
    Ok(Output::Bool(g.add_friend(user_id, friend_id)))
}

/// Handle RemoveFriend command.
pub fn remove_friend(g: &FriendGraph, user_id: UserId, friend_id: UserId) -> Result<Output> {
    Ok(Output::Bool(g.remove_friend(user_id, friend_id)))
}

/// Handle InteractionWeight command.
pub fn interaction_weight(g: &FriendGraph, user_id: UserId, friend_id: UserId) -> Result<Output> {
    Ok(Output::Weight(g.interaction_weight(user_id, friend_id)))
}

/// Handle UpdateInteractionWeight command.
///
/// A zero weight is rejected here; unknown users and self pairs come back as
/// `Bool(false)` from the engine.
pub fn update_interaction_weight(
    g: &FriendGraph,
    user_id: UserId,
    friend_id: UserId,
    weight: u32,
) -> Result<Output> {
    if weight == 0 {
        return Err(Error::InvalidInput {
            reason: "Interaction weight must be positive".into(),
        });
    }
    Ok(Output::Bool(
        g.update_interaction_weight(user_id, friend_id, weight),
    ))
}
