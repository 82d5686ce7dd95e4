//! Command results.

use serde::Serialize;

use friendgraph_core::{FriendSuggestion, User};

/// Typed result of executing a [`Command`](crate::Command).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "output", content = "value")]
pub enum Output {
    /// Users in a defined order (load order, friend order or path order).
    Users(Vec<User>),
    /// A single lookup result.
    MaybeUser(Option<User>),
    /// Ranked suggestions, best first.
    Suggestions(Vec<FriendSuggestion>),
    /// Mutation outcome.
    Bool(bool),
    /// An interaction weight, 0 when absent.
    Weight(u32),
}
