//! Core types for friendgraph.
//!
//! This crate defines the data model shared by every layer: users and their
//! friendship/interaction edges, derived friend suggestions, the error type,
//! and the explorer configuration.

pub mod config;
pub mod error;
pub mod types;

pub use config::{ExplorerConfig, SuggestionDefaults};
pub use error::{GraphError, GraphResult};
pub use types::{Dataset, FriendSuggestion, Interaction, User, UserId};
