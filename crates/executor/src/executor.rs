//! Command dispatch.

use std::path::Path;
use std::sync::Arc;

use friendgraph_core::{ExplorerConfig, User};
use friendgraph_engine::{load_dataset_file, load_dataset_str, FriendGraph, InMemoryRepository, UserRepository};

use crate::convert::convert_result;
use crate::handlers::{friends, suggestions, users};
use crate::{Command, Output, Result};

/// Executes [`Command`]s against one friendship graph.
///
/// Cheap to clone; clones share the graph.
#[derive(Debug, Clone)]
pub struct Executor {
    graph: FriendGraph,
    config: ExplorerConfig,
}

impl Executor {
    /// Create an executor over a repository. The config is validated first.
    pub fn new(repo: Arc<dyn UserRepository>, config: ExplorerConfig) -> Result<Self> {
        convert_result(config.validate())?;
        let graph = FriendGraph::with_config(repo, &config);
        Ok(Self { graph, config })
    }

    /// Create an executor over an in-memory user collection.
    pub fn from_users(users: Vec<User>, config: ExplorerConfig) -> Result<Self> {
        let repo = convert_result(InMemoryRepository::from_users(users))?;
        Self::new(Arc::new(repo), config)
    }

    /// Create an executor from a JSON dataset.
    pub fn from_dataset_str(json: &str, config: ExplorerConfig) -> Result<Self> {
        let snapshot = convert_result(load_dataset_str(json))?;
        Self::new(Arc::new(InMemoryRepository::new(snapshot)), config)
    }

    /// Create an executor from a JSON dataset file.
    pub fn from_dataset_file(path: impl AsRef<Path>, config: ExplorerConfig) -> Result<Self> {
        let snapshot = convert_result(load_dataset_file(path))?;
        Self::new(Arc::new(InMemoryRepository::new(snapshot)), config)
    }

    /// The underlying graph.
    pub fn graph(&self) -> &FriendGraph {
        &self.graph
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Execute one command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        tracing::debug!(command = cmd.name(), write = cmd.is_write(), "Executing command");
        let g = &self.graph;

        let result = match cmd {
            Command::GetAllUsers => users::get_all_users(g),
            Command::GetUserById { id } => users::get_user_by_id(g, id),
            Command::GetUserByUsername { username } => users::get_user_by_username(g, username),

            Command::GetDirectFriends { user_id } => friends::get_direct_friends(g, user_id),
            Command::FindConnectionPath { start, end } => {
                friends::find_connection_path(g, start, end)
            }
            Command::FindMutualFriends { user_id, other_id } => {
                friends::find_mutual_friends(g, user_id, other_id)
            }

            Command::GetFriendSuggestions {
                user_id,
                max_level,
                alpha,
                beta,
                min_mutual_friends,
                max_connection_level,
            } => suggestions::get_friend_suggestions(
                g,
                &self.config.suggestions,
                user_id,
                max_level,
                alpha,
                beta,
                min_mutual_friends,
                max_connection_level,
            ),
            Command::InteractionWeight { user_id, friend_id } => {
                friends::interaction_weight(g, user_id, friend_id)
            }

            Command::AddFriend { user_id, friend_id } => friends::add_friend(g, user_id, friend_id),
            Command::RemoveFriend { user_id, friend_id } => {
                friends::remove_friend(g, user_id, friend_id)
            }
            Command::UpdateInteractionWeight {
                user_id,
                friend_id,
                weight,
            } => friends::update_interaction_weight(g, user_id, friend_id, weight),
        };

        if let Err(ref e) = result {
            tracing::warn!(error = %e, "Command rejected");
        }
        result
    }

    /// Parse a JSON command, execute it, and render the output as JSON.
    pub fn execute_json(&self, json: &str) -> Result<String> {
        let cmd: Command = serde_json::from_str(json)?;
        let output = self.execute(cmd)?;
        Ok(serde_json::to_string(&output)?)
    }
}
