//! Typed Rust API over the command layer.
//!
//! Each method builds a [`Command`](crate::Command), runs it through the
//! [`Executor`] and unpacks the expected [`Output`](crate::Output) variant.

mod friends;
mod suggestions;
mod users;

use std::path::Path;

use friendgraph_core::{ExplorerConfig, User};

use crate::{Executor, Result};

/// The explorer handle the UI layer holds.
#[derive(Debug, Clone)]
pub struct Explorer {
    executor: Executor,
}

impl Explorer {
    /// Wrap an existing executor.
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }

    /// Build an explorer over an in-memory user collection.
    pub fn from_users(users: Vec<User>, config: ExplorerConfig) -> Result<Self> {
        Ok(Self::new(Executor::from_users(users, config)?))
    }

    /// Build an explorer from a JSON dataset file.
    pub fn from_dataset_file(path: impl AsRef<Path>, config: ExplorerConfig) -> Result<Self> {
        Ok(Self::new(Executor::from_dataset_file(path, config)?))
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }
}
