//! Graph engine for friendgraph.
//!
//! Holds the user collection behind a [`UserRepository`] and implements the
//! traversal engine (BFS, shortest path, mutual friends, level scan), the
//! suggestion scorer, and the friendship mutator on top of it.

#![warn(missing_debug_implementations)]

pub mod graph;

pub use graph::repository::{InMemoryRepository, UserRepository};
pub use graph::snapshot::{load_dataset_file, load_dataset_str, GraphSnapshot};
pub use graph::suggest::{suggestion_score, MIN_SUGGESTION_LEVEL};
pub use graph::types::{BfsOptions, BfsResult, SuggestionFilter, SuggestionQuery};
pub use graph::FriendGraph;
