//! Public types for the friendgraph API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Data model
// ============================================================================

pub use friendgraph_core::{Dataset, FriendSuggestion, Interaction, User, UserId};

// Configuration
pub use friendgraph_core::{ExplorerConfig, SuggestionDefaults};

// Load-time errors
pub use friendgraph_core::{GraphError, GraphResult};

// ============================================================================
// Engine
// ============================================================================

pub use friendgraph_engine::{
    load_dataset_file, load_dataset_str, suggestion_score, BfsOptions, BfsResult, FriendGraph,
    GraphSnapshot, InMemoryRepository, SuggestionFilter, SuggestionQuery, UserRepository,
    MIN_SUGGESTION_LEVEL,
};

// ============================================================================
// Command layer
// ============================================================================

pub use friendgraph_executor::{Command, Error, Executor, Explorer, Output, Result};
