//! friendgraph: a friendship graph explorer.
//!
//! Loads a user collection, then answers "who are my friends", "how am I
//! connected to this person" and "who might I know" questions over it, and
//! applies friendship edits.
//!
//! Most callers want [`Explorer`]; [`FriendGraph`] is the engine it drives.

mod types;

pub use types::*;
