//! Command handlers.
//!
//! Each handler takes the engine graph plus the command's fields, validates
//! what the engine does not, and wraps the engine result in an [`Output`](crate::Output).

pub mod friends;
pub mod suggestions;
pub mod users;
