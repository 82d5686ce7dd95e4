//! Command execution layer for friendgraph.
//!
//! Every operation the UI layer needs is a [`Command`] variant. The
//! [`Executor`] validates the command, dispatches it to a handler that calls
//! the engine, and returns a typed [`Output`]. [`Explorer`] wraps the
//! executor in plain Rust methods.
//!
//! ```ignore
//! let explorer = Explorer::from_dataset_file("users.json", ExplorerConfig::default())?;
//! let path = explorer.find_connection_path(1, 7)?;
//! ```

mod api;
mod command;
mod convert;
mod error;
mod executor;
mod handlers;
mod output;

#[cfg(test)]
mod test_util;

pub use api::Explorer;
pub use command::Command;
pub use error::{Error, Result};
pub use executor::Executor;
pub use output::Output;
