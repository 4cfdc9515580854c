//! Command execution layer for citegraph.
//!
//! Every engine operation is a serializable [`Command`] answered by an
//! [`Output`]. The [`Executor`] dispatches commands to handler functions and
//! maps engine errors onto the executor [`Error`]. [`CiteGraph`] wraps the
//! executor in typed methods for in-process callers.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod api;
mod bridge;
mod command;
mod convert;
mod error;
mod executor;
mod handlers;
mod output;

pub use api::CiteGraph;
pub use command::{Command, DEFAULT_PAGE_SIZE};
pub use convert::convert_result;
pub use error::{Error, Result};
pub use executor::Executor;
pub use output::Output;
