//! OCI CLI interaction.
//!
//! This module handles all OCI-related operations:
//! - [`cli`] - Command execution for the OCI CLI
//! - [`client`] - The [`NetworkClient`] trait and its CLI-backed implementation
//! - [`error`] - Errors of remote calls

mod cli;
mod client;
mod error;
#[doc(hidden)]
pub mod fake;

// Re-export public types and functions
pub use cli::run_args;
pub use client::{parse_output, NetworkClient, OciCli};
pub use error::{OciError, Result};
