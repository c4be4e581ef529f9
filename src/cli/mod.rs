//! CLI module
//!
//! Command-line interface for the relay.
//!
//! # Commands
//!
//! - `services` - list every service with its resolved URL
//! - `resolve` - resolve one service URL
//! - `info` - show the full resolved service record
//! - `validate` - validate a token against the auth service
//! - `refresh` - get or refresh a JWT from the auth service

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
