//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gnosis-relay CLI
#[derive(Parser, Debug)]
#[command(name = "gnosis-relay")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Service registry document (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Registry environment to use
    #[arg(short, long, global = true, default_value = "development")]
    pub environment: String,

    /// Auth service base URL (overrides GNOSIS_AUTH_URL)
    #[arg(long, global = true)]
    pub auth_url: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every service with its resolved URL
    Services,

    /// Resolve one service URL
    Resolve {
        /// Service name (e.g. gnosis-crawl)
        service: String,
    },

    /// Show the full resolved service record
    Info {
        /// Service name (e.g. gnosis-crawl)
        service: String,
    },

    /// Validate a token against the auth service
    Validate {
        /// The token to validate
        #[arg(long)]
        token: String,
    },

    /// Get or refresh a JWT from the auth service
    Refresh {
        /// HMAC bearer token
        #[arg(long)]
        token: String,

        /// Agent identifier
        #[arg(long)]
        agent_id: String,
    },
}
