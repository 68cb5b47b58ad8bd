//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod audit;
pub mod context;
pub mod enrollments;
pub mod init;
pub mod logs;
pub mod status;
pub mod tokens;

pub use args::{AuditFilterArgs, LimitArgs, OutputFormat};
pub use context::CommandContext;

use crate::retrieval::TokenStrategy;

/// sasop - Operator companion for the SAS identity backend
#[derive(Parser, Debug)]
#[command(name = "sasop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "SASOP_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "SASOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "SASOP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize sasop configuration
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// List the tokens owned by a user
    Tokens {
        /// User login
        login: String,

        #[command(flatten)]
        limit: LimitArgs,

        /// Lookup strategy (defaults to the configured one)
        #[arg(long, value_enum)]
        strategy: Option<TokenStrategy>,
    },

    /// Show a user's audit trail, newest first
    Audit {
        /// User login
        login: String,

        #[command(flatten)]
        filters: AuditFilterArgs,
    },

    /// List pending enrollment tasks for a user
    Enrollments {
        /// User login
        login: String,
    },

    /// Fetch a user's operational logs from the log host
    Logs {
        /// User login
        login: String,

        /// Seconds to wait for the remote command (defaults to the configured timeout)
        #[arg(long)]
        timeout: Option<u64>,

        /// Directory long logs are written to
        #[arg(long, default_value = ".")]
        output_dir: std::path::PathBuf,
    },
}
