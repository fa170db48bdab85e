//! CLI Module
//!
//! Command-line interface for crabfolio using Clap v4.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

/// Crabfolio - Terminal Profile Setup
#[derive(Parser, Debug)]
#[command(name = "crabfolio")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug mode (creates log files in .crabfolio/logs/)
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the profile setup step (default)
    Setup {
        /// Output format for the finished profile
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Log management operations
    Logs {
        #[command(subcommand)]
        operation: LogCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum LogCommands {
    /// Show log file location and status
    Status,
    /// View recent log entries (requires debug mode)
    View {
        /// Number of lines to show (default: 50)
        #[arg(short, long, default_value = "50")]
        lines: usize,
    },
    /// Clean up old log files
    Clean {
        /// Maximum age in days (default: 7)
        #[arg(short = 'a', long, default_value = "7")]
        days: u64,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Main CLI entry point
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing::info!("Debug mode enabled");
    }

    match cli.command {
        None => commands::cmd_setup(OutputFormat::Text).await,
        Some(Commands::Setup { format }) => commands::cmd_setup(format).await,
        Some(Commands::Logs { operation }) => commands::cmd_logs(operation).await,
    }
}
