//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - run: perform one run (the default when no subcommand is given)
//! - count: show the execution count
//! - log: show recent journal entries
//! - publish: force an artifact publish

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// chorebot - scheduled chat-command runner with durable run tracking
#[derive(Parser, Debug)]
#[command(name = "chorebot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Perform one run: count it, send the command script, journal the outcome
    Run {
        /// Use the in-process fake instead of the external driver
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the current execution count without incrementing it
    Count,

    /// Show the most recent journal entries
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = 20)]
        lines: usize,
    },

    /// Commit and push the run artifacts now
    Publish {
        /// Commit message (defaults to the configured one)
        #[arg(short, long)]
        message: Option<String>,
    },
}
