//! CLI module for chorebot - command-line interface and subcommands.

pub mod commands;

pub use commands::Cli;
