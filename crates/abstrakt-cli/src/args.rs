//! Command-line argument definitions for the Abstrakt CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. A subcommand selects what to do; global options control
//! configuration file selection and logging verbosity.

use clap::{Parser, Subcommand};

/// Command-line arguments for the Abstrakt constellation tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a constellation file as a Graphviz DOT graph on stdout
    Visualise {
        /// Path to the constellation YAML file
        #[arg(short = 'f', long)]
        constellation_file_path: String,

        /// Log every node and relationship as it is added
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the version of abstrakt
    Version,
}
