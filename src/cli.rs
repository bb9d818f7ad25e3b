//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `gsbatch`.
#[derive(Debug, Parser)]
#[command(name = "gsbatch", version, about = "Drive the gsconf configuration manager in batch mode")]
pub struct Cli {
    /// Raise the diagnostic filter to debug.
    #[arg(long, global = true)]
    pub verbose: bool,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a batch of commands against the configuration manager.
    Run {
        /// Batch commands, forwarded to the executable in order.
        #[arg(required = true, value_name = "COMMAND")]
        commands: Vec<String>,
        /// Keep colored output from the executable enabled.
        #[arg(long)]
        colors: bool,
        /// Executable path (overrides GSBATCH_EXECUTABLE and the settings file).
        #[arg(long, value_name = "PATH")]
        executable: Option<PathBuf>,
        /// Settings file path (overrides GSBATCH_SETTINGS).
        #[arg(long, value_name = "FILE")]
        settings: Option<PathBuf>,
        /// Emit the captured result as JSON instead of relaying raw output.
        #[arg(long)]
        json: bool,
    },
    /// Print the composed invocation without spawning anything.
    Print {
        /// Batch commands, rendered in order.
        #[arg(required = true, value_name = "COMMAND")]
        commands: Vec<String>,
        /// Keep colored output from the executable enabled.
        #[arg(long)]
        colors: bool,
        /// Executable path (overrides GSBATCH_EXECUTABLE and the settings file).
        #[arg(long, value_name = "PATH")]
        executable: Option<PathBuf>,
        /// Settings file path (overrides GSBATCH_SETTINGS).
        #[arg(long, value_name = "FILE")]
        settings: Option<PathBuf>,
    },
}
