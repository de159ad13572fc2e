use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse and manage a directory from the command line.
#[derive(Debug, Parser)]
#[command(name = "vile", version, about)]
pub struct Cli {
    /// Settings file to use instead of the platform default.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory to operate in (supports `~`). Defaults to the configured
    /// start directory, then the process working directory.
    #[arg(short = 'C', long = "dir", global = true, value_name = "DIR")]
    pub dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List entries, most recently modified first.
    Ls {
        /// Directory to list, relative to the working directory.
        path: Option<String>,
        /// Print entries as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show details of a single entry.
    Info { name: String },
    /// Create an empty file.
    Touch { name: String },
    /// Create an empty directory.
    Mkdir { name: String },
    /// Delete an entry. Directories must be empty unless --recursive is given.
    Rm {
        name: String,
        /// Delete a directory together with everything inside it.
        #[arg(short, long)]
        recursive: bool,
        /// Do not ask for confirmation.
        #[arg(short, long)]
        yes: bool,
    },
    /// Rename an entry within the same directory.
    Mv { old: String, new: String },
    /// List quick-access user folders.
    Places,
    /// Print the effective settings.
    Config {
        /// Write the default settings to the settings file.
        #[arg(long)]
        write_defaults: bool,
    },
}
