//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Provision - add and remove tagged sections in configuration files
#[derive(Parser, Debug)]
#[command(name = "provision")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Bootstrap configuration file (.toml, .json, .yaml)
    #[arg(long, global = true, env = "PROVISION_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Append a tagged section to a file
    ///
    /// The body is taken from --text, --from-file, or stdin when neither
    /// is given. One trailing newline is dropped from file and stdin input.
    ///
    /// Examples:
    ///   provision add ~/.bashrc path --text 'export PATH=$PATH:/opt/bin'
    ///   provision add /etc/crontab cron --from-file cron.snippet
    ///   echo 'include extra.conf' | provision add nginx.conf extra
    Add {
        /// Target file (must already exist)
        file: PathBuf,

        /// Section tag (normalized to uppercase A-Z, 0-9 and _)
        tag: String,

        /// Section body
        #[arg(short, long, conflicts_with = "from_file")]
        text: Option<String>,

        /// Read the section body from this file
        #[arg(long)]
        from_file: Option<PathBuf>,
    },

    /// Remove a tagged section from a file
    Remove {
        /// Target file
        file: PathBuf,

        /// Section tag
        tag: String,
    },

    /// Exit 0 if a section marker for the tag exists, 1 otherwise
    Has {
        /// Target file
        file: PathBuf,

        /// Section tag
        tag: String,
    },

    /// List the sections in a file
    List {
        /// Target file
        file: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the normalized form of a tag
    Normalize {
        /// Raw tag
        tag: String,
    },
}
