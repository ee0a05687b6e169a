//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "slipbox")]
#[command(about = "Self-hosted markdown notes in the browser", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace root (overrides SLIPBOX_ROOT and directory discovery)
    #[arg(long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Run the web server (the default command)
    Serve {
        /// Port to listen on (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// List documents, newest first
    List {
        /// Show only the N most recent documents
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Search document text
    Search {
        /// Text to look for (case-insensitive)
        query: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
