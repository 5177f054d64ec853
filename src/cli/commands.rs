//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// json2spark CLI
#[derive(Parser, Debug)]
#[command(name = "json2spark")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Infer the schema of a JSON document
    Infer {
        /// Input file (stdin when omitted)
        input: Option<PathBuf>,

        /// Comma-separated type tags kept at the top level
        #[arg(long)]
        include: Option<String>,

        /// Maximum nesting depth
        #[arg(long)]
        max_depth: Option<usize>,

        /// Print the (filtered) record before the schema
        #[arg(long)]
        show_record: bool,
    },

    /// Fetch a random sample record and infer its schema
    Sample {
        /// Base URL of the record API
        #[arg(long)]
        base_url: Option<String>,

        /// Comma-separated type tags kept at the top level
        #[arg(long)]
        include: Option<String>,

        /// Print the fetched record before the schema
        #[arg(long)]
        show_record: bool,
    },

    /// List the type tags accepted by --include
    Types,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Pretty-printed JSON
    Pretty,
}
