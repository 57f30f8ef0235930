//! CLI commands and argument parsing

use crate::input::InputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Incremental JSON Schema inference
#[derive(Parser, Debug)]
#[command(name = "schema-infer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
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
    /// Infer a schema from JSON documents (stdin when no files are given)
    Infer {
        /// Input files, observed in order
        files: Vec<PathBuf>,

        /// Input document format
        #[arg(long)]
        input_format: Option<InputFormat>,

        /// Path to the records inside each JSON document
        #[arg(long)]
        record_path: Option<String>,

        /// Treat a top-level JSON array as a list of records
        #[arg(long)]
        split_arrays: bool,

        /// Continue from a saved snapshot
        #[arg(long)]
        resume: Option<PathBuf>,

        /// Write a snapshot after observing all input
        #[arg(long)]
        save_snapshot: Option<PathBuf>,

        #[command(flatten)]
        emit: EmitArgs,
    },

    /// Render the schema held in a snapshot
    Render {
        /// Snapshot file (JSON)
        snapshot: PathBuf,

        #[command(flatten)]
        emit: EmitArgs,
    },

    /// List recognized string formats
    Formats,
}

/// Schema rendering flags shared by `infer` and `render`
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct EmitArgs {
    /// Add the `$schema` draft URI to the root
    #[arg(long)]
    pub include_schema: bool,

    /// Emit `minimum`/`maximum` for numbers
    #[arg(long)]
    pub bounds: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    #[default]
    Json,
    /// Indented JSON
    Pretty,
}
