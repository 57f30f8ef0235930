//! CLI module
//!
//! Command-line interface for schema inference.
//!
//! # Commands
//!
//! - `infer` - Observe JSON documents and print the inferred schema
//! - `render` - Print the schema held in a saved snapshot
//! - `formats` - List recognized string formats

mod commands;
mod runner;

pub use commands::{Cli, Commands, EmitArgs, OutputFormat};
pub use runner::Runner;
