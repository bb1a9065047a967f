//! CLI module
//!
//! Command-line front end over the resource facades.
//!
//! # Commands
//!
//! - `stages` - list, show, create, update and delete stages
//! - `files` - manage the files of a stage, download content
//! - `repositories` / `datasets` - manage repositories and their datasets
//! - `connectors` - manage connectors, list their files and runs
//! - `search-stores` - manage search stores
//!
//! Create and update commands read their input record from a YAML or JSON
//! file (`--input`), using the same snake_case fields as the library inputs.

mod commands;
mod runner;

pub use commands::{Cli, Commands, KindArg, Namespace, OutputFormat};
pub use runner::{load_input, Runner};
