//! Byline CLI library.
//!
//! This library provides the core functionality for the Byline command-line interface,
//! including configuration and engine profiles, command execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use engine::ConfiguredEngine;
pub use error::{CliError, Result};
pub use output::Formatter;
