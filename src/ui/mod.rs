//! User interface components
//!
//! Command-line parsing, shell completions and rendering of the
//! final URL list.

pub mod cli;
pub mod completion;
pub mod output;

pub use cli::{Cli, Commands, cli_to_config};
