// Command-line interface definitions and parsing for librarian

use crate::config::CliConfig;
use crate::core::constants::{match_modes, output_formats};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory of notes to scan (default: sample/)
    pub root: Option<String>,

    // Discovery
    /// Note file extensions, comma-separated (default: md)
    #[arg(long, value_name = "EXTENSIONS", help_heading = "Discovery")]
    pub ext: Option<String>,

    /// Keep the first URL of each line or every URL
    #[arg(long, value_name = "MODE", value_parser = match_modes::ALL, default_value = match_modes::DEFAULT, help_heading = "Discovery")]
    pub match_mode: String,

    /// Visit directory entries in file name order
    #[arg(long, help_heading = "Discovery")]
    pub sort: bool,

    /// Honour .gitignore and .ignore files
    #[arg(long, help_heading = "Discovery")]
    pub respect_ignore: bool,

    /// Read notes in parallel
    #[arg(long, help_heading = "Discovery")]
    pub parallel: bool,

    // Errors
    /// Abort on the first unreadable note instead of skipping it
    #[arg(long, help_heading = "Errors")]
    pub strict: bool,

    // Output & Verbosity
    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, default_value = output_formats::DEFAULT, help_heading = "Output & Verbosity")]
    pub format: String,

    /// Suppress all log output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completions", arg_required_else_help = true)]
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert derive-based CLI arguments directly to CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    let note_extensions = cli.ext.as_ref().map(|ext_str| {
        ext_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    });

    CliConfig {
        root: cli.root.clone(),
        note_extensions,
        match_mode: Some(cli.match_mode.clone()),
        output_format: Some(cli.format.clone()),
        strict: cli.strict,
        parallel: cli.parallel,
        sort: cli.sort,
        respect_ignore_files: cli.respect_ignore,
        quiet: cli.quiet,
        verbose: cli.verbose,
    }
}
