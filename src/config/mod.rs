//! Configuration management
//!
//! This module holds the run configuration: fixed defaults merged with
//! command-line arguments. Nothing is read from configuration files.

use rustc_hash::FxHashSet;
use std::path::PathBuf;

use crate::core::constants::{defaults, match_modes, output_formats};
use crate::core::error::{LibrarianError, Result};
use crate::discovery::MatchMode;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory to scan
    pub root: Option<String>,

    /// Note file extensions, without the leading dot
    pub note_extensions: Option<Vec<String>>,

    /// Keep the first URL per line or all of them (first, all)
    pub match_mode: Option<String>,

    /// Output format (text, detailed, json)
    pub output_format: Option<String>,

    /// Abort on the first unreadable file or directory
    pub strict: Option<bool>,

    /// Extract URLs from several notes at once
    pub parallel: Option<bool>,

    /// Visit directory entries in file name order
    pub sort: Option<bool>,

    /// Honour .gitignore and .ignore files while walking
    pub respect_ignore_files: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: Some(defaults::ROOT_PATH.to_string()),
            note_extensions: Some(
                defaults::NOTE_EXTENSIONS
                    .iter()
                    .map(|ext| ext.to_string())
                    .collect(),
            ),
            match_mode: Some(match_modes::DEFAULT.to_string()),
            output_format: Some(output_formats::DEFAULT.to_string()),
            strict: Some(false),
            parallel: Some(false),
            sort: Some(false),
            respect_ignore_files: Some(false),
        }
    }
}

impl Config {
    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref root) = cli_config.root {
            self.root = Some(root.clone());
        }
        if let Some(ref extensions) = cli_config.note_extensions {
            self.note_extensions = Some(extensions.clone());
        }
        if let Some(ref match_mode) = cli_config.match_mode {
            self.match_mode = Some(match_mode.clone());
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.strict {
            self.strict = Some(true);
        }
        if cli_config.parallel {
            self.parallel = Some(true);
        }
        if cli_config.sort {
            self.sort = Some(true);
        }
        if cli_config.respect_ignore_files {
            self.respect_ignore_files = Some(true);
        }
    }

    /// Root directory as a path
    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(self.root.as_deref().unwrap_or(defaults::ROOT_PATH))
    }

    /// Normalized note extensions: lowercase, no leading dot, no blanks
    pub fn note_extensions_as_set(&self) -> FxHashSet<String> {
        match self.note_extensions {
            Some(ref extensions) => extensions
                .iter()
                .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect(),
            None => defaults::NOTE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }

    /// Match mode, falling back to the default for unknown names
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
            .as_deref()
            .and_then(MatchMode::from_name)
            .unwrap_or_default()
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    pub fn is_strict(&self) -> bool {
        self.strict.unwrap_or(false)
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }

    pub fn is_sorted(&self) -> bool {
        self.sort.unwrap_or(false)
    }

    pub fn respects_ignore_files(&self) -> bool {
        self.respect_ignore_files.unwrap_or(false)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref root) = self.root {
            if root.trim().is_empty() {
                return Err(LibrarianError::Config(
                    "Root path cannot be empty.".to_string(),
                ));
            }
        }

        if self.note_extensions_as_set().is_empty() {
            return Err(LibrarianError::Config(
                "At least one note extension is required (e.g. md).".to_string(),
            ));
        }

        if let Some(ref extensions) = self.note_extensions {
            if let Some(bad) = extensions
                .iter()
                .find(|ext| ext.chars().any(|c| c == '/' || c == '\\'))
            {
                return Err(LibrarianError::Config(format!(
                    "Note extension '{bad}' cannot contain a path separator."
                )));
            }
        }

        if let Some(ref mode) = self.match_mode {
            if MatchMode::from_name(mode).is_none() {
                return Err(LibrarianError::Config(format!(
                    "Invalid match mode '{mode}'. Expected one of: {}.",
                    match_modes::ALL.join(", ")
                )));
            }
        }

        if let Some(ref format) = self.output_format {
            if !output_formats::ALL.contains(&format.as_str()) {
                return Err(LibrarianError::Config(format!(
                    "Invalid output format '{format}'. Expected one of: {}.",
                    output_formats::ALL.join(", ")
                )));
            }
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub root: Option<String>,                 // [ROOT]
    pub note_extensions: Option<Vec<String>>, // --ext
    pub match_mode: Option<String>,           // --match-mode
    pub output_format: Option<String>,        // --format
    pub strict: bool,                         // --strict
    pub parallel: bool,                       // --parallel
    pub sort: bool,                           // --sort
    pub respect_ignore_files: bool,           // --respect-ignore
    pub quiet: bool,                          // --quiet
    pub verbose: bool,                        // --verbose
}
