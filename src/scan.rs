//! Walk-and-extract pipeline
//!
//! Drives the walker, runs the extractor over every note and applies the
//! error policy. The result sequence is owned by the returned [`ScanReport`].

use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::Config;
use crate::core::error::{LibrarianError, Result};
use crate::discovery::{Extractor, NoteWalk, UrlExtractor, WalkOptions, walk_notes};
use crate::reporting::logging;
use crate::UrlLocation;

/// A note or directory entry left out of a lenient scan
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub path: Option<String>,
    pub reason: String,
}

impl From<&LibrarianError> for SkippedFile {
    fn from(err: &LibrarianError) -> Self {
        Self {
            path: err.path().map(|p| p.display().to_string()),
            reason: err.to_string(),
        }
    }
}

/// Outcome of one scan
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Directory that was scanned
    pub root: String,
    /// Notes read without error
    pub files_scanned: usize,
    /// URLs in walk order, then line order
    pub urls: Vec<UrlLocation>,
    /// Notes and entries that could not be read
    pub skipped: Vec<SkippedFile>,
}

impl ScanReport {
    pub fn url_strings(&self) -> Vec<&str> {
        self.urls.iter().map(|u| u.url()).collect()
    }

    pub fn files_skipped(&self) -> usize {
        self.skipped.len()
    }
}

pub struct Scanner<E: UrlExtractor + Sync = Extractor> {
    extractor: E,
    walk_options: WalkOptions,
    root: PathBuf,
    strict: bool,
    parallel: bool,
}

impl Scanner<Extractor> {
    /// Build a scanner from a validated configuration
    pub fn from_config(config: &Config) -> Self {
        Scanner::with_extractor(config, Extractor::new(config.match_mode()))
    }
}

impl<E: UrlExtractor + Sync> Scanner<E> {
    pub fn with_extractor(config: &Config, extractor: E) -> Self {
        Self {
            extractor,
            walk_options: WalkOptions {
                extensions: config.note_extensions_as_set(),
                sort: config.is_sorted(),
                respect_ignore_files: config.respects_ignore_files(),
            },
            root: config.root_path(),
            strict: config.is_strict(),
            parallel: config.is_parallel(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run the scan.
    ///
    /// A missing or non-directory root always fails. Unreadable notes and
    /// directory entries fail the scan when strict, otherwise they are
    /// logged and listed in [`ScanReport::skipped`].
    pub fn scan(&self) -> Result<ScanReport> {
        let start_time = Instant::now();
        let walk = walk_notes(&self.root, &self.walk_options)?;
        let report = self.collect(walk)?;

        logging::log_scan_complete(
            report.files_scanned,
            report.urls.len(),
            report.files_skipped(),
            start_time.elapsed().as_millis(),
        );

        Ok(report)
    }

    /// Apply the error policy to the walk errors, then extract from every note
    fn collect(&self, walk: NoteWalk) -> Result<ScanReport> {
        let mut report = ScanReport {
            root: self.root.display().to_string(),
            ..Default::default()
        };

        for err in walk.errors {
            self.handle_error(err, &mut report)?;
        }

        logging::log_note_discovery(walk.notes.len());

        if self.parallel {
            // Results come back in walk order, so merging needs no lock
            let results: Vec<Result<Vec<UrlLocation>>> = walk
                .notes
                .par_iter()
                .map(|path| self.extractor.extract_urls(path))
                .collect();

            for result in results {
                self.merge(result, &mut report)?;
            }
        } else {
            for path in &walk.notes {
                self.merge(self.extractor.extract_urls(path), &mut report)?;
            }
        }

        Ok(report)
    }

    fn merge(&self, result: Result<Vec<UrlLocation>>, report: &mut ScanReport) -> Result<()> {
        match result {
            Ok(urls) => {
                report.files_scanned += 1;
                report.urls.extend(urls);
                Ok(())
            }
            Err(err) => self.handle_error(err, report),
        }
    }

    fn handle_error(&self, err: LibrarianError, report: &mut ScanReport) -> Result<()> {
        if self.strict || !err.is_per_file() {
            debug!("Aborting scan of {}", self.root.display());
            return Err(err);
        }

        warn!("Skipping: {err}");
        report.skipped.push(SkippedFile::from(&err));
        Ok(())
    }
}

/// Scan with the default extractor
pub fn scan(config: &Config) -> Result<ScanReport> {
    Scanner::from_config(config).scan()
}
