use crate::config::Config;
use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity.
///
/// Logs go to stderr so stdout carries nothing but the URL list.
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn // Skipped notes are always worth reporting
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let extensions = config
        .note_extensions_as_set()
        .into_iter()
        .collect::<Vec<_>>()
        .join(",");

    info!(
        "Configuration: root={}, extensions={extensions}, match_mode={}",
        config.root_path().display(),
        config.match_mode().name()
    );
    info!(
        "Behavior: strict={}, parallel={}, sort={}, respect_ignore={}",
        config.is_strict(),
        config.is_parallel(),
        config.is_sorted(),
        config.respects_ignore_files()
    );
}

/// Log note discovery information
pub fn log_note_discovery(note_count: usize) {
    info!("Found {note_count} note file(s)");
}

/// Log scan completion
pub fn log_scan_complete(files_scanned: usize, url_count: usize, skipped: usize, duration_ms: u128) {
    if skipped == 0 {
        info!("Scan complete: {url_count} URL(s) in {files_scanned} note(s) ({duration_ms}ms)");
    } else {
        warn!(
            "Scan complete: {url_count} URL(s) in {files_scanned} note(s), {skipped} skipped ({duration_ms}ms)"
        );
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
