/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes all magic strings, numbers, and other literal values
/// used across the application, making them easier to maintain and modify.
/// Output format constants
pub mod output_formats {
    /// Text output format - one URL per line, suitable for piping
    pub const TEXT: &str = "text";
    /// Detailed output format - `file:line url` per line
    pub const DETAILED: &str = "detailed";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, DETAILED, JSON];
}

/// Per-line match mode constants
pub mod match_modes {
    /// Keep only the first URL on each line
    pub const FIRST: &str = "first";
    /// Keep every URL on each line
    pub const ALL_MATCHES: &str = "all";

    /// Default match mode
    pub const DEFAULT: &str = ALL_MATCHES;

    /// All valid match modes
    pub const ALL: [&str; 2] = [FIRST, ALL_MATCHES];
}

/// Default configuration values
pub mod defaults {
    /// Root scanned when no path is given
    pub const ROOT_PATH: &str = "sample/";
    /// Note file extensions, without the leading dot
    pub const NOTE_EXTENSIONS: [&str; 1] = ["md"];
}

/// Pattern constants
pub mod patterns {
    /// An http(s) scheme followed by a run of characters that are neither
    /// whitespace nor a closing parenthesis
    pub const URL: &str = r"https?://[^\s)]+";
}

/// File processing constants
pub mod files {
    /// Default capacity hint for URL matches per file
    pub const DEFAULT_URL_CAPACITY_PER_FILE: usize = 20;
}

/// Process exit codes
pub mod exit_codes {
    /// Run completed
    pub const SUCCESS: i32 = 0;
    /// Run aborted by a fatal error
    pub const FAILURE: i32 = 1;
}
