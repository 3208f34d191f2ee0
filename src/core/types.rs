use serde::Serialize;
use std::fmt;

/// Represents a URL location found in a note.
///
/// This type tracks where a URL was discovered within the scanned notes,
/// including the exact line number and file path for reporting purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlLocation {
    /// The URL that was found
    pub url: String,
    /// Name of file where URL was found
    pub file_name: String,
    /// Line number where URL was found (1-indexed)
    pub line: u64,
}

/// Errors that can occur when building a `UrlLocation`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlLocationError {
    /// URL is missing or empty
    MissingUrl,
    /// File name is missing or empty
    MissingFileName,
    /// Line number is invalid (zero)
    InvalidLineNumber,
}

impl fmt::Display for UrlLocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUrl => write!(f, "URL is required and cannot be empty"),
            Self::MissingFileName => write!(f, "File name is required and cannot be empty"),
            Self::InvalidLineNumber => write!(f, "Line number must be greater than 0"),
        }
    }
}

impl std::error::Error for UrlLocationError {}

impl UrlLocation {
    /// Create a new UrlLocation with validation.
    ///
    /// # Examples
    /// ```
    /// use librarian::UrlLocation;
    ///
    /// let location = UrlLocation::new(
    ///     "https://example.com".to_string(),
    ///     "notes/reading.md".to_string(),
    ///     42,
    /// ).unwrap();
    /// assert_eq!(location.url(), "https://example.com");
    /// assert_eq!(location.line(), 42);
    /// ```
    pub fn new(url: String, file_name: String, line: u64) -> Result<Self, UrlLocationError> {
        if url.is_empty() {
            return Err(UrlLocationError::MissingUrl);
        }
        if file_name.is_empty() {
            return Err(UrlLocationError::MissingFileName);
        }
        if line == 0 {
            return Err(UrlLocationError::InvalidLineNumber);
        }

        Ok(Self {
            url,
            file_name,
            line,
        })
    }

    /// Get the URL as a string slice.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the line number.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Get the file name as a string slice.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl fmt::Display for UrlLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.file_name, self.line, self.url)
    }
}
