use grep::regex::RegexMatcher;
use grep::searcher::Searcher;
use grep::searcher::sinks::UTF8;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    UrlLocation,
    core::constants::{files, match_modes, patterns},
    core::error::{LibrarianError, Result},
};

use std::{io, path::Path};

// Line filter for the searcher; URL_REGEX pulls the matches out of each hit
static REGEX_MATCHER: Lazy<RegexMatcher> = Lazy::new(|| {
    RegexMatcher::new(patterns::URL).expect("Failed to compile URL line pattern")
});

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(patterns::URL).expect("Failed to compile URL regex pattern"));

/// How many URLs are kept from a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Only the first URL on a line
    First,
    /// Every URL on a line, left to right
    #[default]
    All,
}

impl MatchMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            match_modes::FIRST => Some(MatchMode::First),
            match_modes::ALL_MATCHES => Some(MatchMode::All),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MatchMode::First => match_modes::FIRST,
            MatchMode::All => match_modes::ALL_MATCHES,
        }
    }
}

pub trait UrlExtractor {
    fn extract_urls(&self, path: &Path) -> Result<Vec<UrlLocation>>;
}

#[derive(Default, Debug, Clone, Copy)]
pub struct Extractor {
    match_mode: MatchMode,
}

impl UrlExtractor for Extractor {
    fn extract_urls(&self, path: &Path) -> Result<Vec<UrlLocation>> {
        let lines = Self::parse_lines_with_urls(path).map_err(|source| {
            LibrarianError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let file_name = path.display().to_string();
        let mut urls = Vec::with_capacity(lines.len());

        for (line_content, line) in lines {
            for url in Self::parse_urls(&line_content, self.match_mode) {
                match UrlLocation::new(url.to_string(), file_name.clone(), line) {
                    Ok(location) => urls.push(location),
                    Err(err) => debug!("Skipping match in {file_name}:{line}: {err}"),
                }
            }
        }

        if urls.is_empty() {
            debug!("No URLs in {file_name}");
        }

        Ok(urls)
    }
}

type LineMatch = (String, u64);

impl Extractor {
    pub fn new(match_mode: MatchMode) -> Self {
        Self { match_mode }
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Lines of a file that contain at least one URL, with 1-based line numbers.
    ///
    /// Lines are split on `\n`. Lines without a match are never surfaced,
    /// so a URL wrapped across two lines is not found.
    fn parse_lines_with_urls(path: &Path) -> io::Result<Vec<LineMatch>> {
        let mut matches = Vec::with_capacity(files::DEFAULT_URL_CAPACITY_PER_FILE);

        Searcher::new().search_path(
            &*REGEX_MATCHER,
            path,
            UTF8(|line_number, line| {
                matches.push((line.to_string(), line_number));
                Ok(true)
            }),
        )?;

        Ok(matches)
    }

    /// Pull the bare URL substrings out of one line.
    pub fn parse_urls(line: &str, match_mode: MatchMode) -> Vec<&str> {
        let found = URL_REGEX.find_iter(line).map(|m| m.as_str());
        match match_mode {
            MatchMode::First => found.take(1).collect(),
            MatchMode::All => found.collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::io::Write;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn note_with(content: &[u8]) -> std::result::Result<tempfile::NamedTempFile, io::Error> {
        let mut file = tempfile::Builder::new().suffix(".md").tempfile()?;
        file.write_all(content)?;
        Ok(file)
    }

    #[test]
    fn test_match_mode_names() {
        assert_eq!(MatchMode::from_name("first"), Some(MatchMode::First));
        assert_eq!(MatchMode::from_name("all"), Some(MatchMode::All));
        assert_eq!(MatchMode::from_name("ALL"), None);
        assert_eq!(MatchMode::First.name(), "first");
        assert_eq!(MatchMode::default(), MatchMode::All);
    }

    #[test]
    fn test_parse_urls__single_url() {
        let line = "Check out https://example.com/page for details";

        assert_eq!(
            Extractor::parse_urls(line, MatchMode::All),
            vec!["https://example.com/page"]
        );
    }

    #[test]
    fn test_parse_urls__first_match_only() {
        let line = "See http://x.test and https://y.test";

        assert_eq!(
            Extractor::parse_urls(line, MatchMode::First),
            vec!["http://x.test"]
        );
    }

    #[test]
    fn test_parse_urls__all_matches() {
        let line = "See http://x.test and https://y.test";

        assert_eq!(
            Extractor::parse_urls(line, MatchMode::All),
            vec!["http://x.test", "https://y.test"]
        );
    }

    #[test]
    fn test_parse_urls__markdown_link_stops_at_paren() {
        let line = "arbitrary [something](http://foo.bar/path) arbitrary";

        assert_eq!(
            Extractor::parse_urls(line, MatchMode::All),
            vec!["http://foo.bar/path"]
        );
    }

    #[test]
    fn test_parse_urls__img_url() {
        let line = "arbitrary ![image](https://foo.bar/img.png) arbitrary";

        assert_eq!(
            Extractor::parse_urls(line, MatchMode::All),
            vec!["https://foo.bar/img.png"]
        );
    }

    #[test]
    fn test_parse_urls__keeps_query_and_fragment() {
        let line = "API: https://api.example.com/v1/users?id=123&format=json#top.";

        assert_eq!(
            Extractor::parse_urls(line, MatchMode::All),
            vec!["https://api.example.com/v1/users?id=123&format=json#top."]
        );
    }

    #[test]
    fn test_parse_urls__scheme_requires_body() {
        assert!(Extractor::parse_urls("just http:// here", MatchMode::All).is_empty());
        assert!(Extractor::parse_urls("ftp://example.com", MatchMode::All).is_empty());
        assert!(Extractor::parse_urls("no links here", MatchMode::All).is_empty());
    }

    #[test]
    fn test_parse_urls__url_inside_word() {
        let line = "prefixhttps://glued.test/x";

        assert_eq!(
            Extractor::parse_urls(line, MatchMode::All),
            vec!["https://glued.test/x"]
        );
    }

    #[test]
    fn test_parse_lines_with_urls__from_file() -> TestResult {
        let file = note_with(
            "arbitrary [something](http://specific-link.one) arbitrary\n\
             no url on this line\n\
             arbitrary http://specific-link.two arbitrary"
                .as_bytes(),
        )?;

        let actual = Extractor::parse_lines_with_urls(file.path())?;

        assert_eq!(
            actual,
            vec![
                (
                    "arbitrary [something](http://specific-link.one) arbitrary\n".to_string(),
                    1
                ),
                (
                    "arbitrary http://specific-link.two arbitrary".to_string(),
                    3
                ),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_parse_lines_with_urls__when_non_existing_file() {
        let is_err = Extractor::parse_lines_with_urls("non_existing_file.md".as_ref()).is_err();

        assert!(is_err);
    }

    #[test]
    fn test_extract_urls__locations() -> TestResult {
        let file = note_with(b"# Links\nhttps://a.test/one\r\n\nhttps://b.test) and http://c.test\n")?;
        let file_name = file.path().display().to_string();

        let urls = Extractor::default().extract_urls(file.path())?;

        assert_eq!(
            urls,
            vec![
                UrlLocation::new("https://a.test/one".to_string(), file_name.clone(), 2)?,
                UrlLocation::new("https://b.test".to_string(), file_name.clone(), 4)?,
                UrlLocation::new("http://c.test".to_string(), file_name, 4)?,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_extract_urls__first_mode_counts_lines() -> TestResult {
        let file = note_with(b"http://a.test http://b.test\nnothing\nhttps://c.test\n")?;

        let urls = Extractor::new(MatchMode::First).extract_urls(file.path())?;
        let found: Vec<&str> = urls.iter().map(|u| u.url()).collect();

        assert_eq!(found, vec!["http://a.test", "https://c.test"]);
        Ok(())
    }

    #[test]
    fn test_extract_urls__no_matches() -> TestResult {
        let file = note_with(b"No links here\nhttp:// still nothing\n")?;

        let urls = Extractor::default().extract_urls(file.path())?;

        assert!(urls.is_empty());
        Ok(())
    }

    #[test]
    fn test_extract_urls__empty_file() -> TestResult {
        let file = note_with(b"")?;

        let urls = Extractor::default().extract_urls(file.path())?;

        assert!(urls.is_empty());
        Ok(())
    }

    #[test]
    fn test_extract_urls__invalid_utf8_on_url_line() -> TestResult {
        let file = note_with(b"fine\nhttps://bad.test/ \xff\xfe\n")?;

        let err = Extractor::default()
            .extract_urls(file.path())
            .unwrap_err();

        assert!(matches!(err, LibrarianError::FileRead { .. }));
        assert_eq!(err.path(), Some(file.path()));
        Ok(())
    }

    #[test]
    fn test_extract_urls__missing_file_names_path() {
        let err = Extractor::default()
            .extract_urls(Path::new("missing-note.md"))
            .unwrap_err();

        assert!(format!("{err}").contains("missing-note.md"));
    }
}
