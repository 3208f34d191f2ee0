//! Output formatting and display logic for librarian
//!
//! The report is rendered to one string and written to stdout in a single
//! pass once the scan has finished.

use serde::Serialize;

use std::io::{self, Write};

use crate::UrlLocation;
use crate::core::constants::output_formats;
use crate::core::error::{LibrarianError, Result};
use crate::scan::{ScanReport, SkippedFile};

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    root: &'a str,
    files_scanned: usize,
    files_skipped: usize,
    urls: &'a [UrlLocation],
    skipped: &'a [SkippedFile],
}

/// Render `report` in the given output format
pub fn render(report: &ScanReport, format: &str) -> Result<String> {
    match format {
        output_formats::TEXT => Ok(render_lines(report.urls.iter().map(|u| u.url().to_string()))),
        output_formats::DETAILED => Ok(render_lines(report.urls.iter().map(|u| u.to_string()))),
        output_formats::JSON => render_json(report),
        other => Err(LibrarianError::InvalidArgument(format!(
            "Unknown output format '{other}'. Expected one of: {}.",
            output_formats::ALL.join(", ")
        ))),
    }
}

fn render_lines(lines: impl Iterator<Item = String>) -> String {
    let mut output = String::new();
    for line in lines {
        output.push_str(&line);
        output.push('\n');
    }
    output
}

fn render_json(report: &ScanReport) -> Result<String> {
    let json = JsonReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        root: &report.root,
        files_scanned: report.files_scanned,
        files_skipped: report.files_skipped(),
        urls: &report.urls,
        skipped: &report.skipped,
    };

    let mut output = serde_json::to_string_pretty(&json)?;
    output.push('\n');
    Ok(output)
}

/// Render `report` and write it to `out`.
///
/// A closed pipe on the reading side is not an error.
pub fn write_report(out: &mut dyn Write, report: &ScanReport, format: &str) -> Result<()> {
    let rendered = render(report, format)?;

    match out.write_all(rendered.as_bytes()).and_then(|_| out.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.map_err(LibrarianError::from),
    }
}

/// Print the final report to stdout
pub fn display_report(report: &ScanReport, format: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, report, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ScanReport {
        ScanReport {
            root: "sample/".to_string(),
            files_scanned: 2,
            urls: vec![
                UrlLocation::new(
                    "https://example.com/page".to_string(),
                    "sample/a.md".to_string(),
                    1,
                )
                .unwrap(),
                UrlLocation::new("http://x.test".to_string(), "sample/c.md".to_string(), 4)
                    .unwrap(),
            ],
            skipped: vec![SkippedFile {
                path: Some("sample/broken.md".to_string()),
                reason: "Could not read note 'sample/broken.md': denied".to_string(),
            }],
        }
    }

    #[test]
    fn test_render_text_one_url_per_line() {
        let output = render(&sample_report(), output_formats::TEXT).unwrap();

        assert_eq!(output, "https://example.com/page\nhttp://x.test\n");
    }

    #[test]
    fn test_render_detailed() {
        let output = render(&sample_report(), output_formats::DETAILED).unwrap();

        assert_eq!(
            output,
            "sample/a.md:1 https://example.com/page\nsample/c.md:4 http://x.test\n"
        );
    }

    #[test]
    fn test_render_empty_report() {
        let output = render(&ScanReport::default(), output_formats::TEXT).unwrap();

        assert!(output.is_empty());
    }

    #[test]
    fn test_render_json() {
        let output = render(&sample_report(), output_formats::JSON).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["root"], "sample/");
        assert_eq!(value["files_scanned"], 2);
        assert_eq!(value["files_skipped"], 1);
        assert_eq!(value["urls"][0]["url"], "https://example.com/page");
        assert_eq!(value["urls"][0]["file_name"], "sample/a.md");
        assert_eq!(value["urls"][1]["line"], 4);
        assert_eq!(value["skipped"][0]["path"], "sample/broken.md");
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_render_unknown_format() {
        let result = render(&sample_report(), "xml");

        assert!(matches!(result, Err(LibrarianError::InvalidArgument(_))));
    }

    #[test]
    fn test_write_report_to_buffer() {
        let mut buf = Vec::new();

        write_report(&mut buf, &sample_report(), output_formats::TEXT).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "https://example.com/page\nhttp://x.test\n"
        );
    }
}
