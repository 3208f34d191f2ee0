//! librarian crawls a directory of markdown notes and lists the URLs in them.
//!
//! The pipeline is a recursive walk ([`discovery::walker`]) feeding a
//! line-oriented URL extractor ([`discovery::extractor`]); [`scan`] ties the
//! two together and returns the URLs in walk order.
//!
//! ```no_run
//! use librarian::{Config, scan};
//!
//! let config = Config {
//!     root: Some("notes/".to_string()),
//!     ..Default::default()
//! };
//! for location in scan::scan(&config)?.urls {
//!     println!("{}", location.url());
//! }
//! # Ok::<(), librarian::LibrarianError>(())
//! ```

pub mod config;
pub mod core;
pub mod discovery;
pub mod reporting;
pub mod scan;
pub mod ui;

pub use crate::config::{CliConfig, Config};
pub use crate::core::{LibrarianError, Result, UrlLocation, UrlLocationError};
pub use crate::discovery::{Extractor, MatchMode, UrlExtractor};
pub use crate::scan::{ScanReport, Scanner, SkippedFile};
