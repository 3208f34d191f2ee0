//! URL discovery and note traversal
//!
//! This module handles walking the notes directory and finding
//! URLs inside each note file.

pub mod extractor;
pub mod walker;

// Re-export commonly used items
pub use extractor::{Extractor, MatchMode, UrlExtractor};
pub use walker::{NoteWalk, WalkOptions, is_note_file, walk_notes};
