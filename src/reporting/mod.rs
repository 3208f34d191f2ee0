//! Logging of run progress and diagnostics
//!
//! Everything here writes to stderr through the `log` facade.

pub mod logging;
