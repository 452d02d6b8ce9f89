use std::path::Path;

use anyhow::{Context, Result};

use super::model::LogDocument;
use super::parser::parse_log;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read a benchmark log fully into memory and parse it.
///
/// Any extension is accepted; the benchmarks write `.log` files but the
/// content is plain text.
pub fn load_file(path: &Path) -> Result<LogDocument> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading log file {}", path.display()))?;

    parse_log(&text).with_context(|| format!("parsing log file {}", path.display()))
}
