//! Snapshot writer.
//!
//! `dump` opens the target for writing, truncating whatever it held, and
//! writes every record as `Name: …, BirthDate: …, Commands: […]`, one per
//! line. The target is rewritten in place, so a symlinked `animals.txt` keeps
//! pointing at the same file and existing permissions are left alone. The
//! parent directory is never created.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use menagerie_core::AnimalRecord;

use crate::error::{io_err, DumpError};

/// Dump target used when none is configured, relative to the working directory.
pub const DEFAULT_DUMP_FILE: &str = "animals.txt";

/// Render records in iteration order, each line terminated by `\n`.
pub fn render<'a>(records: impl IntoIterator<Item = &'a AnimalRecord>) -> (String, usize) {
    let mut out = String::new();
    let mut lines = 0;
    for record in records {
        out.push_str(&record.to_string());
        out.push('\n');
        lines += 1;
    }
    (out, lines)
}

/// Overwrite the file at `path` with a snapshot of `records`.
///
/// Returns the number of lines written.
pub fn dump<'a>(
    records: impl IntoIterator<Item = &'a AnimalRecord>,
    path: &Path,
) -> Result<usize, DumpError> {
    let (content, lines) = render(records);

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| io_err(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| io_err(path, e))?;
    file.flush().map_err(|e| io_err(path, e))?;

    tracing::info!(lines, "dumped: {}", path.display());
    Ok(lines)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
