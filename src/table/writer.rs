use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::scoring::utility_columns;

use super::ScoredRow;

pub const SCORE_COLUMN: &str = "Score";

/// Output path next to the input: `<stem>_scored<.ext>`, or `.csv` when the
/// input has no extension.
pub fn scored_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = match input.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy()),
        None => ".csv".to_string(),
    };
    input.with_file_name(format!("{}_scored{}", stem, ext))
}

/// Render a float in shortest round-trip form, keeping `.0` on whole numbers.
/// Never uses exponent notation.
pub fn format_float(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}

/// Header of the scored table: original columns, utilities, then Score.
pub fn scored_headers(headers: &[String]) -> Vec<String> {
    headers
        .iter()
        .cloned()
        .chain(utility_columns().map(str::to_string))
        .chain(std::iter::once(SCORE_COLUMN.to_string()))
        .collect()
}

/// Write a scored table as CSV to any writer, in the given row order.
pub fn write_scored<W: Write>(out: W, headers: &[String], rows: &[ScoredRow<'_>]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(scored_headers(headers))
        .context("Failed to write CSV header")?;

    for row in rows {
        let mut fields: Vec<String> = row.record.cells().to_vec();
        fields.extend(row.result.utilities.iter().map(|(_, u)| format_float(u)));
        fields.push(format_float(row.result.score));
        writer
            .write_record(&fields)
            .context("Failed to write CSV row")?;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Write a scored table to `path` atomically.
///
/// Uses atomic-write-file so a failed run never leaves a half-written table.
pub fn write_scored_table(path: &Path, headers: &[String], rows: &[ScoredRow<'_>]) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;

    write_scored(&mut file, headers, rows)?;

    file.commit()
        .with_context(|| format!("Failed to save {}", path.display()))?;

    tracing::debug!(rows = rows.len(), path = %path.display(), "wrote scored table");
    Ok(())
}
