use std::path::{Path, PathBuf};

use crate::error::RunError;
use crate::scoring::WeightTable;
use crate::table::{read_table, score_table, write_scored_table, ScoredRow, Table};

/// Turn the user's answer into an existing input file path.
pub fn resolve_input(answer: &str) -> Result<PathBuf, RunError> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(RunError::NoInputPath);
    }
    let path = PathBuf::from(answer);
    if !path.is_file() {
        return Err(RunError::InputNotFound(path));
    }
    Ok(path)
}

pub fn load_input(path: &Path) -> Result<Table, RunError> {
    read_table(path).map_err(RunError::Input)
}

pub fn save_output(path: &Path, headers: &[String], rows: &[ScoredRow<'_>]) -> Result<(), RunError> {
    write_scored_table(path, headers, rows).map_err(RunError::Output)
}

/// Score and rank a loaded table, write it to `output`, and hand back the
/// ranked rows for previewing.
pub fn score_and_save<'a>(
    table: &'a Table,
    output: &Path,
    weights: &WeightTable,
) -> Result<Vec<ScoredRow<'a>>, RunError> {
    let rows = score_table(table, weights);
    save_output(output, table.headers(), &rows)?;
    Ok(rows)
}
