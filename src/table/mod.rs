pub mod reader;
pub mod writer;

pub use reader::{parse_table, read_table, Record, Table};
pub use writer::{
    format_float, scored_headers, scored_output_path, write_scored, write_scored_table,
    SCORE_COLUMN,
};

use crate::scoring::{compute_score, rank_by_score, ScoreResult, WeightTable};

/// A table row together with its score, ready to be ranked and written.
#[derive(Debug, Clone, Copy)]
pub struct ScoredRow<'a> {
    /// Zero-based position in the input table.
    pub position: usize,
    pub record: Record<'a>,
    pub result: ScoreResult,
}

/// Score every row of `table` and rank the result, highest score first.
pub fn score_table<'a>(table: &'a Table, weights: &WeightTable) -> Vec<ScoredRow<'a>> {
    let mut rows: Vec<ScoredRow<'a>> = table
        .records()
        .enumerate()
        .map(|(position, record)| ScoredRow {
            position,
            record,
            result: compute_score(&record, weights),
        })
        .collect();

    rank_by_score(&mut rows, |row| row.result.score);
    rows
}
