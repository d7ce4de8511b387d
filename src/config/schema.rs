use serde::{Deserialize, Serialize};

use crate::scoring::WeightTable;

/// Default number of top-ranked courses shown after a run.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Weight overrides; omitted keys keep the built-in weights.
    #[serde(default)]
    pub weights: Option<WeightTable>,

    /// How many ranked rows to print after scoring (default: 5)
    #[serde(default)]
    pub preview_rows: Option<usize>,
}

impl Config {
    pub fn effective_weights(&self) -> WeightTable {
        self.weights.unwrap_or_default()
    }

    pub fn effective_preview_rows(&self) -> usize {
        self.preview_rows.unwrap_or(DEFAULT_PREVIEW_ROWS)
    }
}
