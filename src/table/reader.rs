use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::scoring::{FieldSource, RawValue};

/// A CSV table held in memory: header plus rectangular rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

/// Borrowed view of one row, addressable by column name.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    table: &'a Table,
    cells: &'a [String],
}

impl Table {
    /// Build a table. Short rows are padded with empty cells; longer rows are rejected.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        if headers.is_empty() {
            bail!("CSV has no header row");
        }

        // First occurrence wins when a column name repeats.
        let mut index = HashMap::new();
        for (i, name) in headers.iter().enumerate() {
            index.entry(name.clone()).or_insert(i);
        }

        let width = headers.len();
        let mut padded = 0;
        let mut normalized = Vec::with_capacity(rows.len());
        for (i, mut row) in rows.into_iter().enumerate() {
            if row.len() > width {
                bail!(
                    "row {} has {} fields, but the header has {}",
                    i + 2,
                    row.len(),
                    width
                );
            }
            if row.len() < width {
                padded += 1;
                row.resize(width, String::new());
            }
            normalized.push(row);
        }
        if padded > 0 {
            tracing::warn!(rows = padded, "padded short rows with empty cells");
        }

        Ok(Self {
            headers,
            index,
            rows: normalized,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.index.contains_key(column)
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(move |cells| Record {
            table: self,
            cells,
        })
    }
}

impl<'a> Record<'a> {
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let i = *self.table.index.get(column)?;
        self.cells.get(i).map(String::as_str)
    }

    pub fn cells(&self) -> &'a [String] {
        self.cells
    }
}

impl FieldSource for Record<'_> {
    fn field(&self, column: &str) -> RawValue<'_> {
        RawValue::from_cell(self.get(column))
    }
}

/// Parse CSV text with a header row from any reader.
pub fn parse_table<R: Read>(input: R) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .context("Failed to read CSV header")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to parse CSV row {}", i + 2))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Table::new(headers, rows)
}

/// Read a CSV file with a header row.
pub fn read_table(path: &Path) -> Result<Table> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let table = parse_table(file).with_context(|| format!("Invalid CSV in {}", path.display()))?;
    tracing::debug!(rows = table.len(), columns = table.headers().len(), "read table");
    Ok(table)
}
