use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::scoring::{Attribute, WeightTable};
use crate::table::{ScoredRow, SCORE_COLUMN};

/// Columns whose name contains one of these identify a course in previews.
const IDENTIFYING_MARKERS: [&str; 3] = ["Course", "code", "name"];
const MAX_IDENTIFYING_COLUMNS: usize = 2;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with two decimals
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Indices of the first two columns that look like a course code or name.
pub fn preview_columns(headers: &[String]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, name)| IDENTIFYING_MARKERS.iter().any(|m| name.contains(m)))
        .map(|(i, _)| i)
        .take(MAX_IDENTIFYING_COLUMNS)
        .collect()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format the top `limit` ranked rows as an aligned table: index, identifying
/// columns, Score.
pub fn format_preview(
    headers: &[String],
    rows: &[ScoredRow],
    limit: usize,
    use_colors: bool,
) -> String {
    format_preview_with_width(headers, rows, limit, use_colors, get_terminal_width())
}

fn format_preview_with_width(
    headers: &[String],
    rows: &[ScoredRow],
    limit: usize,
    use_colors: bool,
    term_width: Option<usize>,
) -> String {
    if rows.is_empty() {
        return "No courses found.".to_string();
    }

    let shown = &rows[..rows.len().min(limit)];
    let columns = preview_columns(headers);

    // Index column: 3 chars, Score column: 7 chars ("100.00"), 2-space separators
    let index_width = 3;
    let score_width = 7;
    let separator = "  ";

    let max_cell = term_width.and_then(|width| {
        if columns.is_empty() {
            return None;
        }
        let fixed = index_width + score_width + separator.len() * (columns.len() + 1);
        Some((width.saturating_sub(fixed) / columns.len()).max(10))
    });

    let cell = |row: &ScoredRow, col: usize| -> String {
        let text = row.record.cells().get(col).map(String::as_str).unwrap_or("");
        match max_cell {
            Some(max) => truncate_text(text, max),
            None => text.to_string(),
        }
    };

    let widths: Vec<usize> = columns
        .iter()
        .map(|&col| {
            shown
                .iter()
                .map(|row| cell(row, col).chars().count())
                .chain(std::iter::once(headers[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(shown.len() + 1);

    let mut header_line = " ".repeat(index_width);
    for (&col, &width) in columns.iter().zip(&widths) {
        header_line.push_str(separator);
        header_line.push_str(&format!("{:<width$}", headers[col], width = width));
    }
    header_line.push_str(separator);
    header_line.push_str(&format!("{:>width$}", SCORE_COLUMN, width = score_width));
    let header_line = header_line.trim_end().to_string();
    lines.push(if use_colors {
        header_line.dimmed().to_string()
    } else {
        header_line
    });

    for (idx, row) in shown.iter().enumerate() {
        let index_str = format!("{:>2}.", idx + 1);
        let mut line = if use_colors {
            index_str.dimmed().to_string()
        } else {
            index_str
        };
        for (&col, &width) in columns.iter().zip(&widths) {
            line.push_str(separator);
            line.push_str(&format!("{:<width$}", cell(row, col), width = width));
        }
        line.push_str(separator);
        let score_padded = format!(
            "{:>width$}",
            format_score(row.result.score),
            width = score_width
        );
        if use_colors {
            line.push_str(&score_padded.bold().to_string());
        } else {
            line.push_str(&score_padded);
        }
        lines.push(line);
    }

    lines.join("\n")
}

/// Short label for a row: its identifying cells, or its input position.
fn row_title(headers: &[String], row: &ScoredRow) -> String {
    let parts: Vec<&str> = preview_columns(headers)
        .into_iter()
        .filter_map(|col| row.record.cells().get(col).map(String::as_str))
        .filter(|s| !s.trim().is_empty())
        .collect();
    if parts.is_empty() {
        format!("Row {}", row.position + 1)
    } else {
        parts.join(" ")
    }
}

/// Multi-line breakdown of one row's utilities and weighted contributions
/// (for verbose mode)
pub fn format_breakdown(
    headers: &[String],
    row: &ScoredRow,
    weights: &WeightTable,
    use_colors: bool,
) -> String {
    let title = row_title(headers, row);
    let mut lines = vec![if use_colors {
        title.bold().to_string()
    } else {
        title
    }];

    for attribute in Attribute::ALL {
        let spec = attribute.spec();
        lines.push(format!(
            "  {:<12} u={:.2}  w={:.2}  {:>+7.2}",
            spec.label,
            row.result.utilities.get(attribute),
            weights.weight(attribute),
            row.result.contribution(attribute, weights)
        ));
    }
    lines.push(format!("  Score: {}", format_score(row.result.score)));
    lines.join("\n")
}
