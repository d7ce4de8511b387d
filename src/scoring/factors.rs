/// A raw cell value as read from the input table.
///
/// Empty and whitespace-only cells are `Absent`, same as a missing column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawValue<'a> {
    Present(&'a str),
    Absent,
}

impl<'a> RawValue<'a> {
    /// Build from an optional cell, collapsing blank text to `Absent`.
    pub fn from_cell(cell: Option<&'a str>) -> Self {
        match cell {
            Some(s) if !s.trim().is_empty() => RawValue::Present(s),
            _ => RawValue::Absent,
        }
    }

    fn trimmed(&self) -> &'a str {
        match self {
            RawValue::Present(s) => s.trim(),
            RawValue::Absent => "",
        }
    }

    /// Parse as a number. `NaN` counts as unparseable.
    fn number(&self) -> Option<f64> {
        match self {
            RawValue::Present(s) => s.trim().parse::<f64>().ok().filter(|x| !x.is_nan()),
            RawValue::Absent => None,
        }
    }
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(s: &'a str) -> Self {
        RawValue::from_cell(Some(s))
    }
}

// Fallbacks for cells that don't match any recognised value. Malformed
// spreadsheet cells land here on purpose; they are policy, not errors.
pub const PROG_DEFAULT: f64 = 0.6;
pub const LOCATION_DEFAULT: f64 = 0.9;
pub const FORMAT_DEFAULT: f64 = 0.9;
pub const EXAM_DEFAULT: f64 = 0.8;
pub const NUMERIC_DEFAULT: f64 = 0.5;

fn clip01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Programme recommended (Y/N).
pub fn util_prog(value: RawValue<'_>) -> f64 {
    let text = value.trimmed();
    if text.eq_ignore_ascii_case("Y") {
        1.0
    } else if text.eq_ignore_ascii_case("N") {
        0.6
    } else {
        PROG_DEFAULT
    }
}

/// Location (Johanneberg/Lindholmen/online). Campus names are case-sensitive.
pub fn util_location(value: RawValue<'_>) -> f64 {
    match value.trimmed() {
        "Lindholmen" => 1.0,
        "Johanneberg" => 0.8,
        s if s.eq_ignore_ascii_case("online") => 0.9,
        _ => LOCATION_DEFAULT,
    }
}

/// Teaching format (lectures / proj / both).
pub fn util_format(value: RawValue<'_>) -> f64 {
    let text = value.trimmed().to_lowercase();
    if text.contains("lecture") {
        1.0
    } else if text.contains("project") {
        0.9
    } else if text.contains("both") || text.contains("bth") || text.contains("mixed") {
        // "bth" shows up in real sheets as a misspelt "both"
        0.85
    } else {
        FORMAT_DEFAULT
    }
}

/// Exam type (written / proj / mixed).
pub fn util_exam(value: RawValue<'_>) -> f64 {
    let text = value.trimmed().to_lowercase();
    if text.contains("proj") {
        1.0
    } else if text.contains("mix") || text.contains("both") {
        0.8
    } else if text.contains("written") {
        0.7
    } else {
        EXAM_DEFAULT
    }
}

/// Lower is better (hardness, workload): maps 1..5 onto 1..0.
///
/// The linear map is applied first and the result clipped, so values
/// outside 1..5 saturate at 0 or 1.
pub fn util_cost(value: RawValue<'_>) -> f64 {
    match value.number() {
        Some(x) => clip01((5.0 - x) / 4.0),
        None => NUMERIC_DEFAULT,
    }
}

/// Higher is better (interest, usefulness, alignment): maps 1..5 onto 0..1.
pub fn util_benefit(value: RawValue<'_>) -> f64 {
    match value.number() {
        Some(x) => clip01((x - 1.0) / 4.0),
        None => NUMERIC_DEFAULT,
    }
}

/// Group work level, best around 3: 3 → 1.0, 2/4 → 0.5, 1/5 → 0.0.
pub fn util_group(value: RawValue<'_>) -> f64 {
    match value.number() {
        Some(x) => clip01(1.0 - (x - 3.0).abs() / 2.0),
        None => NUMERIC_DEFAULT,
    }
}
