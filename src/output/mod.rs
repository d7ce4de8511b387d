pub mod formatter;

pub use formatter::{
    format_breakdown, format_preview, format_score, preview_columns, should_use_colors,
};
