pub mod attribute;
pub mod config;
pub mod factors;
pub mod engine;
pub mod validation;

pub use attribute::{utility_columns, Attribute, AttributeSpec};
pub use config::WeightTable;
pub use factors::RawValue;
pub use engine::{compute_score, rank_by_score, FieldSource, ScoreResult, UtilityVector};
pub use validation::validate_weights;
