use super::factors::{
    util_benefit, util_cost, util_exam, util_format, util_group, util_location, util_prog,
    RawValue,
};

// Input column names, matched literally (note the en dash in the 1–5 hints).
pub const COL_PROG: &str = "Programme recommended (Y/N)";
pub const COL_LOC: &str = "Location (Johanneberg/Lindholmen/online)";
pub const COL_FMT: &str = "Teaching format (lectures / proj)";
pub const COL_HARD: &str = "Hardness (1–5)";
pub const COL_WORK: &str = "Workload (1–5)";
pub const COL_INTEREST: &str = "Interest / fun (1–5)";
pub const COL_USEFUL: &str = "Usefulness for career (1–5)";
pub const COL_ALIGN: &str = "Alignment with SE master (1–5)";
pub const COL_EXAM: &str = "Exam type (written / proj / mixed)";
pub const COL_GROUP: &str = "Group work level (1–5)";

/// A scored attribute of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Prog,
    Location,
    Format,
    Hardness,
    Workload,
    Interest,
    Usefulness,
    Alignment,
    Group,
    Exam,
}

impl Attribute {
    pub const COUNT: usize = 10;

    /// All attributes, in output column order.
    pub const ALL: [Attribute; Attribute::COUNT] = [
        Attribute::Prog,
        Attribute::Location,
        Attribute::Format,
        Attribute::Hardness,
        Attribute::Workload,
        Attribute::Interest,
        Attribute::Usefulness,
        Attribute::Alignment,
        Attribute::Group,
        Attribute::Exam,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn spec(self) -> AttributeSpec {
        let (column, output_name, label) = match self {
            Attribute::Prog => (COL_PROG, "u_prog", "Programme"),
            Attribute::Location => (COL_LOC, "u_loc", "Location"),
            Attribute::Format => (COL_FMT, "u_fmt", "Format"),
            Attribute::Hardness => (COL_HARD, "u_hard", "Hardness"),
            Attribute::Workload => (COL_WORK, "u_work", "Workload"),
            Attribute::Interest => (COL_INTEREST, "u_interest", "Interest"),
            Attribute::Usefulness => (COL_USEFUL, "u_useful", "Usefulness"),
            Attribute::Alignment => (COL_ALIGN, "u_align", "Alignment"),
            Attribute::Group => (COL_GROUP, "u_group", "Group work"),
            Attribute::Exam => (COL_EXAM, "u_exam", "Exam"),
        };
        let utility: UtilityFn = match self {
            Attribute::Prog => util_prog,
            Attribute::Location => util_location,
            Attribute::Format => util_format,
            Attribute::Hardness | Attribute::Workload => util_cost,
            Attribute::Interest | Attribute::Usefulness | Attribute::Alignment => util_benefit,
            Attribute::Group => util_group,
            Attribute::Exam => util_exam,
        };
        AttributeSpec {
            attribute: self,
            column,
            output_name,
            label,
            utility,
        }
    }
}

pub type UtilityFn = fn(RawValue<'_>) -> f64;

/// Static description of one attribute: where its raw value lives, what it
/// is called in the output, and how it is normalised.
#[derive(Clone, Copy)]
pub struct AttributeSpec {
    pub attribute: Attribute,
    pub column: &'static str,
    pub output_name: &'static str,
    pub label: &'static str,
    pub utility: UtilityFn,
}

/// Names of the utility columns appended to the output, in order.
pub fn utility_columns() -> impl Iterator<Item = &'static str> {
    Attribute::ALL.into_iter().map(|a| a.spec().output_name)
}
