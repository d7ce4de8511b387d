use serde::{Deserialize, Serialize};

use super::attribute::Attribute;

/// Weight table for the final score.
///
/// Each weight scales one attribute's utility. The defaults sum to 1.0, which
/// puts the score on a 0-100 scale. Every key is optional in YAML; omitted
/// keys keep their default.
///
/// Example YAML:
/// ```yaml
/// weights:
///   interest: 0.30
///   useful: 0.10
///   exam: 0.05
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WeightTable {
    /// Programme recommended
    pub prog: f64,
    pub loc: f64,
    /// Teaching format
    pub fmt: f64,
    /// Hardness (lower raw value is better)
    pub hard: f64,
    /// Workload (lower raw value is better)
    pub work: f64,
    pub interest: f64,
    pub useful: f64,
    /// Alignment with the master's programme
    pub align: f64,
    pub group: f64,
    /// Exam type. Zero by default: the utility is still reported.
    pub exam: f64,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            prog: 0.10,
            loc: 0.05,
            fmt: 0.05,
            hard: 0.10,
            work: 0.10,
            interest: 0.20,
            useful: 0.20,
            align: 0.15,
            group: 0.05,
            exam: 0.00,
        }
    }
}

impl WeightTable {
    pub fn weight(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Prog => self.prog,
            Attribute::Location => self.loc,
            Attribute::Format => self.fmt,
            Attribute::Hardness => self.hard,
            Attribute::Workload => self.work,
            Attribute::Interest => self.interest,
            Attribute::Usefulness => self.useful,
            Attribute::Alignment => self.align,
            Attribute::Group => self.group,
            Attribute::Exam => self.exam,
        }
    }

    /// YAML key for an attribute's weight, used in validation messages.
    pub fn key(attribute: Attribute) -> &'static str {
        match attribute {
            Attribute::Prog => "prog",
            Attribute::Location => "loc",
            Attribute::Format => "fmt",
            Attribute::Hardness => "hard",
            Attribute::Workload => "work",
            Attribute::Interest => "interest",
            Attribute::Usefulness => "useful",
            Attribute::Alignment => "align",
            Attribute::Group => "group",
            Attribute::Exam => "exam",
        }
    }

    pub fn sum(&self) -> f64 {
        Attribute::ALL.iter().map(|a| self.weight(*a)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = WeightTable::default();
        assert!((weights.sum() - 1.0).abs() < 1e-9);
        assert_eq!(weights.weight(Attribute::Exam), 0.0);
        assert_eq!(weights.weight(Attribute::Interest), 0.20);
    }

    #[test]
    fn test_weight_table_serde_roundtrip() {
        let weights = WeightTable::default();
        let yaml = serde_saphyr::to_string(&weights).unwrap();
        let parsed: WeightTable = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(weights, parsed);
    }

    #[test]
    fn test_partial_weights_keep_defaults() {
        let yaml = r#"
interest: 0.3
exam: 0.05
"#;
        let weights: WeightTable = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(weights.interest, 0.3);
        assert_eq!(weights.exam, 0.05);
        assert_eq!(weights.prog, 0.10);
        assert_eq!(weights.align, 0.15);
    }

    #[test]
    fn test_unknown_weight_key_rejected() {
        let yaml = "fun: 0.5\n";
        let result: Result<WeightTable, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
