use super::attribute::Attribute;
use super::config::WeightTable;
use super::factors::RawValue;

/// Anything that can hand out a raw cell by column name.
///
/// A missing column must come back as `RawValue::Absent`, never an error.
pub trait FieldSource {
    fn field(&self, column: &str) -> RawValue<'_>;
}

/// One utility in [0,1] per attribute, indexed by `Attribute`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtilityVector {
    values: [f64; Attribute::COUNT],
}

impl UtilityVector {
    pub fn get(&self, attribute: Attribute) -> f64 {
        self.values[attribute.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, f64)> + '_ {
        Attribute::ALL.into_iter().map(move |a| (a, self.get(a)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreResult {
    pub utilities: UtilityVector,
    pub score: f64,
}

impl ScoreResult {
    /// Weighted contribution of one attribute to the score, in score points.
    pub fn contribution(&self, attribute: Attribute, weights: &WeightTable) -> f64 {
        100.0 * weights.weight(attribute) * self.utilities.get(attribute)
    }
}

/// Score one record: evaluate every attribute utility, weight, sum, scale to 100.
pub fn compute_score<R: FieldSource + ?Sized>(record: &R, weights: &WeightTable) -> ScoreResult {
    let mut values = [0.0; Attribute::COUNT];
    for attribute in Attribute::ALL {
        let spec = attribute.spec();
        values[attribute.index()] = (spec.utility)(record.field(spec.column));
    }
    let utilities = UtilityVector { values };

    let weighted: f64 = utilities
        .iter()
        .map(|(attribute, u)| weights.weight(attribute) * u)
        .sum();

    ScoreResult {
        utilities,
        score: 100.0 * weighted,
    }
}

/// Stable sort by score, highest first. Equal scores keep their input order.
pub fn rank_by_score<T, F>(items: &mut [T], score_of: F)
where
    F: Fn(&T) -> f64,
{
    items.sort_by(|a, b| {
        score_of(b)
            .partial_cmp(&score_of(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::attribute::*;
    use std::collections::HashMap;

    impl FieldSource for HashMap<&str, &str> {
        fn field(&self, column: &str) -> RawValue<'_> {
            RawValue::from_cell(self.get(column).copied())
        }
    }

    fn course<'a>(fields: &[(&'a str, &'a str)]) -> HashMap<&'a str, &'a str> {
        fields.iter().copied().collect()
    }

    fn full_course<'a>(hard: &'a str, interest: &'a str) -> HashMap<&'a str, &'a str> {
        course(&[
            (COL_PROG, "Y"),
            (COL_LOC, "Lindholmen"),
            (COL_FMT, "Lectures"),
            (COL_HARD, hard),
            (COL_WORK, "2"),
            (COL_INTEREST, interest),
            (COL_USEFUL, "4"),
            (COL_ALIGN, "5"),
            (COL_EXAM, "written"),
            (COL_GROUP, "3"),
        ])
    }

    #[test]
    fn test_full_scoring_flow() {
        let record = full_course("1", "5");
        let result = compute_score(&record, &WeightTable::default());

        // 0.10*1 + 0.05*1 + 0.05*1 + 0.10*1 + 0.10*0.75 + 0.20*1 + 0.20*0.75
        // + 0.15*1 + 0.05*1 + 0*0.7 = 0.925
        assert!((result.score - 92.5).abs() < 1e-9);
        assert_eq!(result.utilities.get(Attribute::Workload), 0.75);
        assert_eq!(result.utilities.get(Attribute::Exam), 0.7);
    }

    #[test]
    fn test_empty_record_uses_defaults() {
        let record: HashMap<&str, &str> = HashMap::new();
        let result = compute_score(&record, &WeightTable::default());

        assert_eq!(result.utilities.get(Attribute::Prog), 0.6);
        assert_eq!(result.utilities.get(Attribute::Location), 0.9);
        assert_eq!(result.utilities.get(Attribute::Format), 0.9);
        assert_eq!(result.utilities.get(Attribute::Exam), 0.8);
        assert_eq!(result.utilities.get(Attribute::Hardness), 0.5);
        assert_eq!(result.utilities.get(Attribute::Group), 0.5);
        // 0.06 + 0.045 + 0.045 + 0.5 * 0.80 = 0.55
        assert!((result.score - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_location_column() {
        let mut record = full_course("3", "3");
        record.remove(COL_LOC);
        let result = compute_score(&record, &WeightTable::default());
        assert_eq!(result.utilities.get(Attribute::Location), 0.9);
    }

    #[test]
    fn test_exam_weight_zero_has_no_influence() {
        let mut written = full_course("3", "3");
        let mut project = full_course("3", "3");
        written.insert(COL_EXAM, "written");
        project.insert(COL_EXAM, "project");

        let weights = WeightTable::default();
        let a = compute_score(&written, &weights);
        let b = compute_score(&project, &weights);
        assert_ne!(a.utilities.get(Attribute::Exam), b.utilities.get(Attribute::Exam));
        assert_eq!(a.score, b.score);
    }

    #[test]
    fn test_swapping_weight_table() {
        let record = full_course("3", "5");
        let only_interest = WeightTable {
            prog: 0.0,
            loc: 0.0,
            fmt: 0.0,
            hard: 0.0,
            work: 0.0,
            interest: 1.0,
            useful: 0.0,
            align: 0.0,
            group: 0.0,
            exam: 0.0,
        };
        let result = compute_score(&record, &only_interest);
        assert_eq!(result.score, 100.0);
        assert_eq!(result.contribution(Attribute::Interest, &only_interest), 100.0);
        assert_eq!(result.contribution(Attribute::Prog, &only_interest), 0.0);
    }

    #[test]
    fn test_score_monotone_in_benefit_and_cost() {
        let weights = WeightTable::default();
        let levels = ["1", "2", "3", "4", "5"];

        let interest_scores: Vec<f64> = levels
            .iter()
            .map(|l| compute_score(&full_course("3", l), &weights).score)
            .collect();
        assert!(interest_scores.windows(2).all(|w| w[0] <= w[1]));

        let hardness_scores: Vec<f64> = levels
            .iter()
            .map(|l| compute_score(&full_course(l, "3"), &weights).score)
            .collect();
        assert!(hardness_scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_score_within_scale() {
        let weights = WeightTable::default();
        for hard in ["-10", "1", "5", "99", "junk"] {
            for interest in ["0", "3", "12", ""] {
                let score = compute_score(&full_course(hard, interest), &weights).score;
                assert!((0.0..=100.0 + 1e-9).contains(&score));
            }
        }
    }

    #[test]
    fn test_rank_descending() {
        let mut items = vec![("a", 10.0), ("b", 30.0), ("c", 20.0)];
        rank_by_score(&mut items, |i| i.1);
        let order: Vec<_> = items.iter().map(|i| i.0).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let mut items = vec![("first", 50.0), ("top", 80.0), ("second", 50.0), ("third", 50.0)];
        rank_by_score(&mut items, |i| i.1);
        let order: Vec<_> = items.iter().map(|i| i.0).collect();
        assert_eq!(order, vec!["top", "first", "second", "third"]);
    }
}
