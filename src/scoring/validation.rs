use super::attribute::Attribute;
use super::config::WeightTable;

/// Weights may drift from a 1.0 sum by this much before a warning is logged.
const SUM_TOLERANCE: f64 = 1e-6;

/// Validate a weight table at startup.
/// Returns all validation errors at once (not just the first).
///
/// A sum other than 1.0 is allowed; it only stretches the score scale, so it
/// is logged rather than rejected.
pub fn validate_weights(weights: &WeightTable) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for attribute in Attribute::ALL {
        let value = weights.weight(attribute);
        let key = WeightTable::key(attribute);
        if !value.is_finite() {
            errors.push(format!("weights.{}: must be a finite number", key));
        } else if value < 0.0 {
            errors.push(format!("weights.{}: must be non-negative (got {})", key, value));
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let sum = weights.sum();
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        tracing::warn!(sum, "weights do not sum to 1.0; scores will not span 0-100");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_valid() {
        assert!(validate_weights(&WeightTable::default()).is_ok());
    }

    #[test]
    fn test_unnormalised_weights_still_valid() {
        let weights = WeightTable {
            interest: 2.0,
            ..WeightTable::default()
        };
        assert!(validate_weights(&weights).is_ok());
    }

    #[test]
    fn test_negative_weight() {
        let weights = WeightTable {
            hard: -0.1,
            ..WeightTable::default()
        };
        let errors = validate_weights(&weights).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("weights.hard"));
    }

    #[test]
    fn test_non_finite_weight() {
        let weights = WeightTable {
            align: f64::NAN,
            ..WeightTable::default()
        };
        let errors = validate_weights(&weights).unwrap_err();
        assert!(errors[0].contains("weights.align"));
        assert!(errors[0].contains("finite"));
    }

    #[test]
    fn test_collects_all_errors() {
        let weights = WeightTable {
            prog: -1.0,        // Error 1
            exam: f64::INFINITY, // Error 2
            ..WeightTable::default()
        };
        let errors = validate_weights(&weights).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
