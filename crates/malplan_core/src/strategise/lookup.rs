use crate::model::StrategiseResult;

/// The strategy at or just above `x` on the swept threshold axis
///
/// Returns the first result whose threshold is `>= x`, or the last result when
/// `x` lies beyond the sweep. `None` only for an empty sweep.
#[must_use]
pub fn find_closest(results: &[StrategiseResult], x: f64) -> Option<&StrategiseResult> {
    results
        .iter()
        .find(|result| result.cost_threshold >= x)
        .or_else(|| results.last())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(thresholds: &[f64]) -> Vec<StrategiseResult> {
        thresholds
            .iter()
            .map(|&cost_threshold| StrategiseResult {
                cost_threshold,
                interventions: vec![],
            })
            .collect()
    }

    #[test]
    fn test_exact_and_between_thresholds() {
        let results = results(&[100.0, 200.0, 300.0]);
        assert_eq!(find_closest(&results, 200.0).unwrap().cost_threshold, 200.0);
        assert_eq!(find_closest(&results, 150.0).unwrap().cost_threshold, 200.0);
    }

    #[test]
    fn test_below_first_returns_first() {
        let results = results(&[100.0, 200.0, 300.0]);
        assert_eq!(find_closest(&results, 5.0).unwrap().cost_threshold, 100.0);
    }

    #[test]
    fn test_beyond_last_returns_last() {
        let results = results(&[100.0, 200.0, 300.0]);
        assert_eq!(find_closest(&results, 1e9).unwrap().cost_threshold, 300.0);
    }

    #[test]
    fn test_empty_sweep() {
        assert!(find_closest(&[], 10.0).is_none());
    }
}
