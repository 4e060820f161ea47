//! Chart series.

use serde::{Deserialize, Serialize};

use docdash_core::error::AppError;
use docdash_core::result::AppResult;

/// A labelled series for a bar or line chart.
///
/// `labels[i]` names `values[i]`. The fields are public, so a caller can
/// break that pairing; [`ChartData::new`] and [`ChartData::push`] keep it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartData {
    /// Build a series, rejecting mismatched lengths.
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> AppResult<Self> {
        if labels.len() != values.len() {
            return Err(AppError::validation(format!(
                "Chart has {} labels but {} values",
                labels.len(),
                values.len()
            )));
        }
        Ok(Self { labels, values })
    }

    /// Append one point.
    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.labels.push(label.into());
        self.values.push(value);
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether there are no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Whether labels and values pair up.
    pub fn is_consistent(&self) -> bool {
        self.labels.len() == self.values.len()
    }

    /// Iterate over `(label, value)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdash_core::error::ErrorKind;

    #[test]
    fn test_new_rejects_mismatch() {
        let err = ChartData::new(vec!["01/05".to_string()], vec![]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_push_keeps_pairs() {
        let mut chart = ChartData::default();
        chart.push("01/05", 3.0);
        chart.push("02/05", 0.0);
        assert_eq!(chart.len(), 2);
        assert!(chart.is_consistent());

        let points: Vec<_> = chart.points().collect();
        assert_eq!(points, vec![("01/05", 3.0), ("02/05", 0.0)]);
    }

    #[test]
    fn test_hand_built_mismatch_is_reported() {
        let chart = ChartData {
            labels: vec!["a".to_string(), "b".to_string()],
            values: vec![1.0],
        };
        assert!(!chart.is_consistent());
    }
}
