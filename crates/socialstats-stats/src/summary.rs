use serde::{Deserialize, Serialize};

use crate::quantile::quantile_sorted;

/// Five-number summary of a dataset, as drawn by a boxplot.
///
/// Quartiles are computed with [`quantile_sorted`], so the invariant
/// `min <= q1 <= median <= q3 <= max` holds for every summary.
///
/// # Examples
///
/// ```
/// use socialstats_stats::summary::QuantileSummary;
///
/// let summary = QuantileSummary::new([4.0, 1.0, 3.0, 2.0]).unwrap();
/// assert_eq!(summary.min, 1.0);
/// assert_eq!(summary.q1, 1.75);
/// assert_eq!(summary.median, 2.5);
/// assert_eq!(summary.q3, 3.25);
/// assert_eq!(summary.max, 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantileSummary {
    /// The smallest value.
    pub min: f64,
    /// The 25th percentile.
    pub q1: f64,
    /// The 50th percentile.
    pub median: f64,
    /// The 75th percentile.
    pub q3: f64,
    /// The largest value.
    pub max: f64,
}

impl QuantileSummary {
    /// Computes the summary from unsorted values.
    ///
    /// # Returns
    ///
    /// * `Some(QuantileSummary)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty or contains NaN
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        if values.iter().any(|v| v.is_nan()) {
            return None;
        }
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes the summary from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use socialstats_stats::summary::QuantileSummary;
    /// let summary = QuantileSummary::from_sorted(&[5.0]).unwrap();
    /// assert_eq!(summary.q1, 5.0);
    /// assert_eq!(summary.q3, 5.0);
    /// ```
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        Some(Self {
            min: *sorted_values.first()?,
            q1: quantile_sorted(sorted_values, 0.25)?,
            median: quantile_sorted(sorted_values, 0.5)?,
            q3: quantile_sorted(sorted_values, 0.75)?,
            max: *sorted_values.last()?,
        })
    }

    /// Interquartile range (`q3 - q1`).
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Returns `true` if the five values are in non-decreasing order.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.min <= self.q1
            && self.q1 <= self.median
            && self.median <= self.q3
            && self.q3 <= self.max
    }
}
