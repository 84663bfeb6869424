/// Computes a quantile from sorted data using linear interpolation.
///
/// For a dataset with n values, the p-th quantile lies at the (0-based)
/// position `p * (n - 1)`. When that position falls between two elements,
/// the result is interpolated linearly between them.
///
/// `p` is clamped to `0.0..=1.0`. The result always lies between the two
/// bracketing values, even when their difference exceeds `f64::MAX`.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `p` - The quantile to compute (0.0 to 1.0)
///
/// # Returns
///
/// The value at the specified quantile, or `None` if the input is empty or `p` is NaN.
///
/// # Examples
///
/// ```
/// use socialstats_stats::quantile::quantile_sorted;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
///
/// assert_eq!(quantile_sorted(&values, 0.5), Some(2.5));
/// assert_eq!(quantile_sorted(&values, 0.25), Some(1.75));
/// assert_eq!(quantile_sorted(&[], 0.5), None);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn quantile_sorted(sorted_values: &[f64], p: f64) -> Option<f64> {
    if sorted_values.is_empty() || p.is_nan() {
        return None;
    }
    let p = p.clamp(0.0, 1.0);
    let last = sorted_values.len() - 1;
    let pos = p * last as f64;
    let lower = (pos.floor() as usize).min(last);
    let frac = pos - lower as f64;

    let value0 = sorted_values[lower];
    if lower == last || frac <= 0.0 {
        return Some(value0);
    }
    let value1 = sorted_values[lower + 1];
    let delta = value1 - value0;
    let value = if delta.is_finite() {
        value0 + delta * frac
    } else {
        // The bracket spans more than f64::MAX; weight each end separately.
        value0 * (1.0 - frac) + value1 * frac
    };
    Some(value.max(value0).min(value1))
}

/// Computes a quantile from unsorted values.
///
/// Sorts a copy of `values` with [`f64::total_cmp`] before delegating to
/// [`quantile_sorted`].
///
/// # Examples
///
/// ```
/// use socialstats_stats::quantile::quantile;
///
/// let values = [9.0, 1.0, 5.0];
/// assert_eq!(quantile(&values, 0.5), Some(5.0));
/// ```
#[must_use]
pub fn quantile(values: &[f64], p: f64) -> Option<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    quantile_sorted(&sorted, p)
}
