//! Rate-of-change estimation over a time series.

/// Mean of the consecutive differences of `values` (a discrete derivative
/// average). `None` when fewer than two values are given.
///
/// # Examples
///
/// ```
/// # use hamstergen_stats::trend;
/// assert_eq!(trend::mean_delta(&[0.0, 1.0, 2.0, 3.0]), Some(1.0));
/// assert_eq!(trend::mean_delta(&[1.0]), None);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean_delta(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let sum: f64 = values.windows(2).map(|pair| pair[1] - pair[0]).sum();
    Some(sum / (values.len() - 1) as f64)
}

/// [`mean_delta`] over the trailing `window` values.
///
/// `None` until the series has accumulated at least `window` values, so
/// callers do not act on a partially filled window.
#[must_use]
pub fn tail_mean_delta(values: &[f64], window: usize) -> Option<f64> {
    if values.len() < window {
        return None;
    }
    mean_delta(&values[values.len() - window..])
}
