use std::cmp::Ordering;

/// Computes the arithmetic mean of a slice of values. Returns NaN for empty input.
///
/// A NaN member poisons the result.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sorts ascending, NaN after every number.
pub fn sort_ascending(values: &mut [f64]) {
    values.sort_by(|a, b| ascending(*a, *b));
}

/// Numeric ascending order with NaN sorted last.
pub fn ascending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    }
}

/// Numeric descending order with NaN still sorted last.
pub fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        _ => ascending(a, b),
    }
}

/// Linear-interpolation quantile (R-7) of an ascending slice.
///
/// The index is `p * (n - 1)`; the result interpolates between the two
/// bracketing elements. Returns NaN for empty input or NaN `p`.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 || p.is_nan() {
        return f64::NAN;
    }
    if p <= 0.0 || n < 2 {
        return sorted[0];
    }
    if p >= 1.0 {
        return sorted[n - 1];
    }

    let rank = p * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let lower_value = sorted[lower];
    let upper_value = sorted[lower + 1];
    lower_value + (upper_value - lower_value) * (rank - lower as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[100.0, 200.0]), 150.0);
        assert!(mean(&[]).is_nan());
        assert!(mean(&[1.0, f64::NAN]).is_nan());
    }

    #[test]
    fn test_quantile_r7() {
        let sorted = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(quantile_sorted(&sorted, 0.25), 17.5);
        assert_eq!(quantile_sorted(&sorted, 0.5), 25.0);
        assert_eq!(quantile_sorted(&sorted, 0.75), 32.5);
        assert_eq!(quantile_sorted(&sorted, 0.0), 10.0);
        assert_eq!(quantile_sorted(&sorted, 1.0), 40.0);
    }

    #[test]
    fn test_quantile_exact_index() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile_sorted(&sorted, 0.25), 2.0);
        assert_eq!(quantile_sorted(&sorted, 0.5), 3.0);
    }

    #[test]
    fn test_quantile_degenerate() {
        assert!(quantile_sorted(&[], 0.5).is_nan());
        assert_eq!(quantile_sorted(&[7.0], 0.75), 7.0);
        assert!(quantile_sorted(&[1.0, 2.0], f64::NAN).is_nan());
    }

    #[test]
    fn test_sort_ascending_puts_nan_last() {
        let mut values = vec![3.0, f64::NAN, 1.0, 2.0];
        sort_ascending(&mut values);
        assert_eq!(&values[..3], &[1.0, 2.0, 3.0]);
        assert!(values[3].is_nan());
    }

    #[test]
    fn test_descending_keeps_nan_last() {
        let mut values = vec![1.0, f64::NAN, 3.0, 2.0];
        values.sort_by(|a, b| descending(*a, *b));
        assert_eq!(&values[..3], &[3.0, 2.0, 1.0]);
        assert!(values[3].is_nan());
    }
}
