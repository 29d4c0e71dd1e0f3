use crate::error::{Error, Result};
use std::cmp::Ordering;

/// Indices `0..values.len()` ordered by `(value, label)` ascending.
///
/// The sort is stable, so identical `(value, label)` pairs keep their input
/// order and the permutation is deterministic for a given input. Values are
/// compared with IEEE equality (`-0.0 == 0.0`), matching the duplicate
/// detection used during cut point resolution.
pub fn sort_permutation(values: &[f32], labels: &[i32]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..values.len()).collect();
    idx.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(Ordering::Equal)
            .then_with(|| labels.get(a).cmp(&labels.get(b)))
    });
    idx
}

/// Reject empty or non-finite feature values.
pub(crate) fn check_values(values: &[f32]) -> Result<()> {
    if values.is_empty() {
        return Err(Error::EmptyInput);
    }
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(Error::NonFiniteValue { index }),
        None => Ok(()),
    }
}

/// Reject mismatched or empty `(values, labels)` pairs.
pub(crate) fn check_shape(values: &[f32], labels: &[i32]) -> Result<()> {
    if values.len() != labels.len() {
        return Err(Error::LengthMismatch {
            values: values.len(),
            labels: labels.len(),
        });
    }
    check_values(values)
}

/// Minimum and maximum of a non-empty slice of finite values.
pub(crate) fn min_max(values: &[f32]) -> Result<(f32, f32)> {
    let first = *values.first().ok_or(Error::EmptyInput)?;
    Ok(values
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_value_then_label() {
        let values = [5.7, 5.3, 5.2, 5.1, 5.0, 5.6, 5.1, 6.0, 5.1, 5.9];
        let labels = [1, 1, 1, 1, 1, 2, 2, 2, 2, 2];
        assert_eq!(
            sort_permutation(&values, &labels),
            vec![4, 3, 6, 8, 2, 1, 5, 0, 9, 7]
        );
    }

    #[test]
    fn label_breaks_value_ties() {
        assert_eq!(sort_permutation(&[5.77, 5.88, 5.99], &[1, 2, 1]), vec![0, 1, 2]);
        assert_eq!(sort_permutation(&[5.33, 5.22, 5.11], &[1, 2, 1]), vec![2, 1, 0]);
        assert_eq!(sort_permutation(&[5.33, 5.22, 5.33], &[2, 2, 1]), vec![1, 2, 0]);
    }

    #[test]
    fn stable_for_identical_pairs() {
        assert_eq!(sort_permutation(&[1.0, 1.0, 1.0], &[0, 0, 0]), vec![0, 1, 2]);
    }

    #[test]
    fn shape_checks() {
        assert_eq!(
            check_shape(&[1.0, 2.0, 3.0], &[1, 2]),
            Err(Error::LengthMismatch { values: 3, labels: 2 })
        );
        assert_eq!(check_shape(&[], &[]), Err(Error::EmptyInput));
        assert_eq!(
            check_shape(&[1.0, f32::NAN], &[0, 1]),
            Err(Error::NonFiniteValue { index: 1 })
        );
        assert!(check_shape(&[1.0], &[7]).is_ok());
    }

    #[test]
    fn min_max_of_values() {
        assert_eq!(min_max(&[3.0, -1.0, 7.5, 2.0]), Ok((-1.0, 7.5)));
        assert_eq!(min_max(&[]), Err(Error::EmptyInput));
    }
}
