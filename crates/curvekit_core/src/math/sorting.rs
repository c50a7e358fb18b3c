//! Sorting a key array while carrying a parallel value array along.

use crate::types::SortError;
use crate::vector::Vector;

/// Ranges at or below this length are finished by insertion sort.
const INSERTION_THRESHOLD: usize = 7;

/// Sorts `keys` ascending, applying every swap to `values` as well.
///
/// Quicksort with median-of-three pivots and an explicit stack of pending
/// ranges; the larger side of each partition is deferred so the stack stays
/// logarithmic. Not stable. Keys that do not compare (NaN) never cause a
/// panic, but the order around them is unspecified.
///
/// # Errors
///
/// [`SortError::LengthMismatch`] if the arrays differ in length.
///
/// # Example
///
/// ```
/// use curvekit_core::math::sorting::joint_sort;
///
/// let mut keys = [3.0, 1.0, 2.0];
/// let mut values = ["c", "a", "b"];
/// joint_sort(&mut keys, &mut values).unwrap();
/// assert_eq!(keys, [1.0, 2.0, 3.0]);
/// assert_eq!(values, ["a", "b", "c"]);
/// ```
pub fn joint_sort<K: PartialOrd + Copy, V>(keys: &mut [K], values: &mut [V]) -> Result<(), SortError> {
    if keys.len() != values.len() {
        return Err(SortError::LengthMismatch {
            keys: keys.len(),
            values: values.len(),
        });
    }

    let mut stack = [(0usize, 0usize); usize::BITS as usize];
    let mut top = 0;
    let (mut lo, mut hi) = (0, keys.len());

    loop {
        if hi - lo <= INSERTION_THRESHOLD {
            insertion_sort(&mut keys[lo..hi], &mut values[lo..hi]);
            if top == 0 {
                break;
            }
            top -= 1;
            (lo, hi) = stack[top];
            continue;
        }

        let last = hi - 1;
        swap_both(keys, values, lo + (hi - lo) / 2, lo + 1);
        if keys[lo] > keys[last] {
            swap_both(keys, values, lo, last);
        }
        if keys[lo + 1] > keys[last] {
            swap_both(keys, values, lo + 1, last);
        }
        if keys[lo] > keys[lo + 1] {
            swap_both(keys, values, lo, lo + 1);
        }

        // keys[lo + 1] holds the pivot and is not touched until placed
        let pivot = keys[lo + 1];
        let mut i = lo + 1;
        let mut j = last;
        loop {
            i += 1;
            while i < last && keys[i] < pivot {
                i += 1;
            }
            j -= 1;
            while keys[j] > pivot {
                j -= 1;
            }
            if j < i {
                break;
            }
            swap_both(keys, values, i, j);
        }
        swap_both(keys, values, lo + 1, j);

        let (left, right) = ((lo, j), (i, hi));
        if right.1 - right.0 >= left.1 - left.0 {
            stack[top] = right;
            (lo, hi) = left;
        } else {
            stack[top] = left;
            (lo, hi) = right;
        }
        top += 1;
    }

    Ok(())
}

/// Jointly sorts two vectors by the contents of `keys`.
///
/// Both vectors become private (and dirty) before sorting, so other views
/// of their storage are unaffected.
///
/// # Errors
///
/// * [`SortError::LengthMismatch`] - the vectors differ in length
/// * [`SortError::Vector`] - private storage could not be allocated
pub fn joint_sort_vectors(keys: &mut Vector, values: &mut Vector) -> Result<(), SortError> {
    if keys.len() != values.len() {
        return Err(SortError::LengthMismatch {
            keys: keys.len(),
            values: values.len(),
        });
    }
    let keys = keys.data_for_write(None)?;
    let values = values.data_for_write(None)?;
    joint_sort(keys, values)
}

#[inline]
fn swap_both<K, V>(keys: &mut [K], values: &mut [V], i: usize, j: usize) {
    keys.swap(i, j);
    values.swap(i, j);
}

fn insertion_sort<K: PartialOrd + Copy, V>(keys: &mut [K], values: &mut [V]) {
    for i in 1..keys.len() {
        let mut j = i;
        while j > 0 && keys[j - 1] > keys[j] {
            swap_both(keys, values, j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn is_sorted(keys: &[f64]) -> bool {
        keys.windows(2).all(|w| w[0] <= w[1])
    }

    /// Sorts and checks every original (key, value) pair survives.
    fn check_pairs(keys: Vec<f64>) {
        let mut sorted_keys = keys.clone();
        let mut indices: Vec<usize> = (0..keys.len()).collect();
        joint_sort(&mut sorted_keys, &mut indices).unwrap();
        assert!(is_sorted(&sorted_keys), "not sorted: {:?}", sorted_keys);
        for (k, &idx) in sorted_keys.iter().zip(indices.iter()) {
            assert_eq!(*k, keys[idx]);
        }
        let mut seen = indices.clone();
        seen.sort_unstable();
        assert_eq!(seen, (0..keys.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_small_inputs() {
        check_pairs(vec![]);
        check_pairs(vec![1.0]);
        check_pairs(vec![2.0, 1.0]);
        check_pairs(vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_random_inputs() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in [8, 9, 31, 100, 1000, 5000] {
            let keys: Vec<f64> = (0..n).map(|_| rng.gen_range(-100.0..100.0)).collect();
            check_pairs(keys);
        }
    }

    #[test]
    fn test_presorted_and_reversed() {
        let ascending: Vec<f64> = (0..500).map(|i| i as f64).collect();
        check_pairs(ascending.clone());
        check_pairs(ascending.into_iter().rev().collect());
    }

    #[test]
    fn test_many_duplicates() {
        let keys: Vec<f64> = (0..400).map(|i| (i % 3) as f64).collect();
        check_pairs(keys);
        check_pairs(vec![5.0; 64]);
    }

    #[test]
    fn test_values_follow_keys() {
        let mut keys = vec![0.3, 0.1, 0.2, 0.9, 0.5, 0.7, 0.8, 0.4, 0.6, 0.0];
        let mut values: Vec<f64> = keys.iter().map(|k| k * 10.0).collect();
        joint_sort(&mut keys, &mut values).unwrap();
        for (k, v) in keys.iter().zip(values.iter()) {
            assert_eq!(k * 10.0, *v);
        }
    }

    #[test]
    fn test_nan_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut keys: Vec<f64> = (0..200)
            .map(|i| if i % 13 == 0 { f64::NAN } else { rng.gen::<f64>() })
            .collect();
        let mut values: Vec<usize> = (0..200).collect();
        joint_sort(&mut keys, &mut values).unwrap();
        let mut seen = values.clone();
        seen.sort_unstable();
        assert_eq!(seen, (0..200).collect::<Vec<_>>());
    }

    #[test]
    fn test_length_mismatch() {
        let mut keys = [1.0, 2.0];
        let mut values = [1.0];
        assert_eq!(
            joint_sort(&mut keys, &mut values).unwrap_err(),
            SortError::LengthMismatch { keys: 2, values: 1 }
        );
    }

    #[test]
    fn test_vectors_copy_on_write() {
        let mut keys = Vector::from_slice(&[3.0, 1.0, 2.0]).unwrap();
        let mut values = Vector::from_slice(&[30.0, 10.0, 20.0]).unwrap();
        let keys_before = keys.clone();

        joint_sort_vectors(&mut keys, &mut values).unwrap();

        assert_eq!(keys.as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(values.as_slice(), &[10.0, 20.0, 30.0]);
        assert_eq!(keys_before.as_slice(), &[3.0, 1.0, 2.0]);
        assert!(keys.is_dirty());
        assert!(values.is_dirty());
    }

    #[test]
    fn test_vectors_length_mismatch() {
        let mut keys = Vector::from_slice(&[1.0, 2.0]).unwrap();
        let mut values = Vector::from_slice(&[1.0]).unwrap();
        assert!(matches!(
            joint_sort_vectors(&mut keys, &mut values),
            Err(SortError::LengthMismatch { keys: 2, values: 1 })
        ));
    }
}
