// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Element-wise column arithmetic.
//!
//! The column/column variants require equal lengths and fail with
//! [`Error::LengthMismatch`] otherwise; the column/scalar variants cannot fail.

use nanoframe_type::{Error, Result};
use tracing::warn;

/// Replaces every `target[i]` with `f(&target[i], &source[i])`.
pub fn transform<'t, T, S, F>(target: &'t mut [T], source: &[S], mut f: F) -> Result<&'t mut [T]>
where
	F: FnMut(&T, &S) -> T,
{
	check_lengths(target.len(), source.len())?;

	for (t, s) in target.iter_mut().zip(source) {
		let value = f(t, s);
		*t = value;
	}

	Ok(target)
}

/// Returns a new column holding `f(&target[i], &source[i])`.
pub fn transformed<T, S, F>(target: &[T], source: &[S], mut f: F) -> Result<Vec<T>>
where
	F: FnMut(&T, &S) -> T,
{
	check_lengths(target.len(), source.len())?;
	Ok(target.iter().zip(source).map(|(t, s)| f(t, s)).collect())
}

/// Replaces every `target[i]` with `f(&target[i], value)`.
pub fn transform_scalar<'t, T, V, F>(target: &'t mut [T], value: &V, mut f: F) -> &'t mut [T]
where
	F: FnMut(&T, &V) -> T,
{
	for t in target.iter_mut() {
		let next = f(t, value);
		*t = next;
	}
	target
}

pub fn transformed_scalar<T, V, F>(target: &[T], value: &V, mut f: F) -> Vec<T>
where
	F: FnMut(&T, &V) -> T,
{
	target.iter().map(|t| f(t, value)).collect()
}

fn check_lengths(left: usize, right: usize) -> Result<()> {
	if left != right {
		warn!(left, right, "column size mismatch in transform");
		return Err(Error::LengthMismatch {
			left,
			right,
		});
	}
	Ok(())
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_transform_in_place() {
		let mut price = vec![10.0, 20.0, 30.0];
		let quantity = vec![2, 0, 1];

		transform(&mut price, &quantity, |p, q| p * f64::from(*q)).unwrap();
		assert_eq!(price, vec![20.0, 0.0, 30.0]);
	}

	#[test]
	fn test_transform_returns_target_for_chaining() {
		let mut a = vec![1, 2, 3];
		let b = vec![10, 20, 30];

		let out = transform(&mut a, &b, |x, y| x + y).unwrap();
		out[0] = 0;
		assert_eq!(a, vec![0, 22, 33]);
	}

	#[test]
	fn test_transform_length_mismatch() {
		let mut a = vec![1, 2, 3];
		let b = vec![1, 2, 3, 4];

		let err = transform(&mut a, &b, |x, y| x + y).unwrap_err();
		assert_eq!(
			err,
			Error::LengthMismatch {
				left: 3,
				right: 4
			}
		);
		// target is untouched on failure
		assert_eq!(a, vec![1, 2, 3]);
	}

	#[test]
	fn test_transformed_leaves_input() {
		let names = vec!["a".to_string(), "b".to_string()];
		let suffix = vec!["1", "2"];

		let joined = transformed(&names, &suffix, |n, s| format!("{n}{s}")).unwrap();
		assert_eq!(joined, vec!["a1", "b2"]);
		assert_eq!(names, vec!["a", "b"]);

		assert!(matches!(
			transformed(&names, &suffix[..1], |n, _| n.clone()),
			Err(Error::LengthMismatch {
				left: 2,
				right: 1
			})
		));
	}

	#[test]
	fn test_scalar_variants() {
		let mut values = vec![1, 2, 3];
		transform_scalar(&mut values, &10, |v, s| v * s);
		assert_eq!(values, vec![10, 20, 30]);

		let shifted = transformed_scalar(&values, &1, |v, s| v - s);
		assert_eq!(shifted, vec![9, 19, 29]);
		assert_eq!(values, vec![10, 20, 30]);

		let mut empty: Vec<i32> = Vec::new();
		assert!(transform_scalar(&mut empty, &1, |v, s| v + s).is_empty());
	}
}
