// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nanoframe_type::Ordinal;

/// Copies `column[i]` for every `i` in `indexes`, in the order given.
///
/// # Panics
///
/// If an index is out of bounds for `column`.
pub fn filter<T: Clone, I: Ordinal>(column: &[T], indexes: &[I]) -> Vec<T> {
	indexes.iter().map(|&i| column[i.to_usize()].clone()).collect()
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::Index;

	#[test]
	fn test_filter_keeps_index_order() {
		let column = vec!["a", "b", "c", "d"];
		assert_eq!(filter(&column, &[3u32, 0, 2]), vec!["d", "a", "c"]);
		assert_eq!(filter(&column, &[1u8, 1]), vec!["b", "b"]);
		assert!(filter::<_, u32>(&column, &[]).is_empty());
	}

	#[test]
	fn test_filter_one_row_per_group() {
		let city = vec!["oslo", "rome", "oslo", "lima", "rome"];
		let temp = vec![3, 18, 5, 20, 21];
		let index = Index::<u32>::new(city.len(), |i| city[i]).unwrap();

		let heads = index.indexes();
		let mut cities = filter(&city, &heads);
		cities.sort_unstable();
		assert_eq!(cities, vec!["lima", "oslo", "rome"]);
		assert_eq!(filter(&temp, &heads).len(), 3);
	}

	#[test]
	#[should_panic(expected = "index out of bounds")]
	fn test_filter_out_of_bounds() {
		filter(&[1, 2, 3], &[3u32]);
	}
}
