// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{cmp::Ordering, result};

use nanoframe_type::{Error, Ordinal, Result};
use tracing::{debug, instrument};

use crate::{
	config::{IndexConfig, SortMode},
	group::{GroupRange, Groups},
};

/// A grouping index over `n` rows.
///
/// `permutation` holds the row positions sorted by key, so rows with equal keys are
/// contiguous. `group_start` is aligned to sorted positions: `group_start[p]` is the row
/// that leads the run containing sorted position `p`.
///
/// The index owns both arrays and keeps no reference to the key function or to the row
/// data it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index<I: Ordinal = u32> {
	permutation: Vec<I>,
	group_start: Vec<I>,
}

impl<I: Ordinal> Index<I> {
	/// Builds an index over `rows` rows with the default [`IndexConfig`].
	///
	/// `key` maps a row position to its grouping key. Keys must form a strict weak ordering
	/// under `<`; a key that does not (e.g. a float `NaN`) gives an unspecified grouping
	/// and may make the sort panic.
	pub fn new<K, F>(rows: usize, key: F) -> Result<Self>
	where
		F: FnMut(usize) -> K,
		K: PartialOrd,
	{
		Self::with_config(rows, IndexConfig::default(), key)
	}

	#[instrument(name = "core::index::new", level = "trace", skip(key))]
	pub fn with_config<K, F>(rows: usize, config: IndexConfig, mut key: F) -> Result<Self>
	where
		F: FnMut(usize) -> K,
		K: PartialOrd,
	{
		if rows > 0 && I::from_usize(rows - 1).is_none() {
			return Err(Error::RowIndexOverflow {
				rows,
				max: I::max_usize(),
			});
		}

		let mut permutation: Vec<I> = (0..rows).filter_map(I::from_usize).collect();

		match config.sort {
			SortMode::Unstable => permutation.sort_unstable_by(|&a, &b| compare(&mut key, a, b)),
			SortMode::Stable => permutation.sort_by(|&a, &b| compare(&mut key, a, b)),
		}

		let mut group_start = Vec::with_capacity(rows);
		let mut groups = 0usize;

		if let Some(&first) = permutation.first() {
			let mut head = first;
			let mut head_key = key(first.to_usize());
			group_start.push(head);
			groups = 1;

			for &row in &permutation[1..] {
				let row_key = key(row.to_usize());
				if head_key != row_key {
					head = row;
					head_key = row_key;
					groups += 1;
				}
				group_start.push(head);
			}
		}

		debug!(rows, groups, "built grouping index");

		Ok(Self {
			permutation,
			group_start,
		})
	}

	pub fn len(&self) -> usize {
		self.permutation.len()
	}

	pub fn is_empty(&self) -> bool {
		self.permutation.is_empty()
	}

	/// Row positions in key order.
	pub fn permutation(&self) -> &[I] {
		&self.permutation
	}

	/// For every sorted position, the leading row of its group.
	pub fn group_start(&self) -> &[I] {
		&self.group_start
	}

	pub fn groups(&self) -> Groups<'_, I> {
		Groups::new(&self.permutation, &self.group_start)
	}

	pub fn group_count(&self) -> usize {
		self.groups().count()
	}

	/// Calls `on_group` once per group, in sorted order.
	///
	/// Every row is visited by exactly one group. The index is left untouched, so `merge`
	/// can be chained or repeated with different callbacks.
	#[instrument(name = "core::index::merge", level = "trace", skip_all, fields(rows = self.len()))]
	pub fn merge<F>(&self, mut on_group: F) -> &Self
	where
		F: FnMut(GroupRange<'_, I>),
	{
		for group in self.groups() {
			on_group(group);
		}
		self
	}

	/// Like [`merge`](Self::merge), but stops at the first error and returns it unchanged.
	pub fn try_merge<E, F>(&self, mut on_group: F) -> result::Result<&Self, E>
	where
		F: FnMut(GroupRange<'_, I>) -> result::Result<(), E>,
	{
		for group in self.groups() {
			on_group(group)?;
		}
		Ok(self)
	}

	/// One representative row per group, in sorted order.
	pub fn indexes(&self) -> Vec<I> {
		let mut result = self.group_start.clone();
		result.dedup();
		result
	}
}

fn compare<I, K, F>(key: &mut F, a: I, b: I) -> Ordering
where
	I: Ordinal,
	F: FnMut(usize) -> K,
	K: PartialOrd,
{
	let left = key(a.to_usize());
	let right = key(b.to_usize());
	if left < right {
		Ordering::Less
	} else if right < left {
		Ordering::Greater
	} else {
		Ordering::Equal
	}
}
