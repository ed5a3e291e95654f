// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	iter::{Copied, FusedIterator, Map},
	slice,
};

use nanoframe_type::Ordinal;

/// One equal-key run of an [`Index`](crate::Index).
///
/// The range borrows the index's permutation and cannot outlive it. Rows are yielded in
/// sorted order, which is not necessarily ascending row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupRange<'a, I: Ordinal = u32> {
	head: I,
	rows: &'a [I],
}

impl<'a, I: Ordinal> GroupRange<'a, I> {
	pub(crate) fn new(head: I, rows: &'a [I]) -> Self {
		Self {
			head,
			rows,
		}
	}

	/// The representative row of this group: the first row of the run in sorted order.
	pub fn head(&self) -> usize {
		self.head.to_usize()
	}

	pub fn rows(&self) -> &'a [I] {
		self.rows
	}

	pub fn for_each<F: FnMut(usize)>(&self, mut visit: F) {
		for &row in self.rows {
			visit(row.to_usize());
		}
	}

	pub fn iter(&self) -> Rows<'a, I> {
		self.rows.iter().copied().map(I::to_usize as fn(I) -> usize)
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}

/// Row positions of a [`GroupRange`], as `usize`.
pub type Rows<'a, I> = Map<Copied<slice::Iter<'a, I>>, fn(I) -> usize>;

impl<'a, I: Ordinal> IntoIterator for GroupRange<'a, I> {
	type Item = usize;
	type IntoIter = Rows<'a, I>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Iterator over the groups of an [`Index`](crate::Index), in sorted order.
#[derive(Debug, Clone)]
pub struct Groups<'a, I: Ordinal = u32> {
	permutation: &'a [I],
	group_start: &'a [I],
	begin: usize,
}

impl<'a, I: Ordinal> Groups<'a, I> {
	pub(crate) fn new(permutation: &'a [I], group_start: &'a [I]) -> Self {
		debug_assert_eq!(permutation.len(), group_start.len());
		Self {
			permutation,
			group_start,
			begin: 0,
		}
	}
}

impl<'a, I: Ordinal> Iterator for Groups<'a, I> {
	type Item = GroupRange<'a, I>;

	fn next(&mut self) -> Option<Self::Item> {
		let head = *self.group_start.get(self.begin)?;

		// a run ends where the representative changes
		let len = self.group_start[self.begin..].iter().take_while(|&&h| h == head).count();
		let end = self.begin + len;

		let range = GroupRange::new(head, &self.permutation[self.begin..end]);
		self.begin = end;
		Some(range)
	}
}

impl<I: Ordinal> FusedIterator for Groups<'_, I> {}
