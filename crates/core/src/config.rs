// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// How rows with equal keys are ordered inside a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
	/// Ties end up in whatever order the sort leaves them.
	#[default]
	Unstable,
	/// Ties keep their original row order, so every group head is the smallest row of its group.
	Stable,
}

/// Configuration for building an [`Index`](crate::Index)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexConfig {
	pub sort: SortMode,
}

impl IndexConfig {
	pub fn new(sort: SortMode) -> Self {
		Self {
			sort,
		}
	}
}
