// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::result;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	/// Two columns combined element-wise have different lengths.
	#[error("column size mismatch in transform: {left} != {right}")]
	LengthMismatch {
		left: usize,
		right: usize,
	},

	/// The row count does not fit the ordinal type chosen for row positions.
	#[error("{rows} rows exceed the largest representable row index {max}")]
	RowIndexOverflow {
		rows: usize,
		max: usize,
	},

	#[error("symbol table `{tag}` is full ({capacity} symbols)")]
	SymbolOverflow {
		tag: &'static str,
		capacity: usize,
	},
}

pub type Result<T> = result::Result<T, Error>;
