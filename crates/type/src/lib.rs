// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Shared types for nanoframe.
//!
//! This crate provides:
//! - the [`Error`] type returned by the size-checked parts of the toolkit
//! - [`Ordinal`], the unsigned integer abstraction used for row positions and symbol ids
//! - [`Symbol`], tag-scoped string interning for compact, orderable key columns

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
mod ordinal;
pub mod symbol;

pub use error::{Error, Result};
pub use ordinal::Ordinal;
pub use symbol::{Symbol, SymbolTable, SymbolTag};

/// A dataframe column. Columns are plain vectors owned by the host program.
pub type Column<T> = Vec<T>;
