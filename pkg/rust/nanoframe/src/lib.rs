// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! A minimal dataframe toolkit.
//!
//! A frame is a host struct whose fields are parallel [`Column`]s. nanoframe does not own
//! the frame; it provides:
//! - [`Index`], a sort-based grouping of row positions by a key, with [`Index::merge`]
//!   handing each group of equal keys to a callback
//! - [`columns!`] and [`tuple`], which apply one operation to every column of a frame
//! - [`transform`] and [`filter`], element-wise primitives to write such operations with
//! - [`Symbol`], interned strings for compact key columns
//!
//! ```ignore
//! symbol_tag!(pub City);
//!
//! struct Weather {
//!     city: Column<Symbol<City>>,
//!     temp: Column<f64>,
//! }
//!
//! let index = Index::<u32>::new(weather.city.len(), |i| weather.city[i])?;
//! index.merge(|group| {
//!     let mean = group.iter().map(|i| weather.temp[i]).sum::<f64>() / group.len() as f64;
//!     means.push((weather.city[group.head()], mean));
//! });
//! ```

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use nanoframe_column::{Visit, VisitMut, VisitWith, Zip, columns, tuple};
pub use nanoframe_core::{
	GroupRange, Groups, Index, IndexConfig, Rows, SortMode, filter, transform, transform_scalar, transformed,
	transformed_scalar,
};
pub use nanoframe_type::{Column, Error, Ordinal, Result, Symbol, SymbolTable, SymbolTag, symbol_tag};
