// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Column sets: do the same thing to every column of a table.
//!
//! A table is any host type holding parallel columns of different element types. Instead
//! of erasing the columns behind a common runtime interface, the list of columns is fixed
//! at compile time and every operation is instantiated once per concrete column type.
//!
//! Two equivalent forms are provided:
//! - the field-list form, [`columns!`], declares a column set over named fields of a struct
//! - the tuple form, [`tuple`], treats a tuple of columns as the table
//!
//! Both expose `apply`, `apply_mut`, `for_each`, `for_each_mut`, `for_each_with` and
//! `combine`. Per-column behaviour is expressed through the [`Visit`], [`VisitMut`],
//! [`VisitWith`] and [`Zip`] traits; closures implement them for one column type, visitor
//! structs implement them for several.
//!
//! ```ignore
//! struct Prices {
//!     day: Vec<u32>,
//!     close: Vec<f64>,
//! }
//!
//! columns! {
//!     struct PriceColumns for Prices {
//!         day: Vec<u32>,
//!         close: Vec<f64>,
//!     }
//! }
//!
//! // append one table onto another
//! PriceColumns::combine(&mut all, &today, Append);
//! ```

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod macros;
pub mod tuple;
mod visit;

pub use visit::{Visit, VisitMut, VisitWith, Zip};

#[doc(hidden)]
pub mod __private {
	pub use paste::paste;
}
