// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Grouping and summarizing primitives over host-owned columns.
//!
//! An [`Index`] sorts row positions by a caller-supplied key and records, for every sorted
//! position, the leading row of its equal-key run. [`Index::merge`] then hands each run to
//! a callback as a [`GroupRange`], and [`Index::indexes`] collapses the runs into one
//! representative row per group, ready for [`filter`].

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod config;
mod filter;
mod group;
mod index;
mod transform;

pub use config::{IndexConfig, SortMode};
pub use filter::filter;
pub use group::{GroupRange, Groups, Rows};
pub use index::Index;
pub use nanoframe_type::{Column, Error, Ordinal, Result};
pub use transform::{transform, transform_scalar, transformed, transformed_scalar};
