// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Benchmark utilities for nanoframe.
//!
//! Run benchmarks with: `cargo bench -p nanoframe-benches`

use nanoframe::{Column, Symbol, symbol_tag};
use rand::{Rng, SeedableRng, rngs::StdRng};

symbol_tag!(pub Ticker);

/// A trade log used as benchmark input.
#[derive(Debug, Clone, Default)]
pub struct Trades {
	pub ticker: Column<Symbol<Ticker>>,
	pub day: Column<u32>,
	pub price: Column<f64>,
}

/// Generates `rows` trades over `tickers` distinct tickers and 250 days.
///
/// The generator is seeded, so repeated runs measure the same input.
pub fn generate_trades(rows: usize, tickers: usize) -> Trades {
	let names: Vec<Symbol<Ticker>> =
		(0..tickers).filter_map(|i| Symbol::intern(&format!("T{i:04}")).ok()).collect();

	let mut rng = StdRng::seed_from_u64(42);
	let mut result = Trades::default();
	for _ in 0..rows {
		result.ticker.push(names[rng.random_range(0..names.len())]);
		result.day.push(rng.random_range(0..250));
		result.price.push(rng.random_range(1.0..500.0));
	}
	result
}
