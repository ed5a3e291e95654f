// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Grouping index benchmarks for nanoframe.

use std::{hint::black_box, time::Duration};

use criterion::{
	BenchmarkGroup, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main, measurement::WallTime,
};
use nanoframe::{Column, Index, IndexConfig, SortMode, Symbol, Zip, columns, filter};
use nanoframe_benches::{Ticker, Trades, generate_trades};

const SIZES: [usize; 3] = [1_000, 100_000, 1_000_000];

columns! {
	struct TradeColumns for Trades {
		ticker: Column<Symbol<Ticker>>,
		day: Column<u32>,
		price: Column<f64>,
	}
}

struct Take<'a>(&'a [u32]);

impl<T: Clone> Zip<Column<T>> for Take<'_> {
	fn zip(&mut self, left: &mut Column<T>, right: &Column<T>) {
		*left = filter(right, self.0);
	}
}

/// Configure benchmark group with stable measurement settings.
fn configure_group(group: &mut BenchmarkGroup<WallTime>) {
	group.measurement_time(Duration::from_secs(10));
	group.warm_up_time(Duration::from_secs(3));
	group.sample_size(50);
	group.noise_threshold(0.03);
	group.confidence_level(0.99);
}

fn benchmark_index_build(c: &mut Criterion) {
	let mut group = c.benchmark_group("index_build");
	configure_group(&mut group);

	for size in SIZES.iter() {
		let trades = generate_trades(*size, 500);
		group.throughput(Throughput::Elements(*size as u64));

		for (name, sort) in [("unstable", SortMode::Unstable), ("stable", SortMode::Stable)] {
			group.bench_with_input(BenchmarkId::new(name, size), &trades, |b, trades| {
				b.iter(|| {
					let index = Index::<u32>::with_config(
						trades.ticker.len(),
						IndexConfig::new(sort),
						|i| (trades.ticker[i], trades.day[i]),
					);
					black_box(index)
				});
			});
		}
	}

	group.finish();
}

fn benchmark_merge_mean(c: &mut Criterion) {
	let mut group = c.benchmark_group("merge_mean");
	configure_group(&mut group);

	for size in SIZES.iter() {
		let trades = generate_trades(*size, 500);
		let Ok(index) = Index::<u32>::new(trades.ticker.len(), |i| trades.ticker[i]) else {
			continue;
		};
		let groups = index.group_count();
		group.throughput(Throughput::Elements(*size as u64));

		group.bench_with_input(BenchmarkId::new("mean", size), &trades, |b, trades| {
			b.iter(|| {
				let mut means = Vec::with_capacity(groups);
				index.merge(|group| {
					let sum: f64 = group.iter().map(|i| trades.price[i]).sum();
					means.push(sum / group.len() as f64);
				});
				black_box(means)
			});
		});
	}

	group.finish();
}

fn benchmark_first_per_group(c: &mut Criterion) {
	let mut group = c.benchmark_group("first_per_group");
	configure_group(&mut group);

	for size in SIZES.iter() {
		let trades = generate_trades(*size, 500);
		let Ok(index) = Index::<u32>::new(trades.ticker.len(), |i| (trades.ticker[i], trades.day[i])) else {
			continue;
		};
		group.throughput(Throughput::Elements(*size as u64));

		group.bench_with_input(BenchmarkId::new("combine", size), &trades, |b, trades| {
			b.iter(|| {
				let heads = index.indexes();
				let mut firsts = Trades::default();
				TradeColumns::combine(&mut firsts, trades, Take(&heads));
				black_box(firsts)
			});
		});
	}

	group.finish();
}

criterion_group!(benches, benchmark_index_build, benchmark_merge_mean, benchmark_first_per_group);
criterion_main!(benches);
