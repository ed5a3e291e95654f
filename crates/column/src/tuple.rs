// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The tuple form: a tuple of columns is the table, element `i` is column `i`.
//!
//! Implemented for tuples of 1 to 12 columns. Per-column function and parameter lists
//! are tuples as well, so a length mismatch is a compile error.

use crate::{Visit, VisitMut, VisitWith, Zip};

pub trait Apply<F> {
	fn apply(&self, f: &mut F);
}

pub trait ApplyMut<F> {
	fn apply_mut(&mut self, f: &mut F);
}

pub trait ForEach<Fs> {
	fn for_each(&self, functions: Fs);
}

pub trait ForEachMut<Fs> {
	fn for_each_mut(&mut self, functions: Fs);
}

pub trait ForEachWith<F, Ps> {
	fn for_each_with(&self, f: &mut F, params: Ps);
}

pub trait Combine<Rhs, F> {
	fn combine(&mut self, other: &Rhs, f: &mut F);
}

/// Calls `f` on every column.
pub fn apply<T: Apply<F>, F>(columns: &T, mut f: F) {
	columns.apply(&mut f);
}

pub fn apply_mut<T: ApplyMut<F>, F>(columns: &mut T, mut f: F) {
	columns.apply_mut(&mut f);
}

/// Calls `functions.i` on column `i`.
pub fn for_each<T: ForEach<Fs>, Fs>(columns: &T, functions: Fs) {
	columns.for_each(functions);
}

pub fn for_each_mut<T: ForEachMut<Fs>, Fs>(columns: &mut T, functions: Fs) {
	columns.for_each_mut(functions);
}

/// Calls `f(column_i, params.i)` on every column.
pub fn for_each_with<T: ForEachWith<F, Ps>, F, Ps>(columns: &T, mut f: F, params: Ps) {
	columns.for_each_with(&mut f, params);
}

/// Calls `f(left_i, right_i)` on every pair of matching columns.
pub fn combine<L: Combine<R, F>, R, F>(left: &mut L, right: &R, mut f: F) {
	left.combine(right, &mut f);
}

macro_rules! impl_tuple {
	($($idx:tt: $col:ident $rhs:ident $func:ident $param:ident),+) => {
		impl<F, $($col),+> Apply<F> for ($($col,)+)
		where
			F: $(Visit<$col> +)+
		{
			fn apply(&self, f: &mut F) {
				$(<F as Visit<$col>>::visit(f, &self.$idx);)+
			}
		}

		impl<F, $($col),+> ApplyMut<F> for ($($col,)+)
		where
			F: $(VisitMut<$col> +)+
		{
			fn apply_mut(&mut self, f: &mut F) {
				$(<F as VisitMut<$col>>::visit_mut(f, &mut self.$idx);)+
			}
		}

		impl<$($col, $func),+> ForEach<($($func,)+)> for ($($col,)+)
		where
			$($func: FnMut(&$col),)+
		{
			fn for_each(&self, mut functions: ($($func,)+)) {
				$((functions.$idx)(&self.$idx);)+
			}
		}

		impl<$($col, $func),+> ForEachMut<($($func,)+)> for ($($col,)+)
		where
			$($func: FnMut(&mut $col),)+
		{
			fn for_each_mut(&mut self, mut functions: ($($func,)+)) {
				$((functions.$idx)(&mut self.$idx);)+
			}
		}

		impl<F, $($col, $param),+> ForEachWith<F, ($($param,)+)> for ($($col,)+)
		where
			F: $(VisitWith<$col, $param> +)+
		{
			fn for_each_with(&self, f: &mut F, params: ($($param,)+)) {
				$(<F as VisitWith<$col, $param>>::visit_with(f, &self.$idx, params.$idx);)+
			}
		}

		impl<F, $($col, $rhs),+> Combine<($($rhs,)+), F> for ($($col,)+)
		where
			F: $(Zip<$col, $rhs> +)+
		{
			fn combine(&mut self, other: &($($rhs,)+), f: &mut F) {
				$(<F as Zip<$col, $rhs>>::zip(f, &mut self.$idx, &other.$idx);)+
			}
		}
	};
}

impl_tuple!(0: C0 R0 F0 P0);
impl_tuple!(0: C0 R0 F0 P0, 1: C1 R1 F1 P1);
impl_tuple!(0: C0 R0 F0 P0, 1: C1 R1 F1 P1, 2: C2 R2 F2 P2);
impl_tuple!(0: C0 R0 F0 P0, 1: C1 R1 F1 P1, 2: C2 R2 F2 P2, 3: C3 R3 F3 P3);
impl_tuple!(0: C0 R0 F0 P0, 1: C1 R1 F1 P1, 2: C2 R2 F2 P2, 3: C3 R3 F3 P3, 4: C4 R4 F4 P4);
impl_tuple!(0: C0 R0 F0 P0, 1: C1 R1 F1 P1, 2: C2 R2 F2 P2, 3: C3 R3 F3 P3, 4: C4 R4 F4 P4, 5: C5 R5 F5 P5);
impl_tuple!(
	0: C0 R0 F0 P0, 1: C1 R1 F1 P1, 2: C2 R2 F2 P2, 3: C3 R3 F3 P3, 4: C4 R4 F4 P4, 5: C5 R5 F5 P5,
	6: C6 R6 F6 P6
);
impl_tuple!(
	0: C0 R0 F0 P0, 1: C1 R1 F1 P1, 2: C2 R2 F2 P2, 3: C3 R3 F3 P3, 4: C4 R4 F4 P4, 5: C5 R5 F5 P5,
	6: C6 R6 F6 P6, 7: C7 R7 F7 P7
);
impl_tuple!(
	0: C0 R0 F0 P0, 1: C1 R1 F1 P1, 2: C2 R2 F2 P2, 3: C3 R3 F3 P3, 4: C4 R4 F4 P4, 5: C5 R5 F5 P5,
	6: C6 R6 F6 P6, 7: C7 R7 F7 P7, 8: C8 R8 F8 P8
);
impl_tuple!(
	0: C0 R0 F0 P0, 1: C1 R1 F1 P1, 2: C2 R2 F2 P2, 3: C3 R3 F3 P3, 4: C4 R4 F4 P4, 5: C5 R5 F5 P5,
	6: C6 R6 F6 P6, 7: C7 R7 F7 P7, 8: C8 R8 F8 P8, 9: C9 R9 F9 P9
);
impl_tuple!(
	0: C0 R0 F0 P0, 1: C1 R1 F1 P1, 2: C2 R2 F2 P2, 3: C3 R3 F3 P3, 4: C4 R4 F4 P4, 5: C5 R5 F5 P5,
	6: C6 R6 F6 P6, 7: C7 R7 F7 P7, 8: C8 R8 F8 P8, 9: C9 R9 F9 P9, 10: C10 R10 F10 P10
);
impl_tuple!(
	0: C0 R0 F0 P0, 1: C1 R1 F1 P1, 2: C2 R2 F2 P2, 3: C3 R3 F3 P3, 4: C4 R4 F4 P4, 5: C5 R5 F5 P5,
	6: C6 R6 F6 P6, 7: C7 R7 F7 P7, 8: C8 R8 F8 P8, 9: C9 R9 F9 P9, 10: C10 R10 F10 P10,
	11: C11 R11 F11 P11
);
