// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Reads one column.
pub trait Visit<C: ?Sized> {
	fn visit(&mut self, column: &C);
}

impl<C: ?Sized, F: FnMut(&C)> Visit<C> for F {
	fn visit(&mut self, column: &C) {
		self(column)
	}
}

/// Mutates one column.
pub trait VisitMut<C: ?Sized> {
	fn visit_mut(&mut self, column: &mut C);
}

impl<C: ?Sized, F: FnMut(&mut C)> VisitMut<C> for F {
	fn visit_mut(&mut self, column: &mut C) {
		self(column)
	}
}

/// Reads one column together with arguments specific to that column.
pub trait VisitWith<C: ?Sized, P> {
	fn visit_with(&mut self, column: &C, params: P);
}

impl<C: ?Sized, P, F: FnMut(&C, P)> VisitWith<C, P> for F {
	fn visit_with(&mut self, column: &C, params: P) {
		self(column, params)
	}
}

/// Combines a column of one table with the matching column of another.
pub trait Zip<A: ?Sized, B: ?Sized = A> {
	fn zip(&mut self, left: &mut A, right: &B);
}

impl<A: ?Sized, B: ?Sized, F: FnMut(&mut A, &B)> Zip<A, B> for F {
	fn zip(&mut self, left: &mut A, right: &B) {
		self(left, right)
	}
}
