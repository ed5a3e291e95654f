// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// Declares a column set over named fields of a host struct.
///
/// The generated unit struct carries the operations as associated functions. Field `i` of
/// the list is column `i`: per-column function and parameter arguments follow the list
/// order.
///
/// ```ignore
/// columns! {
///     pub struct TradeColumns for Trades {
///         symbol: Vec<Symbol<Ticker>>,
///         price: Vec<f64>,
///     }
/// }
///
/// TradeColumns::for_each(&trades, |s| println!("{}", s.len()), |p| println!("{}", p.len()));
/// ```
#[macro_export]
macro_rules! columns {
	(
		$(#[$meta:meta])*
		$vis:vis struct $name:ident for $frame:ty {
			$($field:ident: $col:ty),+ $(,)?
		}
	) => {
		$crate::__private::paste! {
			$(#[$meta])*
			#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
			$vis struct $name;

			#[allow(dead_code)]
			impl $name {
				/// Field names, in column order.
				pub const NAMES: &'static [&'static str] = &[$(stringify!($field)),+];

				pub const ARITY: usize = Self::NAMES.len();

				/// Calls `f` on every column.
				pub fn apply<F>(frame: &$frame, mut f: F)
				where
					F: $($crate::Visit<$col> +)+
				{
					$(<F as $crate::Visit<$col>>::visit(&mut f, &frame.$field);)+
				}

				pub fn apply_mut<F>(frame: &mut $frame, mut f: F)
				where
					F: $($crate::VisitMut<$col> +)+
				{
					$(<F as $crate::VisitMut<$col>>::visit_mut(&mut f, &mut frame.$field);)+
				}

				/// Calls one function per column, in field order.
				#[allow(clippy::too_many_arguments)]
				pub fn for_each<$([<F $field:camel>]),+>(frame: &$frame, $(mut [<f_ $field>]: [<F $field:camel>]),+)
				where
					$([<F $field:camel>]: FnMut(&$col),)+
				{
					$([<f_ $field>](&frame.$field);)+
				}

				#[allow(clippy::too_many_arguments)]
				pub fn for_each_mut<$([<F $field:camel>]),+>(frame: &mut $frame, $(mut [<f_ $field>]: [<F $field:camel>]),+)
				where
					$([<F $field:camel>]: FnMut(&mut $col),)+
				{
					$([<f_ $field>](&mut frame.$field);)+
				}

				/// Calls `f(column, param)` on every column with the parameter given for it.
				#[allow(clippy::too_many_arguments)]
				pub fn for_each_with<F, $([<P $field:camel>]),+>(frame: &$frame, mut f: F, $([<p_ $field>]: [<P $field:camel>]),+)
				where
					F: $($crate::VisitWith<$col, [<P $field:camel>]> +)+
				{
					$(<F as $crate::VisitWith<$col, [<P $field:camel>]>>::visit_with(&mut f, &frame.$field, [<p_ $field>]);)+
				}

				/// Calls `f(left.column, right.column)` on every pair of matching columns.
				pub fn combine<F>(left: &mut $frame, right: &$frame, mut f: F)
				where
					F: $($crate::Zip<$col> +)+
				{
					$(<F as $crate::Zip<$col>>::zip(&mut f, &mut left.$field, &right.$field);)+
				}
			}
		}
	};
}
