// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fmt::Debug, hash::Hash};

/// An unsigned integer used as a row position or a symbol id.
///
/// Narrow ordinals keep index arrays small; conversions from `usize` are checked,
/// conversions back are lossless for every value produced by [`Ordinal::from_usize`].
pub trait Ordinal: Copy + Ord + Hash + Debug + Default + Send + Sync + 'static {
	fn from_usize(value: usize) -> Option<Self>;

	fn to_usize(self) -> usize;

	/// The largest value of this type, saturated to `usize`.
	fn max_usize() -> usize;
}

macro_rules! impl_ordinal {
	($($t:ty),+) => {
		$(
			impl Ordinal for $t {
				#[inline]
				fn from_usize(value: usize) -> Option<Self> {
					<$t>::try_from(value).ok()
				}

				#[inline]
				fn to_usize(self) -> usize {
					self as usize
				}

				fn max_usize() -> usize {
					usize::try_from(<$t>::MAX).unwrap_or(usize::MAX)
				}
			}
		)+
	};
}

impl_ordinal!(u8, u16, u32, u64, usize);

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_from_usize_checks_width() {
		assert_eq!(u8::from_usize(255), Some(255u8));
		assert_eq!(u8::from_usize(256), None);
		assert_eq!(u16::from_usize(65_536), None);
		assert_eq!(u32::from_usize(7), Some(7u32));
	}

	#[test]
	fn test_round_trip() {
		for value in [0usize, 1, 42, 255] {
			assert_eq!(u8::from_usize(value).map(Ordinal::to_usize), Some(value));
			assert_eq!(u64::from_usize(value).map(Ordinal::to_usize), Some(value));
		}
	}

	#[test]
	fn test_max_usize() {
		assert_eq!(u8::max_usize(), 255);
		assert_eq!(u16::max_usize(), 65_535);
		assert_eq!(usize::max_usize(), usize::MAX);
	}
}
