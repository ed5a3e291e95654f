// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Tag-scoped string interning.
//!
//! A [`Symbol`] is a small integer standing in for a string. Every tag type owns one
//! [`SymbolTable`]; ids are handed out in first-intern order starting at `1`, and `0` is
//! reserved for the null symbol. Symbols compare by id, which makes them cheap components
//! of composite grouping keys.
//!
//! ```ignore
//! symbol_tag!(pub Country);
//!
//! let de = Symbol::<Country>::intern("DE")?;
//! assert_eq!(de.resolve().as_deref(), Some("DE"));
//! ```

use std::{
	any::type_name,
	cmp::Ordering,
	collections::HashMap,
	fmt,
	hash::{Hash, Hasher},
	marker::PhantomData,
	result,
	sync::Arc,
};

use parking_lot::RwLock;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{Error, Ordinal, Result};

/// A marker type owning one interning table. Declare tags with [`symbol_tag!`](crate::symbol_tag).
pub trait SymbolTag: 'static {
	fn table() -> &'static SymbolTable;
}

/// Declares a zero-sized [`SymbolTag`] with its own interning table.
#[macro_export]
macro_rules! symbol_tag {
	($(#[$meta:meta])* $vis:vis $name:ident) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
		$vis struct $name;

		impl $crate::SymbolTag for $name {
			fn table() -> &'static $crate::SymbolTable {
				static TABLE: ::std::sync::LazyLock<$crate::SymbolTable> =
					::std::sync::LazyLock::new($crate::SymbolTable::new);
				&TABLE
			}
		}
	};
}

#[derive(Debug, Default)]
pub struct SymbolTable {
	inner: RwLock<Interner>,
}

#[derive(Debug, Default)]
struct Interner {
	ids: HashMap<Arc<str>, usize>,
	names: Vec<Arc<str>>,
}

impl SymbolTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the id of `name`, assigning the next free id on first sight.
	///
	/// Returns `None` without modifying the table when a new id would exceed `capacity`.
	pub fn intern(&self, name: &str, capacity: usize) -> Option<usize> {
		if let Some(&id) = self.inner.read().ids.get(name) {
			return Some(id);
		}

		let mut inner = self.inner.write();
		// another writer may have interned it between the two locks
		if let Some(&id) = inner.ids.get(name) {
			return Some(id);
		}

		let id = inner.names.len() + 1;
		if id > capacity {
			return None;
		}

		let name: Arc<str> = Arc::from(name);
		inner.names.push(name.clone());
		inner.ids.insert(name, id);
		Some(id)
	}

	pub fn lookup(&self, name: &str) -> Option<usize> {
		self.inner.read().ids.get(name).copied()
	}

	pub fn resolve(&self, id: usize) -> Option<Arc<str>> {
		let slot = id.checked_sub(1)?;
		self.inner.read().names.get(slot).cloned()
	}

	pub fn len(&self) -> usize {
		self.inner.read().names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// An interned string scoped to the tag `T`, stored as an `I`.
pub struct Symbol<T: SymbolTag, I: Ordinal = u16> {
	id: I,
	tag: PhantomData<fn() -> T>,
}

impl<T: SymbolTag, I: Ordinal> Symbol<T, I> {
	pub fn null() -> Self {
		Self {
			id: I::default(),
			tag: PhantomData,
		}
	}

	pub fn intern(name: &str) -> Result<Self> {
		let capacity = I::max_usize();
		let id = T::table().intern(name, capacity).and_then(I::from_usize).ok_or(Error::SymbolOverflow {
			tag: type_name::<T>(),
			capacity,
		})?;

		Ok(Self {
			id,
			tag: PhantomData,
		})
	}

	/// Returns the symbol for an already interned `name` without interning it.
	pub fn lookup(name: &str) -> Option<Self> {
		let id = T::table().lookup(name).and_then(I::from_usize)?;
		Some(Self {
			id,
			tag: PhantomData,
		})
	}

	pub fn id(&self) -> I {
		self.id
	}

	pub fn is_null(&self) -> bool {
		self.id.to_usize() == 0
	}

	pub fn is_defined(&self) -> bool {
		!self.is_null()
	}

	/// The interned string, or `None` for the null symbol.
	pub fn resolve(&self) -> Option<Arc<str>> {
		T::table().resolve(self.id.to_usize())
	}
}

impl<T: SymbolTag, I: Ordinal> Clone for Symbol<T, I> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: SymbolTag, I: Ordinal> Copy for Symbol<T, I> {}

impl<T: SymbolTag, I: Ordinal> Default for Symbol<T, I> {
	fn default() -> Self {
		Self::null()
	}
}

impl<T: SymbolTag, I: Ordinal> PartialEq for Symbol<T, I> {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl<T: SymbolTag, I: Ordinal> Eq for Symbol<T, I> {}

impl<T: SymbolTag, I: Ordinal> PartialOrd for Symbol<T, I> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<T: SymbolTag, I: Ordinal> Ord for Symbol<T, I> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.id.cmp(&other.id)
	}
}

impl<T: SymbolTag, I: Ordinal> Hash for Symbol<T, I> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl<T: SymbolTag, I: Ordinal> fmt::Debug for Symbol<T, I> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.resolve() {
			Some(name) => f.debug_tuple("Symbol").field(&name).finish(),
			None => f.write_str("Symbol(null)"),
		}
	}
}

impl<T: SymbolTag, I: Ordinal> TryFrom<&str> for Symbol<T, I> {
	type Error = Error;

	fn try_from(name: &str) -> Result<Self> {
		Self::intern(name)
	}
}

impl<T: SymbolTag, I: Ordinal> TryFrom<String> for Symbol<T, I> {
	type Error = Error;

	fn try_from(name: String) -> Result<Self> {
		Self::intern(&name)
	}
}

impl<T: SymbolTag, I: Ordinal> Serialize for Symbol<T, I> {
	fn serialize<S: Serializer>(&self, serializer: S) -> result::Result<S::Ok, S::Error> {
		match self.resolve() {
			Some(name) => serializer.serialize_some(&*name),
			None => serializer.serialize_none(),
		}
	}
}

impl<'de, T: SymbolTag, I: Ordinal> Deserialize<'de> for Symbol<T, I> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> result::Result<Self, D::Error> {
		match Option::<String>::deserialize(deserializer)? {
			Some(name) => Self::intern(&name).map_err(de::Error::custom),
			None => Ok(Self::null()),
		}
	}
}
