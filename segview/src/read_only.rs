// SPDX-License-Identifier: Apache-2.0

//! Read-only facades over mutable collections. Each facade holds an optional
//! reference and behaves as an empty collection when it has none, so callers never
//! need to check for a missing source.

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};
use std::ops::Index;
use std::{fmt, ptr, slice};
use std::fmt::{Debug, Formatter};
use crate::segment::ListSegment;
use crate::source::VecSource;

/// A collection that can be counted and iterated by reference.
pub trait Collection {
	type Item;
	type Iter<'a>: Iterator<Item = &'a Self::Item> where Self: 'a;

	fn len(&self) -> usize;

	fn iter(&self) -> Self::Iter<'_>;

	fn contains(&self, item: &Self::Item) -> bool where Self::Item: PartialEq {
		self.iter().any(|v| v == item)
	}
}

macro_rules! collection {
    ($($ty:ident$(<$($param:ident),+>)? => $iter:ty),+) => {
		$(
		impl<T$($(, $param)+)?> Collection for $ty<T$($(, $param)+)?> {
			type Item = T;
			type Iter<'a> = $iter where Self: 'a;

			fn len(&self) -> usize { $ty::len(self) }

			fn iter(&self) -> Self::Iter<'_> { $ty::iter(self) }
		}
		)+
	};
}

collection! {
	VecDeque   => std::collections::vec_deque::Iter<'a, T>,
	LinkedList => std::collections::linked_list::Iter<'a, T>,
	BTreeSet   => std::collections::btree_set::Iter<'a, T>,
	HashSet<S> => std::collections::hash_set::Iter<'a, T>
}

impl<T> Collection for Vec<T> {
	type Item = T;
	type Iter<'a> = slice::Iter<'a, T> where T: 'a;

	fn len(&self) -> usize { <[T]>::len(self) }

	fn iter(&self) -> slice::Iter<'_, T> { <[T]>::iter(self) }
}

impl<T> Collection for [T] {
	type Item = T;
	type Iter<'a> = slice::Iter<'a, T> where T: 'a;

	fn len(&self) -> usize { <[T]>::len(self) }

	fn iter(&self) -> slice::Iter<'_, T> { <[T]>::iter(self) }
}

fn same<T: ?Sized>(a: Option<&T>, b: Option<&T>) -> bool {
	match (a, b) {
		(Some(a), Some(b)) => ptr::eq(a, b),
		(None, None) => true,
		_ => false
	}
}

/// A read-only view of any [`Collection`].
pub struct ReadCollection<'a, C: ?Sized>(Option<&'a C>);

impl<'a, C: Collection + ?Sized> ReadCollection<'a, C> {
	/// Wraps `collection`.
	pub fn new(collection: &'a C) -> Self { Self(Some(collection)) }

	/// Returns a facade with no collection, behaving as empty.
	pub fn absent() -> Self { Self(None) }

	/// Returns `true` if a collection is wrapped.
	pub fn has_source(&self) -> bool { self.0.is_some() }

	pub fn len(&self) -> usize { self.0.map_or(0, C::len) }

	pub fn is_empty(&self) -> bool { self.len() == 0 }

	pub fn contains(&self, item: &C::Item) -> bool where C::Item: PartialEq {
		self.0.is_some_and(|c| c.contains(item))
	}

	pub fn iter(&self) -> impl Iterator<Item = &'a C::Item> + 'a {
		self.0.into_iter().flat_map(C::iter)
	}
}

/// A read-only view of a [`Vec`].
pub struct ReadList<'a, T>(Option<&'a Vec<T>>);

impl<'a, T> ReadList<'a, T> {
	/// Wraps `list`.
	pub fn new(list: &'a Vec<T>) -> Self { Self(Some(list)) }

	/// Returns a facade with no list, behaving as empty.
	pub fn absent() -> Self { Self(None) }

	/// Returns `true` if a list is wrapped.
	pub fn has_source(&self) -> bool { self.0.is_some() }

	pub fn len(&self) -> usize { self.as_slice().len() }

	pub fn is_empty(&self) -> bool { self.as_slice().is_empty() }

	pub fn get(&self, index: usize) -> Option<&'a T> { self.as_slice().get(index) }

	pub fn first(&self) -> Option<&'a T> { self.as_slice().first() }

	pub fn last(&self) -> Option<&'a T> { self.as_slice().last() }

	pub fn contains(&self, item: &T) -> bool where T: PartialEq {
		self.as_slice().contains(item)
	}

	pub fn index_of(&self, item: &T) -> Option<usize> where T: PartialEq {
		self.as_slice().iter().position(|v| v == item)
	}

	pub fn iter(&self) -> slice::Iter<'a, T> { self.as_slice().iter() }

	/// Returns the list's elements, or an empty slice.
	pub fn as_slice(&self) -> &'a [T] {
		match self.0 {
			Some(list) => list,
			None => &[]
		}
	}

	/// Returns a segment over the whole list.
	pub fn as_segment(&self) -> ListSegment<'a, T> {
		self.0.map_or(ListSegment::EMPTY, |list| ListSegment::new(VecSource(list)))
	}
}

impl<T> Index<usize> for ReadList<'_, T> {
	type Output = T;

	fn index(&self, index: usize) -> &T { &self.as_slice()[index] }
}

/// A read-only view of a [`HashMap`].
pub struct ReadDictionary<'a, K, V, H = RandomState>(Option<&'a HashMap<K, V, H>>);

impl<'a, K: Eq + Hash, V, H: BuildHasher> ReadDictionary<'a, K, V, H> {
	/// Wraps `map`.
	pub fn new(map: &'a HashMap<K, V, H>) -> Self { Self(Some(map)) }

	/// Returns a facade with no map, behaving as empty.
	pub fn absent() -> Self { Self(None) }

	/// Returns `true` if a map is wrapped.
	pub fn has_source(&self) -> bool { self.0.is_some() }

	pub fn len(&self) -> usize { self.0.map_or(0, HashMap::len) }

	pub fn is_empty(&self) -> bool { self.len() == 0 }

	pub fn get<Q>(&self, key: &Q) -> Option<&'a V>
	where K: Borrow<Q>, Q: Hash + Eq + ?Sized {
		self.0?.get(key)
	}

	pub fn contains_key<Q>(&self, key: &Q) -> bool
	where K: Borrow<Q>, Q: Hash + Eq + ?Sized {
		self.get(key).is_some()
	}

	pub fn keys(&self) -> impl Iterator<Item = &'a K> + 'a {
		self.0.into_iter().flat_map(HashMap::keys)
	}

	pub fn values(&self) -> impl Iterator<Item = &'a V> + 'a {
		self.0.into_iter().flat_map(HashMap::values)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&'a K, &'a V)> + 'a {
		self.0.into_iter().flatten()
	}
}

/// A read-only view of a [`HashSet`].
pub struct ReadHashSet<'a, T, H = RandomState>(Option<&'a HashSet<T, H>>);

impl<'a, T: Eq + Hash, H: BuildHasher> ReadHashSet<'a, T, H> {
	/// Wraps `set`.
	pub fn new(set: &'a HashSet<T, H>) -> Self { Self(Some(set)) }

	/// Returns a facade with no set, behaving as empty.
	pub fn absent() -> Self { Self(None) }

	/// Returns `true` if a set is wrapped.
	pub fn has_source(&self) -> bool { self.0.is_some() }

	pub fn len(&self) -> usize { self.0.map_or(0, HashSet::len) }

	pub fn is_empty(&self) -> bool { self.len() == 0 }

	pub fn contains<Q>(&self, value: &Q) -> bool
	where T: Borrow<Q>, Q: Hash + Eq + ?Sized {
		self.0.is_some_and(|set| set.contains(value))
	}

	pub fn iter(&self) -> impl Iterator<Item = &'a T> + 'a {
		self.0.into_iter().flatten()
	}

	/// Returns `true` if every value in this set is in `other`.
	pub fn is_subset<G: BuildHasher>(&self, other: &ReadHashSet<'_, T, G>) -> bool {
		self.len() <= other.len() && self.iter().all(|v| other.contains(v))
	}

	/// Returns `true` if every value in `other` is in this set.
	pub fn is_superset<G: BuildHasher>(&self, other: &ReadHashSet<'_, T, G>) -> bool {
		other.is_subset(self)
	}
}

macro_rules! facade {
    ($($name:ident<$($param:ident),+>),+) => {
		$(
		impl<$($param),+> Clone for $name<'_, $($param),+> {
			fn clone(&self) -> Self { *self }
		}

		impl<$($param),+> Copy for $name<'_, $($param),+> { }

		impl<$($param),+> Default for $name<'_, $($param),+> {
			fn default() -> Self { Self(None) }
		}

		/// Facades are equal when they wrap the same collection, or are both
		/// absent.
		impl<$($param),+> PartialEq for $name<'_, $($param),+> {
			fn eq(&self, other: &Self) -> bool { same(self.0, other.0) }
		}

		impl<$($param),+> Eq for $name<'_, $($param),+> { }
		)+
	};
}

facade! {
	ReadList<T>,
	ReadDictionary<K, V, H>,
	ReadHashSet<T, H>
}

impl<C: ?Sized> Clone for ReadCollection<'_, C> {
	fn clone(&self) -> Self { *self }
}

impl<C: ?Sized> Copy for ReadCollection<'_, C> { }

impl<C: ?Sized> Default for ReadCollection<'_, C> {
	fn default() -> Self { Self(None) }
}

impl<C: ?Sized> PartialEq for ReadCollection<'_, C> {
	fn eq(&self, other: &Self) -> bool { same(self.0, other.0) }
}

impl<C: ?Sized> Eq for ReadCollection<'_, C> { }

impl<C: Debug + ?Sized> Debug for ReadCollection<'_, C> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ReadCollection").field(&self.0).finish()
	}
}

impl<T: Debug> Debug for ReadList<'_, T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ReadList").field(&self.0).finish()
	}
}

impl<K: Debug, V: Debug, H> Debug for ReadDictionary<'_, K, V, H> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ReadDictionary").field(&self.0).finish()
	}
}

impl<T: Debug, H> Debug for ReadHashSet<'_, T, H> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ReadHashSet").field(&self.0).finish()
	}
}

impl<'a, T> From<&'a Vec<T>> for ReadList<'a, T> {
	fn from(value: &'a Vec<T>) -> Self { Self::new(value) }
}

impl<'a, T> From<Option<&'a Vec<T>>> for ReadList<'a, T> {
	fn from(value: Option<&'a Vec<T>>) -> Self { Self(value) }
}

impl<'a, K, V, H> From<&'a HashMap<K, V, H>> for ReadDictionary<'a, K, V, H> {
	fn from(value: &'a HashMap<K, V, H>) -> Self { Self(Some(value)) }
}

impl<'a, T, H> From<&'a HashSet<T, H>> for ReadHashSet<'a, T, H> {
	fn from(value: &'a HashSet<T, H>) -> Self { Self(Some(value)) }
}
