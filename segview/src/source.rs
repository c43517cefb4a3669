// SPDX-License-Identifier: Apache-2.0

//! Backing-store adapters. A [`Source`] gives uniform length and indexed access to
//! one backing store, so that [`Segment`](crate::Segment) is written once for all
//! of them.

use std::collections::VecDeque;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::mem;
use std::rc::Rc;
use std::sync::Arc;

/// The identity of a backing store: its address and extent in bytes. Two adapters
/// with the same identity view the same store, regardless of content.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct SourceId {
	addr: usize,
	extent: usize,
}

impl SourceId {
	/// Returns the identity of the value behind `value`.
	pub fn of<T: ?Sized>(value: &T) -> Self {
		Self {
			addr: value as *const T as *const () as usize,
			extent: mem::size_of_val(value),
		}
	}

	/// Returns the address.
	pub fn addr(&self) -> usize { self.addr }
	/// Returns the extent, in bytes.
	pub fn extent(&self) -> usize { self.extent }
}

/// A random-access backing store for segments.
///
/// Implementations wrap exactly one store by reference or shared handle, and are
/// cheap to clone. Equality between adapters is store identity, returned by
/// [`id`](Self::id), not content.
///
/// # Examples
///
/// ```
/// use segview::{Segment, Source, SourceId};
///
/// #[derive(Clone)]
/// struct Squares<'a>(&'a [u64; 4]);
///
/// impl Source for Squares<'_> {
/// 	type Item = u64;
///
/// 	fn len(&self) -> usize { 4 }
///
/// 	fn get(&self, index: usize) -> Option<&u64> { self.0.get(index) }
///
/// 	fn id(&self) -> SourceId { SourceId::of(self.0) }
/// }
///
/// let squares = [0, 1, 4, 9];
/// let segment = Segment::new(Squares(&squares)).skip(1).unwrap();
/// assert_eq!(segment.to_vec(), [1, 4, 9]);
/// ```
pub trait Source: Clone {
	/// The element type.
	type Item;

	/// Returns the number of elements in the store.
	fn len(&self) -> usize;

	/// Returns `true` if the store has no elements.
	fn is_empty(&self) -> bool { self.len() == 0 }

	/// Returns the element at absolute `index`, or `None` if out of bounds.
	fn get(&self, index: usize) -> Option<&Self::Item>;

	/// Returns the identity of the wrapped store.
	fn id(&self) -> SourceId;

	/// Returns the store as a contiguous slice, if it is one.
	fn as_slice(&self) -> Option<&[Self::Item]> { None }
}

/// A raw contiguous array.
#[derive(Debug)]
pub struct SliceSource<'a, T>(pub &'a [T]);

/// A growable list. The list itself is the identity, not its current buffer.
#[derive(Debug)]
pub struct VecSource<'a, T>(pub &'a Vec<T>);

/// A shared, owned buffer, standing in for native memory handed between owners.
#[derive(Debug)]
pub struct SharedSource<T>(pub Arc<[T]>);

/// A non-contiguous random-access sequence.
#[derive(Debug)]
pub struct DequeSource<'a, T>(pub &'a VecDeque<T>);

/// A string, viewed as its UTF-8 bytes.
#[derive(Copy, Clone, Debug)]
pub struct StrSource<'a>(pub &'a str);

/// A single value treated as a sequence of length one.
#[derive(Debug)]
pub struct OneSource<'a, T>(pub &'a T);

// Manual impls, derive would bound T: Clone.

impl<T> Copy for SliceSource<'_, T> { }
impl<T> Clone for SliceSource<'_, T> {
	fn clone(&self) -> Self { *self }
}

impl<T> Copy for VecSource<'_, T> { }
impl<T> Clone for VecSource<'_, T> {
	fn clone(&self) -> Self { *self }
}

impl<T> Clone for SharedSource<T> {
	fn clone(&self) -> Self { Self(Arc::clone(&self.0)) }
}

impl<T> Copy for DequeSource<'_, T> { }
impl<T> Clone for DequeSource<'_, T> {
	fn clone(&self) -> Self { *self }
}

impl<T> Copy for OneSource<'_, T> { }
impl<T> Clone for OneSource<'_, T> {
	fn clone(&self) -> Self { *self }
}

impl<T> Source for SliceSource<'_, T> {
	type Item = T;

	#[inline]
	fn len(&self) -> usize { self.0.len() }

	#[inline]
	fn get(&self, index: usize) -> Option<&T> { self.0.get(index) }

	fn id(&self) -> SourceId { SourceId::of(self.0) }

	#[inline]
	fn as_slice(&self) -> Option<&[T]> { Some(self.0) }
}

impl<T> Source for VecSource<'_, T> {
	type Item = T;

	#[inline]
	fn len(&self) -> usize { self.0.len() }

	#[inline]
	fn get(&self, index: usize) -> Option<&T> { self.0.get(index) }

	fn id(&self) -> SourceId { SourceId::of(self.0) }

	#[inline]
	fn as_slice(&self) -> Option<&[T]> { Some(self.0.as_slice()) }
}

impl<T> Source for SharedSource<T> {
	type Item = T;

	#[inline]
	fn len(&self) -> usize { self.0.len() }

	#[inline]
	fn get(&self, index: usize) -> Option<&T> { self.0.get(index) }

	fn id(&self) -> SourceId { SourceId::of(&*self.0) }

	#[inline]
	fn as_slice(&self) -> Option<&[T]> { Some(&*self.0) }
}

impl<T> Source for DequeSource<'_, T> {
	type Item = T;

	#[inline]
	fn len(&self) -> usize { self.0.len() }

	#[inline]
	fn get(&self, index: usize) -> Option<&T> { self.0.get(index) }

	fn id(&self) -> SourceId { SourceId::of(self.0) }

	fn as_slice(&self) -> Option<&[T]> {
		let (front, back) = self.0.as_slices();
		back.is_empty().then_some(front)
	}
}

impl Source for StrSource<'_> {
	type Item = u8;

	#[inline]
	fn len(&self) -> usize { self.0.len() }

	#[inline]
	fn get(&self, index: usize) -> Option<&u8> { self.0.as_bytes().get(index) }

	fn id(&self) -> SourceId { SourceId::of(self.0) }

	#[inline]
	fn as_slice(&self) -> Option<&[u8]> { Some(self.0.as_bytes()) }
}

impl<T> Source for OneSource<'_, T> {
	type Item = T;

	#[inline]
	fn len(&self) -> usize { 1 }

	#[inline]
	fn get(&self, index: usize) -> Option<&T> {
		(index == 0).then_some(self.0)
	}

	fn id(&self) -> SourceId { SourceId::of(self.0) }

	#[inline]
	fn as_slice(&self) -> Option<&[T]> { Some(std::slice::from_ref(self.0)) }
}

/// The object-safe face of [`Source`], implemented for every source. Used by
/// [`DynSource`] to erase the concrete adapter type.
pub trait ErasedSource<T> {
	/// Returns the number of elements, as [`Source::len`].
	fn dyn_len(&self) -> usize;
	/// Returns the element at absolute `index`, as [`Source::get`].
	fn dyn_get(&self, index: usize) -> Option<&T>;
	/// Returns the store identity, as [`Source::id`].
	fn dyn_id(&self) -> SourceId;
	/// Returns the store as a contiguous slice, as [`Source::as_slice`].
	fn dyn_as_slice(&self) -> Option<&[T]>;
}

impl<S: Source> ErasedSource<S::Item> for S {
	fn dyn_len(&self) -> usize { self.len() }
	fn dyn_get(&self, index: usize) -> Option<&S::Item> { self.get(index) }
	fn dyn_id(&self) -> SourceId { self.id() }
	fn dyn_as_slice(&self) -> Option<&[S::Item]> { self.as_slice() }
}

/// A type-erased source, letting segments over different backing kinds share one
/// type.
pub struct DynSource<'a, T>(Rc<dyn ErasedSource<T> + 'a>);

impl<'a, T> DynSource<'a, T> {
	/// Erases the type of `source`.
	pub fn new<S: Source<Item = T> + 'a>(source: S) -> Self {
		Self(Rc::new(source))
	}
}

impl<T> Clone for DynSource<'_, T> {
	fn clone(&self) -> Self { Self(Rc::clone(&self.0)) }
}

impl<T> Debug for DynSource<'_, T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("DynSource")
		 .field(&self.0.dyn_id())
		 .finish()
	}
}

impl<T> Source for DynSource<'_, T> {
	type Item = T;

	#[inline]
	fn len(&self) -> usize { self.0.dyn_len() }

	#[inline]
	fn get(&self, index: usize) -> Option<&T> { self.0.dyn_get(index) }

	fn id(&self) -> SourceId { self.0.dyn_id() }

	#[inline]
	fn as_slice(&self) -> Option<&[T]> { self.0.dyn_as_slice() }
}
