// SPDX-License-Identifier: Apache-2.0

//! Segment types for each backing kind, and conversions between them.

use std::collections::VecDeque;
use std::sync::Arc;
use simdutf8::compat::{from_utf8, Utf8Error};
use crate::error::Result;
use crate::source::*;
use super::{Repr, Segment};

/// A segment over a raw array.
pub type ArraySegment<'a, T> = Segment<SliceSource<'a, T>>;
/// A segment over a growable list.
pub type ListSegment<'a, T> = Segment<VecSource<'a, T>>;
/// A segment over a shared buffer.
pub type SharedSegment<T> = Segment<SharedSource<T>>;
/// A segment over a deque.
pub type DequeSegment<'a, T> = Segment<DequeSource<'a, T>>;
/// A segment over the bytes of a string.
pub type StrSegment<'a> = Segment<StrSource<'a>>;
/// A segment of zero or one element, letting a single value stand in where a
/// sequence is expected.
pub type OneSegment<'a, T> = Segment<OneSource<'a, T>>;
/// A segment over any source, with its adapter type erased.
pub type DynSegment<'a, T> = Segment<DynSource<'a, T>>;

impl<S: Source> Segment<S> {
	/// Erases the source type, keeping the same store, offset, and count. Bounds
	/// are not rechecked.
	pub fn into_dyn<'a>(self) -> DynSegment<'a, S::Item> where S: 'a {
		match self.repr {
			Repr::Empty => Segment::EMPTY,
			Repr::Bound { source, offset, count } => Segment {
				repr: Repr::Bound { source: DynSource::new(source), offset, count }
			}
		}
	}
}

macro_rules! into_dyn {
    ($($seg:ty => $item:ty),+) => {
		$(
		impl<'a, T: 'a> From<$seg> for DynSegment<'a, $item> {
			fn from(value: $seg) -> Self { value.into_dyn() }
		}
		)+
	};
}

into_dyn! {
	ArraySegment<'a, T> => T,
	ListSegment<'a, T>  => T,
	SharedSegment<T>    => T,
	DequeSegment<'a, T> => T,
	OneSegment<'a, T>   => T
}

impl<'a> From<StrSegment<'a>> for DynSegment<'a, u8> {
	fn from(value: StrSegment<'a>) -> Self { value.into_dyn() }
}

impl<'a, T> From<&'a [T]> for ArraySegment<'a, T> {
	fn from(value: &'a [T]) -> Self { Self::new(SliceSource(value)) }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for ArraySegment<'a, T> {
	fn from(value: &'a [T; N]) -> Self { Self::new(SliceSource(value)) }
}

impl<'a, T> From<&'a Vec<T>> for ListSegment<'a, T> {
	fn from(value: &'a Vec<T>) -> Self { Self::new(VecSource(value)) }
}

impl<T> From<Arc<[T]>> for SharedSegment<T> {
	fn from(value: Arc<[T]>) -> Self { Self::new(SharedSource(value)) }
}

impl<T> From<Vec<T>> for SharedSegment<T> {
	fn from(value: Vec<T>) -> Self { Arc::<[T]>::from(value).into() }
}

impl<'a, T> From<&'a VecDeque<T>> for DequeSegment<'a, T> {
	fn from(value: &'a VecDeque<T>) -> Self { Self::new(DequeSource(value)) }
}

impl<'a> From<&'a str> for StrSegment<'a> {
	fn from(value: &'a str) -> Self { Self::new(StrSource(value)) }
}

impl<'a, T> From<&'a T> for OneSegment<'a, T> {
	fn from(value: &'a T) -> Self { Self::new(OneSource(value)) }
}

impl<'a, T> From<Option<&'a T>> for OneSegment<'a, T> {
	fn from(value: Option<&'a T>) -> Self {
		value.map_or(Self::EMPTY, |value| Self::new(OneSource(value)))
	}
}

impl<'a, T> ArraySegment<'a, T> {
	/// Returns the viewed elements, borrowed for the lifetime of the array rather
	/// than the segment.
	pub fn as_borrowed(&self) -> &'a [T] {
		match &self.repr {
			Repr::Empty => &[],
			Repr::Bound { source: SliceSource(slice), offset, count } => {
				let slice: &'a [T] = *slice;
				&slice[*offset..offset + count]
			}
		}
	}
}

impl<'a> StrSegment<'a> {
	/// Returns the viewed bytes.
	pub fn as_bytes(&self) -> &'a [u8] {
		match &self.repr {
			Repr::Empty => &[],
			Repr::Bound { source: StrSource(str), offset, count } => {
				let str: &'a str = *str;
				let bytes = str.as_bytes();
				&bytes[*offset..offset + count]
			}
		}
	}

	/// Returns the viewed bytes as a string slice.
	///
	/// # Errors
	///
	/// Returns a UTF-8 error if the segment starts or ends within a character.
	pub fn as_str(&self) -> std::result::Result<&'a str, Utf8Error> {
		from_utf8(self.as_bytes())
	}
}

impl<'a, T> OneSegment<'a, T> {
	/// Returns the value, or `None` if empty.
	pub fn value(&self) -> Option<&'a T> {
		match &self.repr {
			Repr::Empty => None,
			Repr::Bound { source: OneSource(value), .. } => Some(*value)
		}
	}
}

/// Extension for viewing a backing store as a [`Segment`].
///
/// # Examples
///
/// ```
/// use segview::{AsSegment, Error};
///
/// let list = vec![1, 2, 3, 4];
/// assert_eq!(list.segment(1, 2).unwrap().to_vec(), [2, 3]);
/// assert_eq!(
/// 	list.segment(5, 0),
/// 	Err(Error::OffsetOutOfRange { offset: 5, len: 4 })
/// );
/// ```
pub trait AsSegment {
	/// The adapter over this store.
	type Source<'a>: Source where Self: 'a;

	/// Returns an adapter over this store.
	fn as_source(&self) -> Self::Source<'_>;

	/// Returns a segment viewing the whole store.
	fn as_segment(&self) -> Segment<Self::Source<'_>> {
		Segment::new(self.as_source())
	}

	/// Returns a segment viewing `count` elements from `offset`.
	///
	/// # Errors
	///
	/// As [`Segment::with_range`].
	fn segment(&self, offset: usize, count: usize) -> Result<Segment<Self::Source<'_>>> {
		Segment::with_range(self.as_source(), offset, count)
	}
}

impl<T> AsSegment for [T] {
	type Source<'a> = SliceSource<'a, T> where T: 'a;

	fn as_source(&self) -> SliceSource<'_, T> { SliceSource(self) }
}

impl<T, const N: usize> AsSegment for [T; N] {
	type Source<'a> = SliceSource<'a, T> where T: 'a;

	fn as_source(&self) -> SliceSource<'_, T> { SliceSource(self) }
}

impl<T> AsSegment for Vec<T> {
	type Source<'a> = VecSource<'a, T> where T: 'a;

	fn as_source(&self) -> VecSource<'_, T> { VecSource(self) }
}

impl<T> AsSegment for VecDeque<T> {
	type Source<'a> = DequeSource<'a, T> where T: 'a;

	fn as_source(&self) -> DequeSource<'_, T> { DequeSource(self) }
}

impl<T> AsSegment for Arc<[T]> {
	type Source<'a> = SharedSource<T> where T: 'a;

	fn as_source(&self) -> SharedSource<T> { SharedSource(Arc::clone(self)) }
}

impl AsSegment for str {
	type Source<'a> = StrSource<'a>;

	fn as_source(&self) -> StrSource<'_> { StrSource(self) }
}
