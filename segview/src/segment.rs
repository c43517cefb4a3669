// Copyright 2023 Strixpyrr
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod iter;
mod kinds;

use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Index, Range, RangeBounds};
use itertools::Itertools;
use crate::bounds::{check_index, check_range, check_signed, resolve};
use crate::error::{Error, Result};
use crate::source::Source;
pub use iter::{Cursor, Iter};
pub use kinds::*;

#[derive(Copy, Clone)]
enum Repr<S> {
	Empty,
	Bound {
		source: S,
		offset: usize,
		count: usize,
	},
}

/// A bounds-checked, zero-copy view of `count` elements starting at `offset` in a
/// backing [`Source`].
///
/// Segments never change: slicing returns a new segment over the same store. A
/// segment with no elements is always the [empty](Self::EMPTY) segment, however it
/// was reached, so slicing it never fails and it compares equal to every other
/// empty segment. Non-empty segments are equal when they view the same store
/// (by identity, not content) at the same offset and count.
///
/// # Examples
///
/// ```
/// use segview::{AsSegment, Segment};
///
/// let data = [10, 20, 30, 40, 50];
/// let middle = data.as_segment().slice_with(1, 3).unwrap();
/// assert_eq!(middle.to_vec(), [20, 30, 40]);
///
/// let tail = middle.take_last(2).unwrap();
/// assert_eq!(tail.to_vec(), [30, 40]);
/// assert_eq!(tail.index_of(&40), Some(1));
/// ```
#[derive(Copy, Clone)]
pub struct Segment<S> {
	repr: Repr<S>,
}

impl<S> Segment<S> {
	/// The empty segment.
	pub const EMPTY: Self = Self { repr: Repr::Empty };

	/// Returns the empty segment.
	#[inline]
	pub const fn empty() -> Self { Self::EMPTY }

	/// Returns the number of elements in the segment.
	#[inline]
	pub fn len(&self) -> usize {
		match self.repr {
			Repr::Empty => 0,
			Repr::Bound { count, .. } => count
		}
	}

	/// Returns `true` if the segment has no elements.
	#[inline]
	pub fn is_empty(&self) -> bool { matches!(self.repr, Repr::Empty) }

	/// Returns the offset of the first element in the source, `0` if empty.
	#[inline]
	pub fn offset(&self) -> usize {
		match self.repr {
			Repr::Empty => 0,
			Repr::Bound { offset, .. } => offset
		}
	}

	/// Returns the range of the segment within its source.
	pub fn source_range(&self) -> Range<usize> {
		let offset = self.offset();
		offset..offset + self.len()
	}

	/// Returns the backing source, or `None` if empty.
	pub fn source(&self) -> Option<&S> {
		match &self.repr {
			Repr::Empty => None,
			Repr::Bound { source, .. } => Some(source)
		}
	}

	/// Returns `true` if the segment is bound to a source.
	#[inline]
	pub fn has_source(&self) -> bool { !self.is_empty() }

	/// Returns a cursor over the segment, positioned before the first element.
	pub fn cursor(&self) -> Cursor<'_, S> { Cursor::new(self) }
}

impl<S: Source> Segment<S> {
	/// Creates a segment viewing all of `source`.
	pub fn new(source: S) -> Self {
		let count = source.len();
		Self::bound(source, 0, count)
	}

	/// Creates a segment viewing `count` elements of `source` from `offset`.
	///
	/// # Errors
	///
	/// Returns [`Error::OffsetOutOfRange`] if `offset` is beyond the source, or
	/// [`Error::CountOutOfRange`] if `offset + count` is.
	pub fn with_range(source: S, offset: usize, count: usize) -> Result<Self> {
		let range = check_range(source.len(), offset, count)?;
		Ok(Self::bound(source, range.start, range.len()))
	}

	/// Creates a segment from a signed `offset` and `count`, as received from
	/// callers that can't rule out negative values.
	///
	/// # Errors
	///
	/// Returns [`Error::NegativeOffset`] or [`Error::NegativeCount`] for negative
	/// values, otherwise as [`with_range`](Self::with_range).
	pub fn with_signed_range(source: S, offset: isize, count: isize) -> Result<Self> {
		let range = check_signed(source.len(), offset, count)?;
		Ok(Self::bound(source, range.start, range.len()))
	}

	/// Creates a segment viewing all of an optional `source`.
	///
	/// # Errors
	///
	/// Returns [`Error::NoSource`] if `source` is `None`.
	pub fn try_new(source: Option<S>) -> Result<Self> {
		source.map(Self::new).ok_or(Error::NoSource)
	}

	/// Creates a segment viewing `count` elements of an optional `source` from
	/// `offset`.
	///
	/// # Errors
	///
	/// Returns [`Error::NoSource`] if `source` is `None`, otherwise as
	/// [`with_range`](Self::with_range).
	pub fn try_with_range(source: Option<S>, offset: usize, count: usize) -> Result<Self> {
		Self::with_range(source.ok_or(Error::NoSource)?, offset, count)
	}

	/// Binds a checked range, collapsing zero-length ranges to the empty segment.
	fn bound(source: S, offset: usize, count: usize) -> Self {
		if count == 0 {
			Self::EMPTY
		} else {
			Self { repr: Repr::Bound { source, offset, count } }
		}
	}

	/// Returns a segment over a checked range relative to this one.
	fn sub(&self, offset: usize, count: usize) -> Self {
		match &self.repr {
			Repr::Empty => Self::EMPTY,
			Repr::Bound { source, offset: base, .. } =>
				Self::bound(source.clone(), base + offset, count)
		}
	}

	/// Returns the element at `index`.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfRange`] if `index` is not within the segment, or
	/// if the source has since shrunk below it.
	pub fn get(&self, index: usize) -> Result<&S::Item> {
		let Repr::Bound { source, offset, count } = &self.repr else {
			return Err(Error::IndexOutOfRange { index, len: 0 })
		};
		check_index(*count, index)?;
		let abs = offset + index;
		source.get(abs).ok_or(Error::IndexOutOfRange { index: abs, len: source.len() })
	}

	/// Returns the first element, or `None` if empty.
	pub fn first(&self) -> Option<&S::Item> { self.get(0).ok() }

	/// Returns the last element, or `None` if empty.
	pub fn last(&self) -> Option<&S::Item> {
		self.len().checked_sub(1).and_then(|i| self.get(i).ok())
	}

	/// Returns the segment from `index` to the end.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfRange`] if `index` is greater than the length.
	/// Never fails on an empty segment.
	pub fn slice(&self, index: usize) -> Result<Self> {
		if self.is_empty() {
			return Ok(Self::EMPTY)
		}

		let len = self.len();
		if index > len {
			return Err(Error::IndexOutOfRange { index, len })
		}
		Ok(self.sub(index, len - index))
	}

	/// Returns the segment of `len` elements from `index`.
	///
	/// # Errors
	///
	/// Returns [`Error::OffsetOutOfRange`] or [`Error::CountOutOfRange`] if the
	/// range is not within this segment. Never fails on an empty segment.
	pub fn slice_with(&self, index: usize, len: usize) -> Result<Self> {
		if self.is_empty() {
			return Ok(Self::EMPTY)
		}

		let range = check_range(self.len(), index, len)?;
		Ok(self.sub(range.start, range.len()))
	}

	/// Returns the segment within `range`, relative to this segment.
	///
	/// # Errors
	///
	/// As [`slice_with`](Self::slice_with).
	pub fn range<R: RangeBounds<usize>>(&self, range: R) -> Result<Self> {
		if self.is_empty() {
			return Ok(Self::EMPTY)
		}

		let (offset, count) = resolve(range, self.len())?;
		Ok(self.sub(offset, count))
	}

	/// Skips `count` elements. Shorthand for `slice(count)`.
	#[inline]
	pub fn skip(&self, count: usize) -> Result<Self> { self.slice(count) }

	/// Takes the first `count` elements. Shorthand for `slice_with(0, count)`.
	#[inline]
	pub fn take(&self, count: usize) -> Result<Self> { self.slice_with(0, count) }

	/// Skips the last `count` elements.
	///
	/// # Errors
	///
	/// Returns [`Error::CountOutOfRange`] if `count` is greater than the length.
	pub fn skip_last(&self, count: usize) -> Result<Self> {
		let keep = self.count_from_end(count)?;
		self.take(keep)
	}

	/// Takes the last `count` elements.
	///
	/// # Errors
	///
	/// Returns [`Error::CountOutOfRange`] if `count` is greater than the length.
	pub fn take_last(&self, count: usize) -> Result<Self> {
		let skip = self.count_from_end(count)?;
		self.skip(skip)
	}

	fn count_from_end(&self, count: usize) -> Result<usize> {
		if self.is_empty() {
			return Ok(0)
		}

		let len = self.len();
		len.checked_sub(count)
		   .ok_or(Error::CountOutOfRange { offset: 0, count, len })
	}

	/// Splits the segment in two at `mid`.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfRange`] if `mid` is greater than the length.
	pub fn split_at(&self, mid: usize) -> Result<(Self, Self)> {
		let back = self.slice(mid)?;
		let front = self.take(mid.min(self.len()))?;
		Ok((front, back))
	}

	/// Returns the segment as a contiguous slice, if its source is one. An empty
	/// segment is always an empty slice.
	pub fn as_slice(&self) -> Option<&[S::Item]> {
		match &self.repr {
			Repr::Empty => Some(&[]),
			Repr::Bound { source, offset, count } =>
				source.as_slice()?.get(*offset..offset + count)
		}
	}

	/// Iterates over the elements.
	pub fn iter(&self) -> Iter<'_, S> { Iter::new(self) }

	/// Copies the elements into a new vector.
	pub fn to_vec(&self) -> Vec<S::Item> where S::Item: Clone {
		if let Some(slice) = self.as_slice() {
			slice.to_vec()
		} else {
			self.iter().cloned().collect()
		}
	}

	/// Returns `true` if the segment contains `item`.
	pub fn contains(&self, item: &S::Item) -> bool where S::Item: PartialEq {
		self.index_of(item).is_some()
	}

	/// Returns the index of the first occurrence of `item`, relative to the start
	/// of the segment.
	pub fn index_of(&self, item: &S::Item) -> Option<usize> where S::Item: PartialEq {
		if let Some(slice) = self.as_slice() {
			slice.iter().position(|v| v == item)
		} else {
			self.iter().position(|v| v == item)
		}
	}

	/// Returns the index of the last occurrence of `item`, relative to the start
	/// of the segment.
	pub fn last_index_of(&self, item: &S::Item) -> Option<usize> where S::Item: PartialEq {
		if let Some(slice) = self.as_slice() {
			slice.iter().rposition(|v| v == item)
		} else {
			self.iter().rposition(|v| v == item)
		}
	}
}

impl<S> Default for Segment<S> {
	fn default() -> Self { Self::EMPTY }
}

impl<S: Source> PartialEq for Segment<S> {
	fn eq(&self, other: &Self) -> bool {
		match (&self.repr, &other.repr) {
			(Repr::Empty, Repr::Empty) => true,
			(
				Repr::Bound { source: a, offset: a_off, count: a_cnt },
				Repr::Bound { source: b, offset: b_off, count: b_cnt }
			) => a_off == b_off && a_cnt == b_cnt && a.id() == b.id(),
			_ => false
		}
	}
}

impl<S: Source> Eq for Segment<S> { }

impl<S: Source> Hash for Segment<S> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		match &self.repr {
			Repr::Empty => state.write_u8(0),
			Repr::Bound { source, offset, count } => {
				state.write_u8(1);
				source.id().hash(state);
				offset.hash(state);
				count.hash(state);
			}
		}
	}
}

impl<S: Source> Debug for Segment<S> where S::Item: Debug {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl<S: Source> Display for Segment<S> where S::Item: Display {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "[{}]", self.iter().format(", "))
	}
}

impl<S: Source> Index<usize> for Segment<S> {
	type Output = S::Item;

	fn index(&self, index: usize) -> &S::Item {
		match self.get(index) {
			Ok(value) => value,
			Err(error) => panic!("{error}")
		}
	}
}

impl<'s, S: Source> IntoIterator for &'s Segment<S> {
	type Item = &'s S::Item;
	type IntoIter = Iter<'s, S>;

	fn into_iter(self) -> Iter<'s, S> { self.iter() }
}

#[cfg(test)]
mod test {
	use std::collections::HashSet;
	use quickcheck::TestResult;
	use quickcheck_macros::quickcheck;
	use crate::error::Error;
	use crate::source::SliceSource;
	use super::Segment;

	#[test]
	fn zero_count_is_empty() {
		let data = [1, 2, 3];
		let zero = Segment::with_range(SliceSource(&data), 2, 0).unwrap();
		assert!(zero.is_empty());
		assert!(!zero.has_source());
		assert_eq!(zero.offset(), 0);
		assert_eq!(zero, Segment::EMPTY);

		let sliced = Segment::new(SliceSource(&data)).slice_with(1, 0).unwrap();
		assert_eq!(sliced, zero, "empty regardless of origin");
	}

	#[test]
	fn empty_fast_path() {
		let empty: Segment<SliceSource<u8>> = Segment::EMPTY;
		assert_eq!(empty.slice_with(0, 0), Ok(Segment::EMPTY));
		assert_eq!(empty.slice_with(7, 100), Ok(Segment::EMPTY));
		assert_eq!(empty.slice(9), Ok(Segment::EMPTY));
		assert_eq!(empty.skip_last(3), Ok(Segment::EMPTY));
		assert_eq!(empty.take_last(3), Ok(Segment::EMPTY));
		assert_eq!(empty.range(5..2), Ok(Segment::EMPTY));
		assert!(empty.to_vec().is_empty());
	}

	#[test]
	fn hash_follows_eq() {
		let data = [1, 2, 3, 4];
		let full = Segment::new(SliceSource(&data));
		let set: HashSet<_> = [
			full.slice_with(1, 2).unwrap(),
			full.skip(1).unwrap().take(2).unwrap(),
			full.slice_with(0, 0).unwrap(),
			Segment::EMPTY,
		].into_iter().collect();
		assert_eq!(set.len(), 2);
	}

	#[test]
	fn get_errors() {
		let data = [5, 6];
		let segment = Segment::new(SliceSource(&data));
		assert_eq!(segment.get(1), Ok(&6));
		assert_eq!(segment.get(2), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
		assert_eq!(
			Segment::<SliceSource<u8>>::EMPTY.get(0),
			Err(Error::IndexOutOfRange { index: 0, len: 0 })
		);
	}

	#[test]
	fn signed_range() {
		let data = [1, 2, 3];
		assert_eq!(
			Segment::with_signed_range(SliceSource(&data), -1, 1),
			Err(Error::NegativeOffset { offset: -1 })
		);
		assert_eq!(
			Segment::with_signed_range(SliceSource(&data), 0, -2),
			Err(Error::NegativeCount { count: -2 })
		);
		assert_eq!(Segment::with_signed_range(SliceSource(&data), 1, 2).unwrap().to_vec(), [2, 3]);
	}

	#[test]
	fn display() {
		let data = [1, 2, 3];
		assert_eq!(Segment::new(SliceSource(&data)).to_string(), "[1, 2, 3]");
		assert_eq!(Segment::<SliceSource<u8>>::EMPTY.to_string(), "[]");
	}

	#[quickcheck]
	fn split_at_rejoins(data: Vec<u8>, mid: usize) -> TestResult {
		if mid > data.len() {
			return TestResult::discard()
		}

		let (front, back) = Segment::new(SliceSource(&data)).split_at(mid).unwrap();
		let mut joined = front.to_vec();
		joined.extend(back.to_vec());
		TestResult::from_bool(joined == data)
	}
}
