// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Debug, Formatter};
use crate::bounds::check_range;
use crate::error::{Error, Result};
use crate::segment::Segment;
use crate::source::Source;

/// The origin a [`SegmentReader`] seeks from.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SeekOrigin {
	/// The start of the segment.
	Begin,
	/// The current position.
	Current,
	/// The end of the segment.
	End,
}

/// A seek target for a [`SegmentReader`]. Targets are resolved without clamping:
/// one before the start resolves to a negative position, one past the end to a
/// position beyond the length. Either is rejected by the next read, not by the
/// seek.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SeekOffset {
	/// Return to the start. Equivalent to `FromStart(0)`.
	Reset,
	/// Move forward from the current position.
	Forward(usize),
	/// Move back from the current position, possibly before the start.
	Back(usize),
	/// Seek a position relative to the start. Negative positions are before it.
	FromStart(isize),
	/// Seek a position relative to the end. Positive positions are past it.
	FromEnd(isize),
}

impl SeekOffset {
	/// Resolves the target position given the current position `pos` and the
	/// segment length `len`. Arithmetic saturates at the bounds of `isize`, which
	/// are out of range for any read.
	pub fn target(self, pos: isize, len: usize) -> isize {
		match self {
			SeekOffset::Reset => 0,
			SeekOffset::Forward(off) => pos.saturating_add_unsigned(off),
			SeekOffset::Back   (off) => pos.saturating_sub_unsigned(off),
			SeekOffset::FromStart(off) => off,
			SeekOffset::FromEnd  (off) => signed_len(len).saturating_add(off)
		}
	}
}

impl From<(isize, SeekOrigin)> for SeekOffset {
	fn from((offset, origin): (isize, SeekOrigin)) -> Self {
		match origin {
			SeekOrigin::Begin => SeekOffset::FromStart(offset),
			SeekOrigin::Current if offset < 0 => SeekOffset::Back(offset.unsigned_abs()),
			SeekOrigin::Current => SeekOffset::Forward(offset.unsigned_abs()),
			SeekOrigin::End => SeekOffset::FromEnd(offset)
		}
	}
}

fn signed_len(len: usize) -> isize {
	isize::try_from(len).unwrap_or(isize::MAX)
}

/// A cursor carving sequential sub-segments out of a parent [`Segment`].
///
/// Seeking never fails. The position is signed, so a seek before the start is
/// kept as a negative position rather than stopping at `0`; the next
/// [`read`](Self::read) rejects it with [`Error::NegativeOffset`], as it rejects
/// a position past the end with a range error.
///
/// # Examples
///
/// ```
/// use segview::{AsSegment, Error, SegmentReader, SeekOrigin};
///
/// let data: Vec<u32> = (0..10).collect();
/// let mut reader = SegmentReader::new(data.as_segment());
/// assert_eq!(reader.read(3).unwrap().to_vec(), [0, 1, 2]);
/// assert_eq!(reader.seek(-2, SeekOrigin::End), 8);
/// assert_eq!(reader.read(2).unwrap().to_vec(), [8, 9]);
/// assert!(reader.read(1).is_err());
///
/// assert_eq!(reader.seek(-20, SeekOrigin::End), -10);
/// assert_eq!(reader.read(2), Err(Error::NegativeOffset { offset: -10 }));
/// ```
#[derive(Clone)]
pub struct SegmentReader<S> {
	source: Segment<S>,
	position: isize,
}

impl<S> SegmentReader<S> {
	/// Creates a reader at the start of `source`.
	pub fn new(source: Segment<S>) -> Self {
		Self { source, position: 0 }
	}

	/// Returns the current position, negative if a seek moved before the start.
	pub fn position(&self) -> isize { self.position }

	/// Returns the number of elements between the position and the end, `0` if
	/// the position is before the start or beyond the end.
	pub fn remaining(&self) -> usize {
		usize::try_from(self.position)
			.map_or(0, |pos| self.source.len().saturating_sub(pos))
	}

	/// Returns `true` if there are no elements left to read.
	pub fn is_at_end(&self) -> bool { self.remaining() == 0 }

	/// Returns the segment being read.
	pub fn source(&self) -> &Segment<S> { &self.source }

	/// Consumes the reader, returning the segment being read.
	pub fn into_inner(self) -> Segment<S> { self.source }

	/// Seeks `offset` elements from `origin`, returning the new position. Never
	/// fails; validation happens on the next read.
	pub fn seek(&mut self, offset: isize, origin: SeekOrigin) -> isize {
		self.seek_offset((offset, origin).into())
	}

	/// Seeks to a [`SeekOffset`], returning the new position.
	pub fn seek_offset(&mut self, offset: SeekOffset) -> isize {
		self.position = offset.target(self.position, self.source.len());
		self.position
	}

	/// Resets the position to the start.
	pub fn reset(&mut self) {
		self.position = 0;
	}

	fn start(&self) -> Result<usize> {
		usize::try_from(self.position)
			.map_err(|_| Error::NegativeOffset { offset: self.position })
	}
}

impl<S: Source> SegmentReader<S> {
	/// Reads the next `count` elements as a segment, advancing the position by
	/// `count`.
	///
	/// # Errors
	///
	/// Returns [`Error::NegativeOffset`] if the position is before the start, or
	/// the segment's range error if the position or `count` reaches past the end.
	/// The position is left unchanged on error.
	pub fn read(&mut self, count: usize) -> Result<Segment<S>> {
		let segment = self.peek(count)?;
		self.position = self.position.saturating_add_unsigned(count);
		Ok(segment)
	}

	/// Returns the next `count` elements without advancing. Unlike slicing, reading
	/// from an empty segment is still bounds-checked.
	///
	/// # Errors
	///
	/// As [`read`](Self::read).
	pub fn peek(&self, count: usize) -> Result<Segment<S>> {
		let start = self.start()?;
		check_range(self.source.len(), start, count)?;
		self.source.slice_with(start, count)
	}

	/// Reads all remaining elements, moving the position to the end.
	///
	/// # Errors
	///
	/// Returns [`Error::NegativeOffset`] if the position is before the start, or
	/// an index error if it is beyond the end.
	pub fn read_to_end(&mut self) -> Result<Segment<S>> {
		let start = self.start()?;
		let len = self.source.len();
		if start > len {
			return Err(Error::IndexOutOfRange { index: start, len })
		}

		let segment = self.source.slice(start)?;
		self.position = signed_len(len);
		Ok(segment)
	}
}

impl<S> From<Segment<S>> for SegmentReader<S> {
	fn from(value: Segment<S>) -> Self { Self::new(value) }
}

impl<S: Source> Debug for SegmentReader<S> where S::Item: Debug {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("SegmentReader")
		 .field("source", &self.source)
		 .field("position", &self.position)
		 .finish()
	}
}

#[cfg(test)]
mod test {
	use crate::source::SliceSource;
	use super::*;

	#[test]
	fn target() {
		assert_eq!(SeekOffset::Reset.target(4, 10), 0);
		assert_eq!(SeekOffset::Forward(3).target(4, 10), 7);
		assert_eq!(SeekOffset::Back(5).target(4, 10), -1);
		assert_eq!(SeekOffset::FromStart(12).target(4, 10), 12);
		assert_eq!(SeekOffset::FromStart(-3).target(4, 10), -3);
		assert_eq!(SeekOffset::FromEnd(-2).target(4, 10), 8);
		assert_eq!(SeekOffset::FromEnd(-20).target(4, 10), -10);
		assert_eq!(SeekOffset::FromEnd(1).target(4, 10), 11);
		assert_eq!(SeekOffset::Forward(usize::MAX).target(4, 10), isize::MAX);
		assert_eq!(SeekOffset::Back(usize::MAX).target(-4, 10), isize::MIN);
	}

	#[test]
	fn origin_conversion() {
		assert_eq!(SeekOffset::from((-3, SeekOrigin::Begin)), SeekOffset::FromStart(-3));
		assert_eq!(SeekOffset::from((-3, SeekOrigin::Current)), SeekOffset::Back(3));
		assert_eq!(SeekOffset::from((3, SeekOrigin::Current)), SeekOffset::Forward(3));
		assert_eq!(SeekOffset::from((-3, SeekOrigin::End)), SeekOffset::FromEnd(-3));
	}

	#[test]
	fn failed_read_keeps_position() {
		let data = [1, 2, 3];
		let mut reader = SegmentReader::new(Segment::new(SliceSource(&data)));
		reader.read(2).unwrap();
		assert_eq!(
			reader.read(2),
			Err(Error::CountOutOfRange { offset: 2, count: 2, len: 3 })
		);
		assert_eq!(reader.position(), 2);
		assert_eq!(reader.read_to_end().unwrap().to_vec(), [3]);
		assert!(reader.is_at_end());
	}

	#[test]
	fn seek_past_end_defers_error() {
		let data = [1, 2, 3];
		let mut reader = SegmentReader::new(Segment::new(SliceSource(&data)));
		assert_eq!(reader.seek(5, SeekOrigin::Begin), 5);
		assert_eq!(reader.remaining(), 0);
		assert_eq!(reader.read(0), Err(Error::OffsetOutOfRange { offset: 5, len: 3 }));
		assert_eq!(reader.read_to_end(), Err(Error::IndexOutOfRange { index: 5, len: 3 }));
		assert_eq!(reader.seek(-1, SeekOrigin::Current), 4);
	}

	#[test]
	fn seek_before_start_defers_error() {
		let data = [1, 2, 3];
		let mut reader = SegmentReader::new(Segment::new(SliceSource(&data)));
		assert_eq!(reader.seek(-3, SeekOrigin::Begin), -3);
		assert_eq!(reader.remaining(), 0);
		assert_eq!(reader.read(1), Err(Error::NegativeOffset { offset: -3 }));
		assert_eq!(reader.peek(0), Err(Error::NegativeOffset { offset: -3 }));
		assert_eq!(reader.read_to_end(), Err(Error::NegativeOffset { offset: -3 }));
		assert_eq!(reader.position(), -3);

		assert_eq!(reader.seek(4, SeekOrigin::Current), 1);
		assert_eq!(reader.read(2).unwrap().to_vec(), [2, 3]);
	}

	#[test]
	fn debug_shows_position() {
		let data = [7];
		let mut reader = SegmentReader::new(Segment::new(SliceSource(&data)));
		reader.seek(-1, SeekOrigin::Begin);
		assert_eq!(
			format!("{reader:?}"),
			"SegmentReader { source: [7], position: -1 }"
		);
	}
}
