// SPDX-License-Identifier: Apache-2.0

use std::iter::FusedIterator;
use crate::error::{Error, Result};
use crate::source::Source;
use super::Segment;

/// An iterator over the elements of a [`Segment`].
pub struct Iter<'s, S> {
	source: Option<&'s S>,
	front: usize,
	back: usize,
}

impl<'s, S> Iter<'s, S> {
	pub(super) fn new(segment: &'s Segment<S>) -> Self {
		let range = segment.source_range();
		Self {
			source: segment.source(),
			front: range.start,
			back: range.end,
		}
	}
}

impl<S> Clone for Iter<'_, S> {
	fn clone(&self) -> Self {
		Self { ..*self }
	}
}

impl<'s, S: Source> Iterator for Iter<'s, S> {
	type Item = &'s S::Item;

	fn next(&mut self) -> Option<Self::Item> {
		if self.front >= self.back {
			return None
		}

		let item = self.source?.get(self.front)?;
		self.front += 1;
		Some(item)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.back - self.front;
		(len, Some(len))
	}

	fn nth(&mut self, n: usize) -> Option<Self::Item> {
		self.front = self.front.saturating_add(n).min(self.back);
		self.next()
	}
}

impl<S: Source> DoubleEndedIterator for Iter<'_, S> {
	fn next_back(&mut self) -> Option<Self::Item> {
		if self.front >= self.back {
			return None
		}

		let item = self.source?.get(self.back - 1)?;
		self.back -= 1;
		Some(item)
	}
}

impl<S: Source> ExactSizeIterator for Iter<'_, S> { }

impl<S: Source> FusedIterator for Iter<'_, S> { }

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum State {
	Before,
	At(usize),
	After,
}

/// An explicit enumerator over a [`Segment`]. The cursor starts *before* the first
/// element; [`move_next`](Self::move_next) must be called once before
/// [`current`](Self::current) is valid. Reading the current element before the
/// first advance or after the last element is an error rather than a default.
///
/// # Examples
///
/// ```
/// use segview::{AsSegment, Error};
///
/// let data = ['a', 'b'];
/// let segment = data.as_segment();
/// let mut cursor = segment.cursor();
/// assert_eq!(cursor.current(), Err(Error::CursorNotStarted));
/// assert!(cursor.move_next());
/// assert_eq!(cursor.current(), Ok(&'a'));
/// assert!(cursor.move_next());
/// assert!(!cursor.move_next());
/// assert_eq!(cursor.current(), Err(Error::CursorExhausted));
/// ```
pub struct Cursor<'s, S> {
	segment: &'s Segment<S>,
	state: State,
}

impl<'s, S> Cursor<'s, S> {
	pub(super) fn new(segment: &'s Segment<S>) -> Self {
		Self { segment, state: State::Before }
	}

	/// Advances to the next element, returning `false` once past the end.
	pub fn move_next(&mut self) -> bool {
		let len = self.segment.len();
		self.state = match self.state {
			State::Before if len > 0 => State::At(0),
			State::At(i) if i + 1 < len => State::At(i + 1),
			_ => State::After
		};
		matches!(self.state, State::At(_))
	}

	/// Returns the segment-relative index of the current element, if any.
	pub fn index(&self) -> Option<usize> {
		match self.state {
			State::At(i) => Some(i),
			_ => None
		}
	}

	/// Moves the cursor back before the first element.
	pub fn reset(&mut self) {
		self.state = State::Before;
	}
}

impl<'s, S: Source> Cursor<'s, S> {
	/// Returns the current element.
	///
	/// # Errors
	///
	/// Returns [`Error::CursorNotStarted`] before the first call to
	/// [`move_next`](Self::move_next), or [`Error::CursorExhausted`] after it has
	/// returned `false`.
	pub fn current(&self) -> Result<&'s S::Item> {
		match self.state {
			State::Before => Err(Error::CursorNotStarted),
			State::After  => Err(Error::CursorExhausted),
			State::At(i)  => self.segment.get(i)
		}
	}
}

impl<S> Clone for Cursor<'_, S> {
	fn clone(&self) -> Self {
		Self { ..*self }
	}
}
