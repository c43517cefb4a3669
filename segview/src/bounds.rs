// SPDX-License-Identifier: Apache-2.0

//! Range validation shared by every segment constructor and slicing operation.

use std::ops::{Bound, Range, RangeBounds};
use crate::error::{Error, Result};

/// Validates an `offset` and `count` against a source of length `len`, returning
/// the absolute range on success.
///
/// The offset is checked first, then the count against what remains after it, so
/// the subtraction never underflows and `offset + count` never overflows.
#[inline]
pub fn check_range(len: usize, offset: usize, count: usize) -> Result<Range<usize>> {
	if offset > len {
		return Err(Error::OffsetOutOfRange { offset, len })
	}

	if count > len - offset {
		return Err(Error::CountOutOfRange { offset, count, len })
	}

	Ok(offset..offset + count)
}

/// The signed form of [`check_range`]. Negative values are rejected before the
/// unsigned check runs.
pub fn check_signed(len: usize, offset: isize, count: isize) -> Result<Range<usize>> {
	let Ok(off) = usize::try_from(offset) else {
		return Err(Error::NegativeOffset { offset })
	};
	let Ok(cnt) = usize::try_from(count) else {
		return Err(Error::NegativeCount { count })
	};
	check_range(len, off, cnt)
}

/// Validates an element `index` against a length.
#[inline]
pub fn check_index(len: usize, index: usize) -> Result<usize> {
	if index < len {
		Ok(index)
	} else {
		Err(Error::IndexOutOfRange { index, len })
	}
}

/// Resolves `range` to an `(offset, count)` pair within `len`.
pub fn resolve<R: RangeBounds<usize>>(range: R, len: usize) -> Result<(usize, usize)> {
	let start = match range.start_bound() {
		Bound::Included(&start) => start,
		Bound::Excluded(&start) => start.checked_add(1).ok_or(
			Error::OffsetOutOfRange { offset: start, len }
		)?,
		Bound::Unbounded => 0
	};
	let end = match range.end_bound() {
		Bound::Included(&end) => end.checked_add(1).ok_or(
			Error::CountOutOfRange { offset: start, count: end, len }
		)?,
		Bound::Excluded(&end) => end,
		Bound::Unbounded => len
	};

	if start > len {
		return Err(Error::OffsetOutOfRange { offset: start, len })
	}

	let Some(count) = end.checked_sub(start) else {
		return Err(Error::CountOutOfRange { offset: start, count: 0, len })
	};
	check_range(len, start, count).map(|range| (range.start, range.len()))
}
