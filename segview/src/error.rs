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

use std::result;
use amplify_derive::Display;

pub type Result<T = ()> = result::Result<T, Error>;

/// The parameter an [`Error`] was raised for.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, Hash)]
pub enum Parameter {
	#[display("source")]
	Source,
	#[display("offset")]
	Offset,
	#[display("count")]
	Count,
	#[display("index")]
	Index,
	#[display("cursor")]
	Cursor,
}

/// A segment construction, slicing, or access error. Every variant carries the
/// attempted values along with the valid bound it was checked against.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
	/// A segment was constructed without a backing store.
	#[error("no source to segment")]
	NoSource,
	/// The offset exceeds the source length.
	#[error("offset {offset} is out of range for a source of length {len}")]
	OffsetOutOfRange { offset: usize, len: usize },
	/// The offset is negative.
	#[error("offset {offset} is negative")]
	NegativeOffset { offset: isize },
	/// The count exceeds the elements remaining after the offset.
	#[error("count {count} from offset {offset} is out of range for a source of length {len}")]
	CountOutOfRange { offset: usize, count: usize, len: usize },
	/// The count is negative.
	#[error("count {count} is negative")]
	NegativeCount { count: isize },
	/// An element index is not within the segment.
	#[error("index {index} is out of range for a segment of length {len}")]
	IndexOutOfRange { index: usize, len: usize },
	/// The cursor was read before its first advance.
	#[error("cursor was read before the first element")]
	CursorNotStarted,
	/// The cursor was read after its last element.
	#[error("cursor was read past the last element")]
	CursorExhausted,
}

impl Error {
	/// Returns the parameter the error was raised for.
	pub fn parameter(&self) -> Parameter {
		match self {
			Self::NoSource => Parameter::Source,
			Self::OffsetOutOfRange { .. } |
			Self::NegativeOffset   { .. } => Parameter::Offset,
			Self::CountOutOfRange  { .. } |
			Self::NegativeCount    { .. } => Parameter::Count,
			Self::IndexOutOfRange  { .. } => Parameter::Index,
			Self::CursorNotStarted |
			Self::CursorExhausted => Parameter::Cursor,
		}
	}

	/// Returns `true` if the error is an offset or count range error.
	pub fn is_range(&self) -> bool {
		matches!(self.parameter(), Parameter::Offset | Parameter::Count)
	}
}
