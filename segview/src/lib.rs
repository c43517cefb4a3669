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

//! ## How it works
//!
//! A [`Segment`] is a zero-copy view of `count` consecutive elements starting at
//! `offset` in some backing store: an array, a list, a shared buffer, a deque, the
//! bytes of a string, or a single value. Stores are adapted through the [`Source`]
//! trait, so every kind of segment shares one slicing algebra. Slicing never
//! copies; it produces another view of the same store, checked against the view's
//! bounds rather than the store's.
//!
//! ### Empty segments
//!
//! A segment with no store and a segment with a count of zero are the same thing:
//! the empty segment. Empty segments are all equal to each other, and slicing an
//! empty segment always yields the empty segment without failing. Everything else
//! is bounds-checked and fails with an [`Error`] naming the bad parameter.
//!
//! ### Reading
//!
//! A [`SegmentReader`] carves sequential sub-segments out of a segment. Seeking
//! never fails; a position past the end is reported by the next read.
//!
//! ### Utilities
//!
//! The [`read_only`] module wraps mutable collections in read-only facades that
//! behave as empty when nothing is wrapped. The [`pool`] module holds object
//! pools, single-threaded and concurrent, which reset objects as they return.
//!
//! ```
//! use segview::AsSegment;
//!
//! let data = [10, 20, 30, 40, 50];
//! let segment = data.as_segment().slice_with(1, 3).unwrap();
//! assert_eq!(segment.to_vec(), [20, 30, 40]);
//! assert_eq!(segment.offset(), 1);
//! assert_eq!(segment.take_last(1).unwrap().offset(), 3);
//! ```

pub mod bounds;
mod error;
pub mod pool;
pub mod read_only;
mod reader;
mod segment;
pub mod source;

pub use error::*;
pub use reader::*;
pub use segment::*;
pub use source::{Source, SourceId};
