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

#![allow(dead_code, unused_macros)]

use std::fmt::{Arguments, Debug};
use quickcheck::{Arbitrary, Gen};

macro_rules! qc_assert_eq {
	($left:expr,$right:expr) => {{
		let left = $left;
		let right = $right;
		if left == right {
			TestResult::passed()
		} else {
			TestResult::error(
				common::format_qc_assert_error(&left, &right, None)
			)
		}
	}};
    ($left:expr,$right:expr,$($arg:tt)+) => {{
		let left = $left;
		let right = $right;
		if left == right {
			TestResult::passed()
		} else {
			TestResult::error(
				common::format_qc_assert_error(&left, &right, Some(format_args!($($arg)+)))
			)
		}
	}};
}

pub fn format_qc_assert_error<L: Debug, R: Debug>(left: &L, right: &R, msg: Option<Arguments>) -> String {
	if let Some(msg) = msg {
		format!(
			"assertion failed `(left == right)`: {msg}\n \
			left: `{left:?}`,\nright: `{right:?}`",
		)
	} else {
		format!(
			"assertion failed `(left == right)`:\n \
			left: `{left:?}`,\nright: `{right:?}`",
		)
	}
}

/// A list of distinct values with a valid window into it.
#[derive(Clone, Debug)]
pub struct Window {
	pub data: Vec<u32>,
	pub offset: usize,
	pub count: usize,
}

impl Window {
	pub fn expected(&self) -> &[u32] {
		&self.data[self.offset..self.offset + self.count]
	}
}

impl Arbitrary for Window {
	fn arbitrary(g: &mut Gen) -> Self {
		let len = usize::arbitrary(g) % 64;
		let data = (0..len as u32).collect();
		let offset = usize::arbitrary(g) % (len + 1);
		let count = usize::arbitrary(g) % (len - offset + 1);
		Self { data, offset, count }
	}

	fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
		let Self { offset, count, .. } = *self;
		Box::new((0..count).rev().map(move |count| Self {
			data: (0..(offset + count) as u32).collect(),
			offset,
			count,
		}))
	}
}
