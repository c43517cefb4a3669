// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::iter::repeat_with;
use log::{debug, trace};
use super::PoolOptions;

/// A single-threaded pool of boxed arrays keyed by length. A claimed array always
/// has exactly the requested length, with every element at its default.
#[derive(Debug)]
pub struct ArrayPool<T> {
	buckets: HashMap<usize, Vec<Box<[T]>>>,
	options: PoolOptions,
}

impl<T: Default> Default for ArrayPool<T> {
	fn default() -> Self { Self::new() }
}

impl<T: Default> ArrayPool<T> {
	pub fn new() -> Self { Self::with_options(PoolOptions::default()) }

	/// Creates a pool configured by `options`. The max retained count applies to
	/// each length separately; prefill is ignored, as lengths aren't known up
	/// front.
	pub fn with_options(options: PoolOptions) -> Self {
		Self { buckets: HashMap::new(), options }
	}

	/// Returns the pool options.
	pub fn options(&self) -> PoolOptions { self.options }

	/// Claims an array of `len` default elements, creating one if none of that
	/// length are retained.
	pub fn claim(&mut self, len: usize) -> Box<[T]> {
		match self.buckets.get_mut(&len).and_then(Vec::pop) {
			Some(array) => {
				trace!("claimed pooled array of length {len}");
				array
			}
			None => {
				trace!("no pooled array of length {len}, creating one");
				repeat_with(T::default).take(len).collect()
			}
		}
	}

	/// Resets an array's elements to their default and collects it back into the
	/// pool. The array is dropped instead if its length is full.
	pub fn collect(&mut self, mut array: Box<[T]>) {
		let len = array.len();
		let max = self.options.max_retained();
		if self.len(len) >= max {
			debug!("array pool full at {max} arrays of length {len}, discarding");
			return
		}

		let initial_capacity = self.options.initial_capacity().min(max);
		array.fill_with(T::default);
		self.buckets
			.entry(len)
			.or_insert_with(|| Vec::with_capacity(initial_capacity))
			.push(array);
	}

	/// Returns the number of retained arrays of length `len`.
	pub fn len(&self, len: usize) -> usize {
		self.buckets.get(&len).map_or(0, Vec::len)
	}

	/// Returns `true` if no arrays of any length are retained.
	pub fn is_empty(&self) -> bool {
		self.buckets.values().all(Vec::is_empty)
	}

	/// Drops all retained arrays.
	pub fn shed(&mut self) {
		debug!("shedding pooled arrays of {} lengths", self.buckets.len());
		self.buckets.clear();
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn claim_exact_length() {
		let mut pool = ArrayPool::<u32>::new();
		let array = pool.claim(5);
		assert_eq!(*array, [0; 5]);
		assert!(pool.claim(0).is_empty());
	}

	#[test]
	fn collected_arrays_are_cleared() {
		let mut pool = ArrayPool::<u32>::new();
		let mut array = pool.claim(3);
		array.copy_from_slice(&[7, 8, 9]);
		let addr = array.as_ptr();
		pool.collect(array);
		assert_eq!(pool.len(3), 1);
		assert_eq!(pool.len(4), 0);

		let array = pool.claim(3);
		assert_eq!(array.as_ptr(), addr);
		assert_eq!(*array, [0; 3]);
		assert!(pool.is_empty());
	}

	#[test]
	fn retention_per_length() {
		let mut pool = ArrayPool::<u8>::with_options(PoolOptions::new().with_max_retained(1));
		let claimed = pool.claim(2);
		pool.collect(claimed);
		pool.collect(vec![1, 2].into_boxed_slice());
		pool.collect(vec![1, 2, 3].into_boxed_slice());
		assert_eq!(pool.len(2), 1);
		assert_eq!(pool.len(3), 1);
		pool.shed();
		assert!(pool.is_empty());
	}

	#[test]
	fn discarded_lengths_leave_no_bucket() {
		let mut pool = ArrayPool::<u8>::with_options(PoolOptions::new().with_max_retained(0));
		for len in 1..=8 {
			pool.collect(vec![0; len].into_boxed_slice());
		}
		assert!(pool.is_empty());
		assert!(pool.buckets.is_empty());
	}
}
