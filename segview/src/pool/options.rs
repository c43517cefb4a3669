// SPDX-License-Identifier: Apache-2.0

/// Options for tuning pool retention.
///
/// # Max retained
///
/// The most objects a pool keeps. Collecting into a full pool drops the object
/// instead. Defaults to `64`. For an [`ArrayPool`](super::ArrayPool), the limit
/// applies per array length.
///
/// # Initial capacity
///
/// The capacity reserved for retained objects when the pool is created, and kept
/// when the pool is shed. Defaults to `8`.
///
/// # Prefill
///
/// The number of objects created up front, capped at the max retained count.
/// Defaults to `0`, creating objects only when claimed from an empty pool.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct PoolOptions {
	pub max_retained: usize,
	pub initial_capacity: usize,
	pub prefill: usize,
}

impl Default for PoolOptions {
	fn default() -> Self { Self::new() }
}

impl PoolOptions {
	/// Creates a new set of pool options.
	pub const fn new() -> Self {
		Self {
			max_retained: 64,
			initial_capacity: 8,
			prefill: 0,
		}
	}

	/// Presets the options to create a "lean" pool, retaining few objects and
	/// reserving no space up front.
	#[inline]
	pub const fn lean() -> Self {
		Self {
			max_retained: 4,
			initial_capacity: 0,
			..Self::new()
		}
	}

	/// Presets the options to create a pool that never discards collected objects.
	#[inline]
	pub const fn unbounded() -> Self {
		Self {
			max_retained: usize::MAX,
			..Self::new()
		}
	}

	/// Returns the max retained object count.
	#[inline]
	pub const fn max_retained(&self) -> usize { self.max_retained }

	/// Returns the initial capacity.
	#[inline]
	pub const fn initial_capacity(&self) -> usize { self.initial_capacity }

	/// Returns the prefill count.
	#[inline]
	pub const fn prefill(&self) -> usize { self.prefill }

	/// Returns `true` if the pool never discards collected objects.
	#[inline]
	pub const fn is_unbounded(&self) -> bool { self.max_retained == usize::MAX }

	/// Sets the max retained object count.
	#[inline]
	pub fn set_max_retained(&mut self, value: usize) {
		self.max_retained = value;
	}

	/// Sets the initial capacity.
	#[inline]
	pub fn set_initial_capacity(&mut self, value: usize) {
		self.initial_capacity = value;
	}

	/// Sets the prefill count.
	#[inline]
	pub fn set_prefill(&mut self, value: usize) {
		self.prefill = value;
	}

	/// Sets the max retained object count.
	#[inline]
	pub const fn with_max_retained(mut self, value: usize) -> Self {
		self.max_retained = value;
		self
	}

	/// Sets the initial capacity.
	#[inline]
	pub const fn with_initial_capacity(mut self, value: usize) -> Self {
		self.initial_capacity = value;
		self
	}

	/// Sets the prefill count.
	#[inline]
	pub const fn with_prefill(mut self, value: usize) -> Self {
		self.prefill = value;
		self
	}
}
