// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Debug, Formatter};
use std::iter::repeat_with;
use std::sync::Arc;
use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TrySendError};
use log::{debug, trace};
use super::{PoolOptions, Reset};

/// A concurrent pool over a lock-free queue. Clones share the same queue, and
/// can be sent across threads when `T` is [`Send`].
///
/// # Examples
///
/// ```
/// use segview::pool::SyncPool;
///
/// let pool = SyncPool::<Vec<u8>>::new();
/// let worker = pool.clone();
/// std::thread::spawn(move || worker.collect_one(vec![1, 2, 3]))
/// 	.join()
/// 	.unwrap();
/// assert_eq!(pool.len(), 1);
/// assert!(pool.claim_one().is_empty());
/// ```
pub struct SyncPool<T> {
	sender: Sender<T>,
	receiver: Receiver<T>,
	factory: Arc<dyn Fn() -> T + Send + Sync>,
	options: PoolOptions,
}

impl<T: Default + Reset + 'static> SyncPool<T> {
	/// Creates a pool creating objects with [`Default`].
	pub fn new() -> Self {
		Self::with_options(T::default, PoolOptions::default())
	}
}

impl<T: Default + Reset + 'static> Default for SyncPool<T> {
	fn default() -> Self { Self::new() }
}

impl<T: Reset> SyncPool<T> {
	/// Creates a pool creating objects with `factory`.
	pub fn with_factory(factory: impl Fn() -> T + Send + Sync + 'static) -> Self {
		Self::with_options(factory, PoolOptions::default())
	}

	/// Creates a pool creating objects with `factory`, configured by `options`.
	/// The queue is unbounded only when `options` is.
	pub fn with_options(factory: impl Fn() -> T + Send + Sync + 'static, options: PoolOptions) -> Self {
		let (sender, receiver) = if options.is_unbounded() {
			unbounded()
		} else {
			bounded(options.max_retained())
		};

		let pool = Self { sender, receiver, factory: Arc::new(factory), options };
		let prefill = options.prefill().min(options.max_retained());
		for value in repeat_with(&*pool.factory).take(prefill) {
			pool.push(value);
		}
		pool
	}

	/// Returns the pool options.
	pub fn options(&self) -> PoolOptions { self.options }

	/// Claims a single object, creating one if none are retained.
	pub fn claim_one(&self) -> T {
		match self.receiver.try_recv() {
			Ok(value) => {
				trace!("claimed pooled object, {} retained", self.receiver.len());
				value
			}
			Err(_) => {
				trace!("pool empty, creating object");
				(self.factory)()
			}
		}
	}

	/// Claims `count` objects into `target`.
	pub fn claim_count(&self, target: &mut impl Extend<T>, count: usize) {
		target.extend(repeat_with(|| self.claim_one()).take(count))
	}

	/// Resets an object and collects it back into the pool. The object is dropped
	/// instead if the pool is full.
	pub fn collect_one(&self, mut value: T) {
		value.reset();
		self.push(value);
	}

	/// Collects many objects back into the pool.
	pub fn collect(&self, values: impl IntoIterator<Item = T>) {
		for value in values {
			self.collect_one(value)
		}
	}

	/// Drops all retained objects. Objects collected concurrently may survive.
	pub fn shed(&self) {
		let count = self.receiver.try_iter().count();
		debug!("shed {count} pooled objects");
	}

	fn push(&self, value: T) {
		match self.sender.try_send(value) {
			Ok(()) => trace!("collected object, {} retained", self.sender.len()),
			Err(TrySendError::Full(_)) =>
				debug!("pool full at {} objects, discarding collected object", self.sender.len()),
			// Both ends live as long as the pool.
			Err(TrySendError::Disconnected(_)) => { }
		}
	}
}

impl<T> SyncPool<T> {
	/// Returns the number of retained objects.
	pub fn len(&self) -> usize { self.receiver.len() }

	pub fn is_empty(&self) -> bool { self.receiver.is_empty() }
}

impl<T> Clone for SyncPool<T> {
	fn clone(&self) -> Self {
		Self {
			sender: self.sender.clone(),
			receiver: self.receiver.clone(),
			factory: Arc::clone(&self.factory),
			options: self.options,
		}
	}
}

impl<T> Debug for SyncPool<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("SyncPool")
		 .field("len", &self.len())
		 .field("options", &self.options)
		 .finish_non_exhaustive()
	}
}
