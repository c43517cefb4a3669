// SPDX-License-Identifier: Apache-2.0

//! Object pools. Pooled objects are [reset](Reset) before they re-enter a pool, so
//! a claimed object never carries data from its previous use.

mod array;
mod options;
mod sync;

pub use array::ArrayPool;
pub use options::PoolOptions;
pub use sync::SyncPool;

use std::cell::{BorrowMutError, RefCell, RefMut};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::{self, Debug, Formatter};
use std::iter::repeat_with;
use std::ops::DerefMut;
use std::rc::Rc;
use std::result;
use log::{debug, trace};

#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("failed to borrow the pool")]
pub struct PoolError;

pub type Result<T = ()> = result::Result<T, PoolError>;

impl From<BorrowMutError> for PoolError {
	fn from(_: BorrowMutError) -> Self { Self }
}

/// Clears an object before it is returned to a pool.
pub trait Reset {
	fn reset(&mut self);
}

macro_rules! reset_by_clear {
    ($($ty:ident$(<$($param:ident),+>)?),+) => {
		$(
		impl$(<$($param),+>)? Reset for $ty$(<$($param),+>)? {
			fn reset(&mut self) { self.clear() }
		}
		)+
	};
}

reset_by_clear! {
	Vec<T>,
	String,
	VecDeque<T>,
	HashMap<K, V, S>,
	HashSet<T, S>,
	BTreeMap<K, V>,
	BTreeSet<T>
}

pub trait Pool<T>: Clone {
	type Pool: MutPool<T>;
	type Ref<'p>: DerefMut<Target = Self::Pool> where Self: 'p;

	/// Borrows the pool mutably, locking it for the duration of the borrow.
	fn try_borrow(&self) -> Result<Self::Ref<'_>>;

	/// Claims a single object.
	fn claim_one(&self) -> Result<T> {
		Ok(self.try_borrow()?.claim_one())
	}

	/// Claims `count` objects into `target`.
	fn claim_count(&self, target: &mut impl Extend<T>, count: usize) -> Result {
		Ok(self.try_borrow()?.claim_count(target, count))
	}

	/// Collects a single object back into the pool.
	fn collect_one(&self, value: T) -> Result {
		Ok(self.try_borrow()?.collect_one(value))
	}

	/// Collects many objects back into the pool.
	fn collect(&self, values: impl IntoIterator<Item = T>) -> Result {
		Ok(self.try_borrow()?.collect(values))
	}

	/// Drops all retained objects.
	fn shed(&self) -> Result {
		Ok(self.try_borrow()?.shed())
	}
}

/// A mutably-borrowed pool, usually from a [`RefCell`].
pub trait MutPool<T> {
	/// Ensures at least `count` objects are retained, creating any missing.
	fn claim_reserve(&mut self, count: usize);

	/// Claims a single object, creating one if none are retained.
	fn claim_one(&mut self) -> T;

	/// Claims `count` objects into `target`.
	fn claim_count(&mut self, target: &mut impl Extend<T>, count: usize) where Self: Sized {
		target.extend(repeat_with(|| self.claim_one()).take(count))
	}

	/// Resets an object and collects it back into the pool. The object may be
	/// dropped instead if the pool is full.
	fn collect_one(&mut self, value: T);

	/// Collects many objects back into the pool.
	fn collect(&mut self, values: impl IntoIterator<Item = T>) where Self: Sized {
		for value in values {
			self.collect_one(value)
		}
	}

	/// Drops all retained objects.
	fn shed(&mut self);

	/// Returns the number of retained objects.
	fn len(&self) -> usize;

	fn is_empty(&self) -> bool { self.len() == 0 }
}

/// A single-threaded, queue-backed pool. Objects are claimed in the order they
/// were collected.
pub struct BasicPool<T> {
	queue: VecDeque<T>,
	factory: Box<dyn Fn() -> T>,
	options: PoolOptions,
}

impl<T: Default + Reset + 'static> BasicPool<T> {
	/// Creates a pool creating objects with [`Default`].
	pub fn new() -> Self {
		Self::with_options(T::default, PoolOptions::default())
	}
}

impl<T: Default + Reset + 'static> Default for BasicPool<T> {
	fn default() -> Self { Self::new() }
}

impl<T: Reset> BasicPool<T> {
	/// Creates a pool creating objects with `factory`.
	pub fn with_factory(factory: impl Fn() -> T + 'static) -> Self {
		Self::with_options(factory, PoolOptions::default())
	}

	/// Creates a pool creating objects with `factory`, configured by `options`.
	pub fn with_options(factory: impl Fn() -> T + 'static, options: PoolOptions) -> Self {
		let mut queue = VecDeque::with_capacity(options.initial_capacity());
		let prefill = options.prefill().min(options.max_retained());
		queue.extend(repeat_with(&factory).take(prefill));
		Self { queue, factory: Box::new(factory), options }
	}

	/// Returns the pool options.
	pub fn options(&self) -> PoolOptions { self.options }
}

impl<T: Reset> MutPool<T> for BasicPool<T> {
	fn claim_reserve(&mut self, count: usize) {
		let count = count.min(self.options.max_retained());
		let missing = count.saturating_sub(self.queue.len());
		self.queue.extend(repeat_with(&self.factory).take(missing));
	}

	fn claim_one(&mut self) -> T {
		match self.queue.pop_front() {
			Some(value) => {
				trace!("claimed pooled object, {} retained", self.queue.len());
				value
			}
			None => {
				trace!("pool empty, creating object");
				(self.factory)()
			}
		}
	}

	fn collect_one(&mut self, mut value: T) {
		if self.queue.len() >= self.options.max_retained() {
			debug!("pool full at {} objects, discarding collected object", self.queue.len());
			return
		}

		value.reset();
		self.queue.push_back(value);
		trace!("collected object, {} retained", self.queue.len());
	}

	fn shed(&mut self) {
		debug!("shedding {} pooled objects", self.queue.len());
		self.queue.clear();
		self.queue.shrink_to(self.options.initial_capacity());
	}

	fn len(&self) -> usize { self.queue.len() }
}

impl<T> Debug for BasicPool<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("BasicPool")
		 .field("len", &self.queue.len())
		 .field("options", &self.options)
		 .finish_non_exhaustive()
	}
}

/// A shared handle to a single-threaded [`BasicPool`]. Clones share the same
/// pool. Borrowing fails with [`PoolError`] while another borrow is held.
pub struct LocalPool<T>(Rc<RefCell<BasicPool<T>>>);

impl<T> Clone for LocalPool<T> {
	fn clone(&self) -> Self { Self(Rc::clone(&self.0)) }
}

impl<T: Default + Reset + 'static> Default for LocalPool<T> {
	fn default() -> Self { BasicPool::new().into() }
}

impl<T> From<BasicPool<T>> for LocalPool<T> {
	fn from(value: BasicPool<T>) -> Self {
		Self(Rc::new(value.into()))
	}
}

impl<T: Reset> Pool<T> for LocalPool<T> {
	type Pool = BasicPool<T>;
	type Ref<'p> = RefMut<'p, BasicPool<T>> where T: 'p;

	fn try_borrow(&self) -> Result<Self::Ref<'_>> {
		Ok(self.0.try_borrow_mut()?)
	}
}

impl<T> Debug for LocalPool<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self.0.try_borrow() {
			Ok(pool) => f.debug_tuple("LocalPool").field(&*pool).finish(),
			Err(_) => f.write_str("LocalPool(<borrowed>)")
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn collected_objects_are_reset() {
		let mut pool = BasicPool::<Vec<u8>>::new();
		let mut vec = pool.claim_one();
		vec.extend_from_slice(b"secret");
		let capacity = vec.capacity();
		pool.collect_one(vec);
		assert_eq!(pool.len(), 1);

		let vec = pool.claim_one();
		assert!(vec.is_empty());
		assert_eq!(vec.capacity(), capacity);
		assert!(pool.is_empty());
	}

	#[test]
	fn claims_in_collection_order() {
		let mut pool = BasicPool::with_factory(|| String::from("new"));
		let mut a = String::with_capacity(1);
		let mut b = String::with_capacity(64);
		a.push('a');
		b.push('b');
		pool.collect([a, b]);
		assert_eq!(pool.claim_one().capacity(), 1);
		assert_eq!(pool.claim_one().capacity(), 64);
		assert_eq!(pool.claim_one(), "new");
	}

	#[test]
	fn discards_beyond_max_retained() {
		let mut pool = BasicPool::with_options(Vec::<u8>::new, PoolOptions::new().with_max_retained(2));
		pool.collect(repeat_with(Vec::new).take(5));
		assert_eq!(pool.len(), 2);
		pool.claim_reserve(10);
		assert_eq!(pool.len(), 2);
		pool.shed();
		assert!(pool.is_empty());
	}

	#[test]
	fn prefill() {
		let pool = BasicPool::with_options(Vec::<u8>::new, PoolOptions::new().with_prefill(3));
		assert_eq!(pool.len(), 3);
	}

	#[test]
	fn claim_count() {
		let mut pool = BasicPool::<String>::new();
		pool.claim_reserve(2);
		let mut claimed = Vec::new();
		pool.claim_count(&mut claimed, 3);
		assert_eq!(claimed.len(), 3);
		assert!(pool.is_empty());
	}

	#[test]
	fn local_pool_rejects_reentrant_borrow() {
		let pool = LocalPool::<Vec<u32>>::default();
		let handle = pool.clone();
		let borrow = pool.try_borrow().unwrap();
		assert_eq!(handle.claim_one().unwrap_err(), PoolError);
		assert_eq!(handle.collect_one(Vec::new()), Err(PoolError));
		drop(borrow);

		handle.collect_one(vec![1, 2, 3]).unwrap();
		assert_eq!(pool.try_borrow().unwrap().len(), 1);
		assert_eq!(pool.claim_one().unwrap(), Vec::<u32>::new());
	}
}
