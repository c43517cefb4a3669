// SPDX-License-Identifier: Apache-2.0

use std::collections::{BTreeSet, HashMap, HashSet, LinkedList};
use pretty_assertions::assert_eq;
use segview::read_only::{ReadCollection, ReadDictionary, ReadHashSet, ReadList};

#[test]
fn list_views_changes() {
	let mut list = vec![1, 2];
	list.push(3);
	let read = ReadList::new(&list);
	assert_eq!(read.len(), 3);
	assert_eq!(read.index_of(&3), Some(2));
	assert_eq!(read.as_segment().skip(1).unwrap().to_vec(), [2, 3]);
	assert_eq!(read[0], 1);
}

#[test]
fn absent_facades_are_empty() {
	let list = ReadList::<u8>::absent();
	let map: ReadDictionary<String, u8> = ReadDictionary::absent();
	let set: ReadHashSet<u8> = ReadHashSet::absent();
	let collection = ReadCollection::<LinkedList<u8>>::absent();

	assert!(list.is_empty() && map.is_empty() && set.is_empty() && collection.is_empty());
	assert!(list.as_segment().is_empty());
	assert_eq!(map.get("key"), None);
	assert_eq!(set.iter().count(), 0);
	assert!(!collection.contains(&0));
	assert_eq!(list, ReadList::default());
}

#[test]
fn equality_is_identity() {
	let a = vec![1];
	let b = vec![1];
	assert_eq!(ReadList::new(&a), ReadList::new(&a));
	assert_ne!(ReadList::new(&a), ReadList::new(&b));
	assert_ne!(ReadList::new(&a), ReadList::absent());
}

#[test]
fn generic_collections() {
	let tree: BTreeSet<_> = [3, 1, 2].into();
	let read = ReadCollection::new(&tree);
	assert_eq!(read.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
	assert!(read.contains(&2));

	let slice = ReadCollection::new(&[4, 5][..]);
	assert_eq!(slice.len(), 2);
}

#[test]
fn dictionary_and_set() {
	let map = HashMap::from([(1, "one"), (2, "two")]);
	let read = ReadDictionary::new(&map);
	assert_eq!(read.get(&2), Some(&"two"));
	assert!(read.contains_key(&1));
	let mut keys: Vec<_> = read.keys().copied().collect();
	keys.sort();
	assert_eq!(keys, [1, 2]);

	let small: HashSet<_> = map.keys().copied().collect();
	let large: HashSet<_> = [1, 2, 3].into();
	let small = ReadHashSet::new(&small);
	let large = ReadHashSet::new(&large);
	assert!(small.is_subset(&large));
	assert!(large.is_superset(&small));
	assert!(!large.is_subset(&small));
}
