// SPDX-License-Identifier: Apache-2.0

use pretty_assertions::assert_eq;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use segview::{AsSegment, Error, SeekOffset, SeekOrigin, SegmentReader};
use common::Window;

#[macro_use]
mod common;

#[quickcheck]
fn sequential_reads_visit_all(window: Window) -> TestResult {
	let segment = window.data.segment(window.offset, window.count).unwrap();
	let mut reader = SegmentReader::new(segment);
	let mut visited: Vec<u32> = Vec::with_capacity(window.count);
	for _ in 0..window.count {
		match reader.read(1) {
			Ok(next) => visited.extend(next.iter()),
			Err(error) => return TestResult::error(format!("read failed early: {error}"))
		}
	}

	if reader.read(1).is_ok() {
		return TestResult::error("read past the end succeeded")
	}
	qc_assert_eq!(visited, window.expected())
}

#[quickcheck]
fn chunked_reads_rejoin(window: Window, chunk: usize) -> TestResult {
	let chunk = chunk % 8 + 1;
	let segment = window.data.segment(window.offset, window.count).unwrap();
	let mut reader = SegmentReader::from(segment);
	let mut joined: Vec<u32> = Vec::new();
	while reader.remaining() >= chunk {
		joined.extend(reader.read(chunk).unwrap().iter());
	}
	joined.extend(reader.read_to_end().unwrap().iter());
	qc_assert_eq!(joined, window.expected())
}

#[test]
fn seek_from_begin() {
	let data: Vec<u32> = (0..10).collect();
	let segment = data.as_segment();
	let mut reader = SegmentReader::new(segment);
	assert_eq!(reader.seek(5, SeekOrigin::Begin), 5);
	assert_eq!(reader.read(2), segment.slice_with(5, 2));
	assert_eq!(reader.position(), 7);
}

#[test]
fn seek_from_end() {
	let data: Vec<u32> = (0..10).collect();
	let mut reader = SegmentReader::new(data.as_segment());
	assert_eq!(reader.seek(-2, SeekOrigin::End), 8);
	assert_eq!(reader.read(2).unwrap().to_vec(), [8, 9]);
	assert!(reader.is_at_end());
}

#[test]
fn seek_from_current() {
	let data = *b"segments";
	let mut reader = SegmentReader::new(data.as_segment());
	reader.read(3).unwrap();
	assert_eq!(reader.seek(2, SeekOrigin::Current), 5);
	assert_eq!(reader.seek(-9, SeekOrigin::Current), -4);
	assert_eq!(reader.read(1), Err(Error::NegativeOffset { offset: -4 }));
	assert_eq!(reader.seek_offset(SeekOffset::FromEnd(-1)), 7);
	assert_eq!(reader.peek(1).unwrap().to_vec(), b"s");
	reader.reset();
	assert_eq!(reader.read(3).unwrap().to_vec(), b"seg");
}

#[test]
fn seek_before_start_fails_on_read() {
	let data: Vec<u32> = (0..10).collect();
	let mut reader = SegmentReader::new(data.as_segment());
	assert_eq!(reader.seek(-20, SeekOrigin::End), -10);
	assert_eq!(reader.read(2), Err(Error::NegativeOffset { offset: -10 }));
	assert_eq!(reader.seek(-3, SeekOrigin::Begin), -3);
	assert_eq!(reader.read(1), Err(Error::NegativeOffset { offset: -3 }));
	assert_eq!(reader.position(), -3);
	assert_eq!(reader.remaining(), 0);
}

#[test]
fn read_past_end_fails() {
	let data = [1, 2, 3];
	let mut reader = SegmentReader::new(data.as_segment());
	assert_eq!(
		reader.read(4),
		Err(Error::CountOutOfRange { offset: 0, count: 4, len: 3 })
	);
	assert_eq!(reader.position(), 0);
	assert_eq!(reader.seek(10, SeekOrigin::Begin), 10);
	assert_eq!(reader.read(1), Err(Error::OffsetOutOfRange { offset: 10, len: 3 }));
}

#[test]
fn empty_reader() {
	let data = Vec::<u8>::new();
	let mut reader = SegmentReader::new(data.as_segment());
	assert!(reader.is_at_end());
	assert_eq!(reader.read(1), Err(Error::CountOutOfRange { offset: 0, count: 1, len: 0 }));
	assert!(reader.read(0).unwrap().is_empty());
	assert!(reader.read_to_end().unwrap().is_empty());
	reader.seek(1, SeekOrigin::Begin);
	assert_eq!(reader.read_to_end(), Err(Error::IndexOutOfRange { index: 1, len: 0 }));
}
