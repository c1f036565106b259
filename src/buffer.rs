use std::ops::Range;

/// Fixed-length physical storage behind a deque.
///
/// Slots that are not part of the live window always hold `T::default()`, so
/// anything evicted from the window is dropped right away.
#[derive(Debug, Clone)]
pub(crate) struct Buffer<T> {
	slots: Box<[T]>,
}

impl<T: Default> Buffer<T> {
	/// `None` if `len` slots of `T` exceed the largest possible allocation.
	pub fn new(len: usize) -> Option<Self> {
		let bytes = len.checked_mul(std::mem::size_of::<T>())?;
		if bytes > isize::MAX.unsigned_abs() {
			return None;
		}
		Some(Self {
			slots: std::iter::repeat_with(T::default).take(len).collect(),
		})
	}

	pub fn take(&mut self, index: usize) -> T {
		std::mem::take(&mut self.slots[index])
	}

	pub fn clear(&mut self, range: Range<usize>) {
		for slot in &mut self.slots[range] {
			*slot = T::default();
		}
	}

	pub fn into_vec(self, range: Range<usize>) -> Vec<T> {
		let mut slots = self.slots.into_vec();
		slots.truncate(range.end);
		slots.drain(..range.start);
		slots
	}
}

impl<T> Buffer<T> {
	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn write(&mut self, index: usize, value: T) {
		self.slots[index] = value;
	}

	pub fn get(&self, index: usize) -> &T {
		&self.slots[index]
	}

	pub fn get_mut(&mut self, index: usize) -> &mut T {
		&mut self.slots[index]
	}

	pub fn slice(&self, range: Range<usize>) -> &[T] {
		&self.slots[range]
	}

	pub fn slice_mut(&mut self, range: Range<usize>) -> &mut [T] {
		&mut self.slots[range]
	}

	/// Moves the block at `src` so that it starts at `dst`. The ranges may
	/// overlap; whatever occupied the destination ends up in the vacated slots.
	pub fn move_block(&mut self, src: Range<usize>, dst: usize) {
		let len = src.len();
		if dst < src.start {
			for offset in 0..len {
				self.slots.swap(dst + offset, src.start + offset);
			}
		} else if dst > src.start {
			for offset in (0..len).rev() {
				self.slots.swap(dst + offset, src.start + offset);
			}
		}
	}
}

#[test]
fn test_move_block() {
	let mut buffer = Buffer::<u8>::new(8).unwrap();
	for (index, value) in (2..5).zip(1..) {
		buffer.write(index, value);
	}

	buffer.move_block(2..5, 3);
	assert_eq!(buffer.slice(0..8), [0, 0, 0, 1, 2, 3, 0, 0]);

	buffer.move_block(3..6, 0);
	assert_eq!(buffer.slice(0..8), [1, 2, 3, 0, 0, 0, 0, 0]);

	buffer.move_block(0..3, 5);
	assert_eq!(buffer.slice(0..8), [0, 0, 0, 0, 0, 1, 2, 3]);

	buffer.move_block(5..8, 5);
	assert_eq!(buffer.slice(0..8), [0, 0, 0, 0, 0, 1, 2, 3]);
}

#[test]
fn test_new_rejects_oversized() {
	assert!(Buffer::<u64>::new(usize::MAX / 4).is_none());
	assert!(Buffer::<u8>::new(usize::MAX).is_none());
	assert_eq!(Buffer::<u64>::new(3).map(|buffer| buffer.len()), Some(3));
}

#[test]
fn test_into_vec() {
	let mut buffer = Buffer::<String>::new(6).unwrap();
	buffer.write(2, "a".into());
	buffer.write(3, "b".into());
	assert_eq!(buffer.into_vec(2..4), ["a", "b"]);
}
