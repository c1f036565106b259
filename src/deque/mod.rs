use std::fmt::{self, Display, Formatter};

use crate::buffer::Buffer;
use crate::error::Error;
use crate::options::{Bias, Options};

mod access;
mod put;
mod remove;

/// One end of the deque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
	Left,
	#[default]
	Right,
}

/// A double-ended queue with a fixed maximum size, stored in a single buffer
/// with spare slots on both sides of the live window.
///
/// Adding to a full deque silently evicts the element at the opposite end.
/// Running out of spare slots on one side moves the window back towards the
/// anchor chosen by the [`Bias`], which is the only time elements are shifted.
#[derive(Debug, Clone)]
pub struct PaddedDeque<T> {
	buffer: Buffer<T>,
	options: Options,
	/// Physical index of the first element.
	left: usize,
	/// Physical index one past the last element.
	right: usize,
	/// Side of the most recent put, used to decide what `resize` keeps.
	last_write: Side,
}

// Public API:

impl<T: Default> PaddedDeque<T> {
	pub fn new(maxsize: usize) -> Result<Self, Error> {
		Self::with_options(Options::new(maxsize))
	}

	pub fn with_options(options: Options) -> Result<Self, Error> {
		let buffer = Self::allocate(&options)?;
		let home = options.bias.home(buffer.len() - options.maxsize);
		Ok(Self {
			buffer,
			options,
			left: home,
			right: home,
			last_write: Side::default(),
		})
	}

	/// A full deque where every element is a clone of `value`. For fewer
	/// elements, use [`from_vec_with_options`](Self::from_vec_with_options).
	pub fn filled(options: Options, value: T) -> Result<Self, Error>
	where
		T: Clone,
	{
		let mut ret = Self::with_options(options)?;
		for index in ret.left..ret.left + options.maxsize {
			ret.buffer.write(index, value.clone());
		}
		ret.right = ret.left + options.maxsize;
		Ok(ret)
	}

	/// A deque holding `values`, whose maximum size is their count.
	pub fn from_vec(values: Vec<T>) -> Result<Self, Error> {
		Self::from_vec_with_options(Options::new(values.len()), values)
	}

	/// A deque holding `values`. If there are more than `options.maxsize`, only
	/// the leading ones are kept.
	pub fn from_vec_with_options(options: Options, values: Vec<T>) -> Result<Self, Error> {
		let mut ret = Self::with_options(options)?;
		for value in values.into_iter().take(options.maxsize) {
			ret.buffer.write(ret.right, value);
			ret.right += 1;
		}
		Ok(ret)
	}

	/// Changes the maximum size, reallocating the buffer. If the deque holds
	/// more than `maxsize` elements, the ones furthest from the most recent put
	/// are dropped.
	pub fn resize(&mut self, maxsize: usize) -> Result<(), Error> {
		let options = Options {
			maxsize,
			..self.options
		};
		let mut buffer = Self::allocate(&options)?;
		let len = self.len().min(maxsize);
		let src = match self.last_write {
			Side::Right => self.right - len,
			Side::Left => self.left,
		};
		let dst = options.bias.home(buffer.len() - maxsize);
		for offset in 0..len {
			buffer.write(dst + offset, self.buffer.take(src + offset));
		}

		log::debug!(
			"resized from {} to {maxsize}, dropped {} elements from the {:?} side",
			self.options.maxsize,
			self.len() - len,
			self.last_write.opposite(),
		);

		self.buffer = buffer;
		self.options = options;
		self.left = dst;
		self.right = dst + len;
		Ok(())
	}

	pub fn clear(&mut self) {
		self.reset_window(self.home());
	}

	pub fn into_vec(self) -> Vec<T> {
		self.buffer.into_vec(self.left..self.right)
	}
}

impl<T> PaddedDeque<T> {
	pub fn len(&self) -> usize {
		self.right - self.left
	}

	pub fn is_empty(&self) -> bool {
		self.left == self.right
	}

	pub fn is_full(&self) -> bool {
		self.len() == self.options.maxsize
	}

	pub fn maxsize(&self) -> usize {
		self.options.maxsize
	}

	pub fn capacity(&self) -> usize {
		self.buffer.len()
	}

	pub fn bias(&self) -> Bias {
		self.options.bias
	}

	pub fn options(&self) -> &Options {
		&self.options
	}

	pub fn left_padding(&self) -> usize {
		self.left
	}

	pub fn right_padding(&self) -> usize {
		self.buffer.len() - self.right
	}
}

// Implementation:

impl Side {
	fn opposite(self) -> Self {
		match self {
			Self::Left => Self::Right,
			Self::Right => Self::Left,
		}
	}
}

impl<T> PaddedDeque<T> {
	/// Where the first element goes after a right-side recenter. The left
	/// padding never drops below this and the right padding never drops below
	/// `pad - home` after a recenter on the respective side.
	fn home(&self) -> usize {
		self.options
			.bias
			.home(self.buffer.len() - self.options.maxsize)
	}

	/// Moves the window so the padding on `side` is restored.
	///
	/// The caller must have made room first: the window is at most
	/// `maxsize - 1` long for a single put, or `maxsize - count` for a bulk one.
	fn recenter(&mut self, side: Side) {
		let len = self.len();
		let home = self.home();
		let start = match side {
			Side::Right => home,
			Side::Left => home + self.options.maxsize - len,
		};

		log::trace!(
			"recentering for {side:?}: moving {len} elements from {}..{} to {start}..{}",
			self.left,
			self.right,
			start + len,
		);

		self.buffer.move_block(self.left..self.right, start);
		self.left = start;
		self.right = start + len;
	}
}

impl<T: Default> PaddedDeque<T> {
	fn allocate(options: &Options) -> Result<Buffer<T>, Error> {
		let capacity = options.capacity()?;
		Buffer::new(capacity).ok_or(Error::InvalidCapacity(options.maxsize))
	}

	fn evict_left(&mut self, count: usize) {
		self.buffer.clear(self.left..self.left + count);
		self.left += count;
	}

	fn evict_right(&mut self, count: usize) {
		self.buffer.clear(self.right - count..self.right);
		self.right -= count;
	}

	/// Empties the window and places it at `at`.
	fn reset_window(&mut self, at: usize) {
		self.buffer.clear(self.left..self.right);
		self.left = at;
		self.right = at;
	}
}

impl<T: PartialEq> PartialEq for PaddedDeque<T> {
	fn eq(&self, other: &Self) -> bool {
		self.as_slice() == other.as_slice()
	}
}

impl<T: Eq> Eq for PaddedDeque<T> {}

impl<T: Display> Display for PaddedDeque<T> {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter.write_str("PaddedDeque([")?;
		let [first, rest @ ..] = self.as_slice() else { return formatter.write_str("])"); };
		first.fmt(formatter)?;
		for value in rest {
			formatter.write_str(", ")?;
			value.fmt(formatter)?;
		}
		formatter.write_str("])")
	}
}

impl<T: Default> Extend<T> for PaddedDeque<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		for value in iter {
			self.put(value);
		}
	}
}

impl<T: Default> FromIterator<T> for PaddedDeque<T> {
	/// The maximum size is the number of items, and at least 1.
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let values = iter.into_iter().collect::<Vec<_>>();
		let options = Options::new(values.len().max(1));
		Self::from_vec_with_options(options, values)
			.unwrap_or_else(|_| unreachable!("maxsize is at least 1"))
	}
}

impl<'a, T> IntoIterator for &'a PaddedDeque<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'a, T> IntoIterator for &'a mut PaddedDeque<T> {
	type Item = &'a mut T;
	type IntoIter = std::slice::IterMut<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter_mut()
	}
}
