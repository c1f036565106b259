use std::cmp::Ordering;
use std::ops::{Bound, Index, IndexMut, Range, RangeBounds};

use super::PaddedDeque;
use crate::error::Error;

impl<T> PaddedDeque<T> {
	/// The live window, first element first.
	pub fn as_slice(&self) -> &[T] {
		self.buffer.slice(self.left..self.right)
	}

	pub fn as_mut_slice(&mut self) -> &mut [T] {
		self.buffer.slice_mut(self.left..self.right)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.as_slice().iter()
	}

	pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
		self.as_mut_slice().iter_mut()
	}

	pub fn front(&self) -> Option<&T> {
		self.as_slice().first()
	}

	pub fn back(&self) -> Option<&T> {
		self.as_slice().last()
	}

	/// Element at `index`; negative indices count from the end, so `-1` is the
	/// last element. Only the current length bounds the index, not `maxsize`.
	pub fn get(&self, index: isize) -> Result<&T, Error> {
		let index = self.resolve(index)?;
		Ok(self.buffer.get(self.left + index))
	}

	pub fn get_mut(&mut self, index: isize) -> Result<&mut T, Error> {
		let index = self.resolve(index)?;
		Ok(self.buffer.get_mut(self.left + index))
	}

	pub fn set(&mut self, index: isize, value: T) -> Result<(), Error> {
		*self.get_mut(index)? = value;
		Ok(())
	}

	/// Copies out the elements in `range`. Bounds are clamped to the current
	/// length and negative bounds count from the end.
	pub fn slice(&self, range: impl RangeBounds<isize>) -> Vec<T>
	where
		T: Clone,
	{
		let range = self.clamp_range(range);
		self.buffer.slice(self.left + range.start..self.left + range.end).to_vec()
	}

	/// Overwrites the elements in `range` in place. Bounds are clamped like
	/// [`slice`](Self::slice) and the number of values must match the clamped
	/// length exactly; nothing is written otherwise.
	pub fn set_slice<I>(&mut self, range: impl RangeBounds<isize>, values: I) -> Result<(), Error>
	where
		I: IntoIterator<Item = T>,
		I::IntoIter: ExactSizeIterator,
	{
		let range = self.clamp_range(range);
		let values = values.into_iter();
		if values.len() != range.len() {
			return Err(Error::LengthMismatch {
				expected: range.len(),
				actual: values.len(),
			});
		}

		let start = self.left + range.start;
		let slots = self.buffer.slice_mut(start..self.left + range.end);
		for (slot, value) in slots.iter_mut().zip(values) {
			*slot = value;
		}
		Ok(())
	}

	pub fn to_vec(&self) -> Vec<T>
	where
		T: Clone,
	{
		self.as_slice().to_vec()
	}

	/// First index in `start..stop` holding `value`. `stop` defaults to the length.
	pub fn index_of(&self, value: &T, start: usize, stop: Option<usize>) -> Option<usize>
	where
		T: PartialEq,
	{
		let stop = stop.map_or(self.len(), |stop| stop.min(self.len()));
		if start >= stop {
			return None;
		}
		self.as_slice()[start..stop]
			.iter()
			.position(|element| element == value)
			.map(|position| position + start)
	}

	/// Every index holding `value`, in order.
	pub fn positions(&self, value: &T) -> Vec<usize>
	where
		T: PartialEq,
	{
		self.iter()
			.enumerate()
			.filter(|(_, element)| *element == value)
			.map(|(index, _)| index)
			.collect()
	}

	pub fn count(&self, value: &T) -> usize
	where
		T: PartialEq,
	{
		self.iter().filter(|element| *element == value).count()
	}

	pub fn contains(&self, value: &T) -> bool
	where
		T: PartialEq,
	{
		self.as_slice().contains(value)
	}

	/// Reverses the window in place. This also reverses the eviction order.
	pub fn reverse(&mut self) {
		self.as_mut_slice().reverse();
	}

	/// Sorts the window in place. This also changes the eviction order.
	pub fn sort(&mut self)
	where
		T: Ord,
	{
		self.as_mut_slice().sort();
	}

	pub fn sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&T, &T) -> Ordering,
	{
		self.as_mut_slice().sort_by(compare);
	}
}

impl<T> PaddedDeque<T> {
	/// Maps a possibly negative logical index to a valid one.
	pub(super) fn resolve(&self, index: isize) -> Result<usize, Error> {
		let len = self.len();
		let resolved = match usize::try_from(index) {
			Ok(index) => Some(index),
			Err(_) => len.checked_sub(index.unsigned_abs()),
		};
		resolved
			.filter(|&resolved| resolved < len)
			.ok_or(Error::IndexOutOfRange { index, len })
	}

	fn clamp_bound(&self, bound: isize) -> usize {
		let len = self.len();
		match usize::try_from(bound) {
			Ok(bound) => bound.min(len),
			Err(_) => len.saturating_sub(bound.unsigned_abs()),
		}
	}

	/// Like `clamp_bound`, but for the position just past `bound`.
	fn clamp_after(&self, bound: isize) -> usize {
		let len = self.len();
		match usize::try_from(bound) {
			Ok(bound) => bound.saturating_add(1).min(len),
			Err(_) => len
				.checked_sub(bound.unsigned_abs())
				.map_or(0, |bound| bound + 1),
		}
	}

	fn clamp_range(&self, range: impl RangeBounds<isize>) -> Range<usize> {
		let start = match range.start_bound() {
			Bound::Included(&start) => self.clamp_bound(start),
			Bound::Excluded(&start) => self.clamp_after(start),
			Bound::Unbounded => 0,
		};
		let end = match range.end_bound() {
			Bound::Included(&end) => self.clamp_after(end),
			Bound::Excluded(&end) => self.clamp_bound(end),
			Bound::Unbounded => self.len(),
		};
		start..end.max(start)
	}
}

impl<T> Index<usize> for PaddedDeque<T> {
	type Output = T;

	fn index(&self, index: usize) -> &T {
		&self.as_slice()[index]
	}
}

impl<T> IndexMut<usize> for PaddedDeque<T> {
	fn index_mut(&mut self, index: usize) -> &mut T {
		&mut self.as_mut_slice()[index]
	}
}
