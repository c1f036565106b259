use super::PaddedDeque;
use crate::error::Error;

impl<T: Default> PaddedDeque<T> {
	/// Removes and returns the rightmost element.
	pub fn pop(&mut self) -> Result<T, Error> {
		if self.is_empty() {
			return Err(Error::EmptyQueue);
		}
		self.right -= 1;
		Ok(self.buffer.take(self.right))
	}

	/// Removes and returns the leftmost element.
	pub fn popleft(&mut self) -> Result<T, Error> {
		if self.is_empty() {
			return Err(Error::EmptyQueue);
		}
		self.left += 1;
		Ok(self.buffer.take(self.left - 1))
	}

	/// Removes and returns the element at `index`, which may count from the end
	/// when negative. Whichever side of the gap is shorter is shifted to close it.
	pub fn drop(&mut self, index: isize) -> Result<T, Error> {
		let index = self.resolve(index)?;
		Ok(self.drop_at(index))
	}

	/// Removes the first element equal to `value`. Returns `None` if there was
	/// no such element.
	pub fn remove(&mut self, value: &T) -> Option<T>
	where
		T: PartialEq,
	{
		let index = self.index_of(value, 0, None)?;
		Some(self.drop_at(index))
	}

	fn drop_at(&mut self, index: usize) -> T {
		let position = self.left + index;
		let value = self.buffer.take(position);

		// The emptied slot is rotated out to the end that moves.
		if index < self.len() - index - 1 {
			self.buffer.slice_mut(self.left..position + 1).rotate_right(1);
			self.left += 1;
		} else {
			self.buffer.slice_mut(position..self.right).rotate_left(1);
			self.right -= 1;
		}

		value
	}
}
