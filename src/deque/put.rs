use super::{PaddedDeque, Side};

impl<T: Default> PaddedDeque<T> {
	/// Appends `value` to the right end, evicting the leftmost element if the
	/// deque is full.
	pub fn put(&mut self, value: T) {
		self.last_write = Side::Right;

		if self.is_full() {
			self.evict_left(1);
		}
		if self.right == self.buffer.len() {
			self.recenter(Side::Right);
		}

		self.buffer.write(self.right, value);
		self.right += 1;
	}

	/// Prepends `value` to the left end, evicting the rightmost element if the
	/// deque is full.
	pub fn putleft(&mut self, value: T) {
		self.last_write = Side::Left;

		if self.is_full() {
			self.evict_right(1);
		}
		if self.left == 0 {
			self.recenter(Side::Left);
		}

		self.left -= 1;
		self.buffer.write(self.left, value);
	}

	/// Same result as calling [`put`](Self::put) for each value in order, with
	/// at most one eviction pass and one recenter.
	pub fn putter<I>(&mut self, values: I)
	where
		I: IntoIterator<Item = T>,
		I::IntoIter: ExactSizeIterator,
	{
		let values = values.into_iter();
		let count = values.len();
		if count == 0 {
			return;
		}
		self.last_write = Side::Right;

		let maxsize = self.options.maxsize;
		if count >= maxsize {
			log::debug!("putter of {count} values replaces the whole window");
			self.reset_window(self.home());
			for value in values.skip(count - maxsize).take(maxsize) {
				self.buffer.write(self.right, value);
				self.right += 1;
			}
			return;
		}

		self.evict_left((self.len() + count).saturating_sub(maxsize));
		if self.right + count > self.buffer.len() {
			self.recenter(Side::Right);
		}

		for value in values.take(count) {
			self.buffer.write(self.right, value);
			self.right += 1;
		}
	}

	/// Same result as calling [`putleft`](Self::putleft) for each value in
	/// order, so the values end up reversed at the front.
	pub fn putterleft<I>(&mut self, values: I)
	where
		I: IntoIterator<Item = T>,
		I::IntoIter: ExactSizeIterator,
	{
		let values = values.into_iter();
		let count = values.len();
		if count == 0 {
			return;
		}
		self.last_write = Side::Left;

		let maxsize = self.options.maxsize;
		if count >= maxsize {
			log::debug!("putterleft of {count} values replaces the whole window");
			self.reset_window(self.home() + maxsize);
			for value in values.skip(count - maxsize).take(maxsize) {
				self.left -= 1;
				self.buffer.write(self.left, value);
			}
			return;
		}

		self.evict_right((self.len() + count).saturating_sub(maxsize));
		if self.left < count {
			self.recenter(Side::Left);
		}

		for value in values.take(count) {
			self.left -= 1;
			self.buffer.write(self.left, value);
		}
	}
}
