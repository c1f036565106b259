use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
	#[error("invalid capacity {0}; the maximum size must be at least 1 and its buffer must fit in memory")]
	InvalidCapacity(usize),
	#[error("invalid bias {0}; expected a value between 0 and 1")]
	InvalidBias(f64),
	#[error("the deque is empty")]
	EmptyQueue,
	#[error("index {index} out of range for deque of length {len}")]
	IndexOutOfRange { index: isize, len: usize },
	#[error("slice assignment expected {expected} values, got {actual}")]
	LengthMismatch { expected: usize, actual: usize },
}
