//! A bounded double-ended queue backed by one pre-allocated buffer.
//!
//! The buffer is larger than the queue's maximum size, and the spare slots on
//! each side absorb puts at either end without moving anything. When one side
//! runs out, the window is shifted back towards an anchor set by the [`Bias`].
//! Putting into a full queue drops the element at the opposite end.
//!
//! ```
//! use padded_deque::PaddedDeque;
//!
//! let mut deque = PaddedDeque::new(3).unwrap();
//! deque.putter([1, 2, 3]);
//! deque.put(4);
//! assert_eq!(deque.as_slice(), [2, 3, 4]);
//! deque.putleft(0);
//! assert_eq!(deque.to_string(), "PaddedDeque([0, 2, 3])");
//! ```

pub use self::deque::{PaddedDeque, Side};
pub use self::error::Error;
pub use self::options::{
	buffer_capacity, Bias, BiasFromStrError, Options, Priority, PriorityFromStrError,
};

mod buffer;
mod deque;
mod error;
mod options;
pub mod script;
