use std::str::FromStr;

use paste::paste;
use serde::Deserialize;
use serde_with::DeserializeFromStr;

use crate::error::Error;

macro_rules! str_enum {
	(#[description = $descr:tt] $(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident = $variant_str:tt $(| $alias:tt)*),* $(,)? }) => { paste! {
		$(#[$meta])* $vis enum $name {
			$($variant,)*
		}

		#[derive(Debug, thiserror::Error)]
		#[error("unrecognized {} {0:?}", Self::DESCRIPTION)]
		pub struct [<$name FromStrError>](Box<str>);

		impl [<$name FromStrError>] {
			const DESCRIPTION: &str = $descr;
		}

		impl FromStr for $name {
			type Err = [<$name FromStrError>];

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Ok(match s {
					$($variant_str $(| $alias)* => Self::$variant,)*
					_ => return Err([<$name FromStrError>](s.into())),
				})
			}
		}

		impl $name {
			pub fn as_str(self) -> &'static str {
				match self {
					$(Self::$variant => $variant_str,)*
				}
			}
		}
	} }
}

str_enum! {
#[description = "priority"]
/// Named presets for [`Bias`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, DeserializeFromStr)]
pub enum Priority {
	Equal = "equal" | "e",
	Right = "right" | "r",
	Left = "left" | "l",
	LeftOnly = "leftonly" | "lo",
	RightOnly = "rightonly" | "ro",
}
}

/// How a recenter splits the spare slots of the buffer between the two sides.
///
/// This is the share given to the right padding: `1.0` keeps the whole slack on
/// the right (fast `put`, every `putleft` on an exhausted left side shifts) and
/// `0.0` is the mirror image.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(try_from = "RawBias")]
pub struct Bias(f64);

impl Bias {
	pub const LEFT_ONLY: Self = Self(0.0);
	pub const LEFT: Self = Self(0.25);
	pub const EQUAL: Self = Self(0.5);
	pub const RIGHT: Self = Self(0.75);
	pub const RIGHT_ONLY: Self = Self(1.0);

	pub fn new(value: f64) -> Result<Self, Error> {
		if (0.0..=1.0).contains(&value) {
			Ok(Self(value))
		} else {
			Err(Error::InvalidBias(value))
		}
	}

	pub fn get(self) -> f64 {
		self.0
	}

	/// Physical offset the window is anchored to, given `pad` spare slots.
	pub(crate) fn home(self, pad: usize) -> usize {
		#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
		let home = ((1.0 - self.0) * pad as f64).floor() as usize;
		home.min(pad)
	}
}

impl Default for Bias {
	fn default() -> Self {
		Self::RIGHT
	}
}

impl From<Priority> for Bias {
	fn from(priority: Priority) -> Self {
		match priority {
			Priority::Equal => Self::EQUAL,
			Priority::Right => Self::RIGHT,
			Priority::Left => Self::LEFT,
			Priority::LeftOnly => Self::LEFT_ONLY,
			Priority::RightOnly => Self::RIGHT_ONLY,
		}
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBias {
	Value(f64),
	Text(String),
}

impl TryFrom<RawBias> for Bias {
	type Error = BiasFromStrError;

	fn try_from(raw: RawBias) -> Result<Self, Self::Error> {
		match raw {
			RawBias::Value(value) => Ok(Self::new(value)?),
			RawBias::Text(text) => text.parse(),
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum BiasFromStrError {
	#[error(transparent)]
	Priority(#[from] PriorityFromStrError),
	#[error(transparent)]
	OutOfRange(#[from] Error),
}

impl FromStr for Bias {
	type Err = BiasFromStrError;

	/// Accepts either a priority name or a number in `[0, 1]`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.parse::<f64>() {
			Ok(value) => Ok(Self::new(value)?),
			Err(_) => Ok(s.parse::<Priority>()?.into()),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Options {
	pub maxsize: usize,
	#[serde(default)]
	pub bias: Bias,
	/// Approximate number of spare slots wanted on each side of the window.
	#[serde(default)]
	pub buffer_padding: Option<usize>,
	/// Exact buffer length, overriding `buffer_padding`. Never less than `maxsize`.
	#[serde(default)]
	pub buffer_size: Option<usize>,
}

impl Options {
	pub fn new(maxsize: usize) -> Self {
		Self {
			maxsize,
			bias: Bias::default(),
			buffer_padding: None,
			buffer_size: None,
		}
	}

	#[must_use]
	pub fn with_bias(self, bias: impl Into<Bias>) -> Self {
		Self {
			bias: bias.into(),
			..self
		}
	}

	#[must_use]
	pub fn with_buffer_padding(self, padding: usize) -> Self {
		Self {
			buffer_padding: Some(padding),
			..self
		}
	}

	#[must_use]
	pub fn with_buffer_size(self, size: usize) -> Self {
		Self {
			buffer_size: Some(size),
			..self
		}
	}

	/// Length of the physical buffer these options allocate.
	pub fn capacity(&self) -> Result<usize, Error> {
		if self.maxsize == 0 {
			return Err(Error::InvalidCapacity(self.maxsize));
		}
		match self.buffer_size {
			Some(size) => Ok(size.max(self.maxsize)),
			None => buffer_capacity(self.maxsize, self.buffer_padding),
		}
	}
}

const SMALL_MAXSIZE: usize = 4;
const SMALL_CAPACITY: usize = 32;
const SMALL_PADDED_CAPACITY: usize = 8;
const MIN_SLACK: usize = 8;
const MAX_AUTO_SLACK: usize = 2048;
const SLACK_TRIM_STEP: usize = 128;

/// Buffer length for a deque of `maxsize` elements, rounded to a power of two
/// when that does not waste more than [`MAX_AUTO_SLACK`] slots. Fails when the
/// length does not fit in a `usize`.
pub fn buffer_capacity(maxsize: usize, buffer_padding: Option<usize>) -> Result<usize, Error> {
	let overflow = || Error::InvalidCapacity(maxsize);

	let (requested, mut capacity) = match buffer_padding {
		None => {
			if maxsize < SMALL_MAXSIZE {
				return Ok(SMALL_CAPACITY);
			}
			let requested = maxsize.checked_mul(2).ok_or_else(overflow)?;
			let mut capacity = requested.checked_next_power_of_two().ok_or_else(overflow)?;
			if capacity == requested {
				capacity = capacity.checked_mul(2).ok_or_else(overflow)?;
			}
			(requested, capacity)
		}
		Some(padding) => {
			let requested = padding
				.checked_mul(2)
				.and_then(|padding| padding.checked_add(maxsize))
				.ok_or_else(overflow)?;
			if maxsize < SMALL_MAXSIZE && requested < SMALL_PADDED_CAPACITY {
				return Ok(SMALL_PADDED_CAPACITY);
			}
			(requested, requested.checked_next_power_of_two().ok_or_else(overflow)?)
		}
	};

	while capacity - requested < MIN_SLACK {
		capacity = capacity.checked_mul(2).ok_or_else(overflow)?;
	}
	while capacity - requested > MAX_AUTO_SLACK {
		capacity -= SLACK_TRIM_STEP;
	}

	Ok(capacity)
}

#[test]
fn test_buffer_capacity() {
	assert_eq!(buffer_capacity(1, None), Ok(32));
	assert_eq!(buffer_capacity(3, None), Ok(32));
	// 10 rounds to 16, which leaves less than 8 spare.
	assert_eq!(buffer_capacity(5, None), Ok(32));
	// Exactly a power of two gets doubled.
	assert_eq!(buffer_capacity(8, None), Ok(32));
	assert_eq!(buffer_capacity(100, None), Ok(256));
	assert_eq!(buffer_capacity(2, Some(1)), Ok(8));
	assert_eq!(buffer_capacity(10, Some(10)), Ok(64));
	assert_eq!(buffer_capacity(100, Some(10)), Ok(128));

	for (maxsize, padding) in [(10, None), (100, Some(10)), (10, Some(100)), (5000, None)] {
		let capacity = buffer_capacity(maxsize, padding).unwrap();
		let requested = padding.map_or(2 * maxsize, |padding| maxsize + 2 * padding);
		assert!(capacity >= requested + MIN_SLACK);
		assert!(capacity - requested <= MAX_AUTO_SLACK);
	}
}

#[test]
fn test_buffer_capacity_overflow() {
	let huge = usize::MAX / 2 + 1;
	assert_eq!(buffer_capacity(huge, None), Err(Error::InvalidCapacity(huge)));
	assert_eq!(buffer_capacity(4, Some(huge)), Err(Error::InvalidCapacity(4)));
	assert_eq!(buffer_capacity(4, Some(usize::MAX / 2)), Err(Error::InvalidCapacity(4)));
	// The doubling needed for slack would overflow.
	assert_eq!(
		buffer_capacity(usize::MAX / 4 + 1, None),
		Err(Error::InvalidCapacity(usize::MAX / 4 + 1))
	);

	assert_eq!(
		Options::new(4).with_buffer_padding(huge).capacity(),
		Err(Error::InvalidCapacity(4))
	);
	assert_eq!(Options::new(0).capacity(), Err(Error::InvalidCapacity(0)));
}

#[test]
fn test_parse_bias() {
	assert_eq!("right".parse::<Bias>().unwrap(), Bias::RIGHT);
	assert_eq!("lo".parse::<Bias>().unwrap(), Bias::LEFT_ONLY);
	assert_eq!("0.5".parse::<Bias>().unwrap(), Bias::EQUAL);
	assert!(matches!(
		"1.5".parse::<Bias>(),
		Err(BiasFromStrError::OutOfRange(Error::InvalidBias(_)))
	));
	assert!(matches!(
		"sideways".parse::<Bias>(),
		Err(BiasFromStrError::Priority(_))
	));
	assert!(Bias::new(f64::NAN).is_err());
}

#[test]
fn test_home() {
	// Same anchors as the named priorities with five spare slots.
	assert_eq!(Bias::RIGHT_ONLY.home(5), 0);
	assert_eq!(Bias::RIGHT.home(5), 1);
	assert_eq!(Bias::EQUAL.home(5), 2);
	assert_eq!(Bias::LEFT.home(5), 3);
	assert_eq!(Bias::LEFT_ONLY.home(5), 5);
	assert_eq!(Bias::EQUAL.home(0), 0);
}

#[test]
fn test_deserialize_options() {
	let options: Options = serde_json::from_str(r#"{"maxsize": 5, "bias": "left"}"#).unwrap();
	assert_eq!(options, Options::new(5).with_bias(Priority::Left));

	let options: Options = serde_json::from_str(r#"{"maxsize": 5, "bias": 0.1}"#).unwrap();
	assert_eq!(options.bias.get(), 0.1);

	let options: Options = serde_json::from_str(r#"{"maxsize": 5, "buffer_size": 3}"#).unwrap();
	assert_eq!(options.capacity(), Ok(5));

	// Numbers written as strings parse the same way as on the command line.
	let options: Options = serde_json::from_str(r#"{"maxsize": 5, "bias": "0.5"}"#).unwrap();
	assert_eq!(options.bias, Bias::EQUAL);
	let options: Options = serde_json::from_str(r#"{"maxsize": 5, "bias": "ro"}"#).unwrap();
	assert_eq!(options.bias, Bias::RIGHT_ONLY);

	assert!(serde_json::from_str::<Options>(r#"{"maxsize": 5, "bias": 2}"#).is_err());
	assert!(serde_json::from_str::<Options>(r#"{"maxsize": 5, "bias": "1.5"}"#).is_err());
	assert!(serde_json::from_str::<Options>(r#"{"maxsize": 5, "bias": "up"}"#).is_err());
}
