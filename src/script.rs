//! Plain-text scripts of deque operations, one per line or separated by `/`.
//!
//! ```text
//! put 5/put 7/putter 1 2 3
//! drop -1
//! # comments and blank lines are skipped
//! setslice 0 2 -1 -2
//! ```

use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

use crate::deque::PaddedDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
	Put(i64),
	PutLeft(i64),
	Putter(Vec<i64>),
	PutterLeft(Vec<i64>),
	Pop,
	PopLeft,
	Drop(isize),
	Remove(i64),
	Set(isize, i64),
	SetSlice(isize, isize, Vec<i64>),
	Clear,
	Reverse,
	Sort,
	Resize(usize),
}

#[derive(Debug, Error)]
pub enum ParseError {
	#[error("unknown operation {0:?}")]
	UnknownOp(Box<str>),
	#[error("{op} expects {expected} argument(s), got {actual}")]
	WrongArity {
		op: &'static str,
		expected: &'static str,
		actual: usize,
	},
	#[error("invalid integer argument")]
	Integer(#[from] ParseIntError),
	#[error("operation {index}: {source}")]
	At {
		index: usize,
		#[source]
		source: Box<ParseError>,
	},
}

fn parse_args<N: FromStr<Err = ParseIntError>>(args: &[&str]) -> Result<Vec<N>, ParseError> {
	args.iter()
		.map(|arg| arg.parse().map_err(ParseError::from))
		.collect()
}

fn exact<'a, const N: usize>(op: &'static str, args: &[&'a str]) -> Result<[&'a str; N], ParseError> {
	args.try_into().map_err(|_| ParseError::WrongArity {
		op,
		expected: match N {
			0 => "no",
			1 => "one",
			_ => "two",
		},
		actual: args.len(),
	})
}

impl FromStr for Op {
	type Err = ParseError;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		let mut words = raw.split_whitespace();
		let name = words.next().unwrap_or("");
		let args = words.collect::<Vec<_>>();

		Ok(match name {
			"put" => {
				let [value] = exact::<1>("put", &args)?;
				Self::Put(value.parse()?)
			}
			"putleft" => {
				let [value] = exact::<1>("putleft", &args)?;
				Self::PutLeft(value.parse()?)
			}
			"putter" => Self::Putter(parse_args(&args)?),
			"putterleft" => Self::PutterLeft(parse_args(&args)?),
			"pop" => {
				let [] = exact::<0>("pop", &args)?;
				Self::Pop
			}
			"popleft" => {
				let [] = exact::<0>("popleft", &args)?;
				Self::PopLeft
			}
			"drop" => {
				let [index] = exact::<1>("drop", &args)?;
				Self::Drop(index.parse()?)
			}
			"remove" => {
				let [value] = exact::<1>("remove", &args)?;
				Self::Remove(value.parse()?)
			}
			"set" => {
				let [index, value] = exact::<2>("set", &args)?;
				Self::Set(index.parse()?, value.parse()?)
			}
			"setslice" => {
				let [lo, hi, values @ ..] = args.as_slice() else {
					return Err(ParseError::WrongArity {
						op: "setslice",
						expected: "at least two",
						actual: args.len(),
					});
				};
				Self::SetSlice(lo.parse()?, hi.parse()?, parse_args(values)?)
			}
			"clear" => {
				let [] = exact::<0>("clear", &args)?;
				Self::Clear
			}
			"reverse" => {
				let [] = exact::<0>("reverse", &args)?;
				Self::Reverse
			}
			"sort" => {
				let [] = exact::<0>("sort", &args)?;
				Self::Sort
			}
			"resize" => {
				let [maxsize] = exact::<1>("resize", &args)?;
				Self::Resize(maxsize.parse()?)
			}
			other => return Err(ParseError::UnknownOp(other.into())),
		})
	}
}

impl Op {
	/// Applies the operation, returning the element it took out, if any.
	pub fn apply(&self, deque: &mut PaddedDeque<i64>) -> Result<Option<i64>, crate::Error> {
		match self {
			Self::Put(value) => deque.put(*value),
			Self::PutLeft(value) => deque.putleft(*value),
			Self::Putter(values) => deque.putter(values.iter().copied()),
			Self::PutterLeft(values) => deque.putterleft(values.iter().copied()),
			Self::Pop => return deque.pop().map(Some),
			Self::PopLeft => return deque.popleft().map(Some),
			Self::Drop(index) => return deque.drop(*index).map(Some),
			Self::Remove(value) => return Ok(deque.remove(value)),
			Self::Set(index, value) => deque.set(*index, *value)?,
			Self::SetSlice(lo, hi, values) => deque.set_slice(*lo..*hi, values.iter().copied())?,
			Self::Clear => deque.clear(),
			Self::Reverse => deque.reverse(),
			Self::Sort => deque.sort(),
			Self::Resize(maxsize) => deque.resize(*maxsize)?,
		}
		Ok(None)
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script(pub Vec<Op>);

impl FromStr for Script {
	type Err = ParseError;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		raw.split(['\n', '/'])
			.map(str::trim)
			.filter(|op| !op.is_empty() && !op.starts_with('#'))
			.enumerate()
			.map(|(index, op)| {
				op.parse().map_err(|source| ParseError::At {
					index,
					source: Box::new(source),
				})
			})
			.collect::<Result<Vec<_>, _>>()
			.map(Self)
	}
}

impl Script {
	/// Runs every operation in order and returns the elements they took out.
	/// Stops at the first failing operation.
	pub fn run(&self, deque: &mut PaddedDeque<i64>) -> Result<Vec<i64>, crate::Error> {
		let mut removed = Vec::new();
		for op in &self.0 {
			removed.extend(op.apply(deque)?);
		}
		Ok(removed)
	}
}

#[test]
fn test_parse_ops() {
	assert_eq!("put 5".parse::<Op>().unwrap(), Op::Put(5));
	assert_eq!("  putleft   -3 ".parse::<Op>().unwrap(), Op::PutLeft(-3));
	assert_eq!(
		"putter 1 2 3".parse::<Op>().unwrap(),
		Op::Putter(vec![1, 2, 3])
	);
	assert_eq!("putter".parse::<Op>().unwrap(), Op::Putter(vec![]));
	assert_eq!("drop -1".parse::<Op>().unwrap(), Op::Drop(-1));
	assert_eq!(
		"setslice 1 3 -1 -2".parse::<Op>().unwrap(),
		Op::SetSlice(1, 3, vec![-1, -2])
	);
	assert!(matches!(
		"pop 1".parse::<Op>(),
		Err(ParseError::WrongArity { actual: 1, .. })
	));
	assert!(matches!("set 1".parse::<Op>(), Err(ParseError::WrongArity { .. })));
	assert!(matches!("put x".parse::<Op>(), Err(ParseError::Integer(_))));
	assert!(matches!("push 1".parse::<Op>(), Err(ParseError::UnknownOp(_))));
}

#[test]
fn test_parse_script() {
	let script = "put 1/put 2\n# comment\n\npop".parse::<Script>().unwrap();
	assert_eq!(script.0, [Op::Put(1), Op::Put(2), Op::Pop]);

	let err = "put 1/bogus".parse::<Script>().unwrap_err();
	assert!(matches!(err, ParseError::At { index: 1, .. }));
}

#[test]
fn test_exact_arity() {
	let args = ["1", "2"];
	assert_eq!(exact::<2>("set", &args).unwrap(), ["1", "2"]);
	assert!(matches!(
		exact::<1>("put", &args),
		Err(ParseError::WrongArity {
			op: "put",
			expected: "one",
			actual: 2
		})
	));
}
