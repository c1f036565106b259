#![allow(clippy::module_name_repetitions)]

use std::path::PathBuf;

use argh::FromArgs;
use padded_deque::Bias;

/// Bounded padded deque tools.
#[derive(FromArgs, Debug)]
pub struct Args {
	/// log every recenter and resize
	#[argh(switch, short = 'v')]
	pub verbose: bool,
	#[argh(subcommand)]
	pub command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub enum Command {
	Replay(ReplayArgs),
}

/// Run a script of deque operations and print what it leaves behind.
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "replay")]
pub struct ReplayArgs {
	/// path to the script, or `-` for stdin
	#[argh(positional, default = r#""-".into()"#)]
	pub script: PathBuf,
	/// path to a JSON file with the deque options
	#[argh(option, short = 'c')]
	pub config: Option<PathBuf>,
	/// maximum number of elements, overriding the config
	#[argh(option, short = 'n')]
	pub maxsize: Option<usize>,
	/// which side keeps more padding: a number in [0, 1] or one of equal, right, left, rightonly, leftonly
	#[argh(option, short = 'b')]
	pub bias: Option<Bias>,
	/// approximate spare slots on each side
	#[argh(option)]
	pub padding: Option<usize>,
	/// exact buffer length
	#[argh(option)]
	pub buffer_size: Option<usize>,
	/// also print the buffer layout
	#[argh(switch)]
	pub layout: bool,
}

pub fn load() -> Args {
	argh::from_env()
}
