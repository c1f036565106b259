use std::io::Read as _;

use anyhow::Context as _;
use log::LevelFilter;
use padded_deque::script::Script;
use padded_deque::{Options, PaddedDeque};
use simple_logger::SimpleLogger;

use crate::args::{Command, ReplayArgs};

mod args;

fn load_options(args: &ReplayArgs) -> anyhow::Result<Options> {
	let mut options = match &args.config {
		Some(path) => {
			let raw = std::fs::read_to_string(path)
				.with_context(|| format!("reading config from {}", path.display()))?;
			serde_json::from_str(&raw).context("parsing config")?
		}
		None => Options::new(args.maxsize.context("either --maxsize or --config is required")?),
	};

	if let Some(maxsize) = args.maxsize {
		options.maxsize = maxsize;
	}
	if let Some(bias) = args.bias {
		options.bias = bias;
	}
	if let Some(padding) = args.padding {
		options.buffer_padding = Some(padding);
	}
	if let Some(size) = args.buffer_size {
		options.buffer_size = Some(size);
	}
	Ok(options)
}

fn load_script(args: &ReplayArgs) -> anyhow::Result<Script> {
	let raw = if args.script.as_os_str() == "-" {
		let mut raw = String::new();
		std::io::stdin()
			.read_to_string(&mut raw)
			.context("reading script from stdin")?;
		raw
	} else {
		std::fs::read_to_string(&args.script)
			.with_context(|| format!("reading script from {}", args.script.display()))?
	};
	raw.parse().context("parsing script")
}

fn replay(args: &ReplayArgs) -> anyhow::Result<()> {
	let options = load_options(args)?;
	let script = load_script(args)?;
	log::debug!("replaying {} operations with {options:?}", script.0.len());

	let mut deque = PaddedDeque::with_options(options)?;
	let removed = script.run(&mut deque)?;

	if !removed.is_empty() {
		let removed = removed
			.iter()
			.map(i64::to_string)
			.collect::<Vec<_>>()
			.join(" ");
		println!("removed: {removed}");
	}
	println!("{deque}");
	if args.layout {
		println!(
			"capacity {}, left padding {}, right padding {}",
			deque.capacity(),
			deque.left_padding(),
			deque.right_padding(),
		);
	}
	Ok(())
}

fn main() -> anyhow::Result<()> {
	let args = args::load();

	SimpleLogger::new()
		.with_level(if args.verbose {
			LevelFilter::Trace
		} else {
			LevelFilter::Warn
		})
		.init()?;

	match &args.command {
		Command::Replay(replay_args) => replay(replay_args),
	}
}
