use std::path::PathBuf;

use chime_notify::Kind;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chime")]
#[command(about = "Toast notifications in the terminal")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Configuration file (defaults to the user config directory)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Write logs to this file
	#[arg(long, value_name = "PATH")]
	pub log_file: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,

	/// Show a toast at startup, written as [KIND:]TEXT (e.g. `warning:Disk almost full`)
	#[arg(long = "notify", short = 'n', value_name = "KIND:TEXT")]
	pub notify: Vec<String>,
}

/// A startup toast parsed from `--notify`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupToast<'a> {
	pub kind: Kind,
	pub text: &'a str,
}

impl<'a> StartupToast<'a> {
	/// Splits `KIND:TEXT` when the prefix names a kind. Anything else is an
	/// info toast carrying the whole argument.
	pub fn parse(arg: &'a str) -> Self {
		if let Some((prefix, text)) = arg.split_once(':')
			&& let Ok(kind) = prefix.trim().parse::<Kind>()
		{
			return Self { kind, text: text.trim() };
		}
		Self {
			kind: Kind::Info,
			text: arg.trim(),
		}
	}
}
