//! File-backed tracing setup.
//!
//! The terminal UI owns stdout and stderr, so events only go to a file:
//! `--log-file` wins, then `CHIME_LOG_DIR/chime.<pid>.log`. With neither,
//! no subscriber is installed.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const LOG_DIR_ENV: &str = "CHIME_LOG_DIR";
const FILTER_ENV: &str = "CHIME_LOG";

pub fn init(log_file: Option<&Path>, verbose: bool) {
	let Some(path) = log_path(log_file) else {
		return;
	};
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
		&& std::fs::create_dir_all(parent).is_err()
	{
		return;
	}
	let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
		return;
	};

	let file_layer = tracing_subscriber::fmt::layer()
		.with_writer(file)
		.with_ansi(false)
		.with_target(true);

	tracing_subscriber::registry()
		.with(filter(verbose))
		.with(file_layer)
		.init();

	tracing::info!(path = %path.display(), "tracing initialized");
}

fn log_path(explicit: Option<&Path>) -> Option<PathBuf> {
	if let Some(path) = explicit {
		return Some(path.to_path_buf());
	}
	let dir = std::env::var_os(LOG_DIR_ENV).map(PathBuf::from)?;
	Some(dir.join(format!("chime.{}.log", std::process::id())))
}

fn filter(verbose: bool) -> EnvFilter {
	EnvFilter::try_from_env(FILTER_ENV)
		.or_else(|_| EnvFilter::try_from_default_env())
		.unwrap_or_else(|_| {
			if verbose {
				EnvFilter::new("chime_term=debug,chime_notify=debug,chime_notify_tui=debug,info")
			} else {
				EnvFilter::new("chime_term=info,chime_notify=info,chime_notify_tui=info,warn")
			}
		})
}
