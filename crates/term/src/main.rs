//! chime: toast notifications in the terminal.

mod app;
mod cli;
mod config;
mod demo;
mod logging;
mod terminal;

use anyhow::Context;
use chime_notify::Notifier;
use clap::Parser;
use tracing::info;

use crate::app::App;
use crate::cli::Cli;
use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	logging::init(cli.log_file.as_deref(), cli.verbose);

	let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
	info!(
		default_duration_ms = config.notifications.default_duration_ms,
		refresh_rate_hz = config.notifications.refresh_rate_hz,
		anchor = ?config.layout.anchor,
		"starting chime"
	);

	let notifier = Notifier::with_default_duration(config.default_duration());
	demo::show_startup_toasts(&notifier, &cli.notify);

	let app = App::new(notifier, config.stack_style());
	terminal::run(app, config.refresh_interval()).await
}

#[cfg(test)]
mod tests;
