//! Terminal setup and the run loop.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, warn};

use crate::app::{Action, App};
use crate::demo;

/// Runs `app` until the user quits, restoring the terminal on every exit path.
pub async fn run(mut app: App, refresh: Duration) -> anyhow::Result<()> {
	let mut terminal = ratatui::init();
	let result = match execute!(io::stdout(), EnableMouseCapture) {
		Ok(()) => event_loop(&mut terminal, &mut app, refresh).await,
		Err(error) => Err(error.into()),
	};

	let cleanup = execute!(io::stdout(), DisableMouseCapture);
	ratatui::restore();
	result.and(cleanup.map_err(Into::into))
}

async fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, refresh: Duration) -> anyhow::Result<()> {
	let mut input = spawn_input_reader()?;
	let mut ticker = time::interval(refresh);
	ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

	loop {
		terminal.draw(|frame| app.render(frame, Instant::now()))?;

		tokio::select! {
			_ = ticker.tick() => app.tick(Instant::now()),
			event = input.recv() => {
				let Some(event) = event else {
					debug!("input closed");
					break;
				};
				match app.handle_event(event, Instant::now()) {
					Action::Continue => {}
					Action::Quit => break,
					Action::BackgroundSave => demo::spawn_background_save(app.notifier().clone()),
				}
			}
		}
	}
	Ok(())
}

/// Reads crossterm events on a blocking thread and forwards them to the loop.
fn spawn_input_reader() -> io::Result<mpsc::UnboundedReceiver<Event>> {
	let (tx, rx) = mpsc::unbounded_channel();
	std::thread::Builder::new()
		.name("chime-input".into())
		.spawn(move || {
			loop {
				match event::read() {
					Ok(event) => {
						if tx.send(event).is_err() {
							break;
						}
					}
					Err(error) => {
						warn!(%error, "failed to read terminal input");
						break;
					}
				}
			}
		})?;
	Ok(rx)
}
