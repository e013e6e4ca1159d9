//! Application state: the notifier, the single presenter, and input handling.

use std::time::{Duration, Instant};

use chime_notify::{Notifier, Presenter};
use chime_notify_tui::{Hit, StackLayout, StackStyle, ToastStack, hit_test, layout};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::Position;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use tracing::debug;

/// What the run loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
	Continue,
	Quit,
	/// Start the simulated background save.
	BackgroundSave,
}

const KEY_HELP: &[(&str, &str)] = &[
	("s", "success"),
	("e", "error"),
	("E", "critical error (stays until closed)"),
	("w", "warning"),
	("i", "info"),
	("b", "background save"),
	("d", "dismiss oldest"),
	("c", "clear all"),
	("q", "quit"),
];

pub struct App {
	notifier: Notifier,
	presenter: Presenter,
	style: StackStyle,
	/// Placement from the last frame, used for mouse hit testing.
	placed: StackLayout,
	/// Last known pointer cell.
	pointer: Option<Position>,
}

impl App {
	pub fn new(notifier: Notifier, style: StackStyle) -> Self {
		Self {
			notifier,
			presenter: Presenter::new(),
			style,
			placed: StackLayout::default(),
			pointer: None,
		}
	}

	pub fn notifier(&self) -> &Notifier {
		&self.notifier
	}

	#[cfg(test)]
	pub(crate) fn presenter(&self) -> &Presenter {
		&self.presenter
	}

	/// Advances dismissal timers.
	pub fn tick(&mut self, now: Instant) {
		let mut store = self.notifier.lock();
		let expired = self.presenter.tick(&mut store, now);
		if !expired.is_empty() {
			debug!(count = expired.len(), "toasts expired");
		}
	}

	pub fn handle_event(&mut self, event: Event, now: Instant) -> Action {
		match event {
			Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => self.handle_key(key),
			Event::Mouse(mouse) => {
				self.handle_mouse(mouse, now);
				Action::Continue
			}
			_ => Action::Continue,
		}
	}

	fn handle_key(&mut self, key: KeyEvent) -> Action {
		let notifier = &self.notifier;
		match key.code {
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Action::Quit,
			KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
			KeyCode::Char('s') => {
				notifier.success(
					Some("Saved"),
					Some("Your profile changes have been saved successfully."),
					None,
				);
			}
			KeyCode::Char('e') => {
				notifier.error(
					Some("Application failed"),
					Some("This campaign is no longer accepting applications."),
					None,
				);
			}
			KeyCode::Char('E') => {
				notifier.error(
					Some("Critical Error"),
					Some("Your Instagram connection was revoked. Reconnect it to keep receiving offers."),
					Some(Duration::ZERO),
				);
			}
			KeyCode::Char('w') => {
				notifier.warning(Some("Profile incomplete"), Some("Add a bio so brands can find you."), None);
			}
			KeyCode::Char('i') => {
				notifier.info(None, Some("A brand you follow posted a new campaign."), None);
			}
			KeyCode::Char('b') => return Action::BackgroundSave,
			KeyCode::Char('d') => {
				let oldest = notifier.lock().oldest().map(|n| n.id());
				if let Some(id) = oldest {
					notifier.dismiss(id);
				}
			}
			KeyCode::Char('c') => notifier.clear(),
			_ => {}
		}
		Action::Continue
	}

	fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
		self.pointer = Some(Position::new(mouse.column, mouse.row));
		let hit = hit_test(&self.placed, mouse.column, mouse.row);
		let mut store = self.notifier.lock();
		match mouse.kind {
			MouseEventKind::Moved | MouseEventKind::Drag(_) => {
				let target = hit.map(Hit::id).filter(|id| store.contains(*id));
				self.presenter.hover(target, now);
			}
			MouseEventKind::Down(MouseButton::Left) => {
				if let Some(Hit::Close(id)) = hit {
					self.presenter.close(&mut store, id);
				}
			}
			_ => {}
		}
	}

	pub fn render(&mut self, frame: &mut Frame<'_>, now: Instant) {
		let area = frame.area();
		let store = self.notifier.lock();
		self.presenter.sync(&store, now);

		frame.render_widget(self.help(store.len()), area);

		self.placed = layout(area, &self.presenter.views(&store, now), &self.style);

		// The stack may have moved under a still pointer.
		let target = self
			.pointer
			.and_then(|at| hit_test(&self.placed, at.x, at.y))
			.map(Hit::id);
		self.presenter.hover(target, now);
		let placed: Vec<_> = self.placed.slots.iter().map(|slot| slot.id).collect();
		self.presenter.set_visible(&placed, now);

		let views = self.presenter.views(&store, now);
		frame.render_widget(ToastStack::new(&views, &self.placed, &self.style), area);
	}

	fn help(&self, active: usize) -> Paragraph<'static> {
		let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
		let mut lines: Vec<Line<'static>> = KEY_HELP
			.iter()
			.map(|(key, label)| Line::from(vec![Span::styled(format!(" {key:>2} "), key_style), Span::raw(*label)]))
			.collect();
		lines.push(Line::raw(""));
		lines.push(Line::raw(" Hover a toast to pause it, click × to close it."));
		lines.push(Line::raw(""));
		lines.push(Line::styled(
			format!(" {active} active, {} timers", self.presenter.live_timers()),
			Style::default().fg(Color::DarkGray),
		));

		let block = Block::bordered()
			.border_type(BorderType::Rounded)
			.title(" chime ")
			.border_style(Style::default().fg(Color::DarkGray));
		Paragraph::new(lines).block(block)
	}
}
