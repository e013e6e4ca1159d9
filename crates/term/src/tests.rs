use std::time::{Duration, Instant};

use chime_notify::{Kind, Notifier};
use chime_notify_tui::{Anchor, StackStyle};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use pretty_assertions::assert_eq;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::app::{Action, App};
use crate::demo;

fn app() -> App {
	let style = StackStyle {
		anchor: Anchor::TopRight,
		width: 30,
		margin: 1,
		spacing: 0,
		entry_highlight: Duration::ZERO,
	};
	App::new(Notifier::default(), style)
}

fn key(c: char) -> Event {
	Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
	Event::Mouse(MouseEvent {
		kind,
		column,
		row,
		modifiers: KeyModifiers::NONE,
	})
}

fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App, now: Instant) {
	terminal.draw(|frame| app.render(frame, now)).unwrap();
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
	let buf = terminal.backend().buffer();
	(0..buf.area.height)
		.map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect::<String>())
		.collect::<Vec<_>>()
		.join("\n")
}

#[test]
fn keys_enqueue_each_kind() {
	let mut app = app();
	let now = Instant::now();
	for c in ['s', 'e', 'w', 'i'] {
		assert_eq!(app.handle_event(key(c), now), Action::Continue);
	}

	let kinds: Vec<Kind> = app.notifier().snapshot().iter().map(|n| n.kind()).collect();
	assert_eq!(kinds, vec![Kind::Success, Kind::Error, Kind::Warning, Kind::Info]);
	let saved = &app.notifier().snapshot()[0];
	assert_eq!(saved.title(), Some("Saved"));
	assert_eq!(saved.duration(), Duration::from_millis(4000));
}

#[test]
fn critical_error_is_persistent() {
	let mut app = app();
	let t0 = Instant::now();
	app.handle_event(key('E'), t0);

	let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
	draw(&mut terminal, &mut app, t0);
	app.tick(t0 + Duration::from_secs(3600));
	assert_eq!(app.notifier().len(), 1);
	assert!(!app.notifier().snapshot()[0].auto_dismisses());
}

#[test]
fn success_expires_after_default_duration() {
	let mut app = app();
	let t0 = Instant::now();
	app.handle_event(key('s'), t0);

	let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
	draw(&mut terminal, &mut app, t0);
	assert!(screen(&terminal).contains("✔ Saved"));

	app.tick(t0 + Duration::from_millis(3999));
	assert_eq!(app.notifier().len(), 1);
	app.tick(t0 + Duration::from_millis(4000));
	assert!(app.notifier().is_empty());

	draw(&mut terminal, &mut app, t0 + Duration::from_millis(4000));
	assert!(!screen(&terminal).contains("Saved"));
}

#[test]
fn dismiss_oldest_and_clear_keys() {
	let mut app = app();
	let now = Instant::now();
	app.handle_event(key('s'), now);
	app.handle_event(key('w'), now);
	app.handle_event(key('i'), now);

	app.handle_event(key('d'), now);
	let kinds: Vec<Kind> = app.notifier().snapshot().iter().map(|n| n.kind()).collect();
	assert_eq!(kinds, vec![Kind::Warning, Kind::Info]);

	app.handle_event(key('c'), now);
	assert!(app.notifier().is_empty());
	// Nothing left to dismiss.
	app.handle_event(key('d'), now);
	assert!(app.notifier().is_empty());
}

#[test]
fn quit_and_background_actions() {
	let mut app = app();
	let now = Instant::now();
	assert_eq!(app.handle_event(key('q'), now), Action::Quit);
	assert_eq!(app.handle_event(Event::Key(KeyEvent::from(KeyCode::Esc)), now), Action::Quit);
	assert_eq!(
		app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)), now),
		Action::Quit
	);
	assert_eq!(app.handle_event(key('b'), now), Action::BackgroundSave);
	assert!(app.notifier().is_empty());
}

#[test]
fn key_release_is_ignored() {
	let mut app = app();
	let mut release = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
	release.kind = KeyEventKind::Release;
	app.handle_event(Event::Key(release), Instant::now());
	assert!(app.notifier().is_empty());
}

#[test]
fn hovering_pauses_and_leaving_resumes() {
	let mut app = app();
	let t0 = Instant::now();
	app.handle_event(key('w'), t0);
	let id = app.notifier().snapshot()[0].id();

	let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
	draw(&mut terminal, &mut app, t0);

	// Toast spans columns 49..79 starting at row 1.
	app.handle_event(mouse(MouseEventKind::Moved, 60, 3), t0 + Duration::from_millis(1000));
	assert_eq!(app.presenter().hovered(), Some(id));

	app.tick(t0 + Duration::from_secs(60));
	assert_eq!(app.notifier().len(), 1);
	draw(&mut terminal, &mut app, t0 + Duration::from_secs(60));
	assert!(screen(&terminal).contains("paused"));

	let leave = t0 + Duration::from_secs(60);
	app.handle_event(mouse(MouseEventKind::Moved, 5, 20), leave);
	assert_eq!(app.presenter().hovered(), None);

	app.tick(leave + Duration::from_millis(2999));
	assert_eq!(app.notifier().len(), 1);
	app.tick(leave + Duration::from_millis(3000));
	assert!(app.notifier().is_empty());
}

#[test]
fn hover_follows_stack_when_toast_above_expires() {
	let mut app = app();
	let t0 = Instant::now();
	app.handle_event(key('s'), t0);
	app.handle_event(key('i'), t0);
	let second = app.notifier().snapshot()[1].id();

	let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
	draw(&mut terminal, &mut app, t0);
	// Second toast spans rows 7..13.
	app.handle_event(mouse(MouseEventKind::Moved, 60, 9), t0);
	assert_eq!(app.presenter().hovered(), Some(second));

	app.tick(t0 + Duration::from_millis(4000));
	assert_eq!(app.notifier().len(), 1);

	// The second toast slides up to rows 1..7, away from the still pointer.
	draw(&mut terminal, &mut app, t0 + Duration::from_millis(4000));
	assert_eq!(app.presenter().hovered(), None);

	app.tick(t0 + Duration::from_millis(7999));
	assert_eq!(app.notifier().len(), 1);
	app.tick(t0 + Duration::from_millis(8000));
	assert!(app.notifier().is_empty());
}

#[test]
fn stack_sliding_under_pointer_pauses_new_toast() {
	let mut app = app();
	let t0 = Instant::now();
	app.handle_event(key('s'), t0);
	app.handle_event(key('w'), t0);
	let second = app.notifier().snapshot()[1].id();

	let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
	draw(&mut terminal, &mut app, t0);
	// Pointer rests on the first toast, then it is closed.
	app.handle_event(mouse(MouseEventKind::Moved, 60, 3), t0);
	app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 76, 1), t0);
	draw(&mut terminal, &mut app, t0);

	assert_eq!(app.presenter().hovered(), Some(second));
	app.tick(t0 + Duration::from_secs(60));
	assert_eq!(app.notifier().len(), 1);
}

#[test]
fn toasts_that_do_not_fit_wait_for_a_slot() {
	let mut app = app();
	let t0 = Instant::now();
	for _ in 0..6 {
		app.handle_event(key('s'), t0);
	}

	let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
	draw(&mut terminal, &mut app, t0);
	assert!(screen(&terminal).contains("+3 more"));

	let mut now = t0;
	while now < t0 + Duration::from_millis(4000) {
		now += Duration::from_millis(100);
		app.tick(now);
		draw(&mut terminal, &mut app, now);
	}
	// Only the three toasts that were on screen are gone.
	assert_eq!(app.notifier().len(), 3);
	assert!(!screen(&terminal).contains("more"));

	app.tick(t0 + Duration::from_millis(7999));
	assert_eq!(app.notifier().len(), 3);
	app.tick(t0 + Duration::from_millis(8000));
	assert!(app.notifier().is_empty());
}

#[test]
fn clicking_close_removes_toast_and_its_timer() {
	let mut app = app();
	let t0 = Instant::now();
	app.handle_event(key('s'), t0);
	app.handle_event(key('i'), t0);
	let second = app.notifier().snapshot()[1].id();

	let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
	draw(&mut terminal, &mut app, t0);
	assert_eq!(app.presenter().live_timers(), 2);

	// Close glyph of the first toast: columns 75..78 on row 1.
	app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 76, 1), t0);
	let remaining: Vec<_> = app.notifier().snapshot().iter().map(|n| n.id()).collect();
	assert_eq!(remaining, vec![second]);
	assert_eq!(app.presenter().live_timers(), 1);

	// Clicking the body does nothing.
	draw(&mut terminal, &mut app, t0);
	app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 60, 3), t0);
	assert_eq!(app.notifier().len(), 1);
}

#[test]
fn external_dismissal_is_picked_up_on_render() {
	let mut app = app();
	let t0 = Instant::now();
	let id = app.notifier().warning(Some("Quota"), None, None);

	let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
	draw(&mut terminal, &mut app, t0);
	assert_eq!(app.presenter().live_timers(), 1);

	assert!(app.notifier().dismiss(id));
	draw(&mut terminal, &mut app, t0);
	assert_eq!(app.presenter().live_timers(), 0);
	assert!(!app.notifier().dismiss(id));
}

#[test]
fn background_save_replaces_pending_toast() {
	let notifier = Notifier::default();
	let pending = notifier.info(Some("Saving"), None, Some(Duration::ZERO));

	let done = demo::finish_background_save(&notifier, pending);
	let snapshot = notifier.snapshot();
	assert_eq!(snapshot.len(), 1);
	assert_eq!(snapshot[0].id(), done);
	assert_eq!(snapshot[0].kind(), Kind::Success);
}

#[test]
fn startup_toasts_keep_text_with_unknown_prefix() {
	let notifier = Notifier::default();
	demo::show_startup_toasts(
		&notifier,
		&["warning:Disk almost full".to_owned(), "party:Launched".to_owned(), "plain".to_owned()],
	);

	let shown: Vec<(Kind, Option<String>)> = notifier
		.snapshot()
		.iter()
		.map(|n| (n.kind(), n.title().map(str::to_owned)))
		.collect();
	assert_eq!(
		shown,
		vec![
			(Kind::Warning, Some("Disk almost full".to_owned())),
			(Kind::Info, Some("party:Launched".to_owned())),
			(Kind::Info, Some("plain".to_owned())),
		]
	);
}
