use std::time::{Duration, Instant};

use super::*;

fn ms(n: u64) -> Duration {
	Duration::from_millis(n)
}

#[test]
fn zero_duration_has_no_timer() {
	assert!(DismissalTimer::for_duration(Duration::ZERO, Instant::now()).is_none());
}

#[test]
fn fraction_shrinks_while_running() {
	let t0 = Instant::now();
	let timer = DismissalTimer::for_duration(ms(4000), t0).unwrap();

	assert_eq!(timer.state(), TimerState::Running);
	assert_eq!(timer.remaining_fraction(t0), 1.0);
	assert!((timer.remaining_fraction(t0 + ms(1000)) - 0.75).abs() < 1e-6);
	assert!((timer.remaining_fraction(t0 + ms(3000)) - 0.25).abs() < 1e-6);
	assert_eq!(timer.remaining_fraction(t0 + ms(9000)), 0.0);
}

#[test]
fn expires_exactly_once() {
	let t0 = Instant::now();
	let mut timer = DismissalTimer::for_duration(ms(4000), t0).unwrap();

	assert!(!timer.poll(t0 + ms(3999)));
	assert!(timer.poll(t0 + ms(4000)));
	assert_eq!(timer.state(), TimerState::Expired);
	assert!(!timer.poll(t0 + ms(4016)));
	assert!(!timer.poll(t0 + ms(10_000)));
	assert_eq!(timer.remaining_fraction(t0 + ms(4016)), 0.0);
}

#[test]
fn pause_freezes_and_resume_continues_from_frozen_value() {
	let t0 = Instant::now();
	let mut timer = DismissalTimer::for_duration(ms(4000), t0).unwrap();

	timer.pause(t0 + ms(1000));
	assert_eq!(timer.state(), TimerState::Paused);
	let frozen = timer.remaining_fraction(t0 + ms(1000));
	assert!((frozen - 0.75).abs() < 1e-6);
	assert_eq!(timer.remaining_fraction(t0 + ms(60_000)), frozen);
	assert!(!timer.poll(t0 + ms(60_000)), "paused timers never expire");

	timer.resume(t0 + ms(60_000));
	assert_eq!(timer.state(), TimerState::Running);
	assert_eq!(timer.elapsed(t0 + ms(60_000)), ms(1000));
	assert!((timer.remaining_fraction(t0 + ms(61_000)) - 0.5).abs() < 1e-6);

	assert!(!timer.poll(t0 + ms(62_999)));
	assert!(timer.poll(t0 + ms(63_000)));
}

#[test]
fn repeated_pause_and_resume_accumulate() {
	let t0 = Instant::now();
	let mut timer = DismissalTimer::for_duration(ms(1000), t0).unwrap();

	timer.pause(t0 + ms(200));
	timer.pause(t0 + ms(500));
	timer.resume(t0 + ms(1000));
	timer.resume(t0 + ms(1100));
	timer.pause(t0 + ms(1300));
	assert_eq!(timer.elapsed(t0 + ms(5000)), ms(500));

	timer.resume(t0 + ms(5000));
	assert!(!timer.poll(t0 + ms(5499)));
	assert!(timer.poll(t0 + ms(5500)));
}

#[test]
fn expired_timer_ignores_pause_and_resume() {
	let t0 = Instant::now();
	let mut timer = DismissalTimer::for_duration(ms(100), t0).unwrap();
	assert!(timer.poll(t0 + ms(150)));

	timer.pause(t0 + ms(160));
	timer.resume(t0 + ms(170));
	assert_eq!(timer.state(), TimerState::Expired);
	assert!(!timer.poll(t0 + ms(500)));
}

#[test]
fn pausing_past_the_deadline_expires_on_next_running_poll() {
	let t0 = Instant::now();
	let mut timer = DismissalTimer::for_duration(ms(100), t0).unwrap();

	timer.pause(t0 + ms(250));
	assert_eq!(timer.elapsed(t0 + ms(250)), ms(100));
	assert!(!timer.poll(t0 + ms(300)));

	timer.resume(t0 + ms(400));
	assert!(timer.poll(t0 + ms(400)));
}
