//! Per-notification dismissal countdown.
//!
//! The timer never reads a clock itself: every transition takes the `now`
//! sampled by the driver, so pause/resume and expiry can be tested with
//! synthetic instants.

use std::time::{Duration, Instant};

/// Lifecycle of a [`DismissalTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
	/// Counting down.
	Running,
	/// Frozen while the pointer or focus is on the toast.
	Paused,
	/// Budget used up. Terminal.
	Expired,
}

/// Countdown over a toast's exposure budget.
///
/// Elapsed time only accumulates while [`Running`](TimerState::Running), so
/// the total exposure is the duration regardless of how long the toast was
/// hovered.
#[derive(Debug, Clone)]
pub struct DismissalTimer {
	/// Total exposure budget. Never zero.
	duration: Duration,
	/// Elapsed time banked before the current running span.
	banked: Duration,
	/// Start of the current running span.
	running_since: Option<Instant>,
	state: TimerState,
}

impl DismissalTimer {
	/// Starts a running timer.
	///
	/// Returns `None` for a zero duration: such toasts never get a timer.
	pub fn for_duration(duration: Duration, now: Instant) -> Option<Self> {
		(!duration.is_zero()).then(|| Self {
			duration,
			banked: Duration::ZERO,
			running_since: Some(now),
			state: TimerState::Running,
		})
	}

	pub fn state(&self) -> TimerState {
		self.state
	}

	pub fn duration(&self) -> Duration {
		self.duration
	}

	/// Exposure accumulated so far, capped at the duration.
	pub fn elapsed(&self, now: Instant) -> Duration {
		let running = self
			.running_since
			.map(|since| now.saturating_duration_since(since))
			.unwrap_or_default();
		self.banked.saturating_add(running).min(self.duration)
	}

	/// Share of the budget left, from `1.0` (fresh) to `0.0` (used up).
	pub fn remaining_fraction(&self, now: Instant) -> f32 {
		if self.state == TimerState::Expired {
			return 0.0;
		}
		let used = self.elapsed(now).as_secs_f64() / self.duration.as_secs_f64();
		(1.0 - used).max(0.0) as f32
	}

	/// Freezes the countdown. No-op unless running.
	pub fn pause(&mut self, now: Instant) {
		if self.state != TimerState::Running {
			return;
		}
		self.banked = self.elapsed(now);
		self.running_since = None;
		self.state = TimerState::Paused;
	}

	/// Continues the countdown from the banked time. No-op unless paused.
	pub fn resume(&mut self, now: Instant) {
		if self.state != TimerState::Paused {
			return;
		}
		self.running_since = Some(now);
		self.state = TimerState::Running;
	}

	/// Advances the state machine.
	///
	/// Returns `true` exactly once: on the poll where a running timer has used
	/// up its budget. The timer is [`Expired`](TimerState::Expired) from then on.
	pub fn poll(&mut self, now: Instant) -> bool {
		if self.state != TimerState::Running || self.elapsed(now) < self.duration {
			return false;
		}
		self.banked = self.duration;
		self.running_since = None;
		self.state = TimerState::Expired;
		true
	}
}

#[cfg(test)]
mod tests;
