//! Presentation state for the active notifications.
//!
//! The presenter is mounted once at the application root. Each frame the
//! driver calls [`Presenter::tick`], renders [`Presenter::views`] and reports
//! which toasts made it on screen with [`Presenter::set_visible`]; pointer
//! input is routed through [`Presenter::hover`] and [`Presenter::close`].

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::{DismissalTimer, Notification, NotificationId, NotificationStore, TimerState};

/// Render-ready snapshot of one active notification.
#[derive(Debug, Clone, Copy)]
pub struct ToastView<'a> {
	pub notification: &'a Notification,
	/// Share of the exposure budget left; `None` for toasts that never auto-dismiss.
	pub remaining: Option<f32>,
	/// Timer state; `None` when the toast has no timer.
	pub timer: Option<TimerState>,
	/// True while the pointer is over the toast.
	pub hovered: bool,
	/// Time since the notification was enqueued.
	pub age: Duration,
}

impl ToastView<'_> {
	pub fn id(&self) -> NotificationId {
		self.notification.id()
	}

	pub fn is_paused(&self) -> bool {
		self.timer == Some(TimerState::Paused)
	}
}

/// Follows a [`NotificationStore`] and owns one [`DismissalTimer`] per
/// auto-dismissing notification.
///
/// Timers are dropped as soon as their notification leaves the store,
/// whichever path removed it, so no countdown outlives its toast. A timer only
/// runs while its toast is on screen and not hovered.
#[derive(Debug, Default)]
pub struct Presenter {
	/// Live timers keyed by notification.
	timers: HashMap<NotificationId, DismissalTimer>,
	/// Toast currently under the pointer.
	hovered: Option<NotificationId>,
	/// Toasts with a timer that did not fit on screen last frame.
	offscreen: HashSet<NotificationId>,
	/// Store revision the timers were last reconciled against.
	synced_revision: Option<u64>,
}

impl Presenter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Reconciles timers with the store.
	///
	/// Starts timers for new auto-dismissing notifications and drops timers
	/// and hover state for notifications that are gone. Cheap when the store
	/// has not changed since the last call.
	pub fn sync(&mut self, store: &NotificationStore, now: Instant) {
		if self.synced_revision == Some(store.revision()) {
			return;
		}

		self.timers.retain(|id, _| store.contains(*id));
		self.offscreen.retain(|id| store.contains(*id));
		if self.hovered.is_some_and(|id| !store.contains(id)) {
			self.hovered = None;
		}

		for notification in store.iter().filter(|n| n.auto_dismisses()) {
			let id = notification.id();
			if self.timers.contains_key(&id) {
				continue;
			}
			let Some(mut timer) = DismissalTimer::for_duration(notification.duration(), now) else {
				continue;
			};
			if self.hovered == Some(id) {
				timer.pause(now);
			}
			self.timers.insert(id, timer);
		}

		self.synced_revision = Some(store.revision());
	}

	/// Advances every timer and dismisses the expired notifications.
	///
	/// Returns the IDs removed by expiry, in display order. Each expiry
	/// dismisses its notification exactly once; a notification already removed
	/// by another path is never dismissed again.
	pub fn tick(&mut self, store: &mut NotificationStore, now: Instant) -> Vec<NotificationId> {
		self.sync(store, now);

		let expired: Vec<NotificationId> = store
			.iter()
			.filter_map(|n| {
				let timer = self.timers.get_mut(&n.id())?;
				timer.poll(now).then(|| n.id())
			})
			.collect();

		for &id in &expired {
			self.timers.remove(&id);
			self.offscreen.remove(&id);
			if self.hovered == Some(id) {
				self.hovered = None;
			}
			if store.dismiss(id) {
				debug!(%id, "notification expired");
			}
		}

		self.synced_revision = Some(store.revision());
		expired
	}

	/// Pointer entered a toast: pause its countdown.
	pub fn pointer_enter(&mut self, id: NotificationId, now: Instant) {
		if let Some(previous) = self.hovered.filter(|&prev| prev != id) {
			self.pointer_leave(previous, now);
		}
		self.hovered = Some(id);
		if let Some(timer) = self.timers.get_mut(&id) {
			timer.pause(now);
			trace!(%id, "dismissal timer paused");
		}
	}

	/// Pointer left a toast: resume its countdown from where it stopped.
	pub fn pointer_leave(&mut self, id: NotificationId, now: Instant) {
		if self.hovered == Some(id) {
			self.hovered = None;
		}
		if self.offscreen.contains(&id) {
			return;
		}
		if let Some(timer) = self.timers.get_mut(&id) {
			timer.resume(now);
			trace!(%id, "dismissal timer resumed");
		}
	}

	/// Records which toasts were placed on screen this frame.
	///
	/// Timers of toasts left out are held paused until they are placed, so a
	/// toast never expires before it has been shown for its full duration.
	/// Until this is first called every toast counts as visible.
	pub fn set_visible(&mut self, placed: &[NotificationId], now: Instant) {
		for (&id, timer) in &mut self.timers {
			let shown = placed.contains(&id);
			if shown {
				if self.offscreen.remove(&id) && self.hovered != Some(id) {
					timer.resume(now);
					trace!(%id, "toast placed, dismissal timer resumed");
				}
			} else if self.offscreen.insert(id) {
				timer.pause(now);
				trace!(%id, "toast off screen, dismissal timer held");
			}
		}
	}

	/// Moves the hover to `target`, pausing and resuming timers as needed.
	pub fn hover(&mut self, target: Option<NotificationId>, now: Instant) {
		match (self.hovered, target) {
			(current, next) if current == next => {}
			(_, Some(id)) => self.pointer_enter(id, now),
			(Some(id), None) => self.pointer_leave(id, now),
			(None, None) => {}
		}
	}

	pub fn hovered(&self) -> Option<NotificationId> {
		self.hovered
	}

	/// Close affordance: dismisses the notification and drops its timer.
	pub fn close(&mut self, store: &mut NotificationStore, id: NotificationId) -> bool {
		self.timers.remove(&id);
		self.offscreen.remove(&id);
		if self.hovered == Some(id) {
			self.hovered = None;
		}
		let removed = store.dismiss(id);
		if removed {
			self.synced_revision = None;
		}
		removed
	}

	/// Number of running or paused timers.
	pub fn live_timers(&self) -> usize {
		self.timers.len()
	}

	pub fn timer(&self, id: NotificationId) -> Option<&DismissalTimer> {
		self.timers.get(&id)
	}

	/// Views of every active notification, in display order.
	pub fn views<'a>(&self, store: &'a NotificationStore, now: Instant) -> Vec<ToastView<'a>> {
		store
			.iter()
			.map(|notification| {
				let timer = self.timers.get(&notification.id());
				let remaining = match timer {
					Some(timer) => Some(timer.remaining_fraction(now)),
					None => notification.auto_dismisses().then_some(1.0),
				};
				ToastView {
					notification,
					remaining,
					timer: timer.map(DismissalTimer::state),
					hovered: self.hovered == Some(notification.id()),
					age: now.saturating_duration_since(notification.created_at()),
				}
			})
			.collect()
	}
}
