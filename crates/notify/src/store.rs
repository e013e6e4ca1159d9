//! The ordered set of active notifications.

use std::time::{Duration, Instant};

use indexmap::IndexMap;
use tracing::debug;

use crate::{Kind, Notification, NotificationId, NotificationRequest};

/// Exposure budget used when a producer does not give one.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);

/// Owns the active notifications in insertion order.
///
/// Insertion order is display order. Mutation only happens through
/// [`enqueue`](Self::enqueue), [`dismiss`](Self::dismiss) and
/// [`clear`](Self::clear); every mutation bumps [`revision`](Self::revision).
#[derive(Debug)]
pub struct NotificationStore {
	/// Active notifications keyed by ID, in insertion order.
	active: IndexMap<NotificationId, Notification>,
	/// Next raw ID to hand out.
	next_id: u64,
	/// Mutation counter observed by presenters.
	revision: u64,
	/// Budget applied to requests without an explicit duration.
	default_duration: Duration,
}

impl Default for NotificationStore {
	fn default() -> Self {
		Self::new()
	}
}

impl NotificationStore {
	/// Creates an empty store with the 4 second default duration.
	pub fn new() -> Self {
		Self::with_default_duration(DEFAULT_DURATION)
	}

	/// Creates an empty store with a custom default duration.
	pub fn with_default_duration(default_duration: Duration) -> Self {
		Self {
			active: IndexMap::new(),
			next_id: 1,
			revision: 0,
			default_duration,
		}
	}

	pub fn default_duration(&self) -> Duration {
		self.default_duration
	}

	/// Appends a notification and returns its ID.
	///
	/// `duration` of `None` uses the store default; `Some(Duration::ZERO)`
	/// keeps the notification until it is dismissed.
	pub fn enqueue(
		&mut self,
		kind: Kind,
		title: Option<&str>,
		message: Option<&str>,
		duration: Option<Duration>,
	) -> NotificationId {
		self.enqueue_request(NotificationRequest {
			kind,
			title: title.map(str::to_owned),
			message: message.map(str::to_owned),
			duration,
		})
	}

	/// Appends a notification described by a request and returns its ID.
	pub fn enqueue_request(&mut self, request: NotificationRequest) -> NotificationId {
		let id = self.allocate_id();
		let notification = request.into_notification(id, self.default_duration, Instant::now());
		debug!(
			%id,
			kind = %notification.kind(),
			duration_ms = notification.duration().as_millis() as u64,
			"notification enqueued"
		);
		self.active.insert(id, notification);
		self.bump();
		id
	}

	pub fn success(&mut self, title: Option<&str>, message: Option<&str>, duration: Option<Duration>) -> NotificationId {
		self.enqueue(Kind::Success, title, message, duration)
	}

	pub fn error(&mut self, title: Option<&str>, message: Option<&str>, duration: Option<Duration>) -> NotificationId {
		self.enqueue(Kind::Error, title, message, duration)
	}

	pub fn warning(&mut self, title: Option<&str>, message: Option<&str>, duration: Option<Duration>) -> NotificationId {
		self.enqueue(Kind::Warning, title, message, duration)
	}

	pub fn info(&mut self, title: Option<&str>, message: Option<&str>, duration: Option<Duration>) -> NotificationId {
		self.enqueue(Kind::Info, title, message, duration)
	}

	/// Removes a notification. Returns true if it was present.
	///
	/// Dismissing an absent ID is a no-op and does not bump the revision.
	pub fn dismiss(&mut self, id: NotificationId) -> bool {
		let Some(removed) = self.active.shift_remove(&id) else {
			return false;
		};
		debug!(%id, kind = %removed.kind(), "notification dismissed");
		self.bump();
		true
	}

	/// Dismisses every active notification.
	pub fn clear(&mut self) {
		if self.active.is_empty() {
			return;
		}
		debug!(count = self.active.len(), "notifications cleared");
		self.active.clear();
		self.bump();
	}

	pub fn get(&self, id: NotificationId) -> Option<&Notification> {
		self.active.get(&id)
	}

	pub fn contains(&self, id: NotificationId) -> bool {
		self.active.contains_key(&id)
	}

	/// Iterates active notifications oldest first.
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notification> + ExactSizeIterator {
		self.active.values()
	}

	/// Returns the oldest active notification.
	pub fn oldest(&self) -> Option<&Notification> {
		self.active.first().map(|(_, n)| n)
	}

	pub fn len(&self) -> usize {
		self.active.len()
	}

	pub fn is_empty(&self) -> bool {
		self.active.is_empty()
	}

	/// Mutation counter; changes whenever the active set changes.
	pub fn revision(&self) -> u64 {
		self.revision
	}

	fn allocate_id(&mut self) -> NotificationId {
		loop {
			let id = NotificationId::new(self.next_id);
			self.next_id = self.next_id.wrapping_add(1);
			if !self.active.contains_key(&id) {
				return id;
			}
		}
	}

	fn bump(&mut self) {
		self.revision = self.revision.wrapping_add(1);
	}
}
