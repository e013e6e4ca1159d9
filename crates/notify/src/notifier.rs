//! Shared producer handle.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, MutexGuard};

use crate::{Kind, Notification, NotificationId, NotificationRequest, NotificationStore};

/// Cloneable handle to the application's [`NotificationStore`].
///
/// Created once at startup and passed to every component that reports an
/// outcome, and to the root that owns the [`Presenter`](crate::Presenter).
/// Each call holds the lock only for its own duration.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
	store: Arc<Mutex<NotificationStore>>,
}

impl Notifier {
	pub fn new(store: NotificationStore) -> Self {
		Self {
			store: Arc::new(Mutex::new(store)),
		}
	}

	/// Creates a handle over an empty store with the given default duration.
	pub fn with_default_duration(default_duration: Duration) -> Self {
		Self::new(NotificationStore::with_default_duration(default_duration))
	}

	pub fn enqueue(
		&self,
		kind: Kind,
		title: Option<&str>,
		message: Option<&str>,
		duration: Option<Duration>,
	) -> NotificationId {
		self.store.lock().enqueue(kind, title, message, duration)
	}

	pub fn notify(&self, request: NotificationRequest) -> NotificationId {
		self.store.lock().enqueue_request(request)
	}

	pub fn success(&self, title: Option<&str>, message: Option<&str>, duration: Option<Duration>) -> NotificationId {
		self.enqueue(Kind::Success, title, message, duration)
	}

	pub fn error(&self, title: Option<&str>, message: Option<&str>, duration: Option<Duration>) -> NotificationId {
		self.enqueue(Kind::Error, title, message, duration)
	}

	pub fn warning(&self, title: Option<&str>, message: Option<&str>, duration: Option<Duration>) -> NotificationId {
		self.enqueue(Kind::Warning, title, message, duration)
	}

	pub fn info(&self, title: Option<&str>, message: Option<&str>, duration: Option<Duration>) -> NotificationId {
		self.enqueue(Kind::Info, title, message, duration)
	}

	/// Removes a notification; no-op if it is already gone.
	pub fn dismiss(&self, id: NotificationId) -> bool {
		self.store.lock().dismiss(id)
	}

	pub fn clear(&self) {
		self.store.lock().clear();
	}

	pub fn len(&self) -> usize {
		self.store.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.store.lock().is_empty()
	}

	/// Clones the active notifications in display order.
	pub fn snapshot(&self) -> Vec<Notification> {
		self.store.lock().iter().cloned().collect()
	}

	/// Locks the store for a frame: presenter tick, render and input routing.
	pub fn lock(&self) -> MutexGuard<'_, NotificationStore> {
		self.store.lock()
	}
}
