//! The notification entity and the request used to create one.

use core::fmt;
use std::time::{Duration, Instant};

use crate::Kind;

/// Identifier assigned by the store when a notification is enqueued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
	pub(crate) const fn new(raw: u64) -> Self {
		Self(raw)
	}

	/// Returns the raw numeric identifier.
	pub const fn get(self) -> u64 {
		self.0
	}
}

impl fmt::Display for NotificationId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// An active notification.
///
/// Only the store creates these; everything else sees them by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
	id: NotificationId,
	kind: Kind,
	title: Option<String>,
	message: Option<String>,
	duration: Duration,
	created_at: Instant,
}

impl Notification {
	pub fn id(&self) -> NotificationId {
		self.id
	}

	pub fn kind(&self) -> Kind {
		self.kind
	}

	pub fn title(&self) -> Option<&str> {
		self.title.as_deref()
	}

	pub fn message(&self) -> Option<&str> {
		self.message.as_deref()
	}

	/// Total exposure budget. [`Duration::ZERO`] means the toast stays until dismissed.
	pub fn duration(&self) -> Duration {
		self.duration
	}

	/// Returns true if a dismissal timer should be attached.
	pub fn auto_dismisses(&self) -> bool {
		!self.duration.is_zero()
	}

	pub fn created_at(&self) -> Instant {
		self.created_at
	}
}

/// Describes a notification before the store has assigned it an id.
///
/// ```
/// use std::time::Duration;
/// use chime_notify::{NotificationRequest, NotificationStore};
///
/// let mut store = NotificationStore::new();
/// let id = store.enqueue_request(
/// 	NotificationRequest::error()
/// 		.title("Critical Error")
/// 		.message("Payment provider unreachable")
/// 		.persistent(),
/// );
/// assert_eq!(store.get(id).map(|n| n.duration()), Some(Duration::ZERO));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationRequest {
	pub(crate) kind: Kind,
	pub(crate) title: Option<String>,
	pub(crate) message: Option<String>,
	pub(crate) duration: Option<Duration>,
}

impl NotificationRequest {
	/// Creates a request of the given kind.
	///
	/// Free-form kind names go through [`Kind::coerce`] first.
	pub fn new(kind: Kind) -> Self {
		Self {
			kind,
			..Self::default()
		}
	}

	pub fn success() -> Self {
		Self::new(Kind::Success)
	}

	pub fn error() -> Self {
		Self::new(Kind::Error)
	}

	pub fn warning() -> Self {
		Self::new(Kind::Warning)
	}

	pub fn info() -> Self {
		Self::new(Kind::Info)
	}

	/// Sets the short heading.
	#[must_use]
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Sets the body text.
	#[must_use]
	pub fn message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Overrides the store's default exposure budget.
	#[must_use]
	pub fn duration(mut self, duration: Duration) -> Self {
		self.duration = Some(duration);
		self
	}

	/// Keeps the notification until it is dismissed explicitly.
	#[must_use]
	pub fn persistent(self) -> Self {
		self.duration(Duration::ZERO)
	}

	pub(crate) fn into_notification(
		self,
		id: NotificationId,
		default_duration: Duration,
		created_at: Instant,
	) -> Notification {
		Notification {
			id,
			kind: self.kind,
			title: self.title,
			message: self.message,
			duration: self.duration.unwrap_or(default_duration),
			created_at,
		}
	}
}
