#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Toast notifications for interactive frontends.
//!
//! The crate is split along the lifecycle of a toast:
//!
//! - [`NotificationStore`] owns the ordered set of active notifications and is
//!   the only place they are added or removed.
//! - [`DismissalTimer`] is the per-toast countdown, an explicit
//!   `Running / Paused / Expired` state machine fed with monotonic timestamps.
//! - [`Presenter`] follows the store, owns one timer per auto-dismissing toast,
//!   routes hover and close events and produces [`ToastView`]s for rendering.
//! - [`Notifier`] is the cloneable producer handle passed to call sites.
//!
//! ```text
//! producer ──enqueue──▶ NotificationStore ◀──dismiss── Presenter ──▶ ToastView
//!                              │                          │
//!                              └──────── revision ───────▶ DismissalTimer (per id)
//! ```
//!
//! Nothing here performs I/O or returns errors: unknown kinds fall back to
//! [`Kind::Info`] and dismissing an absent id does nothing.

mod kind;
mod notification;
mod notifier;
pub mod presenter;
pub mod store;
pub mod timer;

pub use kind::Kind;
pub use notification::{Notification, NotificationId, NotificationRequest};
pub use notifier::Notifier;
pub use presenter::{Presenter, ToastView};
pub use store::{DEFAULT_DURATION, NotificationStore};
pub use timer::{DismissalTimer, TimerState};
