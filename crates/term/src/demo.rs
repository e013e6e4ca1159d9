//! Simulated producers that report from outside the UI loop.

use std::time::Duration;

use chime_notify::{NotificationId, NotificationRequest, Notifier};
use tracing::info;

use crate::cli::StartupToast;

/// How long the simulated save takes.
pub const SAVE_DELAY: Duration = Duration::from_millis(1500);

/// Shows a persistent "saving" toast, then swaps it for a success once the
/// simulated upload finishes.
pub fn spawn_background_save(notifier: Notifier) {
	tokio::spawn(async move {
		let pending = notifier.notify(
			NotificationRequest::info()
				.title("Saving")
				.message("Uploading your campaign draft…")
				.persistent(),
		);
		tokio::time::sleep(SAVE_DELAY).await;
		finish_background_save(&notifier, pending);
	});
}

pub(crate) fn finish_background_save(notifier: &Notifier, pending: NotificationId) -> NotificationId {
	notifier.dismiss(pending);
	info!("background save finished");
	notifier.success(Some("Draft saved"), Some("Your campaign draft is safe in the cloud."), None)
}

/// Enqueues the toasts passed with `--notify`.
pub fn show_startup_toasts(notifier: &Notifier, args: &[String]) {
	for arg in args {
		let toast = StartupToast::parse(arg);
		notifier.enqueue(toast.kind, Some(toast.text), None, None);
	}
}
