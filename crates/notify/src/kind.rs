//! Notification kinds.

use strum::{Display, EnumString, IntoStaticStr};

/// Visual category of a notification.
///
/// Selects the icon and accent color only; every kind has the same lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Kind {
	/// An operation completed.
	Success,
	/// An operation failed.
	Error,
	/// Something needs attention but nothing failed.
	#[strum(to_string = "warning", serialize = "warn")]
	Warning,
	/// Neutral information (default).
	#[default]
	Info,
}

impl Kind {
	/// Parses a kind name, falling back to [`Kind::Info`] for anything unrecognized.
	pub fn coerce(name: &str) -> Self {
		name.trim().parse().unwrap_or_else(|_| {
			tracing::debug!(kind = name, "unrecognized notification kind, using info");
			Self::Info
		})
	}

	/// Returns the lowercase name of this kind.
	pub fn as_str(self) -> &'static str {
		self.into()
	}
}
