//! Per-kind visual treatment.

use chime_notify::Kind;
use ratatui::style::{Color, Modifier, Style};

/// Icon, label and accent color for a notification kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindStyle {
	pub icon: &'static str,
	/// Header text used when a notification has no title.
	pub label: &'static str,
	pub accent: Color,
}

impl KindStyle {
	pub const fn for_kind(kind: Kind) -> Self {
		match kind {
			Kind::Success => Self {
				icon: "✔",
				label: "Success",
				accent: Color::Green,
			},
			Kind::Error => Self {
				icon: "✖",
				label: "Error",
				accent: Color::Red,
			},
			Kind::Warning => Self {
				icon: "▲",
				label: "Warning",
				accent: Color::Yellow,
			},
			Kind::Info => Self {
				icon: "●",
				label: "Info",
				accent: Color::Cyan,
			},
		}
	}

	pub fn border(&self) -> Style {
		Style::default().fg(self.accent)
	}

	pub fn header(&self) -> Style {
		Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
	}
}
