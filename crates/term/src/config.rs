//! Application configuration loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chime_notify_tui::{Anchor, StackStyle};
use serde::Deserialize;
use thiserror::Error;

/// Narrowest toast the layout will place.
const MIN_WIDTH: u16 = 12;
const MAX_REFRESH_RATE_HZ: u32 = 240;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read {}: {error}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		error: std::io::Error,
	},

	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("invalid value for `{field}`: {reason}")]
	Invalid { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub notifications: NotificationConfig,
	pub layout: LayoutConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotificationConfig {
	/// Used when a producer gives no duration.
	pub default_duration_ms: u64,
	/// Presenter tick cadence.
	pub refresh_rate_hz: u32,
	/// Bold border window for new toasts.
	pub entry_highlight_ms: u64,
}

impl Default for NotificationConfig {
	fn default() -> Self {
		Self {
			default_duration_ms: 4000,
			refresh_rate_hz: 60,
			entry_highlight_ms: 300,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
	pub anchor: Anchor,
	pub width: u16,
	pub margin: u16,
	pub spacing: u16,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		let style = StackStyle::default();
		Self {
			anchor: style.anchor,
			width: style.width,
			margin: style.margin,
			spacing: style.spacing,
		}
	}
}

impl Config {
	/// Loads configuration from `explicit`, or from the user config file when
	/// it exists, or falls back to defaults.
	pub fn load(explicit: Option<&Path>) -> Result<Self> {
		match explicit {
			Some(path) => Self::from_file(path),
			None => match Self::default_path() {
				Some(path) if path.is_file() => Self::from_file(&path),
				_ => Ok(Self::default()),
			},
		}
	}

	/// `$XDG_CONFIG_HOME/chime/config.toml` or the platform equivalent.
	pub fn default_path() -> Option<PathBuf> {
		dirs::config_dir().map(|dir| dir.join("chime").join("config.toml"))
	}

	pub fn from_file(path: &Path) -> Result<Self> {
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml(&text)
	}

	pub fn from_toml(text: &str) -> Result<Self> {
		let config: Self = toml::from_str(text)?;
		config.validate()
	}

	fn validate(self) -> Result<Self> {
		let rate = self.notifications.refresh_rate_hz;
		if !(1..=MAX_REFRESH_RATE_HZ).contains(&rate) {
			return Err(ConfigError::Invalid {
				field: "notifications.refresh_rate_hz",
				reason: format!("{rate} is outside 1..={MAX_REFRESH_RATE_HZ}"),
			});
		}
		if self.layout.width < MIN_WIDTH {
			return Err(ConfigError::Invalid {
				field: "layout.width",
				reason: format!("{} is narrower than {MIN_WIDTH} cells", self.layout.width),
			});
		}
		Ok(self)
	}

	pub fn default_duration(&self) -> Duration {
		Duration::from_millis(self.notifications.default_duration_ms)
	}

	pub fn refresh_interval(&self) -> Duration {
		Duration::from_secs(1) / self.notifications.refresh_rate_hz.max(1)
	}

	pub fn stack_style(&self) -> StackStyle {
		StackStyle {
			anchor: self.layout.anchor,
			width: self.layout.width,
			margin: self.layout.margin,
			spacing: self.layout.spacing,
			entry_highlight: Duration::from_millis(self.notifications.entry_highlight_ms),
		}
	}
}
