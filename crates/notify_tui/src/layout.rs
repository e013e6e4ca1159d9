//! Placement of toasts on screen.

use std::time::Duration;

use chime_notify::{NotificationId, ToastView};
use ratatui::layout::{Position, Rect};
use serde::Deserialize;

use crate::style::KindStyle;
use crate::text;

/// Narrowest toast that still fits an icon, a few characters and the close button.
pub(crate) const MIN_WIDTH: u16 = 12;
/// Message lines shown before the text is cut with an ellipsis.
pub(crate) const MAX_MESSAGE_LINES: usize = 4;
/// Border plus one column of padding on each side.
pub(crate) const HORIZONTAL_CHROME: u16 = 4;
/// Width of the clickable close button, drawn as ` × ` on the top border.
pub(crate) const CLOSE_WIDTH: u16 = 3;

/// Screen corner the toast stack grows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
	/// Top-right corner (default).
	#[default]
	TopRight,
	TopLeft,
	BottomRight,
	BottomLeft,
}

impl Anchor {
	pub(crate) fn is_right(self) -> bool {
		matches!(self, Self::TopRight | Self::BottomRight)
	}

	pub(crate) fn is_bottom(self) -> bool {
		matches!(self, Self::BottomRight | Self::BottomLeft)
	}
}

/// Stack geometry and cosmetic settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackStyle {
	pub anchor: Anchor,
	/// Toast width in cells, clamped to the available area.
	pub width: u16,
	/// Distance from the anchored edges.
	pub margin: u16,
	/// Rows between stacked toasts.
	pub spacing: u16,
	/// Toasts younger than this draw with a bold border.
	pub entry_highlight: Duration,
}

impl Default for StackStyle {
	fn default() -> Self {
		Self {
			anchor: Anchor::TopRight,
			width: 44,
			margin: 1,
			spacing: 0,
			entry_highlight: Duration::from_millis(300),
		}
	}
}

/// Screen placement of one toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastSlot {
	pub id: NotificationId,
	/// Full toast rectangle, borders included.
	pub area: Rect,
	/// Close button on the top border.
	pub close: Rect,
}

/// Result of [`layout`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackLayout {
	/// Placed toasts, in display order.
	pub slots: Vec<ToastSlot>,
	/// Toasts that did not fit in the area.
	pub hidden: usize,
}

/// What a pointer position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
	Close(NotificationId),
	Body(NotificationId),
}

impl Hit {
	pub fn id(self) -> NotificationId {
		match self {
			Self::Close(id) | Self::Body(id) => id,
		}
	}
}

/// Lines inside the border for a view at the given inner text width.
pub(crate) fn content_lines(view: &ToastView<'_>, text_width: usize) -> (String, Vec<String>) {
	let style = KindStyle::for_kind(view.notification.kind());
	let heading = view.notification.title().unwrap_or(style.label);
	let header = text::truncate(&format!("{} {heading}", style.icon), text_width);
	let body = view
		.notification
		.message()
		.map(|message| text::wrap_clamped(message, text_width, MAX_MESSAGE_LINES))
		.unwrap_or_default();
	(header, body)
}

fn toast_height(view: &ToastView<'_>, width: u16) -> u16 {
	let text_width = width.saturating_sub(HORIZONTAL_CHROME) as usize;
	let (_, body) = content_lines(view, text_width);
	let progress = u16::from(view.remaining.is_some());
	2 + 1 + body.len() as u16 + progress
}

/// Places `views` in `area`, stacking away from the anchor in display order.
///
/// Toasts that would leave the area are counted in [`StackLayout::hidden`]
/// instead of being clipped.
pub fn layout(area: Rect, views: &[ToastView<'_>], style: &StackStyle) -> StackLayout {
	let available = area.width.saturating_sub(style.margin.saturating_mul(2));
	let width = style.width.min(available);
	if width < MIN_WIDTH || area.height < 3 {
		return StackLayout {
			slots: Vec::new(),
			hidden: views.len(),
		};
	}

	let x = if style.anchor.is_right() {
		area.right().saturating_sub(style.margin).saturating_sub(width)
	} else {
		area.x.saturating_add(style.margin)
	};

	let mut slots = Vec::with_capacity(views.len());
	let mut offset = style.margin;
	for (placed, view) in views.iter().enumerate() {
		let height = toast_height(view, width);
		let end = offset.saturating_add(height);
		if end > area.height {
			return StackLayout {
				slots,
				hidden: views.len() - placed,
			};
		}

		let y = if style.anchor.is_bottom() {
			area.bottom() - end
		} else {
			area.y + offset
		};
		let rect = Rect::new(x, y, width, height);
		slots.push(ToastSlot {
			id: view.id(),
			area: rect,
			close: Rect::new(rect.right() - 1 - CLOSE_WIDTH, rect.y, CLOSE_WIDTH, 1),
		});
		offset = end.saturating_add(style.spacing);
	}

	StackLayout { slots, hidden: 0 }
}

/// Finds the toast, and the part of it, under a terminal cell.
pub fn hit_test(layout: &StackLayout, column: u16, row: u16) -> Option<Hit> {
	let position = Position::new(column, row);
	layout.slots.iter().find_map(|slot| {
		if slot.close.contains(position) {
			Some(Hit::Close(slot.id))
		} else if slot.area.contains(position) {
			Some(Hit::Body(slot.id))
		} else {
			None
		}
	})
}
