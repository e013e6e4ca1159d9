//! Toast stack widget.

use chime_notify::ToastView;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Widget};

use crate::layout::{HORIZONTAL_CHROME, StackLayout, StackStyle, ToastSlot, content_lines};
use crate::style::KindStyle;

const CLOSE_GLYPH: &str = " × ";
const PROGRESS_FILLED: &str = "━";
const PROGRESS_EMPTY: &str = "─";

/// Draws the toasts placed by [`layout`](crate::layout()).
///
/// ```ignore
/// let views = presenter.views(&store, now);
/// let placed = chime_notify_tui::layout(frame.area(), &views, &style);
/// frame.render_widget(ToastStack::new(&views, &placed, &style), frame.area());
/// ```
pub struct ToastStack<'a, 'n> {
	views: &'a [ToastView<'n>],
	layout: &'a StackLayout,
	style: &'a StackStyle,
}

impl<'a, 'n> ToastStack<'a, 'n> {
	pub fn new(views: &'a [ToastView<'n>], layout: &'a StackLayout, style: &'a StackStyle) -> Self {
		Self { views, layout, style }
	}
}

impl Widget for ToastStack<'_, '_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		for slot in &self.layout.slots {
			let Some(view) = self.views.iter().find(|v| v.id() == slot.id) else {
				continue;
			};
			render_toast(view, slot, self.style, buf);
		}

		if self.layout.hidden > 0 {
			render_overflow(self.layout, self.style, area, buf);
		}
	}
}

fn render_toast(view: &ToastView<'_>, slot: &ToastSlot, style: &StackStyle, buf: &mut Buffer) {
	let rect = slot.area;
	let kind = KindStyle::for_kind(view.notification.kind());

	let mut border = kind.border();
	if view.age < style.entry_highlight {
		border = border.add_modifier(Modifier::BOLD);
	}
	let mut block = Block::bordered()
		.border_type(if view.hovered {
			BorderType::Double
		} else {
			BorderType::Rounded
		})
		.border_style(border);
	if view.is_paused() {
		block = block.title_bottom(Line::styled(" paused ", kind.border()).right_aligned());
	}

	Clear.render(rect, buf);
	let inner = block.inner(rect);
	block.render(rect, buf);
	buf.set_string(slot.close.x, slot.close.y, CLOSE_GLYPH, kind.header());

	let text_area = Rect::new(inner.x + 1, inner.y, rect.width.saturating_sub(HORIZONTAL_CHROME), inner.height);
	let (header, body) = content_lines(view, text_area.width as usize);
	let mut lines = Vec::with_capacity(body.len() + 1);
	lines.push(Line::styled(header, kind.header()));
	lines.extend(body.into_iter().map(Line::raw));
	Paragraph::new(lines).render(text_area, buf);

	if let Some(remaining) = view.remaining {
		let bar = Rect::new(text_area.x, inner.bottom().saturating_sub(1), text_area.width, 1);
		render_progress(remaining, kind.accent, bar, buf);
	}
}

fn render_progress(remaining: f32, accent: Color, bar: Rect, buf: &mut Buffer) {
	let width = bar.width as usize;
	let filled = ((remaining.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
	buf.set_string(bar.x, bar.y, PROGRESS_FILLED.repeat(filled), Style::default().fg(accent));
	buf.set_string(
		bar.x + filled as u16,
		bar.y,
		PROGRESS_EMPTY.repeat(width - filled),
		Style::default().fg(Color::DarkGray),
	);
}

/// Writes `+N more` next to the last placed toast, on the side the stack grows,
/// or in the anchor corner when nothing could be placed.
fn render_overflow(layout: &StackLayout, style: &StackStyle, area: Rect, buf: &mut Buffer) {
	let label = format!("+{} more", layout.hidden);
	let label_style = Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC);
	let Some(last) = layout.slots.last() else {
		render_corner_label(&label, label_style, style, area, buf);
		return;
	};
	let y = if style.anchor.is_bottom() {
		if last.area.y <= area.y {
			return;
		}
		last.area.y - 1
	} else {
		if last.area.bottom() >= area.bottom() {
			return;
		}
		last.area.bottom()
	};
	let x = last.area.right().saturating_sub(label.chars().count() as u16 + 1);
	buf.set_string(x, y, label, label_style);
}

fn render_corner_label(label: &str, label_style: Style, style: &StackStyle, area: Rect, buf: &mut Buffer) {
	if area.is_empty() {
		return;
	}
	let width = label.chars().count() as u16;
	let x = if style.anchor.is_right() {
		area.right().saturating_sub(style.margin.saturating_add(width)).max(area.x)
	} else {
		area.x.saturating_add(style.margin).min(area.right() - 1)
	};
	let y = if style.anchor.is_bottom() {
		area.bottom().saturating_sub(style.margin.saturating_add(1)).max(area.y)
	} else {
		area.y.saturating_add(style.margin).min(area.bottom() - 1)
	};
	buf.set_string(x, y, label, label_style);
}
