//! Width-aware wrapping and truncation.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Greedy word wrap to `width` columns. Words wider than a line are split.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
	let mut lines = Vec::new();
	if width == 0 {
		return lines;
	}

	for paragraph in text.lines() {
		let mut line = String::new();
		let mut line_width = 0;

		for word in paragraph.split_whitespace() {
			let word_width = word.width();
			if line_width > 0 && line_width + 1 + word_width <= width {
				line.push(' ');
				line.push_str(word);
				line_width += 1 + word_width;
				continue;
			}
			if line_width > 0 {
				lines.push(std::mem::take(&mut line));
				line_width = 0;
			}
			if word_width <= width {
				line.push_str(word);
				line_width = word_width;
				continue;
			}
			for ch in word.chars() {
				let ch_width = ch.width().unwrap_or(0);
				if line_width + ch_width > width {
					lines.push(std::mem::take(&mut line));
					line_width = 0;
				}
				line.push(ch);
				line_width += ch_width;
			}
		}

		if line_width > 0 || paragraph.trim().is_empty() {
			lines.push(line);
		}
	}
	lines
}

/// Wraps and keeps at most `max_lines`, ending the last kept line with an
/// ellipsis when text was dropped.
pub(crate) fn wrap_clamped(text: &str, width: usize, max_lines: usize) -> Vec<String> {
	let mut lines = wrap(text, width);
	if lines.len() > max_lines {
		lines.truncate(max_lines);
		if let Some(last) = lines.last_mut() {
			*last = with_ellipsis(last, width);
		}
	}
	lines
}

/// Cuts `text` to `width` columns, marking the cut with an ellipsis.
pub(crate) fn truncate(text: &str, width: usize) -> String {
	if text.width() <= width {
		return text.to_owned();
	}
	with_ellipsis(text, width)
}

fn with_ellipsis(text: &str, width: usize) -> String {
	if width == 0 {
		return String::new();
	}
	let mut out = String::new();
	let mut used = 0;
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width + 1 > width {
			break;
		}
		out.push(ch);
		used += ch_width;
	}
	out.push(ELLIPSIS);
	out
}
