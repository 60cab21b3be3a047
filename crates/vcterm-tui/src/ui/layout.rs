//! Layout calculations for the dialogs

use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

/// Layout areas of the screen
pub struct ScreenAreas {
    pub title: Rect,
    pub body: Rect,
    pub statusbar: Rect,
}

/// Split the screen into title line, widget area and status bar
pub fn screen_areas(area: Rect) -> ScreenAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Background title
            Constraint::Min(3),    // Widgets
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ScreenAreas {
        title: vertical[0],
        body: vertical[1],
        statusbar: vertical[2],
    }
}

/// Rectangle of at most `width` x `height` centered in `area`
pub fn popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Display width of the widest line of `text`
pub fn text_width(text: &str) -> u16 {
    let widest = text.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
    u16::try_from(widest).unwrap_or(u16::MAX)
}

/// Number of rows `text` takes when wrapped to `width` columns
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .lines()
        .map(|line| UnicodeWidthStr::width(line).div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Window width for `text` with the given minimum, leaving a margin on screen
pub fn window_width(area: Rect, text: &str, minimum: u16) -> u16 {
    let limit = area.width.saturating_sub(4).max(minimum).min(area.width);
    text_width(text).saturating_add(4).max(minimum).min(limit)
}
