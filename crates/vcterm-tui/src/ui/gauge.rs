//! Progress gauge

use ratatui::prelude::*;
use ratatui::widgets::{Gauge, Paragraph, Wrap};

use super::{layout, render_window};
use crate::config;

/// Render a gauge window at `percent`
pub fn render(frame: &mut Frame, area: Rect, title: &str, text: &str, percent: u8) {
    let width = layout::window_width(area, text, 50);
    let text_rows = layout::wrapped_height(text, width.saturating_sub(2));
    let window = layout::popup(area, width, text_rows.saturating_add(4));
    let inner = render_window(frame, title, window);

    let [text_area, _, bar_area] = Layout::vertical([
        Constraint::Length(text_rows),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), text_area);
    let gauge = Gauge::default()
        .gauge_style(config::selected_style())
        .percent(u16::from(percent.min(100)));
    frame.render_widget(gauge, bar_area);
}
