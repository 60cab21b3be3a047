//! Message and info boxes

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use super::{Button, layout, render_buttons, render_window};

fn text_window(frame: &mut Frame, area: Rect, title: &str, text: &str, extra_rows: u16) -> Rect {
    let width = layout::window_width(area, text, 40);
    let text_rows = layout::wrapped_height(text, width.saturating_sub(2));
    let window = layout::popup(area, width, text_rows.saturating_add(2 + extra_rows));
    let inner = render_window(frame, title, window);
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), inner);
    inner
}

/// Message with an OK button
pub fn render_msgbox(frame: &mut Frame, area: Rect, title: &str, text: &str) {
    let inner = text_window(frame, area, title, text, 2);
    let buttons = Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1);
    render_buttons(frame, &[Button::Ok], Some(Button::Ok), buttons);
}

/// Message without buttons
pub fn render_infobox(frame: &mut Frame, area: Rect, title: &str, text: &str) {
    text_window(frame, area, title, text, 0);
}
