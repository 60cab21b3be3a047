//! Single-line input box

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;
use vcterm_core::DialogCode;

use super::{Button, OK_CANCEL, layout, render_buttons, render_window};
use crate::action::Action;
use crate::config;

/// Text being edited and the button in focus
#[derive(Debug, Default)]
pub struct InputState {
    pub value: String,
    button: Button,
}

impl InputState {
    pub fn new(init: &str) -> Self {
        Self {
            value: init.to_string(),
            button: Button::Ok,
        }
    }

    /// Apply an action; returns the exit code once the box closes
    pub fn handle(&mut self, action: Action) -> Option<DialogCode> {
        match action {
            Action::Input(c) => self.value.push(c),
            Action::Backspace => {
                self.value.pop();
            }
            Action::ToggleButton => self.button = self.button.toggle(),
            Action::Select => {
                return Some(match self.button {
                    Button::Ok => DialogCode::Ok,
                    Button::Cancel => DialogCode::Cancel,
                });
            }
            Action::Back => return Some(DialogCode::Esc),
            _ => {}
        }
        None
    }
}

/// Render an input box
pub fn render(frame: &mut Frame, area: Rect, title: &str, text: &str, state: &InputState) {
    let width = layout::window_width(area, text, 50);
    let text_rows = layout::wrapped_height(text, width.saturating_sub(2));
    let window = layout::popup(area, width, text_rows.saturating_add(6));
    let inner = render_window(frame, title, window);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(text_rows),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), rows[0]);
    render_field(frame, rows[2], &state.value, false, true);
    render_buttons(frame, &OK_CANCEL, Some(state.button), rows[4]);
}

/// Draw an edit field, scrolled so the end of the text stays visible
pub fn render_field(frame: &mut Frame, area: Rect, value: &str, masked: bool, focused: bool) {
    let shown = if masked {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };

    let visible = usize::from(area.width.saturating_sub(1));
    let mut start = 0;
    while shown[start..].width() > visible {
        start += shown[start..].chars().next().map_or(1, char::len_utf8);
    }
    let tail = &shown[start..];

    frame.render_widget(Paragraph::new(tail).style(config::field_style()), area);
    if focused {
        let offset = u16::try_from(tail.width()).unwrap_or(area.width);
        frame.set_cursor_position((area.x + offset.min(area.width.saturating_sub(1)), area.y));
    }
}
