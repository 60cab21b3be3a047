//! Multi-field form

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;
use vcterm_core::{DialogCode, FormField};

use super::input::render_field;
use super::{Button, OK_CANCEL, layout, render_buttons, render_window};
use crate::action::Action;

/// Where the focus is inside a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(usize),
    Button(Button),
}

/// Field values being edited
#[derive(Debug)]
pub struct FormState {
    pub values: Vec<String>,
    pub focus: FormFocus,
}

impl FormState {
    pub fn new(fields: &[FormField]) -> Self {
        let focus = if fields.is_empty() {
            FormFocus::Button(Button::Ok)
        } else {
            FormFocus::Field(0)
        };
        Self {
            values: fields.iter().map(|f| f.value.clone()).collect(),
            focus,
        }
    }

    /// Apply an action; returns the exit code once the form closes
    ///
    /// Enter accepts the form from any field; Tab walks fields then buttons.
    pub fn handle(&mut self, action: Action) -> Option<DialogCode> {
        let last = self.values.len().checked_sub(1);
        match (action, self.focus) {
            (Action::Back, _) => return Some(DialogCode::Esc),
            (Action::Select, FormFocus::Button(Button::Cancel)) => {
                return Some(DialogCode::Cancel);
            }
            (Action::Select, _) => return Some(DialogCode::Ok),
            (Action::Input(c), FormFocus::Field(i)) => self.values[i].push(c),
            (Action::Backspace, FormFocus::Field(i)) => {
                self.values[i].pop();
            }
            (Action::Up, FormFocus::Field(i)) => self.focus = FormFocus::Field(i.saturating_sub(1)),
            (Action::Down, FormFocus::Field(i)) if Some(i) != last => {
                self.focus = FormFocus::Field(i + 1);
            }
            (Action::ToggleButton, FormFocus::Field(i)) => {
                self.focus = if Some(i) == last {
                    FormFocus::Button(Button::Ok)
                } else {
                    FormFocus::Field(i + 1)
                };
            }
            (Action::ToggleButton, FormFocus::Button(Button::Ok)) => {
                self.focus = FormFocus::Button(Button::Cancel);
            }
            (Action::ToggleButton, FormFocus::Button(Button::Cancel)) => {
                self.focus = if self.values.is_empty() {
                    FormFocus::Button(Button::Ok)
                } else {
                    FormFocus::Field(0)
                };
            }
            _ => {}
        }
        None
    }
}

/// Render a form window
pub fn render(frame: &mut Frame, area: Rect, title: &str, text: &str, fields: &[FormField], state: &FormState) {
    let label_width = fields.iter().map(|f| f.label.width()).max().unwrap_or(0);
    let label_cols = u16::try_from(label_width).unwrap_or(u16::MAX).saturating_add(2);

    let width = layout::window_width(area, text, 56);
    let text_rows = layout::wrapped_height(text, width.saturating_sub(2));
    let field_rows = u16::try_from(fields.len()).unwrap_or(u16::MAX);
    let height = text_rows.saturating_add(field_rows).saturating_add(5);
    let window = layout::popup(area, width, height);
    let inner = render_window(frame, title, window);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(text_rows),
            Constraint::Length(1),
            Constraint::Length(field_rows),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), rows[0]);

    for (i, (field, value)) in fields.iter().zip(&state.values).enumerate() {
        let Ok(offset) = u16::try_from(i) else { break };
        if offset >= rows[2].height {
            break;
        }
        let row = Rect::new(rows[2].x, rows[2].y + offset, rows[2].width, 1);
        let [label_area, value_area] =
            Layout::horizontal([Constraint::Length(label_cols), Constraint::Min(1)]).areas(row);

        frame.render_widget(Paragraph::new(format!("{}:", field.label)), label_area);
        let focused = state.focus == FormFocus::Field(i);
        render_field(frame, value_area, value, field.masked, focused);
    }

    let button = match state.focus {
        FormFocus::Button(button) => Some(button),
        FormFocus::Field(_) => None,
    };
    render_buttons(frame, &OK_CANCEL, button, rows[4]);
}
