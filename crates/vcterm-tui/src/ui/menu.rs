//! Menu widget

use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;
use vcterm_core::{DialogCode, MenuEntry};

use super::{Button, OK_CANCEL, layout, render_buttons, render_window};
use crate::action::Action;
use crate::config;

/// Selection and button focus of an open menu
#[derive(Debug, Default)]
pub struct MenuState {
    list: ListState,
    len: usize,
    button: Button,
}

impl MenuState {
    pub fn new(len: usize) -> Self {
        let mut list = ListState::default();
        if len > 0 {
            list.select(Some(0));
        }
        Self {
            list,
            len,
            button: Button::Ok,
        }
    }

    /// Index of the highlighted entry
    pub fn selected(&self) -> Option<usize> {
        self.list.selected()
    }

    /// Apply an action; returns the exit code once the menu closes
    pub fn handle(&mut self, action: Action, entries: &[MenuEntry]) -> Option<DialogCode> {
        match action {
            Action::Up => self.select(self.selected().map_or(0, |i| i.saturating_sub(1))),
            Action::Down => self.select(self.selected().map_or(0, |i| i + 1)),
            Action::First => self.select(0),
            Action::Last => self.select(self.len.saturating_sub(1)),
            Action::ToggleButton => self.button = self.button.toggle(),
            Action::Input(c) => self.jump_to(c, entries),
            Action::Select => {
                return Some(match self.button {
                    Button::Ok => DialogCode::Ok,
                    Button::Cancel => DialogCode::Cancel,
                });
            }
            Action::Back => return Some(DialogCode::Esc),
            Action::Backspace | Action::Redraw | Action::None => {}
        }
        None
    }

    fn select(&mut self, index: usize) {
        if self.len > 0 {
            self.list.select(Some(index.min(self.len - 1)));
        }
    }

    /// Move to the next entry whose tag starts with `c`, wrapping around
    fn jump_to(&mut self, c: char, entries: &[MenuEntry]) {
        let start = self.selected().map_or(0, |i| i + 1);
        let wanted = c.to_lowercase().collect::<String>();
        let hit = (0..entries.len())
            .map(|offset| (start + offset) % entries.len())
            .find(|&i| entries[i].tag.to_lowercase().starts_with(&wanted));
        if let Some(index) = hit {
            self.select(index);
        }
    }
}

fn entry_line(entry: &MenuEntry, tag_width: usize) -> Line<'_> {
    let pad = tag_width.saturating_sub(entry.tag.width());
    let description = match config::status_color(&entry.description) {
        Some(color) => Span::styled(entry.description.as_str(), Style::default().fg(color)),
        None => Span::raw(entry.description.as_str()),
    };
    Line::from(vec![
        Span::raw(format!("{}{}  ", entry.tag, " ".repeat(pad))),
        description,
    ])
}

/// Render a menu window
pub fn render(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    text: &str,
    entries: &[MenuEntry],
    state: &mut MenuState,
) {
    let tag_width = entries.iter().map(|e| e.tag.width()).max().unwrap_or(0);
    let row_width = entries
        .iter()
        .map(|e| tag_width + 2 + e.description.width())
        .max()
        .unwrap_or(0);
    let row_width = u16::try_from(row_width).unwrap_or(u16::MAX).saturating_add(6);

    let width = layout::window_width(area, text, 50.max(row_width));
    let text_rows = layout::wrapped_height(text, width.saturating_sub(2));
    let list_rows = u16::try_from(entries.len()).unwrap_or(u16::MAX);
    let height = text_rows.saturating_add(list_rows).saturating_add(5);
    let window = layout::popup(area, width, height);
    let inner = render_window(frame, title, window);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(text_rows),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), rows[0]);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(entry_line(entry, tag_width)))
        .collect();
    let list = List::new(items)
        .highlight_style(config::selected_style())
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, rows[1], &mut state.list);

    render_buttons(frame, &OK_CANCEL, Some(state.button), rows[3]);
}
