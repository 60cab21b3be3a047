//! Widget rendering and widget state

pub mod form;
pub mod gauge;
pub mod input;
pub mod layout;
pub mod menu;
pub mod message;
pub mod statusbar;

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::config;
use statusbar::Hints;

/// Dialog buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Button {
    #[default]
    Ok,
    Cancel,
}

impl Button {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Button::Ok => Button::Cancel,
            Button::Cancel => Button::Ok,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Button::Ok => "<  OK  >",
            Button::Cancel => "<Cancel>",
        }
    }
}

/// Draw the background title, the empty screen and the key hints
///
/// Returns the area left for the widget.
pub fn render_backdrop(frame: &mut Frame, title: &str, hints: Hints) -> Rect {
    let areas = layout::screen_areas(frame.area());

    frame.render_widget(Block::default().style(config::backdrop_style()), frame.area());
    frame.render_widget(
        Paragraph::new(format!(" {title}")).style(config::title_style()),
        areas.title,
    );
    statusbar::render(frame, hints, areas.statusbar);

    areas.body
}

/// Clear `area` and draw a titled window over it, returning the inner area
pub fn render_window(frame: &mut Frame, title: &str, area: Rect) -> Rect {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .style(config::window_style());
    if !title.is_empty() {
        block = block.title(Line::styled(format!(" {title} "), config::header_style()).centered());
    }

    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);
    inner
}

/// Draw a centered row of buttons, highlighting the focused one
pub fn render_buttons(frame: &mut Frame, buttons: &[Button], focused: Option<Button>, area: Rect) {
    let mut spans = Vec::with_capacity(buttons.len() * 2);
    for (i, button) in buttons.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let style = if focused == Some(*button) {
            config::selected_style()
        } else {
            config::button_style()
        };
        spans.push(Span::styled(button.label(), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).centered(), area);
}

/// Both buttons of a menu, input box or form
pub const OK_CANCEL: [Button; 2] = [Button::Ok, Button::Cancel];
