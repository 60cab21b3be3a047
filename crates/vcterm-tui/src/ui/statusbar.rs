//! Status bar with key hints

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::config;

/// Which widget is waiting for input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hints {
    Menu,
    Input,
    Form,
    Message,
    Busy,
}

impl Hints {
    pub fn text(self) -> &'static str {
        match self {
            Hints::Menu => "[↑/↓] Move  [Home/End] First/Last  [Tab] Buttons  [Enter] Select  [Esc] Back",
            Hints::Input => "[Tab] Buttons  [Enter] Accept  [Esc] Cancel",
            Hints::Form => "[↑/↓] Field  [Tab] Next  [Enter] Accept  [Esc] Cancel",
            Hints::Message => "[Enter] OK",
            Hints::Busy => "Please wait ...",
        }
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, hints: Hints, area: Rect) {
    let paragraph = Paragraph::new(format!(" {}", hints.text())).style(config::hint_style());
    frame.render_widget(paragraph, area);
}
