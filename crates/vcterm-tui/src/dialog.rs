//! Terminal implementation of the dialog surface

use std::io;

use ratatui::Terminal;
use ratatui::prelude::*;
use tracing::debug;
use vcterm_core::{Dialog, DialogCode, DialogError, FormField, MenuEntry};

use crate::action::Action;
use crate::event::{Event, EventSource, key_to_action};
use crate::ui::form::{self, FormState};
use crate::ui::input::{self, InputState};
use crate::ui::menu::{self, MenuState};
use crate::ui::statusbar::Hints;
use crate::ui::{gauge, message, render_backdrop};

/// Draws dialog widgets on a ratatui terminal and reads keys from `E`
pub struct TerminalDialog<B: Backend, E: EventSource> {
    terminal: Terminal<B>,
    events: E,
    background: String,
}

impl<B: Backend, E: EventSource> TerminalDialog<B, E> {
    pub fn new(terminal: Terminal<B>, events: E) -> Self {
        Self {
            terminal,
            events,
            background: String::new(),
        }
    }

    #[cfg(test)]
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    fn draw(&mut self, hints: Hints, render: impl FnOnce(&mut Frame, Rect)) -> Result<(), DialogError> {
        let background = &self.background;
        self.terminal
            .draw(|frame| {
                let body = render_backdrop(frame, background, hints);
                render(frame, body);
            })
            .map_err(|e| io::Error::other(e.to_string()))?;
        Ok(())
    }

    fn next_action(&mut self, text_entry: bool) -> Result<Action, DialogError> {
        match self.events.next()? {
            Some(Event::Key(key)) => Ok(key_to_action(key, text_entry)),
            Some(Event::Resize) => Ok(Action::Redraw),
            None => Err(DialogError::InputClosed),
        }
    }
}

impl<B: Backend, E: EventSource> Dialog for TerminalDialog<B, E> {
    fn set_background_title(&mut self, title: &str) {
        self.background = title.to_string();
    }

    fn menu(
        &mut self,
        title: &str,
        text: &str,
        entries: &[MenuEntry],
    ) -> Result<(DialogCode, Option<String>), DialogError> {
        let mut state = MenuState::new(entries.len());
        loop {
            self.draw(Hints::Menu, |frame, area| {
                menu::render(frame, area, title, text, entries, &mut state);
            })?;

            let action = self.next_action(false)?;
            if let Some(code) = state.handle(action, entries) {
                let tag = state
                    .selected()
                    .and_then(|i| entries.get(i))
                    .map(|entry| entry.tag.clone());
                debug!(title, ?code, ?tag, "menu closed");
                return Ok((code, tag));
            }
        }
    }

    fn msgbox(&mut self, title: &str, text: &str) -> Result<(), DialogError> {
        loop {
            self.draw(Hints::Message, |frame, area| {
                message::render_msgbox(frame, area, title, text);
            })?;

            if matches!(self.next_action(false)?, Action::Select | Action::Back) {
                return Ok(());
            }
        }
    }

    fn infobox(&mut self, title: &str, text: &str) -> Result<(), DialogError> {
        self.draw(Hints::Busy, |frame, area| {
            message::render_infobox(frame, area, title, text);
        })
    }

    fn inputbox(
        &mut self,
        title: &str,
        text: &str,
        init: &str,
    ) -> Result<(DialogCode, String), DialogError> {
        let mut state = InputState::new(init);
        loop {
            self.draw(Hints::Input, |frame, area| {
                input::render(frame, area, title, text, &state);
            })?;

            let action = self.next_action(true)?;
            if let Some(code) = state.handle(action) {
                return Ok((code, state.value));
            }
        }
    }

    fn form(
        &mut self,
        title: &str,
        text: &str,
        fields: &[FormField],
    ) -> Result<(DialogCode, Vec<String>), DialogError> {
        let mut state = FormState::new(fields);
        loop {
            self.draw(Hints::Form, |frame, area| {
                form::render(frame, area, title, text, fields, &state);
            })?;

            let action = self.next_action(true)?;
            if let Some(code) = state.handle(action) {
                return Ok((code, state.values));
            }
        }
    }

    fn gauge(&mut self, title: &str, text: &str, percent: u8) -> Result<(), DialogError> {
        self.draw(Hints::Busy, |frame, area| {
            gauge::render(frame, area, title, text, percent);
        })
    }
}
