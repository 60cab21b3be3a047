//! Terminal input

#[cfg(test)]
use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;

/// Terminal event types
#[derive(Debug, Clone)]
pub enum Event {
    /// Terminal key event
    Key(KeyEvent),
    /// Terminal resize
    Resize,
}

/// Blocking source of terminal events
pub trait EventSource {
    /// Wait for the next event; `None` once input is exhausted
    fn next(&mut self) -> io::Result<Option<Event>>;
}

/// Reads events from the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next(&mut self) -> io::Result<Option<Event>> {
        loop {
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(Some(Event::Key(key)));
                }
                CrosstermEvent::Resize(_, _) => return Ok(Some(Event::Resize)),
                _ => {}
            }
        }
    }
}

/// Replays a fixed list of events
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    events: VecDeque<Event>,
}

#[cfg(test)]
impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Key presses without modifiers
    pub fn keys(codes: impl IntoIterator<Item = KeyCode>) -> Self {
        Self::new(
            codes
                .into_iter()
                .map(|code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }
}

#[cfg(test)]
impl EventSource for ScriptedEvents {
    fn next(&mut self) -> io::Result<Option<Event>> {
        Ok(self.events.pop_front())
    }
}

/// Convert a key event to an action
///
/// In text entry, printable keys are typed instead of moving the selection.
pub fn key_to_action(key: KeyEvent, text_entry: bool) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Back;
    }

    match key.code {
        KeyCode::Up => Action::Up,
        KeyCode::Down => Action::Down,
        KeyCode::Enter => Action::Select,
        KeyCode::Esc => Action::Back,
        KeyCode::Tab | KeyCode::BackTab => Action::ToggleButton,
        KeyCode::Left | KeyCode::Right if !text_entry => Action::ToggleButton,
        KeyCode::Home | KeyCode::PageUp if !text_entry => Action::First,
        KeyCode::End | KeyCode::PageDown if !text_entry => Action::Last,
        KeyCode::Backspace if text_entry => Action::Backspace,
        KeyCode::Char(c) => Action::Input(c),
        _ => Action::None,
    }
}
