//! Dialog surface abstraction
//!
//! The navigation code only talks to modal widgets through [`Dialog`]. Every
//! call blocks until the operator answers, except [`Dialog::infobox`] and
//! [`Dialog::gauge`] which draw and return immediately.

use crate::error::DialogError;

/// Exit status of a modal widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogCode {
    Ok,
    Cancel,
    Esc,
    Help,
    Extra,
}

impl DialogCode {
    /// Whether the operator backed out of the widget
    #[must_use]
    pub fn is_dismissal(self) -> bool {
        matches!(self, DialogCode::Cancel | DialogCode::Esc)
    }
}

/// A row of a menu widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub tag: String,
    pub description: String,
}

/// An input field of a form widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: String,
    pub value: String,
    /// Echo input as `*`
    pub masked: bool,
}

impl FormField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            masked: false,
        }
    }

    #[must_use]
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }
}

/// Modal widget vocabulary
pub trait Dialog {
    /// Text shown behind every widget
    fn set_background_title(&mut self, title: &str);

    /// Single-choice list; returns the selected tag on OK
    fn menu(
        &mut self,
        title: &str,
        text: &str,
        entries: &[MenuEntry],
    ) -> Result<(DialogCode, Option<String>), DialogError>;

    /// Message with a single OK button
    fn msgbox(&mut self, title: &str, text: &str) -> Result<(), DialogError>;

    /// Message shown without waiting for input
    fn infobox(&mut self, title: &str, text: &str) -> Result<(), DialogError>;

    /// Single line of text, starting from `init`
    fn inputbox(
        &mut self,
        title: &str,
        text: &str,
        init: &str,
    ) -> Result<(DialogCode, String), DialogError>;

    /// Several labelled fields; values are returned in field order
    fn form(
        &mut self,
        title: &str,
        text: &str,
        fields: &[FormField],
    ) -> Result<(DialogCode, Vec<String>), DialogError>;

    /// Progress bar redraw, `percent` in 0..=100
    fn gauge(&mut self, title: &str, text: &str, percent: u8) -> Result<(), DialogError>;
}
