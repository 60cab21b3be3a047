//! Operator actions inside a widget

/// What a key press means to the focused widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move selection or focus up
    Up,
    /// Move selection or focus down
    Down,
    /// Jump to first item
    First,
    /// Jump to last item
    Last,
    /// Press the focused button
    Select,
    /// Leave the widget (ESC)
    Back,
    /// Move focus between OK and Cancel
    ToggleButton,
    /// Typed character, or jump-to-tag in lists
    Input(char),
    /// Delete the last typed character
    Backspace,
    /// Redraw only
    Redraw,
    /// No operation
    None,
}
