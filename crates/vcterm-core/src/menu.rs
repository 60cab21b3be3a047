//! Menu composition

use tracing::debug;

use crate::action::{NavAction, dispatch};
use crate::context::Context;
use crate::dialog::{DialogCode, MenuEntry};
use crate::error::Result;

/// A selectable menu row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub tag: String,
    pub description: String,
    /// Run on selection; `None` makes the row inert
    pub action: Option<NavAction>,
}

impl MenuItem {
    pub fn new(tag: impl Into<String>, description: impl Into<String>, action: NavAction) -> Self {
        Self {
            tag: tag.into(),
            description: description.into(),
            action: Some(action),
        }
    }

    /// A row that does nothing when selected
    pub fn inert(tag: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            description: description.into(),
            action: None,
        }
    }
}

/// A navigation screen listing [`MenuItem`]s
#[derive(Debug, Clone)]
pub struct Menu {
    pub title: String,
    pub text: String,
    pub items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(title: impl Into<String>, text: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            items,
        }
    }

    fn entries(&self) -> Vec<MenuEntry> {
        self.items
            .iter()
            .map(|item| MenuEntry {
                tag: item.tag.clone(),
                description: item.description.clone(),
            })
            .collect()
    }

    /// Show the menu once and return what the operator picked
    ///
    /// Exit codes other than OK and tags matching no item show the menu again.
    ///
    /// # Errors
    /// Returns an error if the dialog surface fails.
    pub fn select(&self, ctx: &mut Context) -> Result<Selection<'_>> {
        let entries = self.entries();
        loop {
            let (code, tag) = ctx.dialog().menu(&self.title, &self.text, &entries)?;
            if code.is_dismissal() {
                return Ok(Selection::Dismissed(code));
            }
            let (DialogCode::Ok, Some(tag)) = (code, tag) else {
                continue;
            };

            match self.items.iter().find(|item| item.tag == tag) {
                Some(item) => return Ok(Selection::Chosen(item)),
                None => debug!(menu = %self.title, tag = %tag, "unknown tag"),
            }
        }
    }

    /// Show the menu until the operator leaves it
    ///
    /// Each OK runs the selected item's action and shows the menu again once
    /// the action returns. CANCEL or ESC ends the loop and is returned with the
    /// last selected tag.
    ///
    /// # Errors
    /// Returns an error if the dialog surface fails.
    pub async fn display(&self, ctx: &mut Context) -> Result<(DialogCode, Option<String>)> {
        if self.items.is_empty() {
            ctx.dialog().msgbox(&self.title, "Nothing found")?;
            return Ok((DialogCode::Ok, None));
        }

        let mut last = None;
        loop {
            let item = match self.select(ctx)? {
                Selection::Dismissed(code) => return Ok((code, last)),
                Selection::Chosen(item) => item,
            };

            match &item.action {
                Some(action) => dispatch(ctx, action).await?,
                None => debug!(menu = %self.title, tag = %item.tag, "no action bound"),
            }
            last = Some(item.tag.clone());
        }
    }
}

/// Outcome of showing a [`Menu`] once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'m> {
    /// CANCEL or ESC
    Dismissed(DialogCode),
    /// OK on an item
    Chosen(&'m MenuItem),
}
