//! Navigation context

use std::sync::Arc;

use tracing::warn;
use vcterm_client::{ClientError, InventoryClient};

use crate::config::Settings;
use crate::dialog::Dialog;
use crate::error::Result;
use crate::session::Session;

/// Everything a navigation screen needs
///
/// Only constructible from an open [`Session`], so every screen runs against a
/// connected endpoint.
pub struct Context {
    session: Session,
    dialog: Box<dyn Dialog>,
    settings: Settings,
}

impl Context {
    pub fn new(session: Session, dialog: Box<dyn Dialog>, settings: Settings) -> Self {
        Self {
            session,
            dialog,
            settings,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn InventoryClient> {
        self.session.client()
    }

    pub fn dialog(&mut self) -> &mut dyn Dialog {
        self.dialog.as_mut()
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Show a remote failure and let the caller abort its screen
    ///
    /// # Errors
    /// Returns an error if the dialog surface fails.
    pub fn report(&mut self, subject: &str, err: &ClientError) -> Result<()> {
        warn!(subject = %subject, error = %err, "remote operation failed");
        self.dialog.msgbox("Error", &format!("{subject}\n\n{err}"))?;
        Ok(())
    }

    /// Give back the session and dialog once navigation is over
    #[must_use]
    pub fn into_parts(self) -> (Session, Box<dyn Dialog>) {
        (self.session, self.dialog)
    }
}
