//! Application shell: welcome, login, inventory, disconnect

use std::sync::Arc;

use tracing::{info, warn};
use vcterm_client::Connector;

use crate::config::Settings;
use crate::context::Context;
use crate::dialog::Dialog;
use crate::error::Result;
use crate::{PRODUCT, VERSION, navigator, session};

/// The whole operator session
pub struct App {
    dialog: Box<dyn Dialog>,
    connector: Arc<dyn Connector>,
    settings: Settings,
}

impl App {
    pub fn new(dialog: Box<dyn Dialog>, connector: Arc<dyn Connector>, settings: Settings) -> Self {
        Self {
            dialog,
            connector,
            settings,
        }
    }

    fn welcome(&mut self) -> Result<()> {
        let text = format!(
            "Welcome to {PRODUCT} version {VERSION}.\n\n\
             Browse clusters, hosts, virtual machines, datastores and networks \
             of a virtualization management endpoint.\n\n\
             Use the arrow keys to move, Enter to select and Esc to go back."
        );
        self.dialog.msgbox("Welcome", &text)?;
        Ok(())
    }

    /// Run until the operator leaves the inventory menu or cancels login
    ///
    /// The session, once opened, is disconnected exactly once on the way out.
    ///
    /// # Errors
    /// Returns an error if the dialog surface fails.
    pub async fn run(mut self) -> Result<()> {
        self.dialog
            .set_background_title(&format!("{PRODUCT} version {VERSION}"));
        self.welcome()?;

        let Some(session) =
            session::login(self.dialog.as_mut(), self.connector.as_ref(), &self.settings).await?
        else {
            return Ok(());
        };

        let mut ctx = Context::new(session, self.dialog, self.settings);
        let navigated = navigator::display(&mut ctx).await;
        let (session, mut dialog) = ctx.into_parts();

        let shown = if navigated.is_ok() {
            dialog.infobox("", &format!("Disconnecting from {} ...", session.host()))
        } else {
            Ok(())
        };

        let host = session.host().to_string();
        match session.disconnect().await {
            Ok(()) => info!(host = %host, "disconnected"),
            Err(err) => warn!(host = %host, error = %err, "disconnect failed"),
        }

        navigated?;
        shown?;
        Ok(())
    }
}
