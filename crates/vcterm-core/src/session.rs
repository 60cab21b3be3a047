//! Session bootstrap
//!
//! Prompts for login details until a session is opened or the operator
//! cancels the form.

use std::sync::Arc;

use tracing::{info, warn};
use vcterm_api::AboutInfo;
use vcterm_client::{ClientError, Connector, Credentials, InventoryClient};

use crate::config::Settings;
use crate::dialog::{Dialog, DialogCode, FormField};
use crate::error::Result;
use crate::{PRODUCT, VERSION};

const LOGIN_TITLE: &str = "Login details";
const LOGIN_TEXT: &str = "Enter IP address or DNS name of the host you wish to connect to.\n";

/// An open session against a management endpoint
pub struct Session {
    host: String,
    user: String,
    about: AboutInfo,
    client: Arc<dyn InventoryClient>,
}

impl Session {
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        about: AboutInfo,
        client: Arc<dyn InventoryClient>,
    ) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            about,
            client,
        }
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    #[must_use]
    pub fn about(&self) -> &AboutInfo {
        &self.about
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn InventoryClient> {
        Arc::clone(&self.client)
    }

    /// Background title shown while connected
    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "{} - {} - {PRODUCT} version {VERSION}",
            self.host, self.about.full_name
        )
    }

    /// Close the session
    ///
    /// # Errors
    /// Returns the client error if the server could not be told to log out.
    pub async fn disconnect(self) -> std::result::Result<(), ClientError> {
        info!(host = %self.host, "disconnecting");
        self.client.disconnect().await
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("about", &self.about)
            .finish_non_exhaustive()
    }
}

/// Open a session and fetch the server identity
async fn open(
    connector: &dyn Connector,
    credentials: &Credentials,
) -> std::result::Result<Session, ClientError> {
    let client = connector.connect(credentials).await?;
    let about = match client.about().await {
        Ok(about) => about,
        Err(err) => {
            if let Err(logout) = client.disconnect().await {
                warn!(error = %logout, "failed to close half-open session");
            }
            return Err(err);
        }
    };

    Ok(Session::new(
        credentials.host.clone(),
        credentials.user.clone(),
        about,
        client,
    ))
}

/// Run the login form until a session is opened
///
/// Returns `None` when the operator cancels the form. Incomplete details and
/// failed connection attempts re-prompt without limit.
///
/// # Errors
/// Only dialog failures are returned.
pub async fn login(
    dialog: &mut dyn Dialog,
    connector: &dyn Connector,
    settings: &Settings,
) -> Result<Option<Session>> {
    let mut fields = vec![
        FormField::new("Hostname", settings.default_host.clone().unwrap_or_default()),
        FormField::new("Username", settings.default_user.clone().unwrap_or_default()),
        FormField::new("Password", "").masked(),
    ];

    loop {
        let (code, values) = dialog.form(LOGIN_TITLE, LOGIN_TEXT, &fields)?;
        if code.is_dismissal() {
            info!("login cancelled");
            return Ok(None);
        }
        if code != DialogCode::Ok {
            continue;
        }

        for (field, value) in fields.iter_mut().zip(&values) {
            field.value.clone_from(value);
        }

        let complete = values.len() == fields.len() && values.iter().all(|v| !v.is_empty());
        if !complete {
            dialog.msgbox("Error", "\nInvalid login details, please try again.")?;
            continue;
        }

        let credentials = Credentials {
            host: values[0].clone(),
            user: values[1].clone(),
            password: values[2].clone(),
        };
        // The password is not kept between attempts
        fields[2].value.clear();

        dialog.infobox("", &format!("Connecting to {} ...", credentials.host))?;

        match open(connector, &credentials).await {
            Ok(session) => {
                info!(host = %session.host(), server = %session.about().full_name, "connected");
                dialog.set_background_title(&session.title());
                return Ok(Some(session));
            }
            Err(err) => {
                warn!(host = %credentials.host, error = %err, "login failed");
                dialog.msgbox(
                    "Login failed",
                    &format!("Failed to login to {}\n\n{err}\n", credentials.host),
                )?;
            }
        }
    }
}
