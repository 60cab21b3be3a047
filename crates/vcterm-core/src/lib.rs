//! vcterm-core: inventory navigation
//!
//! Menu composition, entity actions, the inventory navigator and session
//! bootstrap. Talks to the management endpoint through
//! [`vcterm_client::InventoryClient`] and to the operator through [`Dialog`].

pub mod action;
pub mod app;
pub mod config;
pub mod context;
pub mod detail;
pub mod dialog;
pub mod entity;
pub mod error;
pub mod inventory;
pub mod menu;
pub mod navigator;
pub mod session;
pub mod task;

pub use action::{NavAction, dispatch};
pub use app::App;
pub use config::Settings;
pub use context::Context;
pub use dialog::{Dialog, DialogCode, FormField, MenuEntry};
pub use error::{CoreError, DialogError, Result};
pub use inventory::InventoryObject;
pub use menu::{Menu, MenuItem, Selection};
pub use session::Session;
pub use task::TaskGauge;

/// Name shown in titles
pub const PRODUCT: &str = "vcterm";

/// Crate version shown in titles
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
