//! vcterm-client: inventory client library
//!
//! Defines the [`InventoryClient`] and [`Connector`] traits used by the
//! navigation core, and an HTTP implementation of both.
//!
//! # Example
//!
//! ```no_run
//! use vcterm_api::EntityKind;
//! use vcterm_client::{ClientSettings, Connector, Credentials, HttpConnector};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let connector = HttpConnector::new(ClientSettings::default());
//! let session = connector
//!     .connect(&Credentials {
//!         host: "vc01.lab.local".into(),
//!         user: "admin".into(),
//!         password: "secret".into(),
//!     })
//!     .await?;
//!
//! let view = session.create_view(EntityKind::VirtualMachine).await?;
//! let vms = session
//!     .collect_properties(&view, EntityKind::VirtualMachine, &["name", "runtime.powerState"], true)
//!     .await?;
//! session.destroy_view(&view).await?;
//!
//! for vm in &vms {
//!     println!("{:?}", vm.name());
//! }
//!
//! session.disconnect().await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;
pub mod traits;

pub use error::{ClientError, Result};
pub use http::{ClientSettings, HttpConnector, HttpInventoryClient, SESSION_HEADER, api_url, endpoint_url};
pub use traits::{Connector, Credentials, InventoryClient};
