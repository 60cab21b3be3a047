//! Navigation actions bound to menu items

use futures::future::{FutureExt, LocalBoxFuture};
use vcterm_api::{ChildCollection, EntityKind};

use crate::context::Context;
use crate::error::Result;
use crate::inventory::InventoryObject;
use crate::{detail, entity, navigator};

/// What selecting a menu item does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// List every entity of a kind
    List(EntityKind),
    /// Inventory search screen
    Search,
    /// Open an entity's detail menu
    Open(InventoryObject),
    /// Show an entity's summary properties
    Summary(InventoryObject),
    /// Show a virtual machine's power state
    PowerState(InventoryObject),
    /// Rename an entity
    Rename(InventoryObject),
    /// List an entity's child collection
    Children(InventoryObject, ChildCollection),
}

/// Run an action
///
/// Boxed because actions open menus whose items dispatch further actions.
pub fn dispatch<'a>(ctx: &'a mut Context, action: &'a NavAction) -> LocalBoxFuture<'a, Result<()>> {
    async move {
        match action {
            NavAction::List(kind) => navigator::inventory_menu(ctx, *kind).await,
            NavAction::Search => navigator::search_menu(ctx).await,
            NavAction::Open(object) => detail::display(ctx, object).await,
            NavAction::Summary(object) => detail::summary(ctx, object).await,
            NavAction::PowerState(object) => detail::power_state(ctx, object).await,
            NavAction::Rename(object) => entity::rename(ctx, object, "").await.map(|_| ()),
            NavAction::Children(object, ChildCollection::Network) => {
                entity::network_menu(ctx, object, "").await
            }
            NavAction::Children(object, ChildCollection::Vm) => {
                entity::virtual_machine_menu(ctx, object, "").await
            }
            NavAction::Children(object, ChildCollection::Datastore) => {
                entity::datastore_menu(ctx, object, "").await
            }
        }
    }
    .boxed_local()
}
