//! Actions on a selected entity

use tracing::debug;
use vcterm_api::{ChildCollection, TaskState};

use crate::context::Context;
use crate::error::Result;
use crate::inventory::{InventoryObject, listing_path_set, object_item};
use crate::menu::Menu;
use crate::task::TaskGauge;

/// Rename an entity
///
/// Prompts with the current name. Backing out leaves the entity untouched;
/// otherwise one rename task is started and followed with a gauge. Returns the
/// new name once the task has succeeded.
///
/// # Errors
/// Returns an error if the dialog surface fails.
pub async fn rename(
    ctx: &mut Context,
    object: &InventoryObject,
    text: &str,
) -> Result<Option<String>> {
    let (code, new_name) = ctx.dialog().inputbox(&object.name, text, &object.name)?;
    if code.is_dismissal() {
        debug!(entity = %object.obj, "rename cancelled");
        return Ok(None);
    }

    let task = match ctx.client().rename(&object.obj, &new_name).await {
        Ok(task) => task,
        Err(err) => {
            ctx.report(&object.name, &err)?;
            return Ok(None);
        }
    };

    let finished = TaskGauge::new(
        object.name.clone(),
        format!("Renaming {} to {new_name} ...", object.name),
        task,
    )
    .display(ctx)
    .await?;

    let renamed = finished.is_some_and(|info| info.state == TaskState::Success);
    Ok(renamed.then_some(new_name))
}

struct ChildMessages {
    unsupported: &'static str,
    empty: &'static str,
}

fn child_messages(collection: ChildCollection) -> ChildMessages {
    match collection {
        ChildCollection::Network => ChildMessages {
            unsupported: "Entity does not contain any networks",
            empty: "No networks found for this managed entity",
        },
        ChildCollection::Vm => ChildMessages {
            unsupported: "Entity does not contain any Virtual Machines",
            empty: "No virtual machines found for this managed entity",
        },
        ChildCollection::Datastore => ChildMessages {
            unsupported: "Entity does not have any datastores",
            empty: "No datastores found for this managed entity",
        },
    }
}

async fn child_menu(
    ctx: &mut Context,
    object: &InventoryObject,
    collection: ChildCollection,
    text: &str,
) -> Result<()> {
    ctx.dialog().infobox("", "Retrieving information ...")?;

    let kind = collection.child_kind();
    let children = match ctx
        .client()
        .retrieve_children(&object.obj, collection, &listing_path_set(kind))
        .await
    {
        Ok(children) => children,
        Err(err) => return ctx.report(&object.name, &err),
    };

    let messages = child_messages(collection);
    let Some(children) = children else {
        ctx.dialog().msgbox(&object.name, messages.unsupported)?;
        return Ok(());
    };
    if children.is_empty() {
        ctx.dialog().msgbox(&object.name, messages.empty)?;
        return Ok(());
    }

    let items = children
        .iter()
        .map(|child| object_item(kind, child))
        .collect();
    Menu::new(object.name.clone(), text, items)
        .display(ctx)
        .await?;
    Ok(())
}

/// Networks used by an entity
///
/// # Errors
/// Returns an error if the dialog surface fails.
pub async fn network_menu(ctx: &mut Context, object: &InventoryObject, text: &str) -> Result<()> {
    child_menu(ctx, object, ChildCollection::Network, text).await
}

/// Virtual machines contained in an entity, e.g. a host, cluster or datastore
///
/// # Errors
/// Returns an error if the dialog surface fails.
pub async fn virtual_machine_menu(
    ctx: &mut Context,
    object: &InventoryObject,
    text: &str,
) -> Result<()> {
    child_menu(ctx, object, ChildCollection::Vm, text).await
}

/// Datastores used by an entity
///
/// # Errors
/// Returns an error if the dialog surface fails.
pub async fn datastore_menu(ctx: &mut Context, object: &InventoryObject, text: &str) -> Result<()> {
    child_menu(ctx, object, ChildCollection::Datastore, text).await
}
