//! Per-entity detail menus

use tracing::debug;
use vcterm_api::{ChildCollection, EntityKind};

use crate::action::{NavAction, dispatch};
use crate::context::Context;
use crate::entity;
use crate::error::Result;
use crate::inventory::{InventoryObject, value_text};
use crate::menu::{Menu, MenuItem, Selection};

/// Labelled properties shown in an entity summary
fn summary_fields(kind: EntityKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        EntityKind::Cluster => &[
            ("Name", "name"),
            ("Overall Status", "overallStatus"),
            ("Hosts", "summary.numHosts"),
            ("Effective Hosts", "summary.numEffectiveHosts"),
            ("Total CPU (MHz)", "summary.totalCpu"),
            ("Total Memory (bytes)", "summary.totalMemory"),
        ],
        EntityKind::Host => &[
            ("Name", "name"),
            ("Connection State", "runtime.connectionState"),
            ("Power State", "runtime.powerState"),
            ("Vendor", "summary.hardware.vendor"),
            ("Model", "summary.hardware.model"),
            ("Product", "summary.config.product.fullName"),
        ],
        EntityKind::VirtualMachine => &[
            ("Name", "name"),
            ("Power State", "runtime.powerState"),
            ("Guest OS", "config.guestFullName"),
            ("CPUs", "config.hardware.numCPU"),
            ("Memory (MB)", "config.hardware.memoryMB"),
            ("IP Address", "guest.ipAddress"),
        ],
        EntityKind::Datastore => &[
            ("Name", "name"),
            ("Type", "summary.type"),
            ("Accessible", "summary.accessible"),
            ("Capacity (bytes)", "summary.capacity"),
            ("Free Space (bytes)", "summary.freeSpace"),
        ],
        EntityKind::Network => &[
            ("Name", "name"),
            ("Accessible", "summary.accessible"),
            ("IP Pool", "summary.ipPoolName"),
        ],
    }
}

/// Detail menu of an entity
#[must_use]
pub fn detail_menu(object: &InventoryObject) -> Menu {
    let summary = MenuItem::new(
        "Summary",
        "General information",
        NavAction::Summary(object.clone()),
    );
    let rename = MenuItem::new("Rename", "Rename entity", NavAction::Rename(object.clone()));
    let children = |collection, tag: &str, description: &str| {
        MenuItem::new(
            tag,
            description,
            NavAction::Children(object.clone(), collection),
        )
    };

    let items = match object.kind() {
        EntityKind::Cluster | EntityKind::Host => vec![
            summary,
            rename,
            children(ChildCollection::Datastore, "Datastores", "Datastores used"),
            children(ChildCollection::Network, "Networks", "Networks used"),
            children(ChildCollection::Vm, "Virtual Machines", "Virtual Machines"),
        ],
        EntityKind::VirtualMachine => vec![
            summary,
            MenuItem::new(
                "Power State",
                "Current power state",
                NavAction::PowerState(object.clone()),
            ),
            rename,
            children(ChildCollection::Datastore, "Datastores", "Datastores used"),
            children(ChildCollection::Network, "Networks", "Networks used"),
        ],
        EntityKind::Datastore | EntityKind::Network => vec![
            summary,
            rename,
            children(ChildCollection::Vm, "Virtual Machines", "Virtual Machines"),
        ],
    };

    Menu::new(object.name.clone(), "Select an action to be performed", items)
}

/// Show an entity's detail menu until the operator leaves it
///
/// The menu is rebuilt after every action so a successful rename shows up in
/// its title and in the next rename prompt.
///
/// # Errors
/// Returns an error if the dialog surface fails.
pub async fn display(ctx: &mut Context, object: &InventoryObject) -> Result<()> {
    let mut object = object.clone();
    loop {
        let menu = detail_menu(&object);
        let item = match menu.select(ctx)? {
            Selection::Dismissed(_) => return Ok(()),
            Selection::Chosen(item) => item,
        };

        match &item.action {
            Some(NavAction::Rename(_)) => {
                if let Some(name) = entity::rename(ctx, &object, "").await? {
                    debug!(entity = %object.obj, from = %object.name, to = %name, "renamed");
                    object.name = name;
                }
            }
            Some(action) => dispatch(ctx, action).await?,
            None => {}
        }
    }
}

/// Show an entity's summary properties
///
/// # Errors
/// Returns an error if the dialog surface fails.
pub async fn summary(ctx: &mut Context, object: &InventoryObject) -> Result<()> {
    ctx.dialog()
        .infobox(&object.name, "Retrieving information ...")?;

    let fields = summary_fields(object.kind());
    let paths: Vec<&str> = fields.iter().map(|(_, path)| *path).collect();
    let content = match ctx.client().retrieve_properties(&object.obj, &paths).await {
        Ok(content) => content,
        Err(err) => return ctx.report(&object.name, &err),
    };

    let text = fields
        .iter()
        .map(|(label, path)| {
            let value = value_text(content.prop(path));
            if value.is_empty() {
                format!("{label}: n/a")
            } else {
                format!("{label}: {value}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    ctx.dialog().msgbox(&object.name, &text)?;
    Ok(())
}

/// Show a virtual machine's current power state
///
/// # Errors
/// Returns an error if the dialog surface fails.
pub async fn power_state(ctx: &mut Context, object: &InventoryObject) -> Result<()> {
    let content = match ctx
        .client()
        .retrieve_properties(&object.obj, &["runtime.powerState"])
        .await
    {
        Ok(content) => content,
        Err(err) => return ctx.report(&object.name, &err),
    };

    let state = value_text(content.prop("runtime.powerState"));
    let state = if state.is_empty() { "unknown" } else { &state };
    ctx.dialog()
        .msgbox(&object.name, &format!("Power state: {state}"))?;
    Ok(())
}
