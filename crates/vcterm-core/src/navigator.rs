//! Inventory navigator
//!
//! The top-level menu and the per-kind inventory listings reachable from it.
//! Every listing is fetched fresh each time it is opened.

use tracing::{debug, warn};
use vcterm_api::{EntityKind, ObjectContent};
use vcterm_client::{ClientError, InventoryClient};

use crate::action::NavAction;
use crate::context::Context;
use crate::error::Result;
use crate::inventory::{listing_path_set, object_item};
use crate::menu::{Menu, MenuItem};

/// Titles and messages of an inventory listing
struct Listing {
    title: &'static str,
    text: &'static str,
    empty: &'static str,
}

fn listing(kind: EntityKind) -> Listing {
    match kind {
        EntityKind::Cluster => Listing {
            title: "Clusters",
            text: "\nSelect a cluster from the menu\n",
            empty: "No clusters found",
        },
        EntityKind::Host => Listing {
            title: "Hosts",
            text: "Select a host from the menu",
            empty: "No hosts found",
        },
        EntityKind::VirtualMachine => Listing {
            title: "Virtual Machines",
            text: "Select a Virtual Machine from the menu",
            empty: "No virtual machines found",
        },
        EntityKind::Datastore => Listing {
            title: "Datastores",
            text: "Select a Datastore from the menu",
            empty: "No datastores found",
        },
        EntityKind::Network => Listing {
            title: "Networks",
            text: "Select a network from the menu that you wish to manage",
            empty: "No networks found",
        },
    }
}

/// The inventory root menu
#[must_use]
pub fn top_menu() -> Menu {
    let items = vec![
        MenuItem::new("Clusters", "Manage Clusters", NavAction::List(EntityKind::Cluster)),
        MenuItem::new("Hosts", "Manage hosts", NavAction::List(EntityKind::Host)),
        MenuItem::new(
            "VMs & Templates",
            "Manage VMs & Templates",
            NavAction::List(EntityKind::VirtualMachine),
        ),
        MenuItem::new(
            "Datastores",
            "Manage Datastores",
            NavAction::List(EntityKind::Datastore),
        ),
        MenuItem::new("Networking", "Manage Networking", NavAction::List(EntityKind::Network)),
        MenuItem::new("Search", "Search Inventory", NavAction::Search),
    ];

    Menu::new("Inventory Menu", "Select an item from the inventory", items)
}

/// Show the inventory root menu until the operator leaves it
///
/// # Errors
/// Returns an error if the dialog surface fails.
pub async fn display(ctx: &mut Context) -> Result<()> {
    top_menu().display(ctx).await?;
    Ok(())
}

/// Fetch name and status of every entity of `kind`
///
/// The view is released whether or not collection succeeded.
async fn collect_inventory(
    client: &dyn InventoryClient,
    kind: EntityKind,
) -> std::result::Result<Vec<ObjectContent>, ClientError> {
    let view = client.create_view(kind).await?;
    let collected = client
        .collect_properties(&view, kind, &listing_path_set(kind), true)
        .await;

    if let Err(err) = client.destroy_view(&view).await {
        warn!(view = %view.view, error = %err, "failed to destroy view");
    }
    collected
}

/// List every entity of `kind`
///
/// # Errors
/// Returns an error if the dialog surface fails.
pub async fn inventory_menu(ctx: &mut Context, kind: EntityKind) -> Result<()> {
    let listing = listing(kind);
    ctx.dialog().infobox("", "Retrieving information ...")?;

    let client = ctx.client();
    let objects = match collect_inventory(client.as_ref(), kind).await {
        Ok(objects) => objects,
        Err(err) => return ctx.report(listing.title, &err),
    };
    debug!(kind = %kind, count = objects.len(), "inventory listed");

    if objects.is_empty() {
        ctx.dialog().msgbox(listing.title, listing.empty)?;
        return Ok(());
    }

    let items = objects
        .iter()
        .map(|content| object_item(kind, content))
        .collect();
    Menu::new(listing.title, listing.text, items)
        .display(ctx)
        .await?;
    Ok(())
}

/// The search menu
///
/// Search itself is not implemented; its entries do nothing when selected.
#[must_use]
pub fn search_screen() -> Menu {
    Menu::new(
        "Inventory Search",
        "",
        vec![
            MenuItem::inert("Hosts", "Search inventory for hosts"),
            MenuItem::inert("Virtual Machines", "Search inventory for VMs"),
        ],
    )
}

/// Show the search menu
///
/// # Errors
/// Returns an error if the dialog surface fails.
pub async fn search_menu(ctx: &mut Context) -> Result<()> {
    search_screen().display(ctx).await?;
    Ok(())
}
