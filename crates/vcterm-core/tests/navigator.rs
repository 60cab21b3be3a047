mod common;

use std::sync::Arc;

use serde_json::json;
use vcterm_api::{EntityKind, ObjectRef, TaskState};
use vcterm_core::{DialogCode, navigator};

use common::*;

fn populated() -> MockInventory {
    let mut inventory = MockInventory::default();
    inventory.objects.insert(
        EntityKind::Cluster,
        vec![
            content(EntityKind::Cluster, "domain-c1", json!({ "name": "prod", "overallStatus": "green" })),
            content(EntityKind::Cluster, "domain-c2", json!({ "name": "lab", "overallStatus": "yellow" })),
        ],
    );
    inventory.objects.insert(
        EntityKind::Host,
        vec![content(
            EntityKind::Host,
            "host-1",
            json!({ "name": "esx01", "runtime.connectionState": "notResponding" }),
        )],
    );
    inventory.objects.insert(
        EntityKind::VirtualMachine,
        vec![
            content(EntityKind::VirtualMachine, "vm-1", json!({ "name": "vm1", "runtime.powerState": "poweredOn" })),
            content(EntityKind::VirtualMachine, "vm-2", json!({ "name": "vm2", "runtime.powerState": "suspended" })),
            content(EntityKind::VirtualMachine, "vm-3", json!({ "name": "vm3", "runtime.powerState": "poweredOff" })),
        ],
    );
    inventory.objects.insert(
        EntityKind::Datastore,
        vec![
            content(EntityKind::Datastore, "ds-1", json!({ "name": "ds01", "summary.accessible": true })),
            content(EntityKind::Datastore, "ds-2", json!({ "name": "ds02", "summary.accessible": false })),
        ],
    );
    inventory.objects.insert(
        EntityKind::Network,
        vec![content(EntityKind::Network, "net-1", json!({ "name": "VM Network", "summary.accessible": true }))],
    );
    inventory
}

fn expected_descriptions(kind: EntityKind) -> Vec<&'static str> {
    match kind {
        EntityKind::Cluster => vec!["green", "yellow"],
        EntityKind::Host => vec!["notResponding"],
        EntityKind::VirtualMachine => vec!["poweredOn", "suspended", "poweredOff"],
        EntityKind::Datastore => vec!["Accessible", "Not Accessible"],
        EntityKind::Network => vec!["Accessible"],
    }
}

#[tokio::test]
async fn test_empty_listing_builds_no_menu() {
    for kind in EntityKind::ALL {
        let inventory = Arc::new(MockInventory::default());
        let dialog = ScriptedDialog::default();
        let mut ctx = context(&inventory, &dialog);

        navigator::inventory_menu(&mut ctx, kind).await.unwrap();

        assert!(dialog.menus().is_empty(), "{kind} built a menu");
        let messages = dialog.msgboxes();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].1.starts_with("No "), "{kind}: {}", messages[0].1);
        assert_eq!(inventory.views(), (1, 1));
    }
}

#[tokio::test]
async fn test_listing_items_match_results() {
    let inventory = Arc::new(populated());

    for kind in EntityKind::ALL {
        let dialog = ScriptedDialog::default();
        let mut ctx = context(&inventory, &dialog);

        navigator::inventory_menu(&mut ctx, kind).await.unwrap();

        let menus = dialog.menus();
        assert_eq!(menus.len(), 1);
        let descriptions: Vec<&str> = menus[0].1.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, expected_descriptions(kind), "{kind}");
    }

    let (created, destroyed) = inventory.views();
    assert_eq!(created, EntityKind::ALL.len());
    assert_eq!(created, destroyed);
}

#[tokio::test]
async fn test_listing_failure_is_reported_and_view_released() {
    let mut inventory = populated();
    inventory.fail_listing = true;
    let inventory = Arc::new(inventory);
    let dialog = ScriptedDialog::default();
    let mut ctx = context(&inventory, &dialog);

    navigator::inventory_menu(&mut ctx, EntityKind::Host).await.unwrap();

    assert!(dialog.menus().is_empty());
    let messages = dialog.msgboxes();
    assert_eq!(messages[0].0, "Error");
    assert!(messages[0].1.contains("service unavailable"));
    assert_eq!(inventory.views(), (1, 1));
}

#[tokio::test]
async fn test_drill_down_and_rename() {
    let mut inventory = populated();
    inventory.task_states = vec![
        task(TaskState::Running, Some(50), None),
        task(TaskState::Running, Some(80), None),
        task(TaskState::Success, None, None),
    ];
    let inventory = Arc::new(inventory);
    let dialog = ScriptedDialog::new([
        Answer::pick("VMs & Templates"),
        Answer::pick("vm1"),
        Answer::pick("Rename"),
        Answer::input("vm2"),
    ]);
    let mut ctx = context(&inventory, &dialog);

    navigator::display(&mut ctx).await.unwrap();

    assert_eq!(
        inventory.renames(),
        vec![(ObjectRef::new(EntityKind::VirtualMachine, "vm-1"), "vm2".to_string())]
    );
    assert_eq!(inventory.task_polls(), 3);
    assert_eq!(dialog.gauges(), vec![50, 80, 100]);

    let titles: Vec<String> = dialog.menus().into_iter().map(|(title, _)| title).collect();
    assert_eq!(
        titles,
        [
            "Inventory Menu",
            "Virtual Machines",
            "vm1",
            "vm2",
            "Virtual Machines",
            "Inventory Menu"
        ]
    );
    assert_eq!(dialog.remaining(), 0);
}

fn rename_prompts(dialog: &ScriptedDialog) -> Vec<(String, String)> {
    dialog
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            Call::Input { title, init } => Some((title, init)),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn test_second_rename_starts_from_new_name() {
    let inventory = Arc::new(populated());
    let dialog = ScriptedDialog::new([
        Answer::pick("VMs & Templates"),
        Answer::pick("vm1"),
        Answer::pick("Rename"),
        Answer::input("vm2"),
        Answer::pick("Rename"),
        Answer::input("vm3"),
    ]);
    let mut ctx = context(&inventory, &dialog);

    navigator::display(&mut ctx).await.unwrap();

    assert_eq!(
        rename_prompts(&dialog),
        [
            ("vm1".to_string(), "vm1".to_string()),
            ("vm2".to_string(), "vm2".to_string())
        ]
    );
    let vm = ObjectRef::new(EntityKind::VirtualMachine, "vm-1");
    assert_eq!(
        inventory.renames(),
        vec![(vm.clone(), "vm2".to_string()), (vm, "vm3".to_string())]
    );

    let titles: Vec<String> = dialog.menus().into_iter().map(|(title, _)| title).collect();
    assert_eq!(&titles[2..5], ["vm1", "vm2", "vm3"]);
}

#[tokio::test]
async fn test_failed_rename_keeps_name() {
    let mut inventory = populated();
    inventory.task_states = vec![task(TaskState::Error, None, Some("name already in use"))];
    let inventory = Arc::new(inventory);
    let dialog = ScriptedDialog::new([
        Answer::pick("VMs & Templates"),
        Answer::pick("vm1"),
        Answer::pick("Rename"),
        Answer::input("vm2"),
        Answer::pick("Rename"),
        Answer::Input(DialogCode::Cancel, String::new()),
    ]);
    let mut ctx = context(&inventory, &dialog);

    navigator::display(&mut ctx).await.unwrap();

    assert_eq!(
        rename_prompts(&dialog),
        [
            ("vm1".to_string(), "vm1".to_string()),
            ("vm1".to_string(), "vm1".to_string())
        ]
    );
    assert_eq!(inventory.renames().len(), 1);
}

#[tokio::test]
async fn test_search_entries_do_nothing() {
    let inventory = Arc::new(populated());
    let dialog = ScriptedDialog::new([Answer::pick("Search"), Answer::pick("Hosts")]);
    let mut ctx = context(&inventory, &dialog);

    navigator::display(&mut ctx).await.unwrap();

    assert_eq!(inventory.remote_calls(), 0);
    let titles: Vec<String> = dialog.menus().into_iter().map(|(title, _)| title).collect();
    assert_eq!(
        titles,
        [
            "Inventory Menu",
            "Inventory Search",
            "Inventory Search",
            "Inventory Menu"
        ]
    );
}

#[tokio::test]
async fn test_every_list_state_returns_to_top_menu() {
    let inventory = Arc::new(populated());
    let dialog = ScriptedDialog::new([
        Answer::pick("Clusters"),
        Answer::back(),
        Answer::pick("Hosts"),
        Answer::back(),
        Answer::pick("Datastores"),
        Answer::back(),
        Answer::pick("Networking"),
        Answer::back(),
    ]);
    let mut ctx = context(&inventory, &dialog);

    navigator::display(&mut ctx).await.unwrap();

    let top_menus = dialog
        .menus()
        .iter()
        .filter(|(title, _)| title == "Inventory Menu")
        .count();
    assert_eq!(top_menus, 5);
    assert_eq!(inventory.views(), (4, 4));
}
