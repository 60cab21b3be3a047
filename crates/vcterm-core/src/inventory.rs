//! Inventory objects and their display properties

use serde_json::Value;
use vcterm_api::{EntityKind, ObjectContent, ObjectRef};

use crate::action::NavAction;
use crate::menu::MenuItem;

/// A remote entity together with the name it was listed under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryObject {
    pub obj: ObjectRef,
    pub name: String,
}

impl InventoryObject {
    pub fn new(obj: ObjectRef, name: impl Into<String>) -> Self {
        Self {
            obj,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.obj.kind
    }
}

/// Property shown as the description of a listed entity
#[must_use]
pub fn status_property(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Cluster => "overallStatus",
        EntityKind::Host => "runtime.connectionState",
        EntityKind::VirtualMachine => "runtime.powerState",
        EntityKind::Datastore | EntityKind::Network => "summary.accessible",
    }
}

/// Properties fetched for every listed entity
#[must_use]
pub fn listing_path_set(kind: EntityKind) -> [&'static str; 2] {
    ["name", status_property(kind)]
}

/// Render a property value as menu text
#[must_use]
pub fn value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Description of a listed entity
///
/// Accessibility flags become `Accessible`/`Not Accessible`; every other
/// status is shown as fetched.
#[must_use]
pub fn describe_status(kind: EntityKind, content: &ObjectContent) -> String {
    match kind {
        EntityKind::Datastore | EntityKind::Network => {
            if content.prop_bool(status_property(kind)).unwrap_or(false) {
                "Accessible".to_string()
            } else {
                "Not Accessible".to_string()
            }
        }
        _ => value_text(content.prop(status_property(kind))),
    }
}

/// Menu item opening the detail widget of a listed entity
///
/// Objects collected without a reference are listed but cannot be opened.
#[must_use]
pub fn object_item(kind: EntityKind, content: &ObjectContent) -> MenuItem {
    let name = content
        .name()
        .map(str::to_string)
        .or_else(|| content.obj.as_ref().map(|obj| obj.id.clone()))
        .unwrap_or_default();
    let description = describe_status(kind, content);

    match &content.obj {
        Some(obj) => MenuItem::new(
            name.clone(),
            description,
            NavAction::Open(InventoryObject::new(obj.clone(), name)),
        ),
        None => MenuItem::inert(name, description),
    }
}
