//! Managed entity references and collected properties

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind of managed entity exposed by the inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Cluster,
    Host,
    VirtualMachine,
    Datastore,
    Network,
}

impl EntityKind {
    /// All entity kinds, in inventory menu order
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Cluster,
        EntityKind::Host,
        EntityKind::VirtualMachine,
        EntityKind::Datastore,
        EntityKind::Network,
    ];

    /// Path segment used by the HTTP API
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Cluster => "cluster",
            EntityKind::Host => "host",
            EntityKind::VirtualMachine => "virtual_machine",
            EntityKind::Datastore => "datastore",
            EntityKind::Network => "network",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque reference to a remote managed entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectRef {
    pub kind: EntityKind,
    pub id: String,
}

impl ObjectRef {
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// Child collections an entity may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildCollection {
    /// `network` property
    Network,
    /// `vm` property
    Vm,
    /// `datastore` property
    Datastore,
}

impl ChildCollection {
    /// Kind of the entities held by this collection
    #[must_use]
    pub fn child_kind(self) -> EntityKind {
        match self {
            ChildCollection::Network => EntityKind::Network,
            ChildCollection::Vm => EntityKind::VirtualMachine,
            ChildCollection::Datastore => EntityKind::Datastore,
        }
    }
}

/// Properties collected for a single object
///
/// Property names are dotted paths such as `runtime.powerState`. `obj` is
/// present when references were requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectContent {
    #[serde(default)]
    pub obj: Option<ObjectRef>,
    #[serde(default)]
    pub props: Map<String, Value>,
}

impl ObjectContent {
    /// Look up a collected property
    #[must_use]
    pub fn prop(&self, path: &str) -> Option<&Value> {
        self.props.get(path)
    }

    /// Look up a string property
    #[must_use]
    pub fn prop_str(&self, path: &str) -> Option<&str> {
        self.prop(path).and_then(Value::as_str)
    }

    /// Look up a boolean property
    #[must_use]
    pub fn prop_bool(&self, path: &str) -> Option<bool> {
        self.prop(path).and_then(Value::as_bool)
    }

    /// The `name` property, if collected
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.prop_str("name")
    }
}
