//! Request bodies for the inventory API

use serde::{Deserialize, Serialize};

use crate::objects::{ChildCollection, EntityKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateViewRequest {
    pub kind: EntityKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectPropertiesRequest {
    pub kind: EntityKind,
    pub path_set: Vec<String>,
    pub include_refs: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievePropertiesRequest {
    pub path_set: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrieveChildrenRequest {
    pub collection: ChildCollection,
    pub path_set: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameRequest {
    pub new_name: String,
}
