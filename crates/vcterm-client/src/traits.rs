//! Inventory client traits

use std::sync::Arc;

use async_trait::async_trait;
use vcterm_api::{
    AboutInfo, ChildCollection, EntityKind, ObjectContent, ObjectRef, TaskInfo, TaskRef, ViewRef,
};

use crate::error::Result;

/// Login details entered by the operator
#[derive(Clone, Default)]
pub struct Credentials {
    pub host: String,
    pub user: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// An authenticated session against a management endpoint
#[async_trait]
pub trait InventoryClient: Send + Sync {
    /// Identity of the remote server
    async fn about(&self) -> Result<AboutInfo>;

    /// Create a view enumerating every entity of `kind`
    async fn create_view(&self, kind: EntityKind) -> Result<ViewRef>;

    /// Bulk-fetch `path_set` for all objects in a view
    async fn collect_properties(
        &self,
        view: &ViewRef,
        kind: EntityKind,
        path_set: &[&str],
        include_refs: bool,
    ) -> Result<Vec<ObjectContent>>;

    /// Release a view
    async fn destroy_view(&self, view: &ViewRef) -> Result<()>;

    /// Fetch `path_set` for a single object
    async fn retrieve_properties(&self, obj: &ObjectRef, path_set: &[&str])
    -> Result<ObjectContent>;

    /// Fetch the members of a child collection
    ///
    /// Returns `None` when the entity kind does not carry the collection.
    async fn retrieve_children(
        &self,
        obj: &ObjectRef,
        collection: ChildCollection,
        path_set: &[&str],
    ) -> Result<Option<Vec<ObjectContent>>>;

    /// Start a rename task
    async fn rename(&self, obj: &ObjectRef, new_name: &str) -> Result<TaskRef>;

    /// Poll a task's current state
    async fn task_info(&self, task: &TaskRef) -> Result<TaskInfo>;

    /// Close the session
    async fn disconnect(&self) -> Result<()>;
}

/// Opens sessions from operator credentials
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, credentials: &Credentials) -> Result<Arc<dyn InventoryClient>>;
}
