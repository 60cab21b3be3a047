//! vcterm-api: Shared wire types
//!
//! Contains the object, request and response types exchanged with the
//! virtualization management endpoint, used by both the client and the core.

pub mod objects;
pub mod requests;
pub mod responses;

pub use objects::{ChildCollection, EntityKind, ObjectContent, ObjectRef};
pub use responses::{AboutInfo, TaskInfo, TaskRef, TaskState, ViewRef};
