//! Response types for the inventory API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::objects::ObjectContent;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub session_id: String,
}

/// Identity of the remote management server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutInfo {
    pub full_name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub api_type: String,
}

/// Server-side view handle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRef {
    pub view: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChildrenResponse {
    pub supported: bool,
    #[serde(default)]
    pub items: Vec<ObjectContent>,
}

/// Handle to a remote task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRef {
    pub task: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    Queued,
    Running,
    Success,
    Error,
}

impl TaskState {
    /// Whether the task has finished, successfully or not
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskState::Success | TaskState::Error)
    }
}

/// Current state of a remote task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskInfo {
    pub id: String,
    pub state: TaskState,
    /// Percent complete, when the server reports it
    #[serde(default)]
    pub progress: Option<u8>,
    /// Failure description for tasks in the error state
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}
