//! Task progress gauge

use tokio::time::sleep;
use tracing::{debug, info, warn};
use vcterm_api::{TaskInfo, TaskRef, TaskState};

use crate::context::Context;
use crate::error::Result;

/// Shows a gauge while a remote task runs
#[derive(Debug, Clone)]
pub struct TaskGauge {
    title: String,
    text: String,
    task: TaskRef,
}

impl TaskGauge {
    pub fn new(title: impl Into<String>, text: impl Into<String>, task: TaskRef) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            task,
        }
    }

    /// Poll the task until it finishes
    ///
    /// There is no timeout. A failed task is reported in a message box. Returns
    /// the final task state, or `None` if polling itself failed.
    ///
    /// # Errors
    /// Returns an error if the dialog surface fails.
    pub async fn display(&self, ctx: &mut Context) -> Result<Option<TaskInfo>> {
        let client = ctx.client();
        let interval = ctx.settings().poll_interval();

        loop {
            let info = match client.task_info(&self.task).await {
                Ok(info) => info,
                Err(err) => {
                    ctx.report(&self.title, &err)?;
                    return Ok(None);
                }
            };

            let percent = match info.state {
                TaskState::Success => 100,
                _ => info.progress.unwrap_or(0).min(100),
            };
            ctx.dialog().gauge(&self.title, &self.text, percent)?;

            if !info.state.is_terminal() {
                debug!(task = %self.task.task, percent, "task in progress");
                sleep(interval).await;
                continue;
            }

            if info.state == TaskState::Error {
                let reason = info.error.as_deref().unwrap_or("unknown error");
                warn!(task = %self.task.task, error = %reason, "task failed");
                ctx.dialog()
                    .msgbox(&self.title, &format!("Task failed\n\n{reason}"))?;
            } else {
                info!(
                    task = %self.task.task,
                    completed_at = ?info.completed_at,
                    "task completed"
                );
            }
            return Ok(Some(info));
        }
    }
}
