//! Recurring plan task model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::now_epoch_ms;

/// Stable identifier for a plan task.
pub type TaskId = Uuid;

/// Recurrence bucket a task belongs to.
///
/// A classification tag only; no scheduling mechanism hangs off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanType {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// One reading-habit task inside a recurrence bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    /// Stored as entered; emptiness is rejected at the input boundary.
    pub title: String,
    /// Serialized as `type` to match the persisted slot schema.
    #[serde(rename = "type")]
    pub plan: PlanType,
    pub is_completed: bool,
    /// Unix epoch milliseconds, set at creation.
    pub created_at: i64,
}

impl Task {
    /// Creates an open task with a generated stable ID.
    pub fn new(title: impl Into<String>, plan: PlanType) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            plan,
            is_completed: false,
            created_at: now_epoch_ms(),
        }
    }

    /// Flips the completion flag.
    pub fn toggle_completed(&mut self) {
        self.is_completed = !self.is_completed;
    }
}
