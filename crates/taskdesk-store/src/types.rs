use serde::{Deserialize, Serialize};

/// A persisted task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Row ID — assigned by SQLite on insert.
    pub id: i64,
    /// Scheduled date, `YYYYMMDD`.
    pub date: String,
    /// Short label shown in the task list.
    pub title: String,
    /// Free-form notes.
    pub comment: String,
    /// Raw repeat-rule expression; empty for one-shot tasks.
    pub repeat: String,
}
