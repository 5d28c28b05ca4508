use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single task record. Absent fields serialize as `null` so every
/// response carries the full shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub name: Option<String>,
    pub created_at: i64,
    pub last_updated_at: Option<i64>,
    pub due_date: Option<Value>,
    pub completed: bool,
    pub completed_at: Option<i64>,
}

/// Caller-supplied fields for creating a todo. `id` and the timestamps
/// are assigned by the store.
#[derive(Debug, Default, Deserialize)]
pub struct TodoDraft {
    pub name: Option<String>,
    pub due_date: Option<Value>,
    pub completed: Option<bool>,
    pub completed_at: Option<i64>,
}

/// Partial update: only present fields overwrite the stored record.
#[derive(Debug, Default, Deserialize)]
pub struct TodoPatch {
    pub name: Option<String>,
    pub due_date: Option<Value>,
    pub completed: Option<bool>,
    pub completed_at: Option<i64>,
}
