use chrono::Utc;
use tokio::sync::Mutex;

use crate::core::{Todo, TodoDraft, TodoError, TodoPatch};

struct StoreInner {
    todos: Vec<Todo>,
    latest_id: u64,
}

/// In-memory todo collection. All mutation goes through a single mutex so
/// concurrent requests cannot lose updates to the list or the id counter.
pub struct TodoStore {
    require_name: bool,
    inner: Mutex<StoreInner>,
}

impl TodoStore {
    pub fn new(require_name: bool) -> Self {
        Self {
            require_name,
            inner: Mutex::new(StoreInner {
                todos: Vec::new(),
                latest_id: 0,
            }),
        }
    }

    /// All todos in insertion order.
    pub async fn list(&self) -> Vec<Todo> {
        self.inner.lock().await.todos.clone()
    }

    /// Builds a new todo with the next id. Ids are never reused, even after
    /// a delete.
    pub async fn create(&self, draft: TodoDraft) -> Result<Todo, TodoError> {
        if self.require_name && draft.name.as_deref().is_none_or(|n| n.trim().is_empty()) {
            return Err(TodoError::NameRequired);
        }

        let mut inner = self.inner.lock().await;
        let todo = Todo {
            id: inner.latest_id + 1,
            name: draft.name,
            created_at: Utc::now().timestamp(),
            last_updated_at: None,
            due_date: draft.due_date,
            completed: draft.completed.unwrap_or(false),
            completed_at: draft.completed_at,
        };
        inner.todos.push(todo.clone());
        inner.latest_id += 1;

        tracing::debug!(id = todo.id, "created todo");
        Ok(todo)
    }

    /// First record with a matching id.
    pub async fn get(&self, id: u64) -> Result<Todo, TodoError> {
        let inner = self.inner.lock().await;
        inner
            .todos
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(TodoError::NotFound(id))
    }

    /// Merges present patch fields into the record and stamps
    /// `last_updated_at`. When the merged record is completed,
    /// `completed_at` is stamped too; it is left in place when `completed`
    /// later goes back to false.
    pub async fn update(&self, id: u64, patch: TodoPatch) -> Result<Todo, TodoError> {
        let mut inner = self.inner.lock().await;
        let todo = inner
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))?;

        if let Some(name) = patch.name {
            todo.name = Some(name);
        }
        if let Some(due_date) = patch.due_date {
            todo.due_date = Some(due_date);
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        if let Some(completed_at) = patch.completed_at {
            todo.completed_at = Some(completed_at);
        }

        let now = Utc::now().timestamp();
        todo.last_updated_at = Some(now);
        if todo.completed {
            todo.completed_at = Some(now);
        }

        tracing::debug!(id, "updated todo");
        Ok(todo.clone())
    }

    /// Removes the record with the given id, failing when nothing matched.
    pub async fn delete(&self, id: u64) -> Result<u64, TodoError> {
        let mut inner = self.inner.lock().await;
        let before = inner.todos.len();
        inner.todos.retain(|t| t.id != id);
        if inner.todos.len() == before {
            return Err(TodoError::NotFound(id));
        }

        tracing::debug!(id, "deleted todo");
        Ok(id)
    }
}
