//! Application State Store
//!
//! Single source of truth for the task list, the completed/incomplete
//! view filter, the overlay flag, and the active draft. Every mutation
//! goes through the backend first; on success the list is replaced
//! wholesale from a fresh full-list fetch rather than patched locally.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::models::Task;

/// App-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Authoritative task list, mirrored from the backend
    pub tasks: Vec<Task>,
    /// Which partition the list shows: completed or incomplete
    pub view_completed: bool,
    /// Edit overlay visibility
    pub modal_open: bool,
    /// Detached working copy being edited in the overlay
    pub draft: Task,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Stable projection of the list onto one side of the completed flag:
/// source order preserved, no re-sort
pub fn visible_tasks(tasks: &[Task], completed: bool) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.completed == completed)
        .cloned()
        .collect()
}

// ========================
// Store Operations
// ========================

/// Re-fetch the full list. On failure the previous list stays untouched;
/// the error is logged and nothing is retried.
pub fn store_refresh(store: AppStore) {
    spawn_local(async move {
        match api::list_todos().await {
            Ok(tasks) => store.tasks().set(tasks),
            Err(e) => {
                web_sys::console::error_1(&format!("[store] refresh failed: {}", e).into())
            }
        }
    });
}

/// Open the overlay on an empty unsaved draft
pub fn store_create_draft(store: AppStore) {
    store.draft().set(Task::draft());
    store.modal_open().set(true);
}

/// Open the overlay on a copy of an existing task
pub fn store_edit_draft(store: AppStore, task: Task) {
    store.draft().set(task);
    store.modal_open().set(true);
}

/// Persist the edited draft: update when it carries an id, create
/// otherwise. The overlay closes before the request is issued; a failed
/// save is only logged and the overlay stays closed.
pub fn store_submit_draft(store: AppStore, task: Task) {
    store.modal_open().set(false);
    spawn_local(async move {
        match api::save_todo(&task).await {
            Ok(_) => store_refresh(store),
            Err(e) => web_sys::console::error_1(&format!("[store] save failed: {}", e).into()),
        }
    });
}

/// Delete a persisted task, then re-fetch the list
pub fn store_delete_task(store: AppStore, task: Task) {
    let Some(id) = task.id else {
        // Never persisted, nothing to delete server-side
        web_sys::console::log_1(&"[store] delete skipped: task has no id".into());
        return;
    };
    spawn_local(async move {
        match api::delete_todo(id).await {
            Ok(()) => store_refresh(store),
            Err(e) => web_sys::console::error_1(&format!("[store] delete failed: {}", e).into()),
        }
    });
}

/// Switch the list between the completed and incomplete partitions.
/// Local state only, no network.
pub fn store_set_filter(store: AppStore, completed: bool) {
    store.view_completed().set(completed);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, title: &str, completed: bool) -> Task {
        Task {
            id: Some(id),
            title: title.to_string(),
            description: String::new(),
            completed,
        }
    }

    #[test]
    fn test_visible_tasks_partitions_without_overlap() {
        let tasks = vec![
            make_task(1, "A", false),
            make_task(2, "B", true),
            make_task(3, "C", false),
            make_task(4, "D", true),
        ];

        let done = visible_tasks(&tasks, true);
        let open = visible_tasks(&tasks, false);

        assert_eq!(done.len() + open.len(), tasks.len());
        for task in &tasks {
            let in_done = done.contains(task);
            let in_open = open.contains(task);
            assert!(in_done != in_open, "task {:?} must be in exactly one partition", task.id);
        }
    }

    #[test]
    fn test_visible_tasks_preserves_source_order() {
        let tasks = vec![
            make_task(5, "E", false),
            make_task(1, "A", false),
            make_task(9, "I", true),
            make_task(3, "C", false),
        ];

        let open = visible_tasks(&tasks, false);
        let ids: Vec<_> = open.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![Some(5), Some(1), Some(3)]);
    }

    #[test]
    fn test_visible_tasks_two_task_scenario() {
        let tasks = vec![make_task(1, "A", false), make_task(2, "B", true)];

        let incomplete = visible_tasks(&tasks, false);
        assert_eq!(incomplete.len(), 1);
        assert_eq!(incomplete[0].id, Some(1));

        let complete = visible_tasks(&tasks, true);
        assert_eq!(complete.len(), 1);
        assert_eq!(complete[0].id, Some(2));
    }

    #[test]
    fn test_visible_tasks_empty_list() {
        assert!(visible_tasks(&[], true).is_empty());
        assert!(visible_tasks(&[], false).is_empty());
    }
}
