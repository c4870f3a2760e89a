//! Task List Component
//!
//! Pure projection of the store's task list onto the current filter,
//! one row per task with Edit/Delete actions forwarded to the store.

use leptos::prelude::*;

use crate::models::Task;
use crate::store::{
    store_delete_task, store_edit_draft, use_app_store, visible_tasks, AppStateStoreFields,
};

/// Filtered task rows
#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    let shown = Memo::new(move |_| {
        visible_tasks(&store.tasks().get(), store.view_completed().get())
    });

    view! {
        <ul class="list-group list-group-flush border-top-0">
            <For
                each=move || shown.get()
                key=|task| task.id
                children=move |task: Task| {
                    let edit_task = task.clone();
                    let delete_task = task.clone();
                    let title_class = move || {
                        if store.view_completed().get() {
                            "todo-title mr-2 completed-todo"
                        } else {
                            "todo-title mr-2"
                        }
                    };

                    view! {
                        <li class="list-group-item d-flex justify-content-between align-items-center">
                            <span class=title_class title=task.description.clone()>
                                {task.title.clone()}
                            </span>
                            <span>
                                <button
                                    class="btn btn-secondary mr-2"
                                    on:click=move |_| store_edit_draft(store, edit_task.clone())
                                >
                                    "Edit"
                                </button>
                                <button
                                    class="btn btn-danger"
                                    on:click=move |_| store_delete_task(store, delete_task.clone())
                                >
                                    "Delete"
                                </button>
                            </span>
                        </li>
                    }
                }
            />
        </ul>
    }
}
