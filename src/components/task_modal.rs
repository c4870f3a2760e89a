//! Task Edit Modal Component
//!
//! Overlay form over a detached copy of the active draft. Every edit
//! stays local until Save hands the full draft back to the store;
//! closing without saving discards the local copy.

use leptos::prelude::*;

use crate::models::TaskField;
use crate::store::{store_submit_draft, use_app_store, AppStateStoreFields};

/// Edit overlay for the active draft. Performs no network I/O itself.
#[component]
pub fn TaskModal() -> impl IntoView {
    let store = use_app_store();

    // Local working copy, seeded once when the modal mounts
    let (draft, set_draft) = signal(store.draft().get_untracked());

    let apply = move |field: TaskField| set_draft.update(|task| task.apply(field));

    view! {
        <div class="modal" role="dialog">
            <div class="modal-dialog">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">"Todo Item"</h5>
                        <button
                            type="button"
                            class="close"
                            on:click=move |_| store.modal_open().set(false)
                        >
                            "×"
                        </button>
                    </div>
                    <div class="modal-body">
                        <form>
                            <div class="form-group">
                                <label for="todo-title">"Title"</label>
                                <input
                                    type="text"
                                    id="todo-title"
                                    class="form-control"
                                    placeholder="Enter Todo Title"
                                    prop:value=move || draft.get().title
                                    on:input=move |ev| {
                                        apply(TaskField::Title(event_target_value(&ev)))
                                    }
                                />
                            </div>
                            <div class="form-group">
                                <label for="todo-description">"Description"</label>
                                <input
                                    type="text"
                                    id="todo-description"
                                    class="form-control"
                                    placeholder="Enter Todo Description"
                                    prop:value=move || draft.get().description
                                    on:input=move |ev| {
                                        apply(TaskField::Description(event_target_value(&ev)))
                                    }
                                />
                            </div>
                            <div class="form-group form-check">
                                <label class="form-check-label">
                                    <input
                                        type="checkbox"
                                        class="form-check-input"
                                        prop:checked=move || draft.get().completed
                                        on:change=move |ev| {
                                            apply(TaskField::Completed(event_target_checked(&ev)))
                                        }
                                    />
                                    "Completed"
                                </label>
                            </div>
                        </form>
                    </div>
                    <div class="modal-footer">
                        <button
                            type="button"
                            class="btn btn-success"
                            on:click=move |_| store_submit_draft(store, draft.get())
                        >
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
