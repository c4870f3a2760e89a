//! Todo App Root Component
//!
//! Owns the app store, loads the list on mount, and composes the
//! header, tab bar, task list, and edit overlay.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TabList, TaskList, TaskModal};
use crate::store::{store_create_draft, store_refresh, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Explicitly owned store, injected into the whole tree via context
    let store = Store::new(AppState::new());
    provide_context(store);

    // Initial list load on mount
    Effect::new(move |_| {
        store_refresh(store);
    });

    view! {
        <main class="container">
            <h1 class="text-white text-uppercase text-center my-4">"Todo app"</h1>
            <div class="row">
                <div class="col-md-6 col-sm-10 mx-auto p-0">
                    <div class="card p-3">
                        <div class="mb-4">
                            <button
                                class="btn btn-primary"
                                on:click=move |_| store_create_draft(store)
                            >
                                "Add task"
                            </button>
                        </div>
                        <TabList />
                        <TaskList />
                    </div>
                </div>
            </div>
            // Mounted only while open; a fresh mount re-seeds the local draft
            <Show when=move || store.modal_open().get()>
                <TaskModal />
            </Show>
        </main>
    }
}
