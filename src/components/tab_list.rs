//! Filter Tab Bar Component
//!
//! Complete/Incomplete tabs that switch which partition of the list is shown.

use leptos::prelude::*;

use crate::store::{store_set_filter, use_app_store, AppStateStoreFields};

/// Two-tab toggle over the completed flag
#[component]
pub fn TabList() -> impl IntoView {
    let store = use_app_store();

    let tab_class = move |completed: bool| {
        if store.view_completed().get() == completed {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <div class="nav nav-tabs">
            <span
                class=move || tab_class(true)
                on:click=move |_| store_set_filter(store, true)
            >
                "Complete"
            </span>
            <span
                class=move || tab_class(false)
                on:click=move |_| store_set_filter(store, false)
            >
                "Incomplete"
            </span>
        </div>
    }
}
