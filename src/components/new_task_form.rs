//! New Task Form Component
//!
//! Text input bound to the draft buffer, plus the submit button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_controller;
use crate::store::{use_app_store, TodoStateStoreFields};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();
    let controller = use_controller();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.get();
        spawn_local(async move {
            // Errors are already logged by the controller
            let _ = controller.submit_draft().await;
        });
    };

    view! {
        <div class="glass-card add-card">
            <form class="add-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Add a new Christmas task... 🎁"
                    prop:value=move || store.draft_title().get()
                    on:input=move |ev| controller.get().set_draft(event_target_value(&ev))
                />
                <button type="submit">"Add Todo 🎅"</button>
            </form>
        </div>
    }
}
