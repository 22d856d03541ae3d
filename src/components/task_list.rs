//! Task List Components
//!
//! Keyed list of task cards. The card being celebrated fades out and grows
//! while its deletion plays.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_controller;
use crate::models::Task;
use crate::store::{use_app_store, TodoStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="task-list">
            <For
                each=move || store.tasks().get()
                key=|task| task.id
                children=move |task: Task| view! { <TaskCard task=task /> }
            />
        </ul>
    }
}

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let store = use_app_store();
    let controller = use_controller();
    let id = task.id;

    let card_class = move || {
        if store.celebration().get().is_celebrating(id) {
            "todo-item celebrating"
        } else {
            "todo-item"
        }
    };

    let complete = move |_| {
        let controller = controller.get();
        spawn_local(async move {
            let _ = controller.delete(id).await;
        });
    };

    view! {
        <li class=card_class>
            <span class="todo-title">{task.title}</span>
            <button class="complete-btn" on:click=complete>"Complete! ✨"</button>
        </li>
    }
}
