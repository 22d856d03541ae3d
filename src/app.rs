//! Festive Todo App
//!
//! Root component: builds the store and controller, loads the task list once,
//! and lays out the page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;
use reactive_stores::Store;

use crate::api::HttpTodoApi;
use crate::clock::BrowserClock;
use crate::components::{CelebrationOverlay, FestiveFooter, NewTaskForm, SnowScene, TaskList};
use crate::config::AppConfig;
use crate::context::{provide_controller, use_controller};
use crate::controller::TodoController;
use crate::festive::{task_count_message, EMPTY_LIST_GREETING, PAGE_TITLE};
use crate::store::{TodoState, TodoStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(TodoState::default());
    provide_context(store);

    let (config, problems) = AppConfig::from_browser();
    for problem in problems {
        error!("Configuration problem, using the default for that setting: {}", problem);
    }
    provide_controller(TodoController::new(HttpTodoApi::new(&config), BrowserClock, store, &config));
    let controller = use_controller();

    // Load tasks on mount
    Effect::new(move |_| {
        let controller = controller.get();
        spawn_local(async move {
            let _ = controller.load().await;
        });
    });

    let task_count = move || store.tasks().with(|tasks| tasks.len());

    view! {
        <div class="page">
            <SnowScene />

            <div class="content">
                <div class="column">
                    <h1 class="page-title">{PAGE_TITLE}</h1>

                    <NewTaskForm />

                    <p class="task-count">{move || task_count_message(task_count())}</p>

                    <TaskList />

                    <Show when=move || task_count() == 0>
                        <p class="empty-greeting">{EMPTY_LIST_GREETING}</p>
                    </Show>

                    <CelebrationOverlay />
                </div>

                <FestiveFooter />
            </div>
        </div>
    }
}
