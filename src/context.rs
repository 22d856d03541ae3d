//! Application Context
//!
//! The controller is provided via the Leptos Context API. It holds `!Send`
//! pieces (the fetch client), so it lives in local arena storage and components
//! capture the `Copy` handle instead of the controller itself.

use leptos::prelude::*;

use crate::api::HttpTodoApi;
use crate::clock::BrowserClock;
use crate::controller::TodoController;
use crate::store::AppStore;

pub type AppController = TodoController<HttpTodoApi, BrowserClock, AppStore>;

#[derive(Clone, Copy)]
pub struct ControllerHandle(StoredValue<AppController, LocalStorage>);

impl ControllerHandle {
    /// Clone out the controller for use inside a spawned task
    pub fn get(&self) -> AppController {
        self.0.get_value()
    }
}

pub fn provide_controller(controller: AppController) {
    provide_context(ControllerHandle(StoredValue::new_local(controller)));
}

/// Get the controller handle from context
pub fn use_controller() -> ControllerHandle {
    expect_context::<ControllerHandle>()
}
