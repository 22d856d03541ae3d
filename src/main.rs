//! Festive Todo Frontend Entry Point

mod api;
mod app;
mod clock;
mod components;
mod config;
mod context;
mod controller;
mod festive;
mod logging;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(logging::default_level());
    mount_to_body(App);
}
