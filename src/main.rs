//! Listify Frontend Entry Point

mod app;
mod components;
mod context;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logger::init(logger::max_level()) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {}", e).into());
    }
    mount_to_body(App);
}
