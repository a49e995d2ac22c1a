//! Timesheet Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod mobile;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
    }

    mount_to_body(App);
}
