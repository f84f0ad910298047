//! Anti-Dispersion Hub Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod list;
mod models;
mod nav;
mod notify;
mod storage;
mod store;
mod theme;
mod timer;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    wasm_tracing::set_as_global_default();

    mount_to_body(App);
    tracing::info!("Anti-Dispersion Hub initialized");
}
