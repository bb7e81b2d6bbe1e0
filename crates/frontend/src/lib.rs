pub mod app;
pub mod layout;
pub mod shared;
pub mod tracker;
pub mod wizards;

use contracts::shared::config::ConsoleConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = match ConsoleConfig::embedded() {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid console configuration: {:#}", e);
            return;
        }
    };
    log::info!("console API on port {}{}", config.api.port, config.api.base_path);

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
