mod api;
mod components;
pub mod config;
mod pages;
mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    log::info!("starting Magmarine frontend (wasm)");

    // window.__MAGMARINE_ENV wins over ./config.json.
    leptos::spawn_local(async move {
        config::init().await;
        log::set_max_level(config::current().log_level().to_level_filter());
    });

    router::mount_app();
}
