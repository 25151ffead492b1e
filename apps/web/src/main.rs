#[cfg(target_arch = "wasm32")]
mod app;
// A plain native build has no views to consume these; tests and wasm builds
// still report dead code.
#[cfg_attr(not(any(target_arch = "wasm32", test)), allow(dead_code))]
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg_attr(not(any(target_arch = "wasm32", test)), allow(dead_code))]
mod features;
#[cfg(target_arch = "wasm32")]
mod routes;
#[cfg(test)]
mod test_support;

#[cfg(target_arch = "wasm32")]
use crate::app::App;
#[cfg(target_arch = "wasm32")]
use crate::app_lib::{config::AppConfig, logging};
#[cfg(target_arch = "wasm32")]
use leptos::prelude::*;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    let config = AppConfig::load();
    logging::init(&config.log_level);
    mount_to_body(move || view! { <App config=config /> });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
