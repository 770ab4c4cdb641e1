#![allow(non_snake_case)]

mod app;
mod components;
mod storage;
mod utils;

use dioxus_logger::tracing::Level;

fn main() {
    if let Err(err) = dioxus_logger::init(Level::INFO) {
        web_sys::console::error_1(&format!("Failed to initialize logger: {err}").into());
    }
    dioxus::launch(app::App);
}
