use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, init_logger, init_time_provider};
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod number_format;
pub mod presentation;

/// Install panic reporting and logging, then mount the dashboard.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    init_logger(Box::new(ConsoleLogger::for_build()));
    init_time_provider(Box::new(BrowserTimeProvider::new()));

    log_info!(LogComponent::Presentation("Initialize"), "ticker dashboard starting");
    leptos::mount_to_body(app::App);
}
