#![allow(warnings)]
//! Diary Frontend Entry Point

mod api;
mod app;
mod browser;
mod client;
mod components;
mod config;
mod context;
mod error;
mod form;
mod html;
mod logging;
mod messages;
mod models;
mod session;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    logging::init(log::LevelFilter::Info);
    let config = ClientConfig::load();
    logging::init(config.log_level());
    log::info!("diary client starting (api base {:?})", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
