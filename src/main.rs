use std::rc::Rc;

mod components;
mod config;
mod error;
mod model;
mod persist;
mod preview;
mod quote;
mod util;

use components::app::{App, AppProps};
use config::AppConfig;

fn main() {
    let (config, problem) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    wasm_logger::init(wasm_logger::Config::new(config.console_level()));
    if let Some(e) = problem {
        log::warn!(target: "config", "{e}; using defaults");
    }
    log::info!(target: "app", "configurator starting (form action {})", config.form_action);
    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
