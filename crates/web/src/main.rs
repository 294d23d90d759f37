//! StyleCanvas Web - Browser front end.
//!
//! Client-side rendered Yew app, built for `wasm32-unknown-unknown` and
//! mounted on `<div id="style-canvas">`.
//!
//! # Architecture
//!
//! - All page state lives in a `style_canvas_core::OutfitStudio`
//! - Components are thin views over that state and emit callbacks
//! - Notifications become toasts; `tracing` output goes to the browser console

#![cfg_attr(not(test), forbid(unsafe_code))]

mod app;
mod classes;
mod components;
mod config;
mod logging;
mod toast;

use app::{App, AppProps};

fn main() {
    console_error_panic_hook::set_once();

    let mount = config::mount_point();
    let (studio_config, config_error) = match config::from_mount(mount.as_ref()) {
        Ok(studio_config) => (studio_config, None),
        Err(err) => (style_canvas_core::StudioConfig::default(), Some(err)),
    };

    logging::init(&studio_config.log_filter);
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "Ignoring page config, using defaults");
    }

    let props = AppProps {
        config: studio_config,
    };
    match mount {
        Some(root) => {
            tracing::info!("Mounting StyleCanvas");
            yew::Renderer::<App>::with_root_and_props(root, props).render();
        }
        None => {
            tracing::warn!(id = config::MOUNT_ID, "Mount element not found, rendering into body");
            yew::Renderer::<App>::with_props(props).render();
        }
    }
}
