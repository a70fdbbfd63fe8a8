//! Wallet Connect - browser wallet session bootstrapper for Solana dApps
//!
//! Decides on first client render whether the page runs on a device that
//! supports the Mobile Wallet Adapter bridge, registers the bridge once,
//! and holds back the wallet list until that registration has settled.
//!
//! - [`session`] - platform detection, bridge registration, adapter set and readiness
//! - [`services`] - browser bindings for injected wallets, the mobile bridge and host info
//! - [`state`] - Leptos contexts exposing the session and the connected wallet
//! - [`config`] - session configuration read from the page URL

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod services;
pub mod session;
pub mod state;
pub mod utils;

use app::App;
use config::SessionConfig;
use utils::url::get_query_params;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Start fully verbose so configuration warnings are not lost, then narrow
    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
    let config = SessionConfig::from_query_or_default(&get_query_params());
    log::set_max_level(config.log_level.to_level_filter());
    log::info!(
        "{} starting on {} ({})",
        config.app_name,
        config.network,
        config.chains.join(", ")
    );

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
