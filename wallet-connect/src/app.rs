//! Wallet Connect App - Leptos Frontend

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::Navbar;
use crate::config::SessionConfig;
use crate::pages::{ConnectPage, StatusPage};
use crate::state::session::provide_session_context;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App(config: SessionConfig) -> impl IntoView {
    let session = provide_session_context(config);
    provide_wallet_context(session);

    Effect::new(move || hide_loading_screen());

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=ConnectPage/>
                    <Route path=path!("/status") view=StatusPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="color: #ffffff; margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
                <p style="color: #cccccc; margin-bottom: 24px;">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Go to Home"
                    </span>
                </A>
            </div>
        </div>
    }
}

/// Hide the static loading screen from index.html once the app has mounted
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::warn!("No document available, loading screen left in place");
        return;
    };

    if let Some(loading_element) = document.get_element_by_id("leptos-loading") {
        match loading_element.set_attribute("class", "hidden") {
            Ok(()) => log::debug!("Loading screen hidden"),
            Err(e) => log::warn!("Failed to hide loading screen: {:?}", e),
        }
    }
}
