//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::use_session_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session_context();
    let network = move || session.snapshot.with(|snapshot| snapshot.network.label());

    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">"Solana Wallet Connect"</span>
                </A>
                <div class="nav-links">
                    <A href="/status" attr:class="nav-link">"Status"</A>
                    <span class="network-badge">{network}</span>
                </div>
            </div>
        </nav>
    }
}
