//! Wallet Selector Component
//!
//! Renders nothing until the wallet session is ready, so the first paint never
//! shows a wallet list that changes right after.

use leptos::prelude::*;

use crate::session::{AdapterInfo, AdapterKind};
use crate::state::session::use_session_context;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn WalletSelector() -> impl IntoView {
    let session = use_session_context();

    move || {
        if !session.is_ready() {
            return ().into_any();
        }

        let adapters = session.adapters();
        if adapters.is_empty() {
            return view! {
                <div class="info">
                    <p style="text-align: center;">"No wallets available"</p>
                    <p style="text-align: center; font-size: 0.9em;">
                        "Install Phantom or Solflare, or open this page in a wallet browser."
                    </p>
                </div>
            }
            .into_any();
        }

        view! {
            <div class="wallet-list">
                {adapters
                    .into_iter()
                    .map(|info| view! { <WalletButton info=info/> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    }
}

#[component]
fn WalletButton(info: AdapterInfo) -> impl IntoView {
    let session = use_session_context();
    let wallet_ctx = use_wallet_context();

    let name = info.name.clone();
    let label = info.name.clone();
    let image_path = format!("/assets/wallets/{}.webp", info.name.to_lowercase().replace(' ', "-"));
    let hint = match (info.kind, info.installed) {
        (AdapterKind::MobileBridge, _) => "Mobile",
        (AdapterKind::Injected, true) => "Detected",
        (AdapterKind::Injected, false) => "",
    };

    view! {
        <button
            class="wallet-button"
            disabled=move || wallet_ctx.is_connecting()
            on:click=move |_| wallet_ctx.connect(session, name.clone())
        >
            <img
                src=image_path
                alt=label.clone()
                style="width: 32px; height: 32px; object-fit: contain; margin-right: 12px;"
            />
            <span style="font-weight: 600; flex: 1; text-align: left;">{label}</span>
            <span style="font-size: 0.9em; opacity: 0.9;">{hint}</span>
        </button>
    }
}
