//! Session Status Page - Show wallet session diagnostics and connected wallet info

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session_context;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn StatusPage() -> impl IntoView {
    let session = use_session_context();
    let wallet_ctx = use_wallet_context();
    let navigate = use_navigate();

    let on_disconnect = move |_| {
        wallet_ctx.disconnect(session);
        navigate("/", Default::default());
    };

    let rows = move || {
        let snapshot = session.snapshot.get();
        let adapters = if snapshot.adapters.is_empty() {
            "none".to_string()
        } else {
            snapshot
                .adapters
                .iter()
                .map(|info| info.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        vec![
            ("Network", snapshot.network.label().to_string()),
            ("Endpoint", snapshot.endpoint),
            ("Device", snapshot.device.label().to_string()),
            ("Mobile bridge", snapshot.bridge.label().to_string()),
            ("Ready", if snapshot.ready { "yes" } else { "no" }.to_string()),
            ("Adapters", adapters),
        ]
        .into_iter()
        .map(|(label, value)| view! {
            <p style="color: var(--text-secondary); margin-bottom: var(--spacing-sm);">{label}</p>
            <p style="font-family: monospace; color: var(--text-primary); word-break: break-all; margin-bottom: var(--spacing-md);">
                {value}
            </p>
        })
        .collect::<Vec<_>>()
    };

    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px); background: #000000;">
            <div class="card" style="width: 100%; max-width: 500px; padding: var(--spacing-xl); background: #000000; border: 1px solid #333333;">
                <h1 class="card-title" style="text-align: center; margin-bottom: var(--spacing-md);">
                    "Session Status"
                </h1>

                <div style="background: var(--bg-card); padding: var(--spacing-lg); border-radius: var(--border-radius); border: 1px solid var(--border-color); margin-bottom: var(--spacing-lg);">
                    {rows}
                </div>

                {move || {
                    let disconnect = on_disconnect.clone();

                    match wallet_ctx.address() {
                        Some(address) => view! {
                            <div>
                                <p style="color: var(--price-up); font-weight: bold; margin-bottom: var(--spacing-sm);">
                                    {format!("Connected with {}", wallet_ctx.adapter_name().unwrap_or_default())}
                                </p>
                                <p style="font-family: monospace; color: var(--text-primary); word-break: break-all; font-size: 0.9em; margin-bottom: var(--spacing-lg);">
                                    {address}
                                </p>
                                <button
                                    class="btn"
                                    style="width: 100%; background: var(--bg-error);"
                                    on:click=disconnect
                                >
                                    "Disconnect Wallet"
                                </button>
                            </div>
                        }
                        .into_any(),
                        None => view! {
                            <div class="info">
                                <p style="text-align: center;">"No wallet connected"</p>
                                <a href="/" class="btn" style="display: block; text-align: center; margin-top: var(--spacing-md);">
                                    "Connect a wallet"
                                </a>
                            </div>
                        }
                        .into_any(),
                    }
                }}
            </div>
        </div>
    }
}
