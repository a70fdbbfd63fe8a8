//! Connect Wallet Page
//! Split-screen layout with the app header on the left and the wallet card on the right

use leptos::prelude::*;
use shared::truncate_address;

use crate::components::WalletSelector;
use crate::session::DeviceKind;
use crate::state::session::use_session_context;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn ConnectPage() -> impl IntoView {
    let session = use_session_context();
    let wallet_ctx = use_wallet_context();

    let app_name = session.config().app_name;
    let device = move || session.snapshot.with(|snapshot| snapshot.device);

    view! {
        <div class="content-wrapper">
            <div class="left-section">
                <h1 class="main-header">{app_name}</h1>
                <p class="main-subheader">"Connect a Solana wallet"</p>
                <p class="signup-text">
                    {move || format!("Detected device: {}", device().label())}
                </p>
            </div>
            <div class="right-section">
                <div class="container">
                    <div class="card">
                        <h1 style="color: #ffffff; font-size: 32px; margin-bottom: 12px; font-weight: 700;">
                            "Connect Wallet"
                        </h1>

                        {move || wallet_ctx.error().map(|err| view! {
                            <div class="error">
                                <p style="text-align: center;">{err}</p>
                            </div>
                        })}

                        {move || match wallet_ctx.address() {
                            Some(address) => {
                                let adapter = wallet_ctx.adapter_name().unwrap_or_default();
                                view! {
                                    <div>
                                        <div class="success">
                                            <p style="text-align: center; font-weight: bold; font-size: 1.2em; margin-bottom: 12px;">
                                                {format!("Connected with {}", adapter)}
                                            </p>
                                            <div class="wallet-address" title=address.clone()>
                                                {truncate_address(&address)}
                                            </div>
                                        </div>
                                        <button
                                            class="btn"
                                            style="width: 100%; background: var(--bg-error);"
                                            on:click=move |_| wallet_ctx.disconnect(session)
                                        >
                                            "Disconnect"
                                        </button>
                                    </div>
                                }
                                .into_any()
                            }
                            None => view! {
                                <div>
                                    <div class="info">
                                        <p style="text-align: center; margin-bottom: 8px; font-weight: 600;">
                                            {move || if wallet_ctx.is_connecting() {
                                                "Waiting for the wallet to approve..."
                                            } else {
                                                "Select a wallet from the options below"
                                            }}
                                        </p>
                                        {move || (device() == DeviceKind::Android).then(|| view! {
                                            <p style="text-align: center; font-size: 0.9em;">
                                                "Mobile Wallet Adapter opens an installed wallet app on this device."
                                            </p>
                                        })}
                                    </div>
                                    <WalletSelector/>
                                </div>
                            }
                            .into_any(),
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
