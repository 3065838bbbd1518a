//! Contents of the cart and account aside panels

use super::overlay::use_overlay;
use ashvanta_core::{AuthStatus, CartSummary, Settled};
use leptos::prelude::*;
use leptos_router::components::A;

/// Cart summary panel
#[component]
pub fn CartPanel(cart: LocalResource<Settled<CartSummary>>) -> impl IntoView {
    let overlay = use_overlay();

    view! {
        <Suspense fallback=|| view! { <p class="cart-loading">"Loading cart..."</p> }>
            {move || {
                let summary = cart
                    .get()
                    .and_then(|settled| settled.ready().cloned())
                    .filter(|cart| cart.total_quantity > 0);
                match summary {
                    Some(cart) => view! {
                        <p class="cart-summary">{cart.badge_label()}</p>
                        <A href="/cart" attr:class="button" on:click=move |_| overlay.close()>
                            "View cart"
                        </A>
                    }
                    .into_any(),
                    None => view! {
                        <p class="cart-empty">"Your cart is empty"</p>
                        <A href="/collections/all" attr:class="button" on:click=move |_| overlay.close()>
                            "Continue shopping"
                        </A>
                    }
                    .into_any(),
                }
            }}
        </Suspense>
    }
}

/// Account panel: account link or sign-in prompt
#[component]
pub fn AccountPanel(is_logged_in: LocalResource<Settled<AuthStatus>>) -> impl IntoView {
    let overlay = use_overlay();

    view! {
        <Suspense fallback=|| view! { <p class="account-loading">"Loading..."</p> }>
            {move || {
                let status = is_logged_in
                    .get()
                    .and_then(|settled| settled.ready().copied())
                    .unwrap_or_default();
                let text = if status.is_logged_in() { "View account" } else { "Sign in" };
                view! {
                    <A href="/account" attr:class="button" on:click=move |_| overlay.close()>
                        {text}
                    </A>
                }
            }}
        </Suspense>
    }
}
