//! Header shell
//!
//! Composes the scroll tracker, menu, search and the overlay triggers.
//! Auth and cart arrive later than the rest of the header: each trigger
//! renders its placeholder first and swaps once its value settles.

use super::header_menu::{HeaderMenu, Viewport};
use super::header_search::HeaderSearch;
use super::icons::{IconBag, IconMenu, IconUser};
use super::overlay::use_overlay;
use crate::scroll_hook::use_scroll_visibility;
use ashvanta_core::{AuthStatus, CartSummary, HeaderConfig, Menu, OverlayKind, Settled, StoreHosts};
use leptos::prelude::*;
use leptos_router::components::A;

/// Site header with menu, logo and controls
#[component]
pub fn Header(
    #[prop(into)] menu: Signal<Option<Menu>>,
    #[prop(into)] hosts: Signal<StoreHosts>,
    is_logged_in: LocalResource<Settled<AuthStatus>>,
    cart: LocalResource<Settled<CartSummary>>,
) -> impl IntoView {
    let config = use_context::<HeaderConfig>().unwrap_or_default();
    let thresholds = config.thresholds().unwrap_or_else(|e| {
        leptos::logging::warn!("{}; using default scroll thresholds", e);
        Default::default()
    });
    let scroll = use_scroll_visibility(thresholds);

    view! {
        <header class=move || scroll.get().header_class()>
            <div class="header-inner">
                <HeaderMenu menu hosts viewport=Viewport::Desktop />

                <div class="header-center">
                    <A href="/" attr:class="logo-link">
                        <h1 class="header-logo-text">"Ashvanta"</h1>
                    </A>
                </div>

                <HeaderCtas is_logged_in cart />
            </div>
        </header>
    }
}

#[component]
fn HeaderCtas(
    is_logged_in: LocalResource<Settled<AuthStatus>>,
    cart: LocalResource<Settled<CartSummary>>,
) -> impl IntoView {
    view! {
        <nav class="header-right header-ctas">
            <HeaderMenuMobileToggle />
            <AccountToggle is_logged_in />
            <HeaderSearch />
            <CartToggle cart />
        </nav>
    }
}

#[component]
fn HeaderMenuMobileToggle() -> impl IntoView {
    let overlay = use_overlay();

    view! {
        <button
            class="header-menu-mobile-toggle reset icon-btn"
            on:click=move |_| overlay.toggle(OverlayKind::MobileMenu)
            aria-label="Toggle menu"
            aria-expanded=move || overlay.is_open(OverlayKind::MobileMenu).to_string()
        >
            <IconMenu />
        </button>
    }
}

#[component]
fn AccountToggle(is_logged_in: LocalResource<Settled<AuthStatus>>) -> impl IntoView {
    let overlay = use_overlay();
    let label = move || {
        is_logged_in
            .get()
            .and_then(|settled| settled.ready().copied())
            .unwrap_or_default()
            .account_label()
    };

    view! {
        <Suspense fallback=|| view! { <span class="icon-btn"><IconUser /></span> }>
            <button
                class="icon-btn reset"
                aria-label=label
                aria-expanded=move || overlay.is_open(OverlayKind::Account).to_string()
                on:click=move |_| overlay.open(OverlayKind::Account)
            >
                <IconUser />
            </button>
        </Suspense>
    }
}

/// Cart trigger; opens the cart panel instead of following `/cart`
#[component]
fn CartBadge(#[prop(into)] summary: Option<CartSummary>) -> impl IntoView {
    let overlay = use_overlay();
    let label = summary
        .map(|cart| cart.badge_label())
        .unwrap_or_else(|| "Cart".to_string());

    view! {
        <a
            href="/cart"
            class="icon-btn"
            aria-label=label
            on:click=move |ev| {
                ev.prevent_default();
                overlay.open(OverlayKind::Cart);
            }
        >
            <IconBag />
        </a>
    }
}

#[component]
fn CartToggle(cart: LocalResource<Settled<CartSummary>>) -> impl IntoView {
    view! {
        <Suspense fallback=|| view! { <CartBadge summary=None /> }>
            {move || {
                let summary = cart.get().and_then(|settled| settled.ready().cloned());
                view! { <CartBadge summary /> }
            }}
        </Suspense>
    }
}
