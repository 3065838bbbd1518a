//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::api::{fetch_auth, fetch_cart, fetch_header, PUBLIC_STORE_DOMAIN};
use crate::components::{
    AccountPanel, Aside, CartPanel, Header, HeaderMenu, OverlayProvider, Viewport,
};
use ashvanta_core::{settle, HeaderConfig, OverlayKind, StoreHosts};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    let config = HeaderConfig::default();
    provide_context(config.clone());

    // Deferred inputs (use LocalResource for CSR with non-Send futures)
    let header = LocalResource::new(|| settle("header", fetch_header()));
    let cart = LocalResource::new(|| settle("cart", fetch_cart()));
    let is_logged_in = LocalResource::new(|| settle("auth", fetch_auth()));

    // Until the header query lands, the menu is None and the fallback renders
    let menu = Signal::derive(move || {
        header
            .get()
            .and_then(|settled| settled.ready().and_then(|payload| payload.menu.menu.clone()))
    });

    let hosts = Signal::derive(move || {
        let hosts: StoreHosts = config.store_hosts().with_public_domain(PUBLIC_STORE_DOMAIN);
        let primary = header
            .get()
            .and_then(|settled| settled.ready().and_then(|payload| payload.primary_domain_url.clone()));
        match primary {
            Some(url) => hosts.with_primary_domain(&url),
            None => hosts,
        }
    });

    view! {
        <Router>
            <OverlayProvider>
                <Header menu hosts is_logged_in cart />

                <Aside kind=OverlayKind::MobileMenu>
                    <HeaderMenu menu hosts viewport=Viewport::Mobile />
                </Aside>
                <Aside kind=OverlayKind::Cart>
                    <CartPanel cart />
                </Aside>
                <Aside kind=OverlayKind::Account>
                    <AccountPanel is_logged_in />
                </Aside>

                <main class="content">
                    <Routes fallback=|| view! { <section class="page"></section> }>
                        <Route path=path!("/") view=|| view! { <section class="page page-home"></section> } />
                    </Routes>
                </main>
            </OverlayProvider>
        </Router>
    }
}
