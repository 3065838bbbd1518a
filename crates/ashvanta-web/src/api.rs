//! Data-layer adapters for the header
//!
//! The storefront data layer owns fetching and caching; these functions only
//! pull its JSON endpoints and hand the payloads to the core parsers.

use ashvanta_core::{AuthStatus, CartSummary, HeaderPayload};
use gloo_net::http::Request;
use serde::Deserialize;

/// Public storefront domain, baked in at build time
pub const PUBLIC_STORE_DOMAIN: &str = match option_env!("PUBLIC_STORE_DOMAIN") {
    Some(domain) => domain,
    None => "ashvanta.myshopify.com",
};

/// Customer endpoint response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CustomerResponse {
    #[serde(default)]
    is_logged_in: bool,
}

/// Fetch the header query (menu + shop primary domain)
pub async fn fetch_header() -> Result<HeaderPayload, String> {
    let response = Request::get("/api/header")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Read error: {}", e))?;

    let header = HeaderPayload::from_json(&body).map_err(|e| e.to_string())?;
    if !header.menu.report.is_clean() {
        leptos::logging::log!(
            "Header menu: {} entries dropped during ingestion",
            header.menu.report.dropped.len()
        );
    }

    Ok(header)
}

/// Fetch the cart summary
pub async fn fetch_cart() -> Result<CartSummary, String> {
    let response = Request::get("/api/cart")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<CartSummary>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch whether the shopper is signed in
pub async fn fetch_auth() -> Result<AuthStatus, String> {
    let response = Request::get("/api/customer")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let customer = response
        .json::<CustomerResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(AuthStatus(customer.is_logged_in))
}
