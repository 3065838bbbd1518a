//! Menu URL normalization
//!
//! Turns a menu item into a [`ResolvedLink`] the router can follow. Absolute
//! URLs pointing at one of the store's own hosts are reduced to their path;
//! everything else passes through verbatim. The function is total: a
//! malformed URL degrades to a possibly-wrong link, never to a panic.

use crate::models::{MenuItem, ResolvedLink};
use url::Url;

/// Canonical commerce-platform domain, always treated as internal
pub const PLATFORM_HOST: &str = "myshopify.com";

/// Host strings considered "this store" for normalization
///
/// Matching is by substring, so entries may be bare domains
/// (`ashvanta.com`) or full origins (`https://ashvanta.com`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreHosts {
    hosts: Vec<String>,
}

impl StoreHosts {
    /// Build from any list of hosts. Blank entries are skipped since an
    /// empty needle would match every URL.
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        hosts
            .into_iter()
            .fold(Self::default(), |acc, host| acc.with_host(host.as_ref()))
    }

    /// Only the platform domain
    pub fn platform() -> Self {
        Self::new([PLATFORM_HOST])
    }

    /// Add one host (trimmed, deduplicated, blanks ignored)
    pub fn with_host(mut self, host: &str) -> Self {
        let host = host.trim();
        if !host.is_empty() && !self.hosts.iter().any(|h| h == host) {
            self.hosts.push(host.to_string());
        }
        self
    }

    /// Add the shop's primary domain URL (e.g. `https://ashvanta.com`)
    pub fn with_primary_domain(self, url: &str) -> Self {
        self.with_host(url)
    }

    /// Add the public storefront domain (e.g. `ashvanta.myshopify.com`)
    pub fn with_public_domain(self, domain: &str) -> Self {
        self.with_host(domain)
    }

    /// Whether `raw` mentions any store host
    pub fn matches(&self, raw: &str) -> bool {
        self.hosts.iter().any(|host| raw.contains(host.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.hosts.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

/// Normalize a menu item into a link, or `None` when it cannot be rendered
pub fn normalize(item: &MenuItem, hosts: &StoreHosts) -> Option<ResolvedLink> {
    if item.title.trim().is_empty() {
        return None;
    }
    let raw = item.raw_url()?;

    let key = if item.id.trim().is_empty() {
        item.title.clone()
    } else {
        item.id.clone()
    };

    Some(ResolvedLink {
        key,
        label: item.title.clone(),
        path: normalize_url(raw, hosts),
    })
}

/// Reduce an internal absolute URL to its path; pass anything else through
///
/// Query and fragment are dropped for internal URLs. Relative strings,
/// foreign hosts, and URLs that fail to parse are returned unchanged.
pub fn normalize_url(raw: &str, hosts: &StoreHosts) -> String {
    if !hosts.matches(raw) {
        return raw.to_string();
    }

    match Url::parse(raw) {
        // `//host/x` would be protocol-relative; keep it root-relative
        Ok(parsed) if !parsed.cannot_be_a_base() => {
            format!("/{}", parsed.path().trim_start_matches('/'))
        }
        Ok(_) => raw.to_string(),
        Err(error) => {
            tracing::debug!(url = raw, %error, "Unparseable store URL, passing through");
            raw.to_string()
        }
    }
}
