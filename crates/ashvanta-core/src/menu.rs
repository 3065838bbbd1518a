//! Menu resolution
//!
//! Picks the remote menu or the fallback menu (never a mix) and maps the
//! items through [`normalize`], keeping source order and skipping items that
//! cannot be rendered.

use crate::models::{Menu, MenuItem, ResolvedLink};
use crate::normalize::{normalize, StoreHosts};
use serde::Serialize;

/// Which menu the links came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuSource {
    Remote,
    Fallback,
}

impl MenuSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuSource::Remote => "remote",
            MenuSource::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for MenuSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved links plus the menu they were taken from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuResolution {
    pub source: MenuSource,
    pub links: Vec<ResolvedLink>,
}

/// A resolved link with its resolved sub-menu (dropdown)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub link: ResolvedLink,
    pub children: Vec<MenuEntry>,
}

/// All-or-nothing selection: remote items when there are any, else fallback
pub fn select_items<'a>(remote: Option<&'a Menu>, fallback: &'a Menu) -> (MenuSource, &'a [MenuItem]) {
    match remote {
        Some(menu) if !menu.items.is_empty() => (MenuSource::Remote, &menu.items),
        _ => {
            tracing::debug!(fallback_id = %fallback.id, "Remote menu missing or empty, using fallback");
            (MenuSource::Fallback, &fallback.items)
        }
    }
}

/// Ordered list of navigable links for the header
pub fn resolve(remote: Option<&Menu>, fallback: &Menu, hosts: &StoreHosts) -> Vec<ResolvedLink> {
    resolve_with_source(remote, fallback, hosts).links
}

/// Like [`resolve`], also reporting which menu was used
pub fn resolve_with_source(remote: Option<&Menu>, fallback: &Menu, hosts: &StoreHosts) -> MenuResolution {
    let (source, items) = select_items(remote, fallback);
    MenuResolution {
        source,
        links: items.iter().filter_map(|item| normalize(item, hosts)).collect(),
    }
}

/// Nested resolution for menus with dropdowns
///
/// A child that cannot be rendered is dropped on its own; its parent stays.
pub fn resolve_tree(remote: Option<&Menu>, fallback: &Menu, hosts: &StoreHosts) -> Vec<MenuEntry> {
    let (_, items) = select_items(remote, fallback);
    resolve_entries(items, hosts)
}

fn resolve_entries(items: &[MenuItem], hosts: &StoreHosts) -> Vec<MenuEntry> {
    items
        .iter()
        .filter_map(|item| {
            normalize(item, hosts).map(|link| MenuEntry {
                link,
                children: resolve_entries(&item.children, hosts),
            })
        })
        .collect()
}

/// Link to the storefront root, shown first in the mobile menu
pub fn home_link() -> ResolvedLink {
    ResolvedLink::new("home", "Home", "/")
}

/// Links for the mobile viewport: Home first, then the menu
pub fn mobile_links(links: &[ResolvedLink]) -> Vec<ResolvedLink> {
    std::iter::once(home_link())
        .chain(links.iter().cloned())
        .collect()
}
