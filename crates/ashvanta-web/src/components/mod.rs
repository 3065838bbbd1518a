//! Leptos UI components

mod header;
mod header_menu;
mod header_search;
mod icons;
mod overlay;
mod panels;

pub use header::Header;
pub use header_menu::{HeaderMenu, Viewport};
pub use header_search::HeaderSearch;
pub use overlay::{use_overlay, use_overlay_transitions, Aside, OverlayContext, OverlayProvider};
pub use panels::{AccountPanel, CartPanel};
