//! Data models for the storefront header

pub mod cart;
pub mod link;
pub mod menu;

pub use cart::{AuthStatus, CartSummary};
pub use link::ResolvedLink;
pub use menu::{HeaderPayload, Menu, MenuItem, MenuPayload};
