//! ashvanta-web - Storefront header for the browser using Leptos
//!
//! Binds the ashvanta-core state machines to the DOM: the scroll listener,
//! the shared overlay context, and the header controls that drive it.

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod components;
pub mod scroll_hook;

pub use app::App;
