//! ashvanta-core - Core library for the Ashvanta storefront header
//!
//! Provides menu ingestion and URL normalization, the scroll-driven header
//! visibility tracker, and the overlay coordinator shared by header controls.
//! Nothing in here touches the DOM; the web crate binds these to the browser.

pub mod config;
pub mod deferred;
pub mod error;
pub mod menu;
pub mod models;
pub mod normalize;
pub mod overlay;
pub mod scroll;
pub mod search;

pub use config::HeaderConfig;
pub use deferred::{settle, Settled};
pub use error::{CoreError, DropReason, DroppedItem, IngestReport};
pub use menu::{resolve, resolve_tree, MenuEntry, MenuResolution, MenuSource};
pub use models::{AuthStatus, CartSummary, HeaderPayload, Menu, MenuItem, MenuPayload, ResolvedLink};
pub use normalize::{normalize, StoreHosts};
pub use overlay::{OverlayCoordinator, OverlayKind, OverlayTransition};
pub use scroll::{ScrollBinding, ScrollHost, ScrollState, ScrollThresholds, ScrollVisibilityTracker};
pub use search::{
    search_destination, sync_field, DeferredFocus, Navigator, SearchField, SearchOverlayController,
    SubmitOutcome,
};
