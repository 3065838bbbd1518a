//! Overlay coordinator shared by every header control
//!
//! At most one overlay (mobile menu, search, cart, account) is open at a
//! time. Opening another replaces the current one; there is no stack and no
//! queue. The header shell constructs one coordinator and hands the same
//! instance to every control, so two triggers firing in one turn simply
//! resolve to the last writer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The mutually exclusive panels the header can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverlayKind {
    MobileMenu,
    Search,
    Cart,
    Account,
}

impl OverlayKind {
    pub const ALL: [OverlayKind; 4] = [
        OverlayKind::MobileMenu,
        OverlayKind::Search,
        OverlayKind::Cart,
        OverlayKind::Account,
    ];

    /// State name, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayKind::MobileMenu => "mobileMenu",
            OverlayKind::Search => "search",
            OverlayKind::Cart => "cart",
            OverlayKind::Account => "account",
        }
    }

    /// Token used in panel class names (`overlay-{token}`)
    pub fn css_token(&self) -> &'static str {
        match self {
            OverlayKind::MobileMenu => "mobile",
            OverlayKind::Search => "search",
            OverlayKind::Cart => "cart",
            OverlayKind::Account => "account",
        }
    }

    /// Heading shown on the aside panel
    pub fn heading(&self) -> &'static str {
        match self {
            OverlayKind::MobileMenu => "Menu",
            OverlayKind::Search => "Search",
            OverlayKind::Cart => "Cart",
            OverlayKind::Account => "Account",
        }
    }
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A state change, reported to observers (body classes, aria attributes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayTransition {
    pub from: Option<OverlayKind>,
    pub to: Option<OverlayKind>,
}

impl OverlayTransition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }

    /// `kind` became active with this transition
    pub fn opened(&self, kind: OverlayKind) -> bool {
        self.to == Some(kind) && self.from != Some(kind)
    }

    /// `kind` stopped being active with this transition
    pub fn closed(&self, kind: OverlayKind) -> bool {
        self.from == Some(kind) && self.to != Some(kind)
    }
}

/// Single-active-overlay state machine
///
/// Mutated only through [`open`](Self::open), [`close`](Self::close),
/// [`toggle`](Self::toggle) and [`reset`](Self::reset). Callers share one
/// instance and write to it one at a time from the UI event loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayCoordinator {
    active: Option<OverlayKind>,
}

impl OverlayCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<OverlayKind> {
        self.active
    }

    pub fn is_open(&self, kind: OverlayKind) -> bool {
        self.active == Some(kind)
    }

    pub fn is_any_open(&self) -> bool {
        self.active.is_some()
    }

    /// Make `kind` the active overlay, replacing whatever was open
    pub fn open(&mut self, kind: OverlayKind) -> OverlayTransition {
        self.transition(Some(kind))
    }

    /// Close the active overlay; a no-op when nothing is open
    pub fn close(&mut self) -> OverlayTransition {
        self.transition(None)
    }

    /// Open `kind`, or close it if it is already the active overlay
    pub fn toggle(&mut self, kind: OverlayKind) -> OverlayTransition {
        if self.is_open(kind) {
            self.close()
        } else {
            self.open(kind)
        }
    }

    /// Tear down to the initial state (shell unmount)
    pub fn reset(&mut self) {
        if self.active.take().is_some() {
            tracing::debug!("Overlay coordinator reset");
        }
    }

    fn transition(&mut self, to: Option<OverlayKind>) -> OverlayTransition {
        let from = std::mem::replace(&mut self.active, to);
        let transition = OverlayTransition { from, to };
        if transition.changed() {
            tracing::debug!(?from, ?to, "Overlay transition");
        }
        transition
    }
}
