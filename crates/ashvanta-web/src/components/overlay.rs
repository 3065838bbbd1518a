//! Overlay context and aside panels
//!
//! One [`OverlayCoordinator`] per header, held in a signal and provided to
//! every control through context. Panels are always in the DOM; the
//! coordinator alone decides which one carries `expanded`.

use ashvanta_core::{OverlayCoordinator, OverlayKind, OverlayTransition};
use leptos::prelude::*;

/// Shared overlay state handed to all header controls
#[derive(Clone, Copy)]
pub struct OverlayContext {
    state: RwSignal<OverlayCoordinator>,
}

impl OverlayContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(OverlayCoordinator::new()),
        }
    }

    /// Currently active overlay (tracked)
    pub fn active(&self) -> Option<OverlayKind> {
        self.state.with(|overlay| overlay.active())
    }

    pub fn is_open(&self, kind: OverlayKind) -> bool {
        self.state.with(|overlay| overlay.is_open(kind))
    }

    pub fn open(&self, kind: OverlayKind) {
        self.with(|overlay| overlay.open(kind));
    }

    pub fn close(&self) {
        self.with(|overlay| overlay.close());
    }

    pub fn toggle(&self, kind: OverlayKind) {
        self.with(|overlay| overlay.toggle(kind));
    }

    /// Run a mutation against the coordinator
    ///
    /// Returns `None` once the context has been torn down.
    pub fn with<R>(&self, f: impl FnOnce(&mut OverlayCoordinator) -> R) -> Option<R> {
        self.state.try_update(f)
    }

    fn reset(&self) {
        self.state.try_update(|overlay| overlay.reset());
    }
}

impl Default for OverlayContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Overlay provider component (wraps the header and its panels)
#[component]
pub fn OverlayProvider(children: Children) -> impl IntoView {
    let overlay = OverlayContext::new();

    provide_context(overlay);

    // Escape dismisses whatever is open
    let escape = window_event_listener(leptos::ev::keydown, move |e| {
        if e.key() == "Escape" {
            overlay.close();
        }
    });

    on_cleanup(move || {
        escape.remove();
        overlay.reset();
    });

    children()
}

/// Hook to access the overlay context
pub fn use_overlay() -> OverlayContext {
    expect_context::<OverlayContext>()
}

/// Hook that runs `f` whenever the active overlay changes
pub fn use_overlay_transitions(f: impl Fn(OverlayTransition) + 'static) {
    let overlay = use_overlay();
    Effect::new(move |previous: Option<Option<OverlayKind>>| {
        let to = overlay.active();
        let from = previous.flatten();
        if from != to {
            f(OverlayTransition { from, to });
        }
        to
    });
}

/// Slide-in panel bound to one overlay kind
#[component]
pub fn Aside(kind: OverlayKind, children: Children) -> impl IntoView {
    let overlay = use_overlay();
    let expanded = move || overlay.is_open(kind);

    view! {
        <div
            class=format!("overlay overlay-{}", kind.css_token())
            class:expanded=expanded
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!expanded()).to_string()
        >
            <button
                class="close-outside"
                on:click=move |_| overlay.close()
                aria-label="Close panel"
            ></button>
            <aside>
                <header>
                    <h3>{kind.heading()}</h3>
                    <button class="close reset" on:click=move |_| overlay.close() aria-label="Close">
                        "×"
                    </button>
                </header>
                <main>{children()}</main>
            </aside>
        </div>
    }
}
