//! Scroll visibility hook for the header

use ashvanta_core::{ScrollBinding, ScrollHost, ScrollState, ScrollThresholds};
use leptos::prelude::*;
use leptos::web_sys::{AddEventListenerOptions, Event, Window};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// The browser window as a scroll host (one passive `scroll` listener)
pub struct WindowScroll {
    window: Window,
}

impl WindowScroll {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ScrollHost for WindowScroll {
    type Handle = Closure<dyn FnMut(Event)>;

    fn add_scroll_listener(&self, mut listener: Box<dyn FnMut(f64)>) -> Self::Handle {
        let window = self.window.clone();
        let callback = Closure::wrap(Box::new(move |_: Event| {
            if let Ok(y) = window.scroll_y() {
                listener(y);
            }
        }) as Box<dyn FnMut(_)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);

        self.window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .unwrap_or_else(|e| {
                leptos::logging::error!("Failed to add scroll listener: {:?}", e);
            });

        callback
    }

    fn remove_scroll_listener(&self, handle: Self::Handle) {
        self.window
            .remove_event_listener_with_callback("scroll", handle.as_ref().unchecked_ref())
            .unwrap_or_else(|e| {
                leptos::logging::error!("Failed to remove scroll listener: {:?}", e);
            });
    }
}

/// Leptos hook tracking header visibility from window scrolling
///
/// Returns a signal with the latest [`ScrollState`]. The listener is owned
/// by the calling component and removed when it unmounts.
///
/// # Example
///
/// ```rust,ignore
/// let scroll = use_scroll_visibility(ScrollThresholds::default());
/// view! { <header class=move || scroll.get().header_class()>...</header> }
/// ```
pub fn use_scroll_visibility(thresholds: ScrollThresholds) -> ReadSignal<ScrollState> {
    let (state, set_state) = signal(ScrollState::default());

    let Some(window) = leptos::web_sys::window() else {
        leptos::logging::warn!("No window, header scroll tracking disabled");
        return state;
    };

    let binding = ScrollBinding::attach(WindowScroll::new(window), thresholds, move |next| {
        // last_y changes every event; only publish when a flag flips
        let current = state.get_untracked();
        if current.at_top != next.at_top || current.hidden != next.hidden {
            set_state.set(next);
        }
    });

    // The binding is dropped with the owner, which deregisters the listener
    let _binding = StoredValue::new_local(binding);

    state
}
