//! Hover-to-open search field in the header

use super::overlay::{use_overlay, use_overlay_transitions};
use super::icons::IconSearch;
use ashvanta_core::{
    sync_field, DeferredFocus, HeaderConfig, OverlayKind, SearchField, SearchOverlayController,
};
use leptos::html;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// The search `<input>` as seen by the controller
#[derive(Clone, Copy)]
struct InputField(NodeRef<html::Input>);

impl SearchField for InputField {
    fn focus(&self) {
        if let Some(input) = self.0.get_untracked() {
            let _ = input.focus();
        }
    }

    fn blur(&self) {
        if let Some(input) = self.0.get_untracked() {
            let _ = input.blur();
        }
    }
}

/// Toggle the `search-active` class on `<body>`
fn set_body_search_active(active: bool) {
    if let Some(body) = document().body() {
        let _ = body.class_list().toggle_with_force("search-active", active);
    }
}

/// Search affordance: opens on hover or click, submits to the results page
#[component]
pub fn HeaderSearch() -> impl IntoView {
    let overlay = use_overlay();
    let config = use_context::<HeaderConfig>().unwrap_or_default();
    let search = StoredValue::new(SearchOverlayController::new(&config));
    let input_ref = NodeRef::<html::Input>::new();
    let field = InputField(input_ref);
    let navigate = use_navigate();

    let is_open = Memo::new(move |_| overlay.is_open(OverlayKind::Search));

    // Focus moves once the new state is committed, never inside the update
    use_overlay_transitions(move |transition| {
        if transition.opened(OverlayKind::Search) {
            set_body_search_active(true);
        } else if transition.closed(OverlayKind::Search) {
            set_body_search_active(false);
        }
        sync_field(transition, &field);
    });
    on_cleanup(|| set_body_search_active(false));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = input_ref
            .get_untracked()
            .map(|input| input.value())
            .unwrap_or_default();
        let mut go = |path: &str| navigate(path, Default::default());
        search.with_value(|search| overlay.with(|o| search.submit(&value, o, &mut go)));
    };

    view! {
        <div
            class=move || if is_open.get() { "header-search open" } else { "header-search" }
            on:mouseenter=move |_| {
                search.with_value(|search| overlay.with(|o| search.pointer_enter(o, &DeferredFocus)));
            }
            on:mouseleave=move |_| {
                search.with_value(|search| overlay.with(|o| search.pointer_leave(o, &DeferredFocus)));
            }
        >
            <button
                class="icon-btn reset"
                aria-label="Search"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| {
                    search.with_value(|search| overlay.with(|o| search.toggle(o, &DeferredFocus)));
                }
            >
                <IconSearch />
            </button>

            <form on:submit=on_submit class="header-search-form">
                <input
                    node_ref=input_ref
                    type="search"
                    placeholder="ENTER KEYWORD"
                    autocomplete="off"
                    on:keydown=move |e| {
                        if e.key() == "Escape" {
                            search.with_value(|search| overlay.with(|o| search.escape(o, &DeferredFocus)));
                        }
                    }
                />
            </form>
        </div>
    }
}
