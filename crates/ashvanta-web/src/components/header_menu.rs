//! Header navigation built from the remote menu

use super::overlay::use_overlay;
use ashvanta_core::menu::mobile_links;
use ashvanta_core::{resolve, Menu, StoreHosts};
use leptos::prelude::*;
use leptos_router::components::A;

/// Which copy of the menu is being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Desktop,
    Mobile,
}

impl Viewport {
    fn as_str(&self) -> &'static str {
        match self {
            Viewport::Desktop => "desktop",
            Viewport::Mobile => "mobile",
        }
    }
}

/// Menu links, falling back to the built-in menu until (or unless) the
/// remote menu has items
#[component]
pub fn HeaderMenu(
    #[prop(into)] menu: Signal<Option<Menu>>,
    #[prop(into)] hosts: Signal<StoreHosts>,
    viewport: Viewport,
) -> impl IntoView {
    let overlay = use_overlay();
    let fallback = Menu::fallback();

    let links = Memo::new(move |_| {
        let links = hosts.with(|hosts| menu.with(|menu| resolve(menu.as_ref(), &fallback, hosts)));
        match viewport {
            Viewport::Desktop => links,
            Viewport::Mobile => mobile_links(&links),
        }
    });

    view! {
        <nav class=format!("header-left header-menu-{}", viewport.as_str()) role="navigation">
            <For
                each=move || links.get().into_iter().enumerate()
                key=|(position, link)| link.render_key(*position)
                children=move |(_, link)| {
                    view! {
                        // Following any link dismisses the open panel
                        <A
                            href=link.path.clone()
                            attr:class="header-menu-item"
                            on:click=move |_| overlay.close()
                        >
                            {link.label.clone()}
                        </A>
                    }
                }
            />
        </nav>
    }
}
