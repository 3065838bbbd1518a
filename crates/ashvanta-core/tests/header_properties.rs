//! End-to-end behavior of the header core
//!
//! Drives menu ingestion, scroll tracking, overlays and search together the
//! way the web shell does.
//!
//! Run with:
//! ```bash
//! cargo test -p ashvanta-core --test header_properties
//! ```

use ashvanta_core::menu::{resolve_with_source, MenuSource};
use ashvanta_core::normalize::normalize_url;
use ashvanta_core::{
    normalize, resolve, HeaderConfig, HeaderPayload, Menu, MenuItem, OverlayCoordinator,
    OverlayKind, ScrollVisibilityTracker, SearchField, SearchOverlayController, StoreHosts,
    SubmitOutcome,
};

const HEADER_JSON: &str = r#"{
    "shop": {"primaryDomain": {"url": "https://ashvanta.com"}},
    "menu": {
        "id": "gid://shopify/Menu/199655587896",
        "items": [
            {"id": "gid://shopify/MenuItem/1", "title": "Rings", "url": "https://ashvanta.com/collections/rings?page=2", "items": []},
            {"id": "gid://shopify/MenuItem/2", "title": "Necklaces", "url": null, "resource": {"url": "https://ashvanta.myshopify.com/collections/necklaces"}},
            {"id": "gid://shopify/MenuItem/3", "title": "Story", "resource": {"handle": "our-story"}},
            {"id": "gid://shopify/MenuItem/4", "title": "", "url": "/pages/hidden"},
            {"id": "gid://shopify/MenuItem/5", "title": "Press", "url": "https://press.example.net/ashvanta"},
            {"id": "gid://shopify/MenuItem/6", "title": "Lookbook"}
        ]
    }
}"#;

struct NoopField;

impl SearchField for NoopField {
    fn focus(&self) {}
}

fn store_hosts(primary: Option<&str>) -> StoreHosts {
    let hosts = HeaderConfig::default()
        .store_hosts()
        .with_public_domain("ashvanta.myshopify.com");
    match primary {
        Some(url) => hosts.with_primary_domain(url),
        None => hosts,
    }
}

mod menu_resolution {
    use super::*;

    #[test]
    fn test_header_payload_resolves_in_order() {
        let header = HeaderPayload::from_json(HEADER_JSON).unwrap();
        let hosts = store_hosts(header.primary_domain_url.as_deref());
        let menu = header.menu.menu.as_ref();

        let resolution = resolve_with_source(menu, &Menu::fallback(), &hosts);
        assert_eq!(resolution.source, MenuSource::Remote);

        let pairs: Vec<_> = resolution
            .links
            .iter()
            .map(|l| (l.label.as_str(), l.path.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("Rings", "/collections/rings"),
                ("Necklaces", "/collections/necklaces"),
                ("Story", "our-story"),
                ("Press", "https://press.example.net/ashvanta"),
            ]
        );
        assert_eq!(header.menu.report.dropped.len(), 2);
    }

    #[test]
    fn test_unrenderable_items_never_resolve() {
        let hosts = store_hosts(None);
        let items = [
            MenuItem::link("1", "", "/a"),
            MenuItem {
                id: "2".into(),
                title: "No url".into(),
                ..Default::default()
            },
        ];
        for item in &items {
            assert!(normalize(item, &hosts).is_none());
        }
    }

    #[test]
    fn test_internal_paths_carry_no_scheme_or_host() {
        let hosts = store_hosts(Some("https://ashvanta.com"));
        for raw in [
            "https://ashvanta.com/collections/all",
            "http://ashvanta.myshopify.com/pages/faq?x=1#y",
            "https://ashvanta.com",
        ] {
            let path = normalize_url(raw, &hosts);
            assert!(path.starts_with('/'), "{raw} -> {path}");
            assert!(!path.contains("://"));
            assert!(!path.contains("ashvanta.com"));
            assert_eq!(normalize_url(&path, &hosts), path);
        }
    }

    #[test]
    fn test_no_partial_merge_with_fallback() {
        let hosts = store_hosts(None);
        let fallback = Menu::fallback();
        let fallback_keys: Vec<_> = fallback.items.iter().map(|i| i.id.clone()).collect();

        let remote = Menu::new("r", vec![MenuItem::link("x", "Only", "/only")]);
        let links = resolve(Some(&remote), &fallback, &hosts);
        assert_eq!(links.len(), 1);
        assert!(links.iter().all(|l| !fallback_keys.contains(&l.key)));

        let empty = Menu::from_json(r#"{"id": "e", "items": []}"#).unwrap().menu;
        let links = resolve(empty.as_ref(), &fallback, &hosts);
        let keys: Vec<_> = links.iter().map(|l| l.key.clone()).collect();
        assert_eq!(keys, fallback_keys);
    }

    #[test]
    fn test_duplicate_keys_get_distinct_render_keys() {
        let hosts = store_hosts(None);
        let remote = Menu::new(
            "r",
            vec![
                MenuItem::link("", "Sale", "/collections/sale"),
                MenuItem::link("", "Sale", "/collections/sale-2"),
            ],
        );
        let links = resolve(Some(&remote), &Menu::fallback(), &hosts);
        assert_eq!(links[0].key, links[1].key);
        assert_ne!(links[0].render_key(0), links[1].render_key(1));
    }
}

mod scroll_visibility {
    use super::*;

    #[test]
    fn test_scroll_sequence_from_config() {
        let config = HeaderConfig::default();
        let mut tracker = ScrollVisibilityTracker::new(config.thresholds().unwrap());

        let classes: Vec<_> = [0.0, 60.0, 200.0, 180.0]
            .into_iter()
            .map(|y| tracker.on_scroll(y).header_class())
            .collect();

        assert_eq!(
            classes,
            ["header at-top", "header", "header header-hidden", "header"]
        );
    }
}

mod overlays {
    use super::*;

    #[test]
    fn test_controls_share_one_coordinator() {
        let mut overlay = OverlayCoordinator::new();
        let search = SearchOverlayController::default();

        // Mobile toggle, then the search hover, then the cart button
        overlay.toggle(OverlayKind::MobileMenu);
        search.pointer_enter(&mut overlay, &NoopField);
        assert_eq!(overlay.active(), Some(OverlayKind::Search));

        overlay.open(OverlayKind::Cart);
        assert_eq!(overlay.active(), Some(OverlayKind::Cart));

        overlay.close();
        overlay.close();
        assert_eq!(overlay.active(), None);
    }

    #[test]
    fn test_last_open_in_a_turn_wins() {
        let mut overlay = OverlayCoordinator::new();
        overlay.open(OverlayKind::Account);
        overlay.open(OverlayKind::Search);
        assert_eq!(overlay.active(), Some(OverlayKind::Search));
    }

    #[test]
    fn test_search_submit_whitespace_and_term() {
        let search = SearchOverlayController::default();
        let mut overlay = OverlayCoordinator::new();
        let mut navigations: Vec<String> = Vec::new();

        search.pointer_enter(&mut overlay, &NoopField);
        let before = overlay;
        let outcome = search.submit("  ", &mut overlay, &mut |p: &str| navigations.push(p.to_string()));
        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert_eq!(overlay, before);
        assert!(navigations.is_empty());

        search.submit("boots", &mut overlay, &mut |p: &str| navigations.push(p.to_string()));
        assert_eq!(navigations.len(), 1);
        assert!(navigations[0].contains("q=boots"));
        assert_eq!(overlay.active(), None);
    }
}
