//! Menu models and the ingestion boundary for remote menu payloads
//!
//! The storefront API delivers menu items in several loosely-typed shapes
//! (`url`, `resource.url`, `resource.handle`, nested `items`). Everything is
//! parsed into the strict [`MenuItem`] shape here; entries that cannot be
//! rendered are dropped and recorded, never passed further down.

use crate::error::{CoreError, DropReason, IngestReport};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single navigable menu entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub resource_url: Option<String>,
    #[serde(default)]
    pub resource_handle: Option<String>,
    #[serde(default)]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// Item with a plain url and no children
    pub fn link(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// First present of `url`, `resource_url`, `resource_handle`
    ///
    /// A present but blank candidate wins selection and yields `None`; it
    /// never falls through to the next field.
    pub fn raw_url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .or(self.resource_url.as_deref())
            .or(self.resource_handle.as_deref())
            .filter(|candidate| !candidate.trim().is_empty())
    }

    /// Non-empty title and at least one usable url candidate
    pub fn is_renderable(&self) -> bool {
        !self.title.trim().is_empty() && self.raw_url().is_some()
    }
}

/// Ordered navigation structure; item order is render order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub id: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// Outcome of ingesting a menu payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuPayload {
    /// `None` when the payload itself was `null` or had no menu
    pub menu: Option<Menu>,
    pub report: IngestReport,
}

/// Header query payload: the menu plus the shop's primary domain
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderPayload {
    pub menu: MenuPayload,
    pub primary_domain_url: Option<String>,
}

// Wire shapes. Every field is optional so one bad field only costs its entry.

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMenuItem {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    resource: Option<RawResource>,
    #[serde(default)]
    resource_url: Option<String>,
    #[serde(default)]
    resource_handle: Option<String>,
    #[serde(default)]
    items: Vec<Value>,
    #[serde(default)]
    children: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct RawResource {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    handle: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl Menu {
    pub fn new(id: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            id: id.into(),
            items,
        }
    }

    /// Built-in menu used whenever the remote menu is missing or empty
    pub fn fallback() -> Self {
        Self::new(
            "gid://shopify/Menu/1",
            vec![
                MenuItem::link("1", "Our Collection", "/collections/all"),
                MenuItem::link("2", "Featured", "/collections/featured"),
                MenuItem::link("3", "Sustainability", "/pages/sustainability"),
            ],
        )
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Parse a menu payload from JSON text
    ///
    /// Only invalid JSON is an error; invalid entries are dropped.
    pub fn from_json(json: &str) -> Result<MenuPayload, CoreError> {
        let value: Value = serde_json::from_str(json).map_err(|e| CoreError::MenuParse {
            message: e.to_string(),
            source: e,
        })?;
        Ok(Self::from_value(value))
    }

    /// Parse an already-decoded menu payload
    pub fn from_value(value: Value) -> MenuPayload {
        let mut report = IngestReport::new();

        let Value::Object(mut object) = value else {
            // `null`, or something that is not a menu at all
            return MenuPayload { menu: None, report };
        };

        let id = match object.remove("id") {
            Some(Value::String(id)) => id,
            _ => String::new(),
        };
        let items = match object.remove("items") {
            Some(Value::Array(entries)) => ingest_items(entries, "", &mut report),
            _ => Vec::new(),
        };

        MenuPayload {
            menu: Some(Menu { id, items }),
            report,
        }
    }
}

impl HeaderPayload {
    /// Parse `{ "menu": {...}, "shop": { "primaryDomain": { "url": ... } } }`
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_str(json).map_err(|e| CoreError::MenuParse {
            message: e.to_string(),
            source: e,
        })?;

        let primary_domain_url = value
            .pointer("/shop/primaryDomain/url")
            .and_then(Value::as_str)
            .map(str::to_string);
        let menu = match value {
            Value::Object(mut object) => {
                Menu::from_value(object.remove("menu").unwrap_or(Value::Null))
            }
            _ => MenuPayload::default(),
        };

        Ok(Self {
            menu,
            primary_domain_url: non_blank(primary_domain_url),
        })
    }
}

fn ingest_items(entries: Vec<Value>, parent: &str, report: &mut IngestReport) -> Vec<MenuItem> {
    let mut items = Vec::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        let position = if parent.is_empty() {
            index.to_string()
        } else {
            format!("{}/{}", parent, index)
        };

        let raw = match entry {
            Value::Object(_) => match serde_json::from_value::<RawMenuItem>(entry) {
                Ok(raw) => raw,
                Err(_) => {
                    report.drop_item(position, None, DropReason::Malformed);
                    continue;
                }
            },
            _ => {
                report.drop_item(position, None, DropReason::Malformed);
                continue;
            }
        };

        if let Some(item) = ingest_item(raw, &position, report) {
            items.push(item);
        }
    }

    items
}

fn ingest_item(raw: RawMenuItem, position: &str, report: &mut IngestReport) -> Option<MenuItem> {
    let id = non_blank(raw.id);

    let Some(title) = non_blank(raw.title) else {
        report.drop_item(position.to_string(), id, DropReason::MissingTitle);
        return None;
    };

    let (nested_url, nested_handle) = match raw.resource {
        Some(resource) => (resource.url, resource.handle),
        None => (None, None),
    };

    let item = MenuItem {
        id: id.clone().unwrap_or_default(),
        title,
        // `null` is absent, `""` is present; selection happens in raw_url
        url: raw.url,
        resource_url: nested_url.or(raw.resource_url),
        resource_handle: nested_handle.or(raw.resource_handle),
        children: Vec::new(),
    };

    if item.raw_url().is_none() {
        report.drop_item(position.to_string(), id, DropReason::MissingUrl);
        return None;
    }

    let child_entries = if raw.items.is_empty() {
        raw.children
    } else {
        raw.items
    };

    report.accepted += 1;
    Some(MenuItem {
        children: ingest_items(child_entries, position, report),
        ..item
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_url_precedence() {
        let mut item = MenuItem {
            id: "1".into(),
            title: "Boots".into(),
            url: None,
            resource_url: Some("https://shop.myshopify.com/collections/boots".into()),
            resource_handle: Some("boots".into()),
            children: vec![],
        };
        assert_eq!(
            item.raw_url(),
            Some("https://shop.myshopify.com/collections/boots")
        );

        item.url = Some("/collections/boots".into());
        assert_eq!(item.raw_url(), Some("/collections/boots"));

        item.url = None;
        item.resource_url = None;
        assert_eq!(item.raw_url(), Some("boots"));
    }

    #[test]
    fn test_blank_url_does_not_fall_through() {
        let item = MenuItem {
            id: "1".into(),
            title: "Rings".into(),
            url: Some(String::new()),
            resource_url: Some("https://x.myshopify.com/collections/rings".into()),
            resource_handle: Some("rings".into()),
            children: vec![],
        };
        assert_eq!(item.raw_url(), None);
        assert!(!item.is_renderable());
    }

    #[test]
    fn test_from_json_drops_blank_url_with_resource() {
        let payload = Menu::from_json(
            r#"{
                "id": "m",
                "items": [
                    {"id": "1", "title": "Rings", "url": "", "resource": {"url": "https://x.myshopify.com/c"}},
                    {"id": "2", "title": "Bands", "url": null, "resource": {"url": "https://x.myshopify.com/bands"}}
                ]
            }"#,
        )
        .unwrap();

        let menu = payload.menu.unwrap();
        assert_eq!(menu.items.len(), 1);
        assert_eq!(menu.items[0].id, "2");
        assert_eq!(payload.report.count(DropReason::MissingUrl), 1);
        assert_eq!(payload.report.dropped[0].position, "0");
    }

    #[test]
    fn test_from_json_maps_nested_resource() {
        let payload = Menu::from_json(
            r#"{
                "id": "gid://shopify/Menu/9",
                "items": [
                    {"id": "a", "title": "Shop", "resource": {"url": "https://x.myshopify.com/collections/all"}},
                    {"id": "b", "title": "About", "resource": {"handle": "about"}}
                ]
            }"#,
        )
        .unwrap();

        let menu = payload.menu.unwrap();
        assert_eq!(menu.id, "gid://shopify/Menu/9");
        assert_eq!(menu.items.len(), 2);
        assert_eq!(
            menu.items[0].resource_url.as_deref(),
            Some("https://x.myshopify.com/collections/all")
        );
        assert_eq!(menu.items[1].resource_handle.as_deref(), Some("about"));
        assert!(payload.report.is_clean());
        assert_eq!(payload.report.accepted, 2);
    }

    #[test]
    fn test_from_json_drops_unrenderable_entries() {
        let payload = Menu::from_json(
            r#"{
                "id": "m",
                "items": [
                    {"id": "1", "title": "", "url": "/a"},
                    {"id": "2", "title": "No link"},
                    42,
                    {"id": "4", "title": 7, "url": "/typed-wrong"},
                    {"id": "5", "title": "Kept", "url": "/kept"}
                ]
            }"#,
        )
        .unwrap();

        let menu = payload.menu.unwrap();
        assert_eq!(menu.items.len(), 1);
        assert_eq!(menu.items[0].title, "Kept");
        assert_eq!(payload.report.count(DropReason::MissingTitle), 1);
        assert_eq!(payload.report.count(DropReason::MissingUrl), 1);
        assert_eq!(payload.report.count(DropReason::Malformed), 2);
    }

    #[test]
    fn test_from_json_children_dropped_independently() {
        let payload = Menu::from_json(
            r#"{
                "id": "m",
                "items": [
                    {"id": "p", "title": "Collections", "url": "/collections", "items": [
                        {"id": "c1", "title": "Rings", "url": "/collections/rings"},
                        {"id": "c2", "title": "", "url": "/collections/ghost"}
                    ]}
                ]
            }"#,
        )
        .unwrap();

        let menu = payload.menu.unwrap();
        assert_eq!(menu.items[0].children.len(), 1);
        assert_eq!(menu.items[0].children[0].id, "c1");
        assert_eq!(payload.report.dropped[0].position, "0/1");
    }

    #[test]
    fn test_from_json_null_payload() {
        let payload = Menu::from_json("null").unwrap();
        assert!(payload.menu.is_none());
        assert!(payload.report.is_clean());
    }

    #[test]
    fn test_from_json_invalid_json_is_error() {
        let err = Menu::from_json("{not json").unwrap_err();
        assert!(matches!(err, CoreError::MenuParse { .. }));
    }

    #[test]
    fn test_header_payload_reads_primary_domain() {
        let header = HeaderPayload::from_json(
            r#"{
                "shop": {"primaryDomain": {"url": "https://ashvanta.com"}},
                "menu": {"id": "m", "items": [{"id": "1", "title": "All", "url": "/collections/all"}]}
            }"#,
        )
        .unwrap();

        assert_eq!(header.primary_domain_url.as_deref(), Some("https://ashvanta.com"));
        assert_eq!(header.menu.menu.unwrap().items.len(), 1);
    }

    #[test]
    fn test_fallback_menu_shape() {
        let menu = Menu::fallback();
        let titles: Vec<_> = menu.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["Our Collection", "Featured", "Sustainability"]);
        assert!(menu.items.iter().all(MenuItem::is_renderable));
    }
}
