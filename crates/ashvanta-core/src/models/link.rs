//! Resolved navigation link

use serde::{Deserialize, Serialize};

/// A menu item reduced to a router-consumable label/path pair
///
/// `path` is root-relative (starts with `/`) for internal links, or the
/// verbatim source string for external and unparseable ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedLink {
    /// Source id, or the title when the id is blank. Not unique.
    pub key: String,
    pub label: String,
    pub path: String,
}

impl ResolvedLink {
    pub fn new(key: impl Into<String>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            path: path.into(),
        }
    }

    /// Key safe to use for list rendering: keys and titles may repeat,
    /// the position/key pair does not.
    pub fn render_key(&self, position: usize) -> String {
        format!("{}:{}", position, self.key)
    }

    /// Whether the path leaves the storefront (has a scheme, or is
    /// protocol-relative)
    pub fn is_external(&self) -> bool {
        self.path.starts_with("//") || (!self.path.starts_with('/') && self.path.contains("://"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_key_disambiguates_duplicates() {
        let a = ResolvedLink::new("sale", "Sale", "/collections/sale");
        let b = ResolvedLink::new("sale", "Sale", "/collections/sale");
        assert_eq!(a, b);
        assert_ne!(a.render_key(0), b.render_key(1));
        assert_eq!(a.render_key(3), "3:sale");
    }

    #[test]
    fn test_is_external() {
        assert!(ResolvedLink::new("1", "Blog", "https://blog.example.com/").is_external());
        assert!(!ResolvedLink::new("2", "All", "/collections/all").is_external());
        assert!(!ResolvedLink::new("3", "Front", "frontpage").is_external());
        assert!(ResolvedLink::new("4", "Cdn", "//cdn.example.net/x").is_external());
    }
}
