//! Search overlay behavior
//!
//! The search affordance rides on the shared [`OverlayCoordinator`] using
//! the `Search` kind. It opens on hover or explicit toggle, moves focus into
//! the field when it opens, and turns a non-blank submit into a navigation
//! to the results view.

use crate::config::HeaderConfig;
use crate::overlay::{OverlayCoordinator, OverlayKind, OverlayTransition};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Router seam used by submit
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate(&mut self, path: &str) {
        self(path)
    }
}

/// The search input element
pub trait SearchField {
    fn focus(&self);

    fn blur(&self) {}
}

/// Field stand-in for hosts that move focus after the overlay state has
/// been committed and rendered (see [`sync_field`])
#[derive(Debug, Clone, Copy, Default)]
pub struct DeferredFocus;

impl SearchField for DeferredFocus {
    fn focus(&self) {}
}

/// Bring the field in line with an overlay transition: focus when search
/// opened, blur when it closed. Other transitions leave the field alone.
pub fn sync_field(transition: OverlayTransition, field: &impl SearchField) {
    if transition.opened(OverlayKind::Search) {
        field.focus();
    } else if transition.closed(OverlayKind::Search) {
        field.blur();
    }
}

/// Result of submitting the search form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing happened
    Ignored,
    Navigated { path: String },
}

/// Results path for `term`, or `None` when the trimmed term is empty
pub fn search_destination(term: &str, search_path: &str, search_param: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    Some(format!(
        "{}?{}={}",
        search_path,
        search_param,
        utf8_percent_encode(term, URI_COMPONENT)
    ))
}

/// Search-specific layer over the shared coordinator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOverlayController {
    search_path: String,
    search_param: String,
}

impl Default for SearchOverlayController {
    fn default() -> Self {
        Self::new(&HeaderConfig::default())
    }
}

impl SearchOverlayController {
    pub fn new(config: &HeaderConfig) -> Self {
        Self {
            search_path: config.search_path.clone(),
            search_param: config.search_param.clone(),
        }
    }

    pub fn is_open(&self, overlay: &OverlayCoordinator) -> bool {
        overlay.is_open(OverlayKind::Search)
    }

    /// Open search and move focus into the field
    pub fn open(&self, overlay: &mut OverlayCoordinator, field: &impl SearchField) -> OverlayTransition {
        let transition = overlay.open(OverlayKind::Search);
        field.focus();
        transition
    }

    /// Close search if it is the active overlay
    pub fn close(&self, overlay: &mut OverlayCoordinator, field: &impl SearchField) -> OverlayTransition {
        if !self.is_open(overlay) {
            return OverlayTransition {
                from: overlay.active(),
                to: overlay.active(),
            };
        }
        field.blur();
        overlay.close()
    }

    /// Click on the search button
    pub fn toggle(&self, overlay: &mut OverlayCoordinator, field: &impl SearchField) -> OverlayTransition {
        if self.is_open(overlay) {
            self.close(overlay, field)
        } else {
            self.open(overlay, field)
        }
    }

    /// Pointer entered the search region
    pub fn pointer_enter(&self, overlay: &mut OverlayCoordinator, field: &impl SearchField) -> OverlayTransition {
        self.open(overlay, field)
    }

    /// Pointer left the search region
    ///
    /// Only closes search itself; a cart or menu opened meanwhile stays.
    pub fn pointer_leave(&self, overlay: &mut OverlayCoordinator, field: &impl SearchField) -> OverlayTransition {
        self.close(overlay, field)
    }

    /// Escape pressed while the field has focus
    pub fn escape(&self, overlay: &mut OverlayCoordinator, field: &impl SearchField) -> OverlayTransition {
        self.close(overlay, field)
    }

    /// Submit the form: blank input is ignored, anything else navigates and
    /// closes the overlay
    pub fn submit(
        &self,
        input: &str,
        overlay: &mut OverlayCoordinator,
        navigator: &mut impl Navigator,
    ) -> SubmitOutcome {
        let Some(path) = search_destination(input, &self.search_path, &self.search_param) else {
            return SubmitOutcome::Ignored;
        };

        tracing::debug!(%path, "Search submitted");
        navigator.navigate(&path);
        overlay.close();
        SubmitOutcome::Navigated { path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeField {
        focused: Cell<usize>,
        blurred: Cell<usize>,
    }

    impl SearchField for FakeField {
        fn focus(&self) {
            self.focused.set(self.focused.get() + 1);
        }

        fn blur(&self) {
            self.blurred.set(self.blurred.get() + 1);
        }
    }

    #[test]
    fn test_destination_encodes_term() {
        assert_eq!(
            search_destination("  leather boots ", "/products", "q").as_deref(),
            Some("/products?q=leather%20boots")
        );
        assert_eq!(
            search_destination("a&b=c/d", "/products", "q").as_deref(),
            Some("/products?q=a%26b%3Dc%2Fd")
        );
        assert_eq!(
            search_destination("it's (new)!", "/products", "q").as_deref(),
            Some("/products?q=it's%20(new)!")
        );
        assert_eq!(
            search_destination("été", "/search", "term").as_deref(),
            Some("/search?term=%C3%A9t%C3%A9")
        );
        assert_eq!(search_destination(" \t ", "/products", "q"), None);
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let search = SearchOverlayController::default();
        let mut overlay = OverlayCoordinator::new();
        overlay.open(OverlayKind::Search);
        let mut calls = Vec::new();

        let outcome = search.submit("  ", &mut overlay, &mut |p: &str| calls.push(p.to_string()));

        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert!(calls.is_empty());
        assert!(overlay.is_open(OverlayKind::Search));
    }

    #[test]
    fn test_submit_navigates_once_and_closes() {
        let search = SearchOverlayController::default();
        let mut overlay = OverlayCoordinator::new();
        overlay.open(OverlayKind::Search);
        let mut calls = Vec::new();

        let outcome = search.submit("boots", &mut overlay, &mut |p: &str| calls.push(p.to_string()));

        assert_eq!(calls, ["/products?q=boots"]);
        assert_eq!(
            outcome,
            SubmitOutcome::Navigated {
                path: "/products?q=boots".to_string()
            }
        );
        assert_eq!(overlay.active(), None);
    }

    #[test]
    fn test_open_transfers_focus() {
        let search = SearchOverlayController::default();
        let mut overlay = OverlayCoordinator::new();
        let field = FakeField::default();

        let transition = search.pointer_enter(&mut overlay, &field);
        assert!(transition.opened(OverlayKind::Search));
        assert_eq!(field.focused.get(), 1);

        search.pointer_leave(&mut overlay, &field);
        assert_eq!(overlay.active(), None);
        assert_eq!(field.blurred.get(), 1);
    }

    #[test]
    fn test_deferred_focus_follows_transition() {
        let search = SearchOverlayController::default();
        let mut overlay = OverlayCoordinator::new();
        let field = FakeField::default();

        // State change first, with no focus side effects
        let opened = search.pointer_enter(&mut overlay, &DeferredFocus);
        assert_eq!(field.focused.get(), 0);

        sync_field(opened, &field);
        assert_eq!(field.focused.get(), 1);

        // Cart replacing search counts as search closing
        let replaced = overlay.open(OverlayKind::Cart);
        sync_field(replaced, &field);
        assert_eq!(field.blurred.get(), 1);

        let unrelated = overlay.close();
        sync_field(unrelated, &field);
        assert_eq!((field.focused.get(), field.blurred.get()), (1, 1));
    }

    #[test]
    fn test_pointer_leave_keeps_other_overlay() {
        let search = SearchOverlayController::default();
        let mut overlay = OverlayCoordinator::new();
        let field = FakeField::default();

        search.pointer_enter(&mut overlay, &field);
        overlay.open(OverlayKind::Cart);
        let transition = search.pointer_leave(&mut overlay, &field);

        assert!(!transition.changed());
        assert!(overlay.is_open(OverlayKind::Cart));
    }

    #[test]
    fn test_toggle_and_escape() {
        let search = SearchOverlayController::default();
        let mut overlay = OverlayCoordinator::new();
        let field = FakeField::default();

        search.toggle(&mut overlay, &field);
        assert!(search.is_open(&overlay));
        search.escape(&mut overlay, &field);
        assert!(!search.is_open(&overlay));

        overlay.open(OverlayKind::MobileMenu);
        search.toggle(&mut overlay, &field);
        assert!(search.is_open(&overlay));
    }

    #[test]
    fn test_custom_search_route() {
        let config = HeaderConfig {
            search_path: "/search".to_string(),
            search_param: "term".to_string(),
            ..HeaderConfig::default()
        };
        let search = SearchOverlayController::new(&config);
        let mut overlay = OverlayCoordinator::new();
        let mut calls = Vec::new();

        search.submit("rings", &mut overlay, &mut |p: &str| calls.push(p.to_string()));
        assert_eq!(calls, ["/search?term=rings"]);
    }
}
