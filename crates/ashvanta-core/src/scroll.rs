//! Scroll-driven header visibility
//!
//! The header hides while the shopper scrolls down past `hide` and comes
//! back on any upward scroll. `at_top` is tracked separately for styling.
//! The tracker is O(1) per event and sees nothing but the vertical offset.

use crate::error::CoreError;
use std::cell::RefCell;
use std::rc::Rc;

/// Offset below which the header counts as "at top"
pub const TOP_THRESHOLD: f64 = 50.0;

/// Offset past which scrolling down hides the header
pub const HIDE_THRESHOLD: f64 = 150.0;

/// Threshold pair for the tracker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThresholds {
    pub top: f64,
    pub hide: f64,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            top: TOP_THRESHOLD,
            hide: HIDE_THRESHOLD,
        }
    }
}

impl ScrollThresholds {
    /// Validated thresholds: both finite and non-negative
    ///
    /// `hide` may sit below `top`; the flags are computed independently.
    pub fn new(top: f64, hide: f64) -> Result<Self, CoreError> {
        if !top.is_finite() || !hide.is_finite() || top < 0.0 || hide < 0.0 {
            return Err(CoreError::InvalidConfig {
                message: format!(
                    "scroll thresholds must be finite and non-negative (top={top}, hide={hide})"
                ),
            });
        }
        Ok(Self { top, hide })
    }
}

/// Header visibility derived from scroll events
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub at_top: bool,
    pub hidden: bool,
    pub last_y: f64,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            at_top: true,
            hidden: false,
            last_y: 0.0,
        }
    }
}

impl ScrollState {
    /// Class list for the `<header>` element
    pub fn header_class(&self) -> String {
        let mut class = String::from("header");
        if self.at_top {
            class.push_str(" at-top");
        }
        if self.hidden {
            class.push_str(" header-hidden");
        }
        class
    }
}

/// Scroll state machine, one per mounted header
#[derive(Debug, Clone, Default)]
pub struct ScrollVisibilityTracker {
    thresholds: ScrollThresholds,
    state: ScrollState,
}

impl ScrollVisibilityTracker {
    pub fn new(thresholds: ScrollThresholds) -> Self {
        Self {
            thresholds,
            state: ScrollState::default(),
        }
    }

    pub fn thresholds(&self) -> ScrollThresholds {
        self.thresholds
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Feed one scroll offset and return the new state
    ///
    /// Non-finite offsets are ignored.
    pub fn on_scroll(&mut self, y: f64) -> ScrollState {
        if !y.is_finite() {
            return self.state;
        }

        self.state.at_top = y < self.thresholds.top;
        self.state.hidden = y > self.state.last_y && y > self.thresholds.hide;
        self.state.last_y = y;
        self.state
    }
}

/// A host that can deliver scroll offsets to a listener
///
/// The browser window in production, a fake in tests.
pub trait ScrollHost {
    type Handle;

    /// Register a listener receiving the current vertical offset
    fn add_scroll_listener(&self, listener: Box<dyn FnMut(f64)>) -> Self::Handle;

    /// Deregister a listener previously returned by `add_scroll_listener`
    fn remove_scroll_listener(&self, handle: Self::Handle);
}

/// Scoped scroll subscription
///
/// Registers exactly one listener on creation and removes it when dropped.
/// The tracker lives inside the binding, so unmount discards the state.
pub struct ScrollBinding<H: ScrollHost> {
    host: H,
    handle: Option<H::Handle>,
    tracker: Rc<RefCell<ScrollVisibilityTracker>>,
}

impl<H: ScrollHost> ScrollBinding<H> {
    /// Attach to `host`; `on_change` runs after every processed event
    pub fn attach<F>(host: H, thresholds: ScrollThresholds, mut on_change: F) -> Self
    where
        F: FnMut(ScrollState) + 'static,
    {
        let tracker = Rc::new(RefCell::new(ScrollVisibilityTracker::new(thresholds)));
        let listener_tracker = Rc::clone(&tracker);

        let handle = host.add_scroll_listener(Box::new(move |y| {
            let state = listener_tracker.borrow_mut().on_scroll(y);
            on_change(state);
        }));

        Self {
            host,
            handle: Some(handle),
            tracker,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.tracker.borrow().state()
    }

    /// Remove the listener now instead of at drop
    pub fn detach(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.host.remove_scroll_listener(handle);
        }
    }
}

impl<H: ScrollHost> Drop for ScrollBinding<H> {
    fn drop(&mut self) {
        self.release();
    }
}
