//! Deferred values rendered placeholder-first
//!
//! The header gets authentication status and the cart summary as futures.
//! It renders a placeholder immediately and swaps in the real view once the
//! future settles. A rejected future keeps the placeholder; the failure is
//! logged and goes no further.

use std::fmt::Display;
use std::future::Future;

/// Settlement state of a deferred value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Settled<T> {
    #[default]
    Pending,
    Ready(T),
    Failed,
}

impl<T> Settled<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Settled::Pending)
    }

    /// The value, only once it resolved successfully
    pub fn ready(&self) -> Option<&T> {
        match self {
            Settled::Ready(value) => Some(value),
            Settled::Pending | Settled::Failed => None,
        }
    }

    /// Render either the resolved view or the placeholder
    ///
    /// Pending and failed values both get the placeholder.
    pub fn view_or<V>(&self, placeholder: impl FnOnce() -> V, view: impl FnOnce(&T) -> V) -> V {
        match self.ready() {
            Some(value) => view(value),
            None => placeholder(),
        }
    }

    /// Convert a settled result, logging a rejection under `label`
    pub fn from_result<E: Display>(label: &str, result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Settled::Ready(value),
            Err(error) => {
                tracing::warn!(deferred = label, %error, "Deferred value rejected, keeping placeholder");
                Settled::Failed
            }
        }
    }
}

/// Await a deferred value without letting its failure escape
pub async fn settle<T, E, F>(label: &str, future: F) -> Settled<T>
where
    E: Display,
    F: Future<Output = Result<T, E>>,
{
    Settled::from_result(label, future.await)
}
