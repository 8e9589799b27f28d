//! Routing Context
//!
//! The per-request record through which a nested [`Redirect`] signals
//! an intended HTTP redirect to the top-level handler without throwing
//! or threading return values through every intermediate component.
//!
//! One context is created per request and shared only within that
//! request's render pass. Reuse across concurrent requests would leak
//! redirect state between unrelated users.
//!
//! [`Redirect`]: crate::routing::Redirect

use axum::http::StatusCode;
use std::sync::{Arc, Mutex};

/// Redirect status used when a signal carries none
pub const DEFAULT_REDIRECT_STATUS: u16 = 301;

/// A cheaply clonable handle to one request's redirect state.
///
/// Clones share the same underlying record, so a signal recorded deep
/// inside the tree is visible to the orchestrator holding another
/// clone.
#[derive(Debug, Clone, Default)]
pub struct RoutingContext {
    inner: Arc<Mutex<RedirectState>>,
}

#[derive(Debug, Default)]
struct RedirectState {
    url: Option<String>,
    status: Option<u16>,
}

/// A redirect requested during a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RedirectSignal {
    /// Target URL for the `Location` header
    pub url: String,
    /// Redirect status; 301 when the signal carried none
    pub status: StatusCode,
}

impl RoutingContext {
    /// Create a fresh, empty routing context for one request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a redirect signal. First signal wins: once a redirect is
    /// recorded, later calls within the same pass are ignored.
    pub fn record(&self, url: impl Into<String>, status: Option<u16>) {
        let mut state = self.inner.lock().expect("routing context poisoned");
        if state.url.is_none() {
            state.url = Some(url.into());
            state.status = status;
        }
    }

    /// Snapshot the recorded signal, if any. Called by the orchestrator
    /// strictly after the render pass has completed.
    pub fn signal(&self) -> Option<RedirectSignal> {
        let state = self.inner.lock().expect("routing context poisoned");
        state.url.as_ref().map(|url| RedirectSignal {
            url: url.clone(),
            status: StatusCode::from_u16(state.status.unwrap_or(DEFAULT_REDIRECT_STATUS))
                .unwrap_or(StatusCode::MOVED_PERMANENTLY),
        })
    }

    /// Returns true if a redirect has been recorded.
    pub fn has_redirect(&self) -> bool {
        self.inner.lock().expect("routing context poisoned").url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context_has_no_signal() {
        let ctx = RoutingContext::new();
        assert!(ctx.signal().is_none());
        assert!(!ctx.has_redirect());
    }

    #[test]
    fn test_record_with_default_status() {
        let ctx = RoutingContext::new();
        ctx.record("/login", None);

        let signal = ctx.signal().unwrap();
        assert_eq!(signal.url, "/login");
        assert_eq!(signal.status, StatusCode::MOVED_PERMANENTLY);
    }

    #[test]
    fn test_record_with_explicit_status() {
        let ctx = RoutingContext::new();
        ctx.record("/tmp", Some(302));

        let signal = ctx.signal().unwrap();
        assert_eq!(signal.status, StatusCode::FOUND);
    }

    #[test]
    fn test_first_signal_wins() {
        let ctx = RoutingContext::new();
        ctx.record("/first", Some(302));
        ctx.record("/second", Some(307));

        let signal = ctx.signal().unwrap();
        assert_eq!(signal.url, "/first");
        assert_eq!(signal.status, StatusCode::FOUND);
    }

    #[test]
    fn test_clones_share_state() {
        let ctx = RoutingContext::new();
        let deep = ctx.clone();
        deep.record("/elsewhere", None);
        assert!(ctx.has_redirect());
    }

    #[test]
    fn test_contexts_are_independent() {
        let a = RoutingContext::new();
        let b = RoutingContext::new();
        a.record("/login", None);
        assert!(b.signal().is_none());
    }
}
