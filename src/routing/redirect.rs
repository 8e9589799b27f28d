//! Redirect Component
//!
//! A declarative marker that, when rendered inside a pass wired with a
//! routing context, records an intended HTTP redirect as a side effect
//! of the render itself. The component renders nothing; the top-level
//! orchestrator inspects the routing context after the pass completes
//! and switches from "render a document" to "send a redirect".
//!
//! Outside a server render pass there is no routing context, and the
//! signal is simply inert - the component never fails the render.

use crate::dom::VNode;
use crate::render::{Component, RenderContext, RenderResult};
use async_trait::async_trait;

/// Declarative redirect signal.
#[derive(Debug, Clone)]
pub struct Redirect {
    /// Source path this redirect is declared for (documentation of the
    /// route table; matching is the switch's job)
    pub from: Option<String>,
    /// Target URL
    pub to: String,
    /// Redirect status; 301 when unset
    pub status: Option<u16>,
}

impl Redirect {
    /// Redirect to `to` with the default 301 status.
    pub fn to(to: impl Into<String>) -> Self {
        Self {
            from: None,
            to: to.into(),
            status: None,
        }
    }

    /// Set the source path (builder style).
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Set an explicit redirect status (builder style).
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

#[async_trait]
impl Component for Redirect {
    async fn render(&self, ctx: &RenderContext) -> RenderResult<VNode> {
        if let Some(routing) = &ctx.routing {
            routing.record(self.to.clone(), self.status);
        }
        Ok(VNode::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::{create_client, ClientOptions};
    use crate::routing::RoutingContext;
    use axum::http::StatusCode;
    use std::sync::Arc;

    fn ctx_with_routing() -> (RenderContext, RoutingContext) {
        let client = Arc::new(create_client(ClientOptions::default()));
        let routing = RoutingContext::new();
        let ctx = RenderContext::new("/old", client).with_routing(routing.clone());
        (ctx, routing)
    }

    #[tokio::test]
    async fn test_records_signal() {
        let (ctx, routing) = ctx_with_routing();
        let node = Redirect::to("/login").render(&ctx).await.unwrap();

        assert!(node.is_empty());
        let signal = routing.signal().unwrap();
        assert_eq!(signal.url, "/login");
        assert_eq!(signal.status, StatusCode::MOVED_PERMANENTLY);
    }

    #[tokio::test]
    async fn test_explicit_status() {
        let (ctx, routing) = ctx_with_routing();
        Redirect::to("/tmp").with_status(302).render(&ctx).await.unwrap();
        assert_eq!(routing.signal().unwrap().status, StatusCode::FOUND);
    }

    #[tokio::test]
    async fn test_inert_without_routing_context() {
        let client = Arc::new(create_client(ClientOptions::default()));
        let ctx = RenderContext::new("/old", client);

        // No routing context wired up: must not fail the render.
        let node = Redirect::to("/login").from("/old").render(&ctx).await.unwrap();
        assert!(node.is_empty());
    }
}
