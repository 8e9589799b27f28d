//! Component Model and Render Pass
//!
//! A render pass is one execution of the component tree to produce
//! markup, including waiting for every nested data dependency. The
//! pass is driven to completion before any caller looks at the result,
//! so by the time markup exists, all data fetches have resolved and
//! every redirect signal has had its chance to fire.
//!
//! Components receive a [`RenderContext`] carrying the request path,
//! any route params captured by the switch, the request-scoped GraphQL
//! client, and the request-scoped routing context. Contexts are cloned
//! for child components; the client and routing handles are shared,
//! per-request state.

use crate::dom::{render_to_html, VNode};
use crate::graphql::{GraphqlClient, GraphqlError};
use crate::routing::RoutingContext;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// A renderable unit of the application tree.
///
/// Rendering is async so a component can await GraphQL queries; the
/// render pass does not complete until every nested await has resolved.
#[async_trait]
pub trait Component: Send + Sync {
    async fn render(&self, ctx: &RenderContext) -> RenderResult<VNode>;
}

/// Per-request context threaded through one render pass.
#[derive(Clone)]
pub struct RenderContext {
    /// Requested URL path (the router matches against this)
    pub path: String,
    /// Params captured by the innermost matched route pattern
    pub params: HashMap<String, String>,
    /// Request-scoped data client, shared by every component in the pass
    pub client: Arc<GraphqlClient>,
    /// Request-scoped routing context; absent outside a server render
    /// pass, in which case redirect signals are inert
    pub routing: Option<RoutingContext>,
}

impl RenderContext {
    /// Create a context for one render pass.
    pub fn new(path: impl Into<String>, client: Arc<GraphqlClient>) -> Self {
        Self {
            path: path.into(),
            params: HashMap::new(),
            client,
            routing: None,
        }
    }

    /// Attach a routing context (builder style).
    pub fn with_routing(mut self, routing: RoutingContext) -> Self {
        self.routing = Some(routing);
        self
    }

    /// Derive a child context with route params captured by a matcher.
    pub fn with_params(&self, params: HashMap<String, String>) -> Self {
        let mut ctx = self.clone();
        ctx.params = params;
        ctx
    }

    /// Look up a captured route param.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(|s| s.as_str())
    }
}

/// Drive one full render pass and serialize the resulting tree.
///
/// Awaited to completion: all nested data dependencies resolve before
/// the markup string is produced.
pub async fn render_to_markup(root: &dyn Component, ctx: &RenderContext) -> RenderResult<String> {
    let tree = root.render(ctx).await?;
    Ok(render_to_html(&tree))
}

/// Errors raised during a render pass
#[derive(Error, Debug)]
pub enum RenderError {
    /// A data dependency failed during the pass
    #[error("GraphQL error: {0}")]
    Graphql(#[from] GraphqlError),

    /// A component failed while generating markup
    #[error("Component error: {0}")]
    Component(String),
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::{create_client, ClientOptions};

    struct Static(&'static str);

    #[async_trait]
    impl Component for Static {
        async fn render(&self, _ctx: &RenderContext) -> RenderResult<VNode> {
            Ok(VNode::element("p").child(VNode::text(self.0)))
        }
    }

    struct Failing;

    #[async_trait]
    impl Component for Failing {
        async fn render(&self, _ctx: &RenderContext) -> RenderResult<VNode> {
            Err(RenderError::Component("boom".into()))
        }
    }

    fn test_ctx() -> RenderContext {
        let client = Arc::new(create_client(ClientOptions::default()));
        RenderContext::new("/", client)
    }

    #[tokio::test]
    async fn test_render_to_markup() {
        let markup = render_to_markup(&Static("hello"), &test_ctx()).await.unwrap();
        assert_eq!(markup, "<p>hello</p>");
    }

    #[tokio::test]
    async fn test_component_error_propagates() {
        let err = render_to_markup(&Failing, &test_ctx()).await.unwrap_err();
        assert!(matches!(err, RenderError::Component(_)));
    }

    #[test]
    fn test_with_params_preserves_path() {
        let ctx = test_ctx();
        let mut params = HashMap::new();
        params.insert("id".to_string(), "42".to_string());
        let child = ctx.with_params(params);
        assert_eq!(child.path, "/");
        assert_eq!(child.param("id"), Some("42"));
        assert_eq!(ctx.param("id"), None);
    }
}
