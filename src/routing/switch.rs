//! Route Switch
//!
//! An ordered route table rendered as a component: the first pattern
//! matching the request path wins, and its component is rendered with
//! the captured params. When nothing matches, the fallback component
//! (if any) is rendered normally - unmatched paths are the router's
//! concern, never the orchestrator's.

use crate::dom::VNode;
use crate::render::{Component, RenderContext, RenderResult};
use crate::routing::matcher::RoutePattern;
use async_trait::async_trait;
use std::sync::Arc;

/// One entry in the route table.
pub struct Route {
    pattern: RoutePattern,
    component: Arc<dyn Component>,
}

impl Route {
    /// Bind a path pattern to a component.
    pub fn new(pattern: &str, component: Arc<dyn Component>) -> Self {
        Self {
            pattern: RoutePattern::parse(pattern),
            component,
        }
    }
}

/// First-match route switch.
#[derive(Default)]
pub struct Switch {
    routes: Vec<Route>,
    fallback: Option<Arc<dyn Component>>,
}

impl Switch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route (builder style). Order matters: first match wins.
    pub fn route(mut self, pattern: &str, component: Arc<dyn Component>) -> Self {
        self.routes.push(Route::new(pattern, component));
        self
    }

    /// Component rendered when no route matches.
    pub fn fallback(mut self, component: Arc<dyn Component>) -> Self {
        self.fallback = Some(component);
        self
    }
}

#[async_trait]
impl Component for Switch {
    async fn render(&self, ctx: &RenderContext) -> RenderResult<VNode> {
        for route in &self.routes {
            if let Some(params) = route.pattern.matches(&ctx.path) {
                let child_ctx = ctx.with_params(params);
                return route.component.render(&child_ctx).await;
            }
        }

        match &self.fallback {
            Some(fallback) => fallback.render(ctx).await,
            None => Ok(VNode::empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::{create_client, ClientOptions};
    use crate::render::RenderError;

    struct Page(&'static str);

    #[async_trait]
    impl Component for Page {
        async fn render(&self, _ctx: &RenderContext) -> RenderResult<VNode> {
            Ok(VNode::element("main").child(VNode::text(self.0)))
        }
    }

    struct ParamEcho;

    #[async_trait]
    impl Component for ParamEcho {
        async fn render(&self, ctx: &RenderContext) -> RenderResult<VNode> {
            let id = ctx
                .param("id")
                .ok_or_else(|| RenderError::Component("missing :id param".into()))?;
            Ok(VNode::element("span").child(VNode::text(id)))
        }
    }

    fn ctx(path: &str) -> RenderContext {
        let client = Arc::new(create_client(ClientOptions::default()));
        RenderContext::new(path, client)
    }

    fn demo_switch() -> Switch {
        Switch::new()
            .route("/", Arc::new(Page("home")))
            .route("/about", Arc::new(Page("about")))
            .route("/users/:id", Arc::new(ParamEcho))
            .fallback(Arc::new(Page("not found")))
    }

    #[tokio::test]
    async fn test_first_match_wins() {
        let node = demo_switch().render(&ctx("/about")).await.unwrap();
        assert_eq!(crate::dom::render_to_html(&node), "<main>about</main>");
    }

    #[tokio::test]
    async fn test_params_passed_down() {
        let node = demo_switch().render(&ctx("/users/7")).await.unwrap();
        assert_eq!(crate::dom::render_to_html(&node), "<span>7</span>");
    }

    #[tokio::test]
    async fn test_fallback_on_unmatched_path() {
        let node = demo_switch().render(&ctx("/nope")).await.unwrap();
        assert_eq!(crate::dom::render_to_html(&node), "<main>not found</main>");
    }

    #[tokio::test]
    async fn test_no_fallback_renders_empty() {
        let switch = Switch::new().route("/", Arc::new(Page("home")));
        let node = switch.render(&ctx("/nope")).await.unwrap();
        assert!(node.is_empty());
    }
}
