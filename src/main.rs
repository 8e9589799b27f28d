//! Vellum Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Loaded from `config.toml` (or the user/system config dirs), with
//! environment overrides:
//! - `VELLUM_HOST`: Host to bind to (default: 0.0.0.0)
//! - `VELLUM_PORT`: Port to listen on (default: 3000)
//! - `VELLUM_ENV`: development | production (default: development)
//! - `VELLUM_GRAPHQL_ENDPOINT`: GraphQL endpoint for the data client
//! - `VELLUM_BUILD_DIR`: bundler output served statically in production
//! - `RUST_LOG`: Log level override (default: vellum=info)

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vellum::config::Config;
use vellum::dom::VNode;
use vellum::render::{Component, RenderContext, RenderResult};
use vellum::routing::{Redirect, Switch};
use vellum::ssr::{serve, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();

    init_tracing(&config);

    tracing::info!("Vellum v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Deployment mode: {:?}", config.server.mode);
    tracing::info!("GraphQL endpoint: {}", config.graphql.endpoint);

    let state = AppState::new(demo_app(), config);
    serve(state).await?;

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "vellum={},tower_http=debug",
            config.logging.level
        ))
    });

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// The demo route table rendered by the server.
fn demo_app() -> Arc<dyn Component> {
    Arc::new(
        Switch::new()
            .route("/", Arc::new(HomePage))
            .route("/about", Arc::new(AboutPage))
            .route("/old-home", Arc::new(Redirect::to("/").from("/old-home")))
            .fallback(Arc::new(NotFoundPage)),
    )
}

/// Landing page with a GraphQL data dependency. The render pass waits
/// for the query before the document is serialized, so the post list
/// ships fully rendered.
struct HomePage;

const POSTS_QUERY: &str = "{ allPosts(count: 5) { id title } }";

#[async_trait]
impl Component for HomePage {
    async fn render(&self, ctx: &RenderContext) -> RenderResult<VNode> {
        let data = ctx.client.query(POSTS_QUERY, &Value::Null).await?;

        let mut list = VNode::element("ul").attr("class", "posts");
        if let Some(posts) = data.get("allPosts").and_then(|p| p.as_array()) {
            for post in posts {
                let title = post.get("title").and_then(|t| t.as_str()).unwrap_or("(untitled)");
                list = list.child(VNode::element("li").child(VNode::text(title)));
            }
        }

        Ok(VNode::element("main")
            .attr("class", "home")
            .child(VNode::element("h1").child(VNode::text("Latest posts")))
            .child(list))
    }
}

struct AboutPage;

#[async_trait]
impl Component for AboutPage {
    async fn render(&self, _ctx: &RenderContext) -> RenderResult<VNode> {
        Ok(VNode::element("main")
            .child(VNode::element("h1").child(VNode::text("About")))
            .child(VNode::element("p").child(VNode::text(
                "Server-rendered, hydrated in the browser.",
            ))))
    }
}

struct NotFoundPage;

#[async_trait]
impl Component for NotFoundPage {
    async fn render(&self, ctx: &RenderContext) -> RenderResult<VNode> {
        Ok(VNode::element("main")
            .child(VNode::element("h1").child(VNode::text("Page not found")))
            .child(VNode::element("p").child(VNode::text(format!(
                "Nothing matches {}",
                ctx.path
            )))))
    }
}
