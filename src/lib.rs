//! # Vellum
//!
//! Server-side rendering scaffold - an HTTP server renders an async
//! component tree to markup per request, waits for all GraphQL data
//! dependencies, detects in-render redirect signals, and serializes
//! application state into the HTML response for browser hydration.
//!
//! ## Features
//!
//! - **Wait-for-data rendering**: a render pass completes only after
//!   every nested data dependency has resolved, so fully-hydrated
//!   markup ships on the first response
//! - **Redirect side channel**: a deeply nested component can turn the
//!   response into an HTTP redirect without exceptions or return-value
//!   threading
//! - **Per-request isolation**: each request gets its own data client
//!   and routing context; nothing leaks between concurrent renders
//! - **Safe state embedding**: the serialized client cache is escaped
//!   so no state value can break out of its inline script block
//!
//! ## Modules
//!
//! - [`dom`]: markup tree and HTML serialization
//! - [`render`]: component trait and render pass driver
//! - [`routing`]: route switch, matcher, and the redirect signal
//! - [`graphql`]: caching GraphQL data client
//! - [`ssr`]: render orchestrator, document template, HTTP server
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use std::sync::Arc;
//! use vellum::config::Config;
//! use vellum::dom::VNode;
//! use vellum::render::{Component, RenderContext, RenderResult};
//! use vellum::routing::{Redirect, Switch};
//! use vellum::ssr::{serve, AppState};
//!
//! struct HomePage;
//!
//! #[async_trait]
//! impl Component for HomePage {
//!     async fn render(&self, _ctx: &RenderContext) -> RenderResult<VNode> {
//!         Ok(VNode::element("h1").child(VNode::text("Hello")))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = Switch::new()
//!         .route("/", Arc::new(HomePage))
//!         .route("/old", Arc::new(Redirect::to("/")));
//!
//!     let state = AppState::new(Arc::new(app), Config::load_default());
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dom;
pub mod graphql;
pub mod render;
pub mod routing;
pub mod ssr;

// Re-export top-level types for convenience
pub use config::{Config, ConfigError, DeployMode};

pub use dom::{render_to_html, VNode};

pub use render::{render_to_markup, Component, RenderContext, RenderError, RenderResult};

pub use routing::{Redirect, RedirectSignal, RoutePattern, RoutingContext, Switch};

pub use graphql::{create_client, ClientOptions, GraphqlClient, GraphqlError};

pub use ssr::{build_router, serve, AppState, Document, SsrError, SsrResult, STATE_GLOBAL};
