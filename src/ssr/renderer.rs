//! Render Orchestrator
//!
//! The request path at the heart of the server: one incoming request
//! becomes one fresh data client and one fresh routing context, drives
//! a full render pass to completion, then decides between three
//! complete responses - an HTTP redirect (a nested component signaled
//! one during the pass), the rendered document, or a 500.
//!
//! Sequencing matters: the routing context is inspected strictly after
//! the render pass returns, so every nested data fetch - and with it
//! every possible redirect signal - has run before the response-type
//! decision is made.

use crate::graphql::{create_client, ClientOptions};
use crate::render::{render_to_markup, RenderContext};
use crate::routing::RoutingContext;
use crate::ssr::assets::select_assets;
use crate::ssr::document::Document;
use crate::ssr::error::SsrError;
use crate::ssr::state::AppState;
use axum::{
    extract::State,
    http::{header, Uri},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

/// Handle one render request.
///
/// Failures at any step convert to [`SsrError`], whose response is a
/// complete 500 with a generic body; the detail is logged at the
/// boundary. Exactly one response is produced per request.
pub async fn render_app(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, SsrError> {
    // Fresh per-request data client in server-rendering mode. Never
    // reused across requests: one user's cached results must not leak
    // into another's response.
    let client = Arc::new(create_client(ClientOptions {
        endpoint: state.config.graphql.endpoint.clone(),
        ssr_mode: true,
        request_timeout_ms: state.config.graphql.request_timeout_ms,
    }));

    // Fresh, empty routing context owned by this request's render pass.
    let routing = RoutingContext::new();

    let location = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/")
        .to_string();

    let ctx = RenderContext::new(location, Arc::clone(&client)).with_routing(routing.clone());

    // Drive the render pass to completion: all nested data
    // dependencies resolve before the markup is considered final.
    let app = render_to_markup(state.root.as_ref(), &ctx).await?;

    // Somewhere a Redirect was rendered: no document, respond with the
    // recorded status and target.
    if let Some(signal) = routing.signal() {
        tracing::debug!(url = %signal.url, status = %signal.status, "redirect signaled during render");
        return Ok((signal.status, [(header::LOCATION, signal.url)]).into_response());
    }

    let assets = select_assets(state.mode(), &state.config.assets).await?;

    let document = Document {
        app,
        title: state.config.site.title.clone(),
        favicon: state.config.site.favicon.clone(),
        stylesheets: assets.stylesheets,
        scripts: assets.scripts,
        initial_state: client.extract(),
    };

    // Prepend a doctype and ship it
    let html = format!("<!DOCTYPE html>\n{}", document.render());
    Ok(Html(html).into_response())
}
