//! GraphQL Data Layer
//!
//! A caching GraphQL client created fresh per server-rendered request.
//! The cache contents become the document's initial state, and the
//! browser client restores the same shape before hydration.

pub mod client;

pub use client::{create_client, ClientOptions, GraphqlClient, GraphqlError};
