//! GraphQL Data Client
//!
//! HTTP client for the GraphQL endpoint with a per-instance result
//! cache keyed by query identity.
//!
//! In server-rendering mode one client is created per request and
//! discarded with it, so cached results from one user's render never
//! leak into another's response. In the browser a single client lives
//! for the process lifetime, seeded from the serialized server state
//! via [`GraphqlClient::restore`].

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

/// Options for constructing a data client.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// GraphQL endpoint URL
    pub endpoint: String,
    /// Server-rendering mode: the client serves one render pass and
    /// answers repeated queries cache-first
    pub ssr_mode: bool,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:4000/graphql".to_string(),
            ssr_mode: false,
            request_timeout_ms: 5000,
        }
    }
}

/// Construct a new, independent data client.
///
/// Every call returns a fresh instance with its own empty cache; there
/// is no shared state between clients. The orchestrator relies on this
/// for per-request isolation.
pub fn create_client(options: ClientOptions) -> GraphqlClient {
    GraphqlClient::new(options)
}

/// GraphQL client with a result cache keyed by query identity.
pub struct GraphqlClient {
    http: Client,
    options: ClientOptions,
    cache: Mutex<HashMap<String, Value>>,
}

impl GraphqlClient {
    /// Create a client with the given options.
    pub fn new(options: ClientOptions) -> Self {
        let http = Client::builder()
            .timeout(std::time::Duration::from_millis(options.request_timeout_ms))
            .build()
            .unwrap_or_default();

        Self {
            http,
            options,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Get the client options.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Execute a query, returning the `data` payload.
    ///
    /// In ssr mode the cache is consulted first; outside ssr mode the
    /// network is preferred for freshness, though results still
    /// populate the cache for extraction.
    pub async fn query(&self, query: &str, variables: &Value) -> Result<Value, GraphqlError> {
        let key = cache_key(query, variables);

        if self.options.ssr_mode {
            let cache = self.cache.lock().expect("cache poisoned");
            if let Some(data) = cache.get(&key) {
                return Ok(data.clone());
            }
        }

        let data = self.fetch(query, variables).await?;
        self.cache
            .lock()
            .expect("cache poisoned")
            .insert(key, data.clone());
        Ok(data)
    }

    /// Extract the cache contents as the serializable initial state.
    pub fn extract(&self) -> Value {
        let cache = self.cache.lock().expect("cache poisoned");
        let mut map = Map::new();
        for (key, data) in cache.iter() {
            map.insert(key.clone(), data.clone());
        }
        Value::Object(map)
    }

    /// Seed the cache from a previously extracted state.
    ///
    /// Lenient by design: payloads that are not objects are ignored
    /// rather than rejected - the serialized state is trusted to match
    /// what `extract` produced.
    pub fn restore(&self, state: &Value) {
        if let Value::Object(map) = state {
            let mut cache = self.cache.lock().expect("cache poisoned");
            for (key, data) in map {
                cache.insert(key.clone(), data.clone());
            }
        }
    }

    async fn fetch(&self, query: &str, variables: &Value) -> Result<Value, GraphqlError> {
        let body = GraphqlRequest {
            query: query.to_string(),
            variables: variables.clone(),
        };

        let response = self
            .http
            .post(&self.options.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GraphqlError::Timeout
                } else if e.is_connect() {
                    GraphqlError::Unavailable
                } else {
                    GraphqlError::Request(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GraphqlError::Api { status, message });
        }

        let result: GraphqlResponse = response.json().await.map_err(GraphqlError::Request)?;

        if let Some(errors) = result.errors {
            if !errors.is_empty() {
                return Err(GraphqlError::Execution {
                    message: errors
                        .iter()
                        .map(|e| e.message.as_str())
                        .collect::<Vec<_>>()
                        .join("; "),
                });
            }
        }

        result.data.ok_or(GraphqlError::EmptyResponse)
    }
}

/// Cache key: query text plus canonical variables JSON.
fn cache_key(query: &str, variables: &Value) -> String {
    // serde_json serializes object keys in sorted order, so identical
    // variables produce identical keys regardless of construction order.
    let vars = serde_json::to_string(variables).unwrap_or_else(|_| "null".to_string());
    format!("{}|{}", query, vars)
}

#[derive(Debug, Serialize)]
struct GraphqlRequest {
    query: String,
    variables: Value,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<Value>,
    errors: Option<Vec<GraphqlResponseError>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponseError {
    message: String,
}

/// Errors from the GraphQL data layer
#[derive(Error, Debug)]
pub enum GraphqlError {
    #[error("GraphQL endpoint unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("GraphQL endpoint returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("GraphQL execution failed: {message}")]
    Execution { message: String },

    #[error("Request timeout")]
    Timeout,

    #[error("GraphQL response carried no data")]
    EmptyResponse,
}
