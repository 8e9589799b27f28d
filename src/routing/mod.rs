//! Routing
//!
//! Route matching and the per-request redirect side channel:
//!
//! - [`RoutingContext`]: mutable per-request record through which a
//!   nested [`Redirect`] communicates to the top-level handler
//! - [`RoutePattern`]: segment-based path matcher
//! - [`Switch`]: first-match route table component
//! - [`Redirect`]: declarative redirect signal component

pub mod context;
pub mod matcher;
pub mod redirect;
pub mod switch;

pub use context::{RedirectSignal, RoutingContext, DEFAULT_REDIRECT_STATUS};
pub use matcher::RoutePattern;
pub use redirect::Redirect;
pub use switch::{Route, Switch};
