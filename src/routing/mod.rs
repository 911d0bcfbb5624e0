//! Route lookup.
//!
//! # Responsibilities
//! - Hold (matcher, controller) bindings in registration order
//! - Select the first binding whose matcher accepts the request path
//! - Report an explicit no-match, surfaced to the client as 404
//!
//! # Design Decisions
//! - Immutable after construction, shared read-only between connections
//! - First registered binding wins, so specific routes go before prefixes

pub mod matcher;
pub mod router;

pub use matcher::{ExactPath, PathPrefix, RouteMatcher};
pub use router::Router;
