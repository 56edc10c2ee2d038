//! Route table and resolver for the user-agent wallet dashboard.
//!
//! Maps navigation paths to chains of opaque page components: layout shell
//! first, page last. Tables are validated once at startup and read-only after.

pub mod config;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use routing::{NavigationRequest, Resolution, ResolveError, RouteTable};
