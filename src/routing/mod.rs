//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation request (path or route name)
//!     → router.rs (route lookup, redirect following)
//!     → matcher.rs (evaluate pattern against path)
//!     → Return: Resolution chain or ResolveError
//!
//! Table Compilation (at startup):
//!     RouteConfig[]
//!     → config::validation (shape checks)
//!     → table.rs (join full paths, check redirect chains, index names)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path
//! - Deterministic: same input always matches same route
//! - First match wins (registration order)

pub mod error;
pub mod matcher;
pub mod path;
pub mod router;
pub mod table;

pub use error::{InvalidTable, ResolveError, RouteError};
pub use matcher::{ExactMatcher, Matcher, ParamMatcher, Params};
pub use router::{NavigationRequest, Resolution};
pub use table::{RouteDefinition, RouteTable};
