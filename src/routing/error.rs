//! Routing error types.
//!
//! Two families:
//! - [`RouteError`]: configuration-shape defects found while building a table.
//!   Developer-facing, fatal at startup.
//! - [`ResolveError`]: outcomes of a single navigation. `NoMatch` is expected
//!   at runtime and must be handled by the caller.

use thiserror::Error;

/// A defect in the shape of a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Two siblings compile to the same path.
    #[error("duplicate path `{path}` among sibling routes")]
    DuplicatePath { path: String },

    /// Following redirects from `from` never settles within `max` hops.
    #[error("redirect chain starting at `{from}` exceeds {max} hops")]
    RedirectCycle { from: String, max: usize },

    /// A redirect points at a path no route matches.
    #[error("redirect from `{from}` targets `{target}`, which matches no route")]
    DanglingRedirect { from: String, target: String },

    /// Route has nothing to render and nowhere to forward.
    #[error("route `{path}` has neither a component nor a redirect")]
    MissingComponent { path: String },

    /// Component and redirect on a route with no children to wrap.
    #[error("route `{path}` sets both component and redirect but has no children")]
    RedirectWithoutChildren { path: String },

    /// Path or redirect target is not in normalized form.
    #[error("invalid path `{path}`: {reason}")]
    InvalidPath { path: String, reason: &'static str },
}

/// A route table rejected during construction, carrying every defect found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid route table: {}", join_errors(.0))]
pub struct InvalidTable(pub Vec<RouteError>);

impl InvalidTable {
    /// The individual defects.
    pub fn errors(&self) -> &[RouteError] {
        &self.0
    }
}

/// Failure to resolve a navigation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No registered route matches the path.
    #[error("no route matches `{path}`")]
    NoMatch { path: String },

    /// No route carries the requested name.
    #[error("no route is named `{name}`")]
    UnknownName { name: String },

    /// Redirects kept forwarding past the hop cap.
    #[error("redirect chain starting at `{path}` exceeds {max} hops")]
    RedirectCycle { path: String, max: usize },
}

pub(crate) fn join_errors(errors: &[RouteError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
