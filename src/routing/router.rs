//! Route lookup and redirect resolution.
//!
//! # Responsibilities
//! - Look up the route chain for a path or a route name
//! - Follow redirects up to the configured hop cap
//! - Return matched chain or explicit no-match
//!
//! # Design Decisions
//! - Depth-first over each level in registration order, first match wins
//! - O(n) scan (acceptable for typical route counts)
//! - Explicit NoMatch rather than silent default

use serde::{Deserialize, Serialize};

use crate::config::schema::ComponentRef;
use crate::routing::error::ResolveError;
use crate::routing::matcher::Params;
use crate::routing::path;
use crate::routing::table::{RouteDefinition, RouteTable};

/// A navigation request from the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationRequest {
    /// Navigate by path; normalized before resolution.
    Path(String),
    /// Navigate by route name.
    Name(String),
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<'a> {
    chain: Vec<&'a RouteDefinition>,
    canonical_path: String,
    redirected_from: Vec<String>,
    params: Params,
}

impl<'a> Resolution<'a> {
    /// Matched routes from outermost ancestor to leaf.
    pub fn chain(&self) -> &[&'a RouteDefinition] {
        &self.chain
    }

    pub fn leaf(&self) -> &'a RouteDefinition {
        // A resolution is only built from a non-empty chain.
        self.chain[self.chain.len() - 1]
    }

    /// Display name of the leaf route.
    pub fn name(&self) -> Option<&'a str> {
        self.leaf().name()
    }

    /// Path to show in the address bar, after redirects.
    pub fn canonical_path(&self) -> &str {
        &self.canonical_path
    }

    /// Paths that redirected, in the order they were followed.
    pub fn redirected_from(&self) -> &[String] {
        &self.redirected_from
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Components to render, layout shells first.
    pub fn components(&self) -> Vec<&'a ComponentRef> {
        self.chain.iter().filter_map(|route| route.component()).collect()
    }

    /// Names along the chain, for breadcrumbs.
    pub fn breadcrumbs(&self) -> Vec<&'a str> {
        self.chain.iter().filter_map(|route| route.name()).collect()
    }
}

impl RouteTable {
    /// Resolve a normalized path.
    pub fn resolve(&self, path: &str) -> Result<Resolution<'_>, ResolveError> {
        let result = self.follow(path, Vec::new());
        match &result {
            Ok(resolution) => tracing::debug!(
                path,
                canonical_path = %resolution.canonical_path,
                hops = resolution.redirected_from.len(),
                depth = resolution.chain.len(),
                "Route resolved"
            ),
            Err(ResolveError::RedirectCycle { max, .. }) => {
                tracing::error!(path, max, "Redirect chain exceeded hop cap")
            }
            Err(e) => tracing::debug!(path, error = %e, "Route not resolved"),
        }
        result
    }

    /// Resolve the route registered under `name`.
    pub fn resolve_name(&self, name: &str) -> Result<Resolution<'_>, ResolveError> {
        let path = self
            .path_for(name)
            .ok_or_else(|| ResolveError::UnknownName {
                name: name.to_string(),
            })?;
        self.resolve(path)
    }

    /// Resolve a path or name request.
    pub fn navigate(&self, request: &NavigationRequest) -> Result<Resolution<'_>, ResolveError> {
        match request {
            NavigationRequest::Path(raw) => self.resolve(&path::normalize(raw)),
            NavigationRequest::Name(name) => self.resolve_name(name),
        }
    }

    /// Resolve `path`, continuing a redirect chain that already visited
    /// `redirected_from`.
    pub(crate) fn follow(
        &self,
        path: &str,
        mut redirected_from: Vec<String>,
    ) -> Result<Resolution<'_>, ResolveError> {
        let mut current = path.to_string();

        loop {
            let mut chain = Vec::new();
            let params = self
                .match_level(&self.routes, &current, &mut chain)
                .ok_or_else(|| ResolveError::NoMatch {
                    path: current.clone(),
                })?;

            let leaf = chain[chain.len() - 1];
            let Some(target) = leaf.redirect_target() else {
                return Ok(Resolution {
                    chain,
                    canonical_path: current,
                    redirected_from,
                    params,
                });
            };

            if redirected_from.len() >= self.max_redirects {
                let origin = redirected_from.first().cloned().unwrap_or(current);
                return Err(ResolveError::RedirectCycle {
                    path: origin,
                    max: self.max_redirects,
                });
            }

            tracing::trace!(from = %current, to = %target, "Following redirect");
            redirected_from.push(std::mem::replace(&mut current, target.to_string()));
        }
    }

    fn match_level<'a>(
        &self,
        routes: &'a [RouteDefinition],
        path: &str,
        chain: &mut Vec<&'a RouteDefinition>,
    ) -> Option<Params> {
        for route in routes {
            chain.push(route);
            if let Some(params) = self.matcher.matches(route.full_path(), path) {
                return Some(params);
            }
            if let Some(params) = self.match_level(route.children(), path, chain) {
                return Some(params);
            }
            chain.pop();
        }
        None
    }
}
