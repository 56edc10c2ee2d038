//! Compiled, immutable route table.
//!
//! # Responsibilities
//! - Validate configuration and refuse malformed tables
//! - Compile relative paths and redirect targets to full paths
//! - Build the name → path index
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Every defect is reported at construction, never at first navigation
//! - Same full path at different levels is legal; the later route is
//!   shadowed and a warning is logged

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::config::schema::{ComponentRef, RouteConfig, RouterConfig};
use crate::config::validation::validate_routes;
use crate::routing::error::{InvalidTable, ResolveError, RouteError};
use crate::routing::matcher::{ExactMatcher, Matcher};
use crate::routing::path;

/// A route after compilation.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDefinition {
    path: String,
    full_path: String,
    name: Option<String>,
    component: Option<ComponentRef>,
    redirect: Option<String>,
    redirect_target: Option<String>,
    children: Vec<RouteDefinition>,
}

impl RouteDefinition {
    fn compile(config: &RouteConfig, parent: &str) -> Self {
        let full_path = path::join(parent, &config.path);
        // Relative redirects point at this route's own children.
        let redirect_target = config
            .redirect
            .as_deref()
            .map(|target| path::join(&full_path, target));
        let children = config
            .children
            .iter()
            .map(|child| Self::compile(child, &full_path))
            .collect();

        Self {
            path: config.path.clone(),
            full_path,
            name: config.name.clone(),
            component: config.component.clone(),
            redirect: config.redirect.clone(),
            redirect_target,
            children,
        }
    }

    /// Path as configured.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path joined onto every ancestor.
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn component(&self) -> Option<&ComponentRef> {
        self.component.as_ref()
    }

    /// Redirect as configured.
    pub fn redirect(&self) -> Option<&str> {
        self.redirect.as_deref()
    }

    /// Redirect compiled to a full path.
    pub fn redirect_target(&self) -> Option<&str> {
        self.redirect_target.as_deref()
    }

    pub fn children(&self) -> &[RouteDefinition] {
        &self.children
    }

    /// A route whose component wraps nested routes.
    pub fn is_layout(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Validated route table.
#[derive(Debug)]
pub struct RouteTable {
    pub(crate) routes: Vec<RouteDefinition>,
    names: HashMap<String, String>,
    pub(crate) matcher: Box<dyn Matcher>,
    pub(crate) max_redirects: usize,
}

impl RouteTable {
    /// Build a table using exact path matching.
    pub fn new(config: &RouterConfig) -> Result<Self, InvalidTable> {
        Self::with_matcher(config, ExactMatcher)
    }

    /// Build a table with a custom matching strategy.
    pub fn with_matcher<M>(config: &RouterConfig, matcher: M) -> Result<Self, InvalidTable>
    where
        M: Matcher + 'static,
    {
        let errors = validate_routes(&config.routes);
        if !errors.is_empty() {
            return Err(InvalidTable(errors));
        }

        let mut table = Self {
            routes: config
                .routes
                .iter()
                .map(|route| RouteDefinition::compile(route, ""))
                .collect(),
            names: HashMap::new(),
            matcher: Box::new(matcher),
            max_redirects: config.resolver.max_redirects,
        };

        let errors = table.check_redirects();
        if !errors.is_empty() {
            return Err(InvalidTable(errors));
        }

        table.names = table.index();

        tracing::info!(
            routes = table.len(),
            names = table.names.len(),
            max_redirects = table.max_redirects,
            "Route table compiled"
        );

        Ok(table)
    }

    /// Compile without validation, to exercise the resolver's own guards.
    #[cfg(test)]
    pub(crate) fn compile_unchecked(config: &RouterConfig) -> Self {
        Self {
            routes: config
                .routes
                .iter()
                .map(|route| RouteDefinition::compile(route, ""))
                .collect(),
            names: HashMap::new(),
            matcher: Box::new(ExactMatcher),
            max_redirects: config.resolver.max_redirects,
        }
    }

    /// Top-level routes in registration order.
    pub fn routes(&self) -> &[RouteDefinition] {
        &self.routes
    }

    /// Every route with its nesting depth, depth-first in registration order.
    pub fn flatten(&self) -> Vec<(usize, &RouteDefinition)> {
        fn walk<'a>(
            routes: &'a [RouteDefinition],
            depth: usize,
            out: &mut Vec<(usize, &'a RouteDefinition)>,
        ) {
            for route in routes {
                out.push((depth, route));
                walk(&route.children, depth + 1, out);
            }
        }

        let mut out = Vec::new();
        walk(&self.routes, 0, &mut out);
        out
    }

    /// Total number of routes at every level.
    pub fn len(&self) -> usize {
        self.flatten().len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    /// Full path of the first route registered under `name`.
    pub fn path_for(&self, name: &str) -> Option<&str> {
        self.names.get(name).map(String::as_str)
    }

    /// Every redirect must settle on a rendering route within the hop cap.
    fn check_redirects(&self) -> Vec<RouteError> {
        let mut errors = Vec::new();

        for (_, route) in self.flatten() {
            let Some(target) = route.redirect_target() else {
                continue;
            };

            match self.follow(target, vec![route.full_path().to_string()]) {
                Ok(_) => {}
                Err(ResolveError::NoMatch { path }) => errors.push(RouteError::DanglingRedirect {
                    from: route.full_path().to_string(),
                    target: path,
                }),
                Err(ResolveError::RedirectCycle { max, .. }) => {
                    errors.push(RouteError::RedirectCycle {
                        from: route.full_path().to_string(),
                        max,
                    })
                }
                Err(ResolveError::UnknownName { .. }) => {}
            }
        }

        errors
    }

    fn index(&self) -> HashMap<String, String> {
        let mut names = HashMap::new();
        let mut seen: HashMap<&str, &RouteDefinition> = HashMap::new();

        for (_, route) in self.flatten() {
            if let Some(first) = seen.get(route.full_path()) {
                tracing::warn!(
                    path = %route.full_path(),
                    shadowed_by = ?first.name(),
                    "Route is unreachable, an earlier route has the same path"
                );
            } else {
                seen.insert(route.full_path(), route);
            }

            if let Some(name) = route.name() {
                match names.entry(name.to_string()) {
                    Entry::Vacant(slot) => {
                        slot.insert(route.full_path().to_string());
                    }
                    Entry::Occupied(existing) => {
                        tracing::debug!(
                            name,
                            kept = %existing.get(),
                            ignored = %route.full_path(),
                            "Duplicate route name, keeping first registration"
                        );
                    }
                }
            }
        }

        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiles_full_paths() {
        let table = RouteTable::new(&RouterConfig::user_agent()).unwrap();

        let paths: Vec<&str> = table.flatten().iter().map(|(_, r)| r.full_path()).collect();
        assert_eq!(
            paths,
            vec![
                "/",
                "/dashboard",
                "/ViewVC",
                "/RegisterWallet",
                "/MyVC",
                "/Interop",
                "/DIDManagement",
                "/StoreVC",
                "/GetVC",
            ]
        );
        assert_eq!(table.len(), 9);
        assert_eq!(table.routes().len(), 3);
        assert_eq!(table.routes()[0].redirect_target(), Some("/dashboard"));
        assert!(table.routes()[0].is_layout());
    }

    #[test]
    fn test_depths() {
        let table = RouteTable::new(&RouterConfig::user_agent()).unwrap();
        let depths: Vec<usize> = table.flatten().iter().map(|(d, _)| *d).collect();
        assert_eq!(depths, vec![0, 1, 1, 1, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn test_name_index() {
        let table = RouteTable::new(&RouterConfig::user_agent()).unwrap();

        assert_eq!(table.path_for("dashboard"), Some("/"));
        assert_eq!(table.path_for("Register Wallet"), Some("/RegisterWallet"));
        assert_eq!(table.path_for("DID Management"), Some("/DIDManagement"));
        assert_eq!(table.path_for("Nope"), None);
    }

    #[test]
    fn test_duplicate_name_keeps_first() {
        let config = RouterConfig {
            routes: vec![
                RouteConfig::new("/a", "A").named("Same"),
                RouteConfig::new("/b", "B").named("Same"),
            ],
            ..RouterConfig::default()
        };

        let table = RouteTable::new(&config).unwrap();
        assert_eq!(table.path_for("Same"), Some("/a"));
    }

    #[test]
    fn test_nested_redirect_targets_own_child() {
        let config = RouterConfig {
            routes: vec![RouteConfig::new("/wallet", "WalletLayout")
                .redirect_to("keys")
                .with_children(vec![RouteConfig::new("keys", "Keys")])],
            ..RouterConfig::default()
        };

        let table = RouteTable::new(&config).unwrap();
        assert_eq!(table.routes()[0].redirect_target(), Some("/wallet/keys"));
    }

    #[test]
    fn test_rejects_redirect_cycle() {
        let config = RouterConfig {
            routes: vec![
                RouteConfig::redirect("/a", "/b"),
                RouteConfig::redirect("/b", "/a"),
            ],
            ..RouterConfig::default()
        };

        let err = RouteTable::new(&config).unwrap_err();
        assert_eq!(
            err.errors(),
            &[
                RouteError::RedirectCycle { from: "/a".into(), max: 10 },
                RouteError::RedirectCycle { from: "/b".into(), max: 10 },
            ]
        );
    }

    #[test]
    fn test_rejects_self_redirect() {
        let config = RouterConfig {
            routes: vec![RouteConfig::redirect("/loop", "/loop")],
            ..RouterConfig::default()
        };

        assert!(matches!(
            RouteTable::new(&config).unwrap_err().errors(),
            [RouteError::RedirectCycle { .. }]
        ));
    }

    #[test]
    fn test_rejects_dangling_redirect() {
        let config = RouterConfig {
            routes: vec![RouteConfig::redirect("/old", "/missing")],
            ..RouterConfig::default()
        };

        assert_eq!(
            RouteTable::new(&config).unwrap_err().errors(),
            &[RouteError::DanglingRedirect {
                from: "/old".into(),
                target: "/missing".into(),
            }]
        );
    }

    #[test]
    fn test_redirect_chain_within_cap() {
        let mut config = RouterConfig {
            routes: vec![
                RouteConfig::redirect("/one", "/two"),
                RouteConfig::redirect("/two", "/three"),
                RouteConfig::new("/three", "Three"),
            ],
            ..RouterConfig::default()
        };
        assert!(RouteTable::new(&config).is_ok());

        config.resolver.max_redirects = 1;
        assert_eq!(
            RouteTable::new(&config).unwrap_err().errors(),
            &[RouteError::RedirectCycle { from: "/one".into(), max: 1 }]
        );
    }

    #[test]
    fn test_empty_table() {
        let table = RouteTable::new(&RouterConfig::default()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
