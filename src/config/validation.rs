//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Paths and redirect targets are in normalized form
//! - Sibling paths are unique
//! - Every route renders something or forwards somewhere
//! - Redirect chains terminate on a real route (delegated to the table build)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<RouteError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use crate::config::schema::{RouteConfig, RouterConfig};
use crate::routing::error::RouteError;
use crate::routing::path;
use crate::routing::RouteTable;

/// Validate a configuration completely, including redirect chains.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<RouteError>> {
    RouteTable::new(config).map(|_| ()).map_err(|e| e.0)
}

/// Shape checks that need no compiled table.
pub(crate) fn validate_routes(routes: &[RouteConfig]) -> Vec<RouteError> {
    let mut errors = Vec::new();
    check_level(routes, "", &mut errors);
    errors
}

fn check_level(routes: &[RouteConfig], parent: &str, errors: &mut Vec<RouteError>) {
    let mut siblings = HashSet::new();

    for route in routes {
        if let Err(reason) = path::check(&route.path) {
            errors.push(RouteError::InvalidPath {
                path: route.path.clone(),
                reason,
            });
        }

        let full_path = path::join(parent, &route.path);
        if !siblings.insert(full_path.clone()) {
            errors.push(RouteError::DuplicatePath {
                path: full_path.clone(),
            });
        }

        if let Some(target) = &route.redirect {
            if let Err(reason) = path::check(target) {
                errors.push(RouteError::InvalidPath {
                    path: target.clone(),
                    reason,
                });
            }
        }

        match (&route.component, &route.redirect) {
            (None, None) => errors.push(RouteError::MissingComponent {
                path: full_path.clone(),
            }),
            (Some(_), Some(_)) if route.children.is_empty() => {
                errors.push(RouteError::RedirectWithoutChildren {
                    path: full_path.clone(),
                })
            }
            _ => {}
        }

        check_level(&route.children, &full_path, errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_table_is_valid() {
        assert_eq!(validate_config(&RouterConfig::user_agent()), Ok(()));
    }

    #[test]
    fn test_duplicate_sibling_path() {
        let routes = vec![
            RouteConfig::new("/GetVC", "GetCredentials"),
            RouteConfig::new("/GetVC", "GetCredentialsV2"),
        ];

        assert_eq!(
            validate_routes(&routes),
            vec![RouteError::DuplicatePath { path: "/GetVC".into() }]
        );
    }

    #[test]
    fn test_relative_and_absolute_siblings_collide() {
        let routes = vec![RouteConfig::new("/", "Layout").with_children(vec![
            RouteConfig::new("ViewVC", "TableList"),
            RouteConfig::new("/ViewVC", "TableListV2"),
        ])];

        assert_eq!(
            validate_routes(&routes),
            vec![RouteError::DuplicatePath { path: "/ViewVC".into() }]
        );
    }

    #[test]
    fn test_same_path_at_different_levels_is_allowed() {
        let routes = vec![
            RouteConfig::new("/", "Layout")
                .with_children(vec![RouteConfig::new("StoreVC", "StoreInLayout")]),
            RouteConfig::new("/StoreVC", "StoreCredentials"),
        ];

        assert!(validate_routes(&routes).is_empty());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut empty = RouteConfig::new("/empty", "x");
        empty.component = None;

        let routes = vec![
            empty,
            RouteConfig::new("/leaf", "Leaf").redirect_to("/other"),
            RouteConfig::new("/bad/", "Bad"),
            RouteConfig::redirect("/go", "/where?x=1"),
        ];

        let errors = validate_routes(&routes);
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&RouteError::MissingComponent { path: "/empty".into() }));
        assert!(errors.contains(&RouteError::RedirectWithoutChildren { path: "/leaf".into() }));
        assert!(errors
            .iter()
            .any(|e| matches!(e, RouteError::InvalidPath { path, .. } if path == "/bad/")));
        assert!(errors
            .iter()
            .any(|e| matches!(e, RouteError::InvalidPath { path, .. } if path == "/where?x=1")));
    }

    #[test]
    fn test_nested_errors_report_full_path() {
        let routes = vec![RouteConfig::new("/", "Layout")
            .redirect_to("a")
            .with_children(vec![
                RouteConfig::new("a", "A"),
                RouteConfig::new("a", "B"),
            ])];

        assert_eq!(
            validate_routes(&routes),
            vec![RouteError::DuplicatePath { path: "/a".into() }]
        );
    }
}
