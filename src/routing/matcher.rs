//! Route matching logic.
//!
//! # Responsibilities
//! - Compare a route's compiled full path against a navigation path
//! - Report captured parameters on a hit
//!
//! # Design Decisions
//! - Matching is a replaceable strategy behind the [`Matcher`] trait
//! - Default is exact, case-sensitive string equality
//! - No regex to guarantee O(n) matching

use std::collections::BTreeMap;

/// Parameters captured from the path, keyed by segment name.
pub type Params = BTreeMap<String, String>;

/// Trait for matching a navigation path against a route pattern.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns the captured parameters if `path` matches `pattern`.
    fn matches(&self, pattern: &str, path: &str) -> Option<Params>;
}

/// Matches only when the path equals the pattern exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl Matcher for ExactMatcher {
    fn matches(&self, pattern: &str, path: &str) -> Option<Params> {
        (pattern == path).then(Params::new)
    }
}

/// Matches segment by segment; `:name` segments capture one non-empty segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParamMatcher;

impl Matcher for ParamMatcher {
    fn matches(&self, pattern: &str, path: &str) -> Option<Params> {
        let mut expected = pattern.split('/');
        let mut actual = path.split('/');
        let mut params = Params::new();

        loop {
            match (expected.next(), actual.next()) {
                (None, None) => return Some(params),
                (Some(p), Some(a)) => match p.strip_prefix(':') {
                    Some(key) if !key.is_empty() => {
                        if a.is_empty() {
                            return None;
                        }
                        params.insert(key.to_string(), a.to_string());
                    }
                    _ if p == a => {}
                    _ => return None,
                },
                _ => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matcher() {
        let matcher = ExactMatcher;

        assert_eq!(matcher.matches("/ViewVC", "/ViewVC"), Some(Params::new()));
        assert!(matcher.matches("/ViewVC", "/viewvc").is_none()); // Case sensitive
        assert!(matcher.matches("/ViewVC", "/ViewVC/extra").is_none());
        assert!(matcher.matches("/", "/dashboard").is_none());
    }

    #[test]
    fn test_param_matcher() {
        let matcher = ParamMatcher;

        let params = matcher.matches("/credentials/:id", "/credentials/vc-17").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("vc-17"));

        let params = matcher
            .matches("/dids/:method/:id", "/dids/trustbloc/abc")
            .unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params["method"], "trustbloc");

        assert!(matcher.matches("/credentials/:id", "/credentials").is_none());
        assert!(matcher.matches("/credentials/:id", "/credentials/a/b").is_none());
        assert!(matcher.matches("/credentials/:id", "/presentations/a").is_none());
    }

    #[test]
    fn test_param_matcher_without_params_is_exact() {
        let matcher = ParamMatcher;

        assert_eq!(matcher.matches("/", "/"), Some(Params::new()));
        assert_eq!(matcher.matches("/GetVC", "/GetVC"), Some(Params::new()));
        assert!(matcher.matches("/GetVC", "/StoreVC").is_none());
    }
}
