//! Route Pattern Matching
//!
//! Segment-based path matching for the route switch:
//! - literal segments match exactly (case-sensitive)
//! - `:name` segments capture one segment as a param
//! - a trailing `*` matches any remainder, including nothing
//!
//! No regex; matching is a single pass over the segments.

use std::collections::HashMap;

/// A parsed route pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
    wildcard: bool,
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Param(String),
}

impl RoutePattern {
    /// Parse a pattern such as `/`, `/about`, `/users/:id`, or `/files/*`.
    pub fn parse(pattern: &str) -> Self {
        let mut segments = Vec::new();
        let mut wildcard = false;

        for seg in pattern.split('/').filter(|s| !s.is_empty()) {
            if seg == "*" {
                wildcard = true;
                break;
            }
            if let Some(name) = seg.strip_prefix(':') {
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Literal(seg.to_string()));
            }
        }

        Self { segments, wildcard }
    }

    /// Match a request path, capturing params. Returns `None` when the
    /// path does not match.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        // The router matches on the path only; query strings are not
        // part of route identity.
        let path = path.split('?').next().unwrap_or(path);
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        if !self.wildcard && parts.len() != self.segments.len() {
            return None;
        }
        if self.wildcard && parts.len() < self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (segment, part) in self.segments.iter().zip(parts.iter()) {
            match segment {
                Segment::Literal(lit) => {
                    if lit != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), (*part).to_string());
                }
            }
        }

        Some(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_pattern() {
        let pattern = RoutePattern::parse("/");
        assert!(pattern.matches("/").is_some());
        assert!(pattern.matches("/about").is_none());
    }

    #[test]
    fn test_literal_match() {
        let pattern = RoutePattern::parse("/about");
        assert!(pattern.matches("/about").is_some());
        assert!(pattern.matches("/about/team").is_none());
        assert!(pattern.matches("/contact").is_none());
    }

    #[test]
    fn test_param_capture() {
        let pattern = RoutePattern::parse("/users/:id");
        let params = pattern.matches("/users/42").unwrap();
        assert_eq!(params.get("id").map(|s| s.as_str()), Some("42"));
        assert!(pattern.matches("/users").is_none());
        assert!(pattern.matches("/users/42/posts").is_none());
    }

    #[test]
    fn test_trailing_wildcard() {
        let pattern = RoutePattern::parse("/files/*");
        assert!(pattern.matches("/files").is_some());
        assert!(pattern.matches("/files/a/b/c").is_some());
        assert!(pattern.matches("/other").is_none());
    }

    #[test]
    fn test_catch_all() {
        let pattern = RoutePattern::parse("/*");
        assert!(pattern.matches("/").is_some());
        assert!(pattern.matches("/anything/at/all").is_some());
    }

    #[test]
    fn test_query_string_ignored() {
        let pattern = RoutePattern::parse("/search");
        assert!(pattern.matches("/search?q=rust").is_some());
    }

    #[test]
    fn test_trailing_slash_equivalent() {
        let pattern = RoutePattern::parse("/about");
        assert!(pattern.matches("/about/").is_some());
    }
}
