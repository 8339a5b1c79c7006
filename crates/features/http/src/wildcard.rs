//! # Path Wildcards
//!
//! Request paths declare their parameters inline:
//!
//! ```text
//! /users/:id            single segment capture  -> ["id"]
//! /files/*path          catch-all capture       -> ["path"]
//! /orgs/:org/repos/:id  several captures        -> ["org", "id"]
//! ```
//!
//! A wildcard is a `/` followed by `:` or `*` and one or more `[A-Za-z0-9_]` characters.
//! The name stops at the first character outside that class. Matching is left to right and
//! non-overlapping, duplicates are kept, and anything malformed simply yields fewer names.

use regex::Regex;
use std::sync::LazyLock;

static WILDCARD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/([:*])([a-zA-Z0-9_]+)").expect("wildcard pattern is valid"));

/// How much of the path a wildcard captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WildcardKind {
    /// `:name`, exactly one path segment.
    Segment,
    /// `*name`, the remainder of the path.
    CatchAll,
}

/// A named path parameter found in a path template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Wildcard {
    pub name: String,
    pub kind: WildcardKind,
}

/// Returns the wildcards of `path` in order of occurrence.
#[must_use]
pub fn wildcards(path: &str) -> Vec<Wildcard> {
    WILDCARD_RE
        .captures_iter(path)
        .filter_map(|caps| {
            let kind = match caps.get(1)?.as_str() {
                "*" => WildcardKind::CatchAll,
                _ => WildcardKind::Segment,
            };
            Some(Wildcard { name: caps.get(2)?.as_str().to_owned(), kind })
        })
        .collect()
}

/// Returns the names of the wildcards that appear in `path`.
///
/// A path without parameters yields an empty vector.
#[must_use]
pub fn extract_wildcards(path: &str) -> Vec<String> {
    WILDCARD_RE
        .captures_iter(path)
        .filter_map(|caps| caps.get(2).map(|name| name.as_str().to_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_wildcards() {
        assert!(extract_wildcards("/users").is_empty());
        assert!(extract_wildcards("").is_empty());
    }

    #[test]
    fn single_and_catch_all() {
        assert_eq!(extract_wildcards("/users/:id"), vec!["id"]);
        assert_eq!(extract_wildcards("/files/*path"), vec!["path"]);
    }

    #[test]
    fn order_and_duplicates_are_preserved() {
        assert_eq!(extract_wildcards("/a/:x/b/:y"), vec!["x", "y"]);
        assert_eq!(extract_wildcards("/:a/:a"), vec!["a", "a"]);
    }

    #[test]
    fn name_stops_at_first_non_identifier_character() {
        assert_eq!(extract_wildcards("/users/:id.json"), vec!["id"]);
        assert_eq!(extract_wildcards("/users/:user-id"), vec!["user"]);
        assert_eq!(extract_wildcards("/v1/:api_key2/x"), vec!["api_key2"]);
    }

    #[test]
    fn delimiter_must_start_a_segment() {
        assert!(extract_wildcards("/users:id").is_empty());
        assert!(extract_wildcards("users/:").is_empty());
        assert!(extract_wildcards("/*").is_empty());
        assert_eq!(extract_wildcards("/a:b/:c"), vec!["c"]);
    }

    #[test]
    fn kinds_follow_the_delimiter() {
        let found = wildcards("/orgs/:org/files/*rest");
        assert_eq!(
            found,
            vec![
                Wildcard { name: "org".to_owned(), kind: WildcardKind::Segment },
                Wildcard { name: "rest".to_owned(), kind: WildcardKind::CatchAll },
            ]
        );
    }
}
