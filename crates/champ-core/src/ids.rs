//! Dotted identifiers and sentinel names.
//!
//! Every entity is addressed by a dotted path composed from its module
//! identifier and its local name, e.g. `repo.pkg.sub.AwesomeClass` for a
//! class or `repo.pkg.sub.AwesomeClass.name.get` for a getter.

/// Name given to a function declared without one (`export default function() {}`).
pub const ANONYMOUS_FUNCTION: &str = "__ANONYMOUS_FUNCTION__";

/// Prefix of the sentinel names given to un-aliased wildcard bindings.
pub const WILDCARD_PREFIX: &str = "WILDCARD_";

/// Exported name standing for a module's default export.
pub const DEFAULT_EXPORT: &str = "default";

/// Exported name standing for every export of a module.
pub const WILDCARD: &str = "*";

/// Join a parent identifier and a local name with a dot.
///
/// An empty parent yields the bare name.
#[must_use]
pub fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

/// Sentinel name of the `index`-th un-aliased wildcard binding (1-based).
#[must_use]
pub fn wildcard(index: usize) -> String {
    format!("{WILDCARD_PREFIX}{index}")
}

/// Convert a slash-separated module path (`repo/pkg/thing`) into a module id
/// (`repo.pkg.thing`).
#[must_use]
pub fn from_path(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_builds_dotted_paths() {
        assert_eq!(join("repo.module", "AwesomeClass"), "repo.module.AwesomeClass");
        assert_eq!(join("", "AwesomeClass"), "AwesomeClass");
    }

    #[test]
    fn wildcard_sentinels_are_numbered() {
        assert_eq!(wildcard(1), "WILDCARD_1");
        assert_eq!(wildcard(12), "WILDCARD_12");
    }

    #[test]
    fn path_conversion() {
        assert_eq!(from_path("repo/pkg/thing"), "repo.pkg.thing");
        assert_eq!(from_path("repo//pkg/"), "repo.pkg");
    }
}
