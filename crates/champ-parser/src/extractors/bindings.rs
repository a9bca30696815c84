//! Binding lists of `import` and `export` clauses.
//!
//! A clause is a comma-separated mix of a bare identifier (`Foo`), a braced
//! list (`{ a, b as c }`), and a namespace (`*` or `* as ns`). An export may
//! also name a wrapped identifier, `connect(mapState)(Component)`, which
//! binds `Component`.

use std::sync::LazyLock;

use regex::Regex;

use super::helpers::split_top_level;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(concat!("^", ident!(), "$")).expect("valid regex"));

static NAMED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<name>",
        ident!(),
        r")(?:\s+as\s+(?P<alias>",
        ident!(),
        r"))?$"
    ))
    .expect("valid regex")
});

static NAMESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(r"^\*(?:\s*as\s+(?P<alias>", ident!(), r"))?$")).expect("valid regex")
});

static WRAPPED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "^",
        dotted!(),
        r"\s*\(",
        args!(),
        r"\)\s*\(\s*(?P<name>",
        ident!(),
        r")\s*\)$"
    ))
    .expect("valid regex")
});

/// One name bound by a clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// A bare identifier outside braces.
    Default(String),
    /// An entry of a braced list.
    Named { name: String, alias: Option<String> },
    /// `*`, optionally `* as alias`.
    Namespace(Option<String>),
}

/// Parse a whitespace-normalized clause. Returns `None` when any part of it
/// is not a recognized binding form.
#[must_use]
pub fn parse(expression: &str) -> Option<Vec<Binding>> {
    let mut bindings = Vec::new();

    for piece in split_top_level(expression, b',') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }

        if let Some(inner) = piece.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')) {
            for item in split_top_level(inner, b',') {
                let item = item.trim();
                if item.is_empty() {
                    continue;
                }
                let captures = NAMED.captures(item)?;
                bindings.push(Binding::Named {
                    name: captures["name"].to_string(),
                    alias: captures.name("alias").map(|alias| alias.as_str().to_string()),
                });
            }
        } else if let Some(captures) = NAMESPACE.captures(piece) {
            bindings.push(Binding::Namespace(
                captures.name("alias").map(|alias| alias.as_str().to_string()),
            ));
        } else if IDENTIFIER.is_match(piece) {
            bindings.push(Binding::Default(piece.to_string()));
        } else if let Some(captures) = WRAPPED.captures(piece) {
            bindings.push(Binding::Default(captures["name"].to_string()));
        } else {
            return None;
        }
    }

    (!bindings.is_empty()).then_some(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn named(name: &str, alias: Option<&str>) -> Binding {
        Binding::Named {
            name: name.to_string(),
            alias: alias.map(ToString::to_string),
        }
    }

    #[test]
    fn bare_identifier() {
        assert_eq!(parse("Foo"), Some(vec![Binding::Default("Foo".into())]));
    }

    #[test]
    fn braced_list_with_aliases() {
        assert_eq!(
            parse("{ a, b as c, default as d, }"),
            Some(vec![named("a", None), named("b", Some("c")), named("default", Some("d"))])
        );
    }

    #[test]
    fn namespaces() {
        assert_eq!(parse("*"), Some(vec![Binding::Namespace(None)]));
        assert_eq!(parse("* as utils"), Some(vec![Binding::Namespace(Some("utils".into()))]));
    }

    #[test]
    fn mixed_forms() {
        assert_eq!(
            parse("React, { Component as Base }"),
            Some(vec![Binding::Default("React".into()), named("Component", Some("Base"))])
        );
        assert_eq!(
            parse("Lib, * as all"),
            Some(vec![Binding::Default("Lib".into()), Binding::Namespace(Some("all".into()))])
        );
    }

    #[test]
    fn wrapped_identifier() {
        assert_eq!(
            parse("connect(mapState, mapDispatch)(Panel)"),
            Some(vec![Binding::Default("Panel".into())])
        );
        assert_eq!(
            parse("withRouter(compose(a))( Panel )"),
            Some(vec![Binding::Default("Panel".into())])
        );
    }

    #[test]
    fn unrecognized_forms() {
        assert_eq!(parse("42"), None);
        assert_eq!(parse("foo.bar"), None);
        assert_eq!(parse("{ a: 1 }"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("wrap(a)(b)(c)"), None);
    }
}
