//! Class declarations, class expressions, and their members.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use champ_core::entities::{Attribute, Class, Method};
use champ_core::enums::{AttributePrefix, MethodPrefix};
use champ_core::ids;
use regex::{Captures, Regex};

use super::SourceContext;
use super::helpers;
use crate::normalizer::Scope;

// ── class heads ──────────────────────────────────────────────────────

static CLASS_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        statement_start!(),
        export_prefix!(),
        r"class\s+(?P<name>",
        ident!(),
        r")(?:\s+extends\s+(?P<parent>",
        dotted!(),
        r"))?\s*\{\}"
    ))
    .expect("valid regex")
});

static CLASS_EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        statement_start!(),
        export_prefix!(),
        r"(?:const|let|var)\s+(?P<name>",
        ident!(),
        r")\s*=\s*class\b(?:\s+",
        ident!(),
        r")?(?:\s+extends\s+(?P<parent>",
        dotted!(),
        r"))?\s*\{\}"
    ))
    .expect("valid regex")
});

// ── class members ────────────────────────────────────────────────────

/// Start of a class member: a statement start, or the closing brace of the
/// previous member's collapsed body.
macro_rules! member_start {
    () => {
        r"(?m)(?:^|;|\})[ \t]*"
    };
}

static ARROW_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        member_start!(),
        r"(?:(?P<static>static)\s+)?(?P<name>",
        ident!(),
        r")\s*=\s*(?:async\s+)?(?:\((?P<args>",
        args!(),
        r")\)|(?P<arg>",
        ident!(),
        r"))\s*=>"
    ))
    .expect("valid regex")
});

static METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        member_start!(),
        r"(?:(?P<static>static)\s+)?(?:(?P<accessor>get|set)\s+)?(?:async\s+)?(?:\*\s*)?(?P<name>",
        ident!(),
        r")\s*\((?P<args>",
        args!(),
        r")\)\s*\{\}"
    ))
    .expect("valid regex")
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        member_start!(),
        r"(?:(?P<static>static)\s+)?(?P<name>",
        ident!(),
        r")\s*=\s*"
    ))
    .expect("valid regex")
});

/// Extract every top-level class of a file, members included.
pub fn extract(source: &SourceContext<'_>) -> BTreeMap<String, Class> {
    let text = source.scope.text();
    let mut classes = BTreeMap::new();

    for captures in CLASS_DECLARATION
        .captures_iter(text)
        .chain(CLASS_EXPRESSION.captures_iter(text))
    {
        if let Some(class) = process_class(source, &captures) {
            classes.insert(class.id.clone(), class);
        }
    }

    classes
}

fn process_class(source: &SourceContext<'_>, captures: &Captures<'_>) -> Option<Class> {
    let whole = captures.get(0)?;
    let scope = &source.scope;
    let Some(region) = scope.region_at(whole.end() - 2) else {
        tracing::debug!(text = whole.as_str(), "class body placeholder missing");
        return None;
    };

    let name = captures["name"].to_string();
    let id = source.id(&name);
    let line = scope.line_at(helpers::statement_offset(scope.text(), whole.start()));

    let body = scope.nested(region);
    let members = extract_members(source, &body, &id);

    Some(Class {
        module_id: source.module_id.to_string(),
        parent: captures.name("parent").map(|p| p.as_str().to_string()),
        description: source.description(line),
        exported: captures.name("export").is_some(),
        default: captures.name("default").is_some(),
        methods: members.methods,
        attributes: members.attributes,
        id,
        name,
        line,
    })
}

#[derive(Debug, Default)]
struct Members {
    methods: BTreeMap<String, Method>,
    attributes: BTreeMap<String, Attribute>,
}

/// Methods and attributes of a class body.
///
/// Arrow-assigned methods (`name = () => {}`) are recorded both as a method
/// and as an attribute. An ordinary method hides a plain attribute of the
/// same name.
fn extract_members(source: &SourceContext<'_>, body: &Scope, class_id: &str) -> Members {
    let text = body.text();
    let mut members = Members::default();
    let mut ordinary_methods = HashSet::new();

    let mut add_method = |captures: &Captures<'_>, prefix: MethodPrefix| {
        let name = captures["name"].to_string();
        let mut id = ids::join(class_id, &name);
        if let Some(suffix) = prefix.id_suffix() {
            id = ids::join(&id, suffix);
        }
        let start = captures.get(0).map_or(0, |whole| whole.start());
        let line = body.line_at(helpers::statement_offset(text, start));
        let method = Method {
            id: id.clone(),
            class_id: class_id.to_string(),
            module_id: source.module_id.to_string(),
            arguments: helpers::captured_arguments(body, captures.name("args"), captures.name("arg")),
            description: source.description(line),
            name,
            prefix,
            line,
        };
        members.methods.insert(id, method);
    };

    for captures in ARROW_METHOD.captures_iter(text) {
        let prefix = MethodPrefix::from_keyword(captures.name("static").map(|m| m.as_str()));
        add_method(&captures, prefix);
    }
    for captures in member_captures(&METHOD, text) {
        let keyword = captures.name("accessor").or_else(|| captures.name("static"));
        add_method(&captures, MethodPrefix::from_keyword(keyword.map(|m| m.as_str())));
        ordinary_methods.insert(captures["name"].to_string());
    }

    for captures in ATTRIBUTE.captures_iter(text) {
        let Some(whole) = captures.get(0) else { continue };
        let name = captures["name"].to_string();
        if ordinary_methods.contains(&name) {
            continue;
        }
        let id = ids::join(class_id, &name);
        let line = body.line_at(helpers::statement_offset(text, whole.start()));
        let attribute = Attribute {
            id: id.clone(),
            class_id: class_id.to_string(),
            module_id: source.module_id.to_string(),
            prefix: AttributePrefix::from_keyword(captures.name("static").map(|m| m.as_str())),
            value: helpers::read_value(body, whole.end()),
            description: source.description(line),
            name,
            line,
        };
        members.attributes.insert(id, attribute);
    }

    members
}

/// Every match of `regex` in a class body. A match ending on a placeholder
/// hands its closing brace to the next search, so members sharing a line
/// (`get a() {} set a(v) {}`) are all found.
fn member_captures<'t>(regex: &Regex, text: &'t str) -> Vec<Captures<'t>> {
    let mut found = Vec::new();
    let mut start = 0;
    while let Some(captures) = regex.captures_at(text, start) {
        let Some(whole) = captures.get(0) else { break };
        start = if whole.as_str().ends_with('}') {
            whole.end() - 1
        } else {
            whole.end()
        };
        found.push(captures);
    }
    found
}
