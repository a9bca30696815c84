//! `export` statements that are not declarations.
//!
//! `export class`, `export function`, `export const` and friends are
//! recorded by the declaration extractors with their `exported` flag set.
//! This module records everything else: export lists, re-exports,
//! wildcards, and default exports of an existing name.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use champ_core::entities::ExportEntry;
use champ_core::ids::{self, DEFAULT_EXPORT, WILDCARD};
use regex::Regex;

use super::SourceContext;
use super::bindings::{self, Binding};
use super::helpers::{self, WildcardCounter};
use crate::error::ExtractError;

static EXPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(statement_start!(), r"export\s+(?P<default>default\s+)?")).expect("valid regex")
});

static DECLARATION_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:class|function|async|const|let|var)\b").expect("valid regex")
});

/// Statement-level facts shared by every binding of one `export`.
struct ExportStatement<'a> {
    module: Option<&'a str>,
    default: bool,
    description: Option<String>,
    line: usize,
}

/// Extract the export entries of a file, keyed by their id.
pub fn extract(
    source: &SourceContext<'_>,
    wildcards: &mut WildcardCounter,
) -> BTreeMap<String, ExportEntry> {
    let scope = &source.scope;
    let text = scope.text();
    let mut exports = BTreeMap::new();

    for captures in EXPORT.captures_iter(text) {
        let Some(head) = captures.get(0) else { continue };
        let rest = &text[head.end()..];
        if DECLARATION_KEYWORD.is_match(rest) {
            continue;
        }

        let default = captures.name("default").is_some();
        let line = scope.line_at(helpers::statement_offset(text, head.start()));
        if default && rest.starts_with('{') {
            tracing::debug!(line, "skipping default export of an object literal");
            continue;
        }

        let clause = helpers::scan_clause(scope, head.end());
        let expression = helpers::clause_expression(scope, &clause);
        let Some(parsed) = bindings::parse(&expression) else {
            let error = ExtractError::AmbiguousConstruct {
                line,
                text: expression,
            };
            tracing::debug!(%error, "skipping export");
            continue;
        };

        let module = clause
            .reference
            .as_deref()
            .map(|reference| helpers::resolve_reference(source.file_id, reference));
        let statement = ExportStatement {
            module: module.as_deref(),
            default,
            description: source.description(line),
            line,
        };

        for binding in parsed {
            let entry = export_entry(source.module_id, &statement, binding, wildcards);
            exports.insert(entry.id.clone(), entry);
        }
    }

    exports
}

fn export_entry(
    module_id: &str,
    statement: &ExportStatement<'_>,
    binding: Binding,
    wildcards: &mut WildcardCounter,
) -> ExportEntry {
    let (key, name, alias, partial) = match binding {
        Binding::Default(name) => (name.clone(), name, None, false),
        Binding::Named { name, alias } => (
            alias.clone().unwrap_or_else(|| name.clone()),
            name,
            alias,
            true,
        ),
        Binding::Namespace(Some(alias)) => (alias.clone(), WILDCARD.to_string(), Some(alias), false),
        Binding::Namespace(None) => (wildcards.next_sentinel(), WILDCARD.to_string(), None, false),
    };

    ExportEntry {
        id: ids::join(module_id, &key),
        module: statement.module.map(ToString::to_string),
        default: statement.default || key == DEFAULT_EXPORT,
        description: statement.description.clone(),
        line: statement.line,
        name,
        alias,
        partial,
    }
}
