//! `import ... from '...'` statements.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use champ_core::entities::ImportEntry;
use champ_core::ids::{self, WILDCARD};
use regex::Regex;

use super::SourceContext;
use super::bindings::{self, Binding};
use super::helpers::{self, WildcardCounter};
use crate::error::ExtractError;

static IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(concat!(statement_start!(), r"import\s+")).expect("valid regex"));

/// Extract the import entries of a file, keyed by their local id.
///
/// Side-effect imports (`import './polyfill'`) bind nothing and are skipped.
pub fn extract(
    source: &SourceContext<'_>,
    wildcards: &mut WildcardCounter,
) -> BTreeMap<String, ImportEntry> {
    let scope = &source.scope;
    let mut imports = BTreeMap::new();

    for head in IMPORT.find_iter(scope.text()) {
        let clause = helpers::scan_clause(scope, head.end());
        let Some(reference) = clause.reference.as_deref() else {
            continue;
        };
        let module = helpers::resolve_reference(source.file_id, reference);
        let expression = helpers::clause_expression(scope, &clause);

        let Some(parsed) = bindings::parse(&expression) else {
            let error = ExtractError::AmbiguousConstruct {
                line: scope.line_at(head.end()),
                text: expression,
            };
            tracing::debug!(%error, "skipping import");
            continue;
        };

        for binding in parsed {
            let entry = import_entry(source.module_id, &module, binding, wildcards);
            imports.insert(entry.id.clone(), entry);
        }
    }

    imports
}

fn import_entry(
    module_id: &str,
    source_module: &str,
    binding: Binding,
    wildcards: &mut WildcardCounter,
) -> ImportEntry {
    let (local, name, alias, partial) = match binding {
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

    ImportEntry {
        id: ids::join(module_id, &local),
        module: source_module.to_string(),
        name,
        alias,
        partial,
    }
}
