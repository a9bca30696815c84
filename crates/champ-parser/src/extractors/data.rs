//! Top-level `const`/`let`/`var` bindings that are not functions or classes.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use champ_core::entities::Data;
use champ_core::enums::DataKind;
use regex::Regex;

use super::SourceContext;
use super::helpers;

static DATA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        statement_start!(),
        export_prefix!(),
        r"(?P<kind>const|let|var)\s+(?P<name>",
        ident!(),
        r")\s*=\s*"
    ))
    .expect("valid regex")
});

static NEXT_BINDING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(r"^,\s*(?P<name>", ident!(), r")\s*=\s*")).expect("valid regex")
});

/// Extract top-level data, skipping every id in `taken`.
///
/// Every binding of a declaration list (`const a = 1, b = 2;`) is recorded,
/// sharing the statement's kind and export flags.
pub fn extract(source: &SourceContext<'_>, taken: &HashSet<&str>) -> BTreeMap<String, Data> {
    let scope = &source.scope;
    let text = scope.text();
    let mut data = BTreeMap::new();

    for captures in DATA.captures_iter(text) {
        let Some(whole) = captures.get(0) else { continue };
        let Ok(kind) = captures["kind"].parse::<DataKind>() else {
            continue;
        };
        let exported = captures.name("export").is_some();
        let default = captures.name("default").is_some();

        let mut name = &captures["name"];
        let mut line = scope.line_at(helpers::statement_offset(text, whole.start()));
        let mut value_start = whole.end();
        loop {
            let id = source.id(name);
            if !taken.contains(id.as_str()) {
                let entry = Data {
                    id: id.clone(),
                    module_id: source.module_id.to_string(),
                    name: name.to_string(),
                    kind,
                    value: helpers::read_value(scope, value_start),
                    exported,
                    default,
                    line,
                    description: source.description(line),
                };
                data.insert(id, entry);
            }

            let value_end = helpers::value_end(scope, value_start);
            let Some(next) = NEXT_BINDING.captures(&text[value_end..]) else {
                break;
            };
            let Some(next_name) = next.name("name") else { break };
            name = next_name.as_str();
            line = scope.line_at(value_end + next_name.start());
            value_start = value_end + next.get(0).map_or(0, |m| m.end());
        }
    }

    data
}
