//! Function declarations and functions bound to variables.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use champ_core::entities::Function;
use champ_core::ids::ANONYMOUS_FUNCTION;
use regex::{Captures, Regex};

use super::SourceContext;
use super::helpers;

/// `[export [default]] [async] function [*] [name] (args) {}`
static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        statement_start!(),
        export_prefix!(),
        r"(?:async\s+)?function\b\s*(?P<generator>\*)?\s*(?P<name>",
        ident!(),
        r")?\s*\((?P<args>",
        args!(),
        r")\)\s*\{\}"
    ))
    .expect("valid regex")
});

/// `[export [default]] const|let|var name = [async] (args) =>`
static ARROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        statement_start!(),
        export_prefix!(),
        r"(?:const|let|var)\s+(?P<name>",
        ident!(),
        r")\s*=\s*(?:async\s+)?(?:\((?P<args>",
        args!(),
        r")\)|(?P<arg>",
        ident!(),
        r"))\s*=>"
    ))
    .expect("valid regex")
});

/// `[export [default]] const|let|var name = [async] function [*] [inner] (args) {}`
static EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        statement_start!(),
        export_prefix!(),
        r"(?:const|let|var)\s+(?P<name>",
        ident!(),
        r")\s*=\s*(?:async\s+)?function\b\s*(?P<generator>\*)?\s*(?:",
        ident!(),
        r")?\s*\((?P<args>",
        args!(),
        r")\)\s*\{\}"
    ))
    .expect("valid regex")
});

/// Extract every top-level function of a file.
///
/// A declaration without a name is recorded as
/// [`ANONYMOUS_FUNCTION`](champ_core::ids::ANONYMOUS_FUNCTION); a function
/// expression is recorded under the name of its variable.
pub fn extract(source: &SourceContext<'_>) -> BTreeMap<String, Function> {
    let text = source.scope.text();
    let mut functions = BTreeMap::new();

    for captures in DECLARATION
        .captures_iter(text)
        .chain(ARROW.captures_iter(text))
        .chain(EXPRESSION.captures_iter(text))
    {
        let function = process_function(source, &captures);
        functions.insert(function.id.clone(), function);
    }

    functions
}

fn process_function(source: &SourceContext<'_>, captures: &Captures<'_>) -> Function {
    let scope = &source.scope;
    let start = captures.get(0).map_or(0, |whole| whole.start());
    let line = scope.line_at(helpers::statement_offset(scope.text(), start));

    let (name, anonymous) = captures
        .name("name")
        .map_or((ANONYMOUS_FUNCTION, true), |name| (name.as_str(), false));

    Function {
        id: source.id(name),
        module_id: source.module_id.to_string(),
        name: name.to_string(),
        exported: captures.name("export").is_some(),
        default: captures.name("default").is_some(),
        anonymous,
        generator: captures.name("generator").is_some(),
        arguments: helpers::captured_arguments(scope, captures.name("args"), captures.name("arg")),
        line,
        description: source.description(line),
    }
}
