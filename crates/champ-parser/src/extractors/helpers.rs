//! Shared extraction helpers: argument lists, value extents, and
//! `import`/`export` clause scanning.

use std::sync::LazyLock;

use champ_core::ids;
use regex::Regex;

use crate::normalizer::{Scope, skip_literal, strip_comments};

static TRAILING_FROM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\bfrom\s*$").expect("valid regex"));

static LEADING_FROM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*from\s*['"]"#).expect("valid regex"));

/// Offset of the first significant byte of a match that may begin with a
/// `;` separator or a placeholder's closing `}`, then indentation.
pub fn statement_offset(text: &str, match_start: usize) -> usize {
    text[match_start..]
        .bytes()
        .position(|byte| !matches!(byte, b';' | b'}') && !byte.is_ascii_whitespace())
        .map_or(match_start, |position| match_start + position)
}

/// Collapse every whitespace run outside string literals to one space and
/// trim the result.
pub fn compact_whitespace(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut output = String::with_capacity(text.len());
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            b'\'' | b'"' | b'`' => {
                let end = skip_literal(bytes, index);
                output.push_str(&text[index..end]);
                index = end;
            }
            byte if byte.is_ascii_whitespace() => {
                while bytes.get(index).is_some_and(u8::is_ascii_whitespace) {
                    index += 1;
                }
                output.push(' ');
            }
            _ => {
                let start = index;
                while bytes.get(index).is_some_and(|&byte| {
                    !byte.is_ascii_whitespace() && !matches!(byte, b'\'' | b'"' | b'`')
                }) {
                    index += 1;
                }
                output.push_str(&text[start..index]);
            }
        }
    }
    output.trim().to_string()
}

/// Split `text` on `separator` outside brackets and string literals.
pub fn split_top_level(text: &str, separator: u8) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut piece_start = 0;
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            b'\'' | b'"' | b'`' => {
                index = skip_literal(bytes, index);
                continue;
            }
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            byte if byte == separator && depth == 0 => {
                pieces.push(&text[piece_start..index]);
                piece_start = index + 1;
            }
            _ => {}
        }
        index += 1;
    }
    pieces.push(&text[piece_start..]);
    pieces
}

/// Parse an inflated argument list into trimmed, non-empty arguments.
///
/// Default values and destructuring patterns are kept as written, with
/// whitespace normalized.
pub fn parse_arguments(raw: &str) -> Vec<String> {
    let raw = strip_comments(raw, false);
    split_top_level(&raw, b',')
        .into_iter()
        .map(compact_whitespace)
        .filter(|argument| !argument.is_empty())
        .collect()
}

/// Arguments captured by an `(args)` or bare `arg` group, inflated.
pub fn captured_arguments(
    scope: &Scope,
    args: Option<regex::Match<'_>>,
    arg: Option<regex::Match<'_>>,
) -> Vec<String> {
    match (args, arg) {
        (Some(args), _) => parse_arguments(&scope.inflate(args.start(), args.end())),
        (None, Some(arg)) => vec![arg.as_str().to_string()],
        (None, None) => Vec::new(),
    }
}

/// End of the value expression starting at `start`: the first `;` or `,`
/// outside parentheses and brackets, or the first such newline that does
/// not follow a binary operator. Collapsed regions are jumped over whole,
/// so braces may span lines.
pub fn value_end(scope: &Scope, start: usize) -> usize {
    let bytes = scope.text().as_bytes();
    let mut depth = 0usize;
    let mut index = start;

    while index < bytes.len() {
        match bytes[index] {
            b'\'' | b'"' | b'`' => {
                index = skip_literal(bytes, index);
                continue;
            }
            b'{' => {
                if let Some(region) = scope.region_at(index) {
                    index = region.end;
                    continue;
                }
            }
            b'(' | b'[' => depth += 1,
            b')' | b']' => depth = depth.saturating_sub(1),
            b';' | b',' if depth == 0 => return index,
            b'\n' if depth == 0 && !continues_on_next_line(&bytes[start..index], &bytes[index..]) => {
                return index;
            }
            _ => {}
        }
        index += 1;
    }
    bytes.len()
}

/// Whether a value carries on past a newline: its line so far (`before`)
/// ends with a binary operator or an arrow, or the next line (`after`)
/// opens with a member access.
fn continues_on_next_line(before: &[u8], after: &[u8]) -> bool {
    let before = before.trim_ascii_end();
    if before.ends_with(b"=>") {
        return true;
    }
    if before.ends_with(b"++") || before.ends_with(b"--") {
        return false;
    }
    let operator = before
        .last()
        .is_some_and(|byte| b"+-*%&|^?:=.".contains(byte));
    operator || after.trim_ascii_start().starts_with(b".")
}

/// Inflated value starting at `start`, comment-free and compacted, without
/// a trailing `;`.
pub fn read_value(scope: &Scope, start: usize) -> String {
    let raw = scope.inflate(start, value_end(scope, start));
    let value = compact_whitespace(&strip_comments(&raw, false));
    value.trim_end_matches(';').trim_end().to_string()
}

/// The binding clause of an `import` or `export` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// Collapsed-text span of the bindings, before any `from`.
    pub start: usize,
    pub end: usize,
    /// Raw module reference of a `from '...'` part.
    pub reference: Option<String>,
}

/// Scan the clause starting at `start`, right after `import` or
/// `export [default]`.
///
/// The clause runs to the first `;`, newline, or string literal outside a
/// collapsed region. A `from '...'` part may sit on the next line.
pub fn scan_clause(scope: &Scope, start: usize) -> Clause {
    let text = scope.text();
    let bytes = text.as_bytes();
    let mut index = start;

    while index < bytes.len() {
        match bytes[index] {
            b'{' => {
                if let Some(region) = scope.region_at(index) {
                    index = region.end;
                    continue;
                }
            }
            b'\n' => {
                if let Some(found) = LEADING_FROM.find(&text[index..]) {
                    index += found.end() - 1;
                }
                break;
            }
            b';' | b'\'' | b'"' | b'`' => break,
            _ => {}
        }
        index += 1;
    }

    let head = &text[start..index];
    let quoted = matches!(bytes.get(index), Some(b'\'' | b'"'));
    match TRAILING_FROM.find(head) {
        Some(from) if quoted => {
            let quote = char::from(bytes[index]);
            let literal = &text[index + 1..];
            let reference = literal
                .find(|c| c == quote || c == '\n')
                .map_or(literal, |end| &literal[..end]);
            Clause {
                start,
                end: start + from.start(),
                reference: Some(reference.to_string()),
            }
        }
        _ => Clause {
            start,
            end: index,
            reference: None,
        },
    }
}

/// Inflated, comment-free, whitespace-normalized text of a clause.
pub fn clause_expression(scope: &Scope, clause: &Clause) -> String {
    compact_whitespace(&strip_comments(&scope.inflate(clause.start, clause.end), false))
}

/// Resolve a module reference written in the file `file_id` into a module id.
///
/// Relative references are resolved against the file's directory; bare
/// package names are only converted to dotted form. A `.js`/`.jsx`
/// extension and a trailing `index` segment are dropped.
pub fn resolve_reference(file_id: &str, reference: &str) -> String {
    let reference = reference
        .strip_suffix(".js")
        .or_else(|| reference.strip_suffix(".jsx"))
        .unwrap_or(reference);

    let relative = matches!(reference, "." | "..")
        || reference.starts_with("./")
        || reference.starts_with("../");
    if !relative {
        return ids::from_path(reference);
    }

    let mut segments: Vec<&str> = file_id.split('/').collect();
    segments.pop();
    for part in reference.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    if segments.len() > 1 && segments.last() == Some(&"index") {
        segments.pop();
    }
    segments.join(".")
}

/// Hands out `WILDCARD_n` sentinels for un-aliased wildcard bindings.
#[derive(Debug, Default)]
pub struct WildcardCounter {
    issued: usize,
}

impl WildcardCounter {
    pub fn next_sentinel(&mut self) -> String {
        self.issued += 1;
        ids::wildcard(self.issued)
    }
}
