//! `/** ... */` doc comment lookup.
//!
//! A declaration's description is the doc comment found immediately above
//! it, skipping blank lines and `//` comments. Body lines of a multi-line
//! comment must look like `* text` or a bare `*`; anything else makes the
//! comment malformed, which is logged and yields no description.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ExtractError;

static BODY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*( *| +.+)$").expect("valid regex"));

/// Doc comment describing the declaration on 1-based `line` of `lines`.
#[must_use]
pub fn docstring_for(line: usize, lines: &[&str]) -> Option<String> {
    let mut index = line.checked_sub(2)?;
    loop {
        let text = lines.get(index)?.trim();
        if !text.is_empty() && !text.starts_with("//") {
            break;
        }
        index = index.checked_sub(1)?;
    }

    let text = lines[index].trim();
    if text.len() > 4 && text.starts_with("/**") && text.ends_with("*/") {
        let inner = text[3..text.len() - 2].trim();
        return (!inner.is_empty()).then(|| inner.to_string());
    }
    if !text.ends_with("*/") || text.starts_with("/*") {
        return None;
    }

    match read_block(index, lines) {
        Ok(description) => (!description.is_empty()).then_some(description),
        Err(error) => {
            tracing::debug!(%error, "ignoring doc comment");
            None
        }
    }
}

/// Description of a whole file: a doc comment opening the file and followed
/// by a blank line or the end of the file.
#[must_use]
pub fn file_description(lines: &[&str]) -> Option<String> {
    let first = lines.iter().position(|line| !line.trim().is_empty())?;
    if !lines[first].trim_start().starts_with("/**") {
        return None;
    }
    let last = first
        + lines[first..]
            .iter()
            .position(|line| line.trim_end().ends_with("*/"))?;

    let followed_by_blank = lines.get(last + 1).is_none_or(|line| line.trim().is_empty());
    if !followed_by_blank {
        return None;
    }
    docstring_for(last + 2, lines)
}

/// Read a multi-line doc comment upward from its closing line at `end`.
fn read_block(end: usize, lines: &[&str]) -> Result<String, ExtractError> {
    let mut body = Vec::new();

    let closing = lines[end].trim();
    let closing = closing[..closing.len() - 2].trim_end();
    if !closing.is_empty() {
        body.push(body_text(closing, end)?);
    }

    let mut index = end;
    while let Some(previous) = index.checked_sub(1) {
        index = previous;
        let text = lines[index].trim();
        if let Some(rest) = text.strip_prefix("/**") {
            let rest = rest.trim();
            if !rest.is_empty() {
                body.push(rest.to_string());
            }
            body.reverse();
            return Ok(body.join("\n"));
        }
        body.push(body_text(text, index)?);
    }

    Err(ExtractError::MalformedDocComment { line: end + 1 })
}

/// Strip the leading `* ` of a body line, keeping any further indentation.
fn body_text(text: &str, index: usize) -> Result<String, ExtractError> {
    if !BODY_LINE.is_match(text) {
        return Err(ExtractError::MalformedDocComment { line: index + 1 });
    }
    let rest = &text[1..];
    Ok(rest.strip_prefix(' ').unwrap_or(rest).to_string())
}
