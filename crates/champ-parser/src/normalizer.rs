//! Comment filtering and brace collapsing.
//!
//! Both passes preserve the newline count of their input, and comment
//! filtering can also preserve its byte length. Offsets in the normalized
//! text therefore map back to original line numbers by counting newlines,
//! and any span of a collapsed text can be re-inflated from the original.
//!
//! Quoted and template literals are skipped when looking for comments and
//! braces. Regular-expression literals are not recognized: a `/'/` or a
//! `/{/` pattern can still confuse both passes.

use std::collections::BTreeMap;

/// Remove `// ...` and `/* ... */` comments from `text`.
///
/// The output always has the same number of newlines as the input. With
/// `preserve_length`, every other comment byte becomes a space so the output
/// also has the same byte length; otherwise comments shrink to their
/// newlines.
#[must_use]
pub fn strip_comments(text: &str, preserve_length: bool) -> String {
    let bytes = text.as_bytes();
    let mut output = String::with_capacity(text.len());
    let mut copied = 0;
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            b'\'' | b'"' | b'`' => index = skip_literal(bytes, index),
            b'/' if bytes.get(index + 1) == Some(&b'/') => {
                let end = find_byte(bytes, index + 2, b'\n').unwrap_or(bytes.len());
                output.push_str(&text[copied..index]);
                blank_out(&text[index..end], preserve_length, &mut output);
                copied = end;
                index = end;
            }
            b'/' if bytes.get(index + 1) == Some(&b'*') => {
                let end = find_block_end(bytes, index + 2).unwrap_or(bytes.len());
                output.push_str(&text[copied..index]);
                blank_out(&text[index..end], preserve_length, &mut output);
                copied = end;
                index = end;
            }
            _ => index += 1,
        }
    }

    output.push_str(&text[copied..]);
    output
}

/// A balanced `{...}` region replaced by a placeholder in collapsed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Byte offset of the opening brace.
    pub start: usize,
    /// Byte offset one past the closing brace.
    pub end: usize,
    /// 1-based line of the opening brace, relative to the collapsed text.
    pub line: usize,
    /// Original text of the region, braces included.
    pub text: String,
}

/// Collapsed regions of one text, indexed by start offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideTable {
    regions: BTreeMap<usize, Region>,
}

impl SideTable {
    /// Region whose opening brace sits at `offset`.
    #[must_use]
    pub fn at_offset(&self, offset: usize) -> Option<&Region> {
        self.regions.get(&offset)
    }

    /// Original text of the first region starting on `line`.
    #[must_use]
    pub fn by_line(&self, line: usize) -> Option<&str> {
        self.regions
            .values()
            .find(|region| region.line == line)
            .map(|region| region.text.as_str())
    }

    /// Regions whose opening brace is at or after `offset`, in order.
    pub fn from_offset(&self, offset: usize) -> impl Iterator<Item = &Region> {
        self.regions.range(offset..).map(|(_, region)| region)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Replace every outermost balanced `{...}` region of `text` by `{}`.
///
/// Each placeholder is padded with spaces and then newlines so the
/// collapsed text keeps the byte length and newline count of `text`. This is
/// the fixpoint of repeatedly collapsing innermost regions, computed in a
/// single pass. Unbalanced braces are left in place.
///
/// With `filter_comments`, comments are blanked out first (length
/// preserved) so braces inside them are ignored. The side table always
/// holds the original text of each region, comments included.
#[must_use]
pub fn collapse_braces(text: &str, filter_comments: bool) -> (String, SideTable) {
    let working = if filter_comments {
        strip_comments(text, true)
    } else {
        text.to_string()
    };

    let outermost = outermost_regions(working.as_bytes());
    let mut collapsed = String::with_capacity(working.len());
    let mut table = SideTable::default();
    let mut copied = 0;
    let mut line = 1;

    for (start, end) in outermost {
        line += count_newlines(&working[copied..start]);
        collapsed.push_str(&working[copied..start]);

        let original = &text[start..end];
        let newlines = count_newlines(original);
        collapsed.push_str("{}");
        collapsed.extend(std::iter::repeat_n(' ', original.len() - 2 - newlines));
        collapsed.extend(std::iter::repeat_n('\n', newlines));

        table.regions.insert(
            start,
            Region {
                start,
                end,
                line,
                text: original.to_string(),
            },
        );
        line += newlines;
        copied = end;
    }

    collapsed.push_str(&working[copied..]);
    (collapsed, table)
}

/// A collapsed view of some source text, positioned in its file.
///
/// The top-level file is a scope starting at line 1; a class body is a
/// scope starting at the line of its opening brace, so every line reported
/// by a scope is absolute.
#[derive(Debug, Clone)]
pub struct Scope {
    collapsed: String,
    side_table: SideTable,
    first_line: usize,
    newlines: Vec<usize>,
}

impl Scope {
    /// Collapse `text` (comments filtered) as a scope whose first byte is on
    /// `first_line` of the file.
    #[must_use]
    pub fn new(text: &str, first_line: usize) -> Self {
        let (collapsed, side_table) = collapse_braces(text, true);
        let newlines = collapsed
            .bytes()
            .enumerate()
            .filter_map(|(offset, byte)| (byte == b'\n').then_some(offset))
            .collect();
        Self {
            collapsed,
            side_table,
            first_line,
            newlines,
        }
    }

    /// Scope over the inside of a collapsed region, braces excluded.
    #[must_use]
    pub fn nested(&self, region: &Region) -> Self {
        let inner = &region.text[1..region.text.len() - 1];
        Self::new(inner, self.first_line + region.line - 1)
    }

    /// The collapsed, comment-free text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.collapsed
    }

    #[must_use]
    pub const fn side_table(&self) -> &SideTable {
        &self.side_table
    }

    #[must_use]
    pub fn region_at(&self, offset: usize) -> Option<&Region> {
        self.side_table.at_offset(offset)
    }

    /// Absolute 1-based line of `offset`.
    #[must_use]
    pub fn line_at(&self, offset: usize) -> usize {
        self.first_line + self.newlines.partition_point(|&newline| newline < offset)
    }

    /// Text of `start..end` with every placeholder replaced by its region.
    #[must_use]
    pub fn inflate(&self, start: usize, end: usize) -> String {
        let mut output = String::with_capacity(end.saturating_sub(start));
        let mut position = start;

        for region in self.side_table.from_offset(start) {
            if region.start >= end {
                break;
            }
            output.push_str(&self.collapsed[position..region.start]);
            output.push_str(&region.text);
            position = region.end;
        }
        if position < end {
            output.push_str(&self.collapsed[position..end]);
        }
        output
    }
}

/// Outermost balanced brace pairs of `bytes`, as `(start, end)` with `end`
/// one past the closing brace, sorted by start.
fn outermost_regions(bytes: &[u8]) -> Vec<(usize, usize)> {
    let mut openers = Vec::new();
    let mut regions: Vec<(usize, usize)> = Vec::new();
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            b'\'' | b'"' | b'`' => {
                index = skip_literal(bytes, index);
                continue;
            }
            b'{' => openers.push(index),
            b'}' => {
                if let Some(start) = openers.pop() {
                    while regions.last().is_some_and(|&(inner, _)| inner > start) {
                        regions.pop();
                    }
                    regions.push((start, index + 1));
                }
            }
            _ => {}
        }
        index += 1;
    }

    regions
}

/// Index one past the end of the string or template literal opening at `start`.
///
/// Quoted strings stop at an unescaped newline so that a stray apostrophe
/// only swallows the rest of its line.
pub(crate) fn skip_literal(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut index = start + 1;
    while index < bytes.len() {
        match bytes[index] {
            b'\\' => index += 2,
            b'\n' if quote != b'`' => return index,
            byte if byte == quote => return index + 1,
            _ => index += 1,
        }
    }
    bytes.len()
}

fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|&byte| byte == needle)
        .map(|position| from + position)
}

fn find_block_end(bytes: &[u8], from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .windows(2)
        .position(|window| window == b"*/")
        .map(|position| from + position + 2)
}

fn blank_out(comment: &str, preserve_length: bool, output: &mut String) {
    for byte in comment.bytes() {
        if byte == b'\n' {
            output.push('\n');
        } else if preserve_length {
            output.push(' ');
        }
    }
}

fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&byte| byte == b'\n').count()
}
