//! Regex extractors over collapsed source text.
//!
//! Every extractor runs its patterns against a [`Scope`]: the file (or class
//! body) with comments blanked out and every balanced `{...}` region
//! replaced by a `{}` placeholder. Patterns therefore only see top-level
//! declarations, and bodies are looked up in the scope's side table by the
//! offset of their placeholder.

use champ_core::ids;

use crate::docstring;
use crate::normalizer::Scope;

// ── shared pattern fragments ─────────────────────────────────────────

/// ASCII JavaScript identifier.
macro_rules! ident {
    () => {
        r"[A-Za-z_$][A-Za-z0-9_$]*"
    };
}

/// Identifier path such as `React.Component`.
macro_rules! dotted {
    () => {
        r"[A-Za-z_$][A-Za-z0-9_$]*(?:\.[A-Za-z_$][A-Za-z0-9_$]*)*"
    };
}

/// Argument list body, allowing one level of nested parentheses.
macro_rules! args {
    () => {
        r"(?:[^()]|\([^()]*\))*"
    };
}

/// Start of a statement: a line start or a `;` separator, then indentation.
macro_rules! statement_start {
    () => {
        r"(?m)(?:^|;)[ \t]*"
    };
}

/// Optional `export` / `export default` prefix.
macro_rules! export_prefix {
    () => {
        r"(?P<export>export\s+(?P<default>default\s+)?)?"
    };
}

pub mod bindings;
pub mod classes;
pub mod data;
pub mod exports;
pub mod functions;
pub(crate) mod helpers;
pub mod imports;

#[cfg(test)]
mod tests;

/// One source file being extracted.
#[derive(Debug)]
pub struct SourceContext<'a> {
    pub module_id: &'a str,
    pub file_id: &'a str,
    pub lines: Vec<&'a str>,
    pub scope: Scope,
}

impl<'a> SourceContext<'a> {
    #[must_use]
    pub fn new(module_id: &'a str, file_id: &'a str, content: &'a str) -> Self {
        Self {
            module_id,
            file_id,
            lines: content.lines().collect(),
            scope: Scope::new(content, 1),
        }
    }

    /// Id of `name` in this file's module.
    #[must_use]
    pub fn id(&self, name: &str) -> String {
        ids::join(self.module_id, name)
    }

    /// Doc comment above 1-based `line`.
    #[must_use]
    pub fn description(&self, line: usize) -> Option<String> {
        docstring::docstring_for(line, &self.lines)
    }
}
