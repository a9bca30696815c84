use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Class, Data, ExportEntry, Function, ImportEntry};
use crate::enums::EntityKind;

/// Everything extracted from one source file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct File {
    /// Repository-relative path with forward slashes, starting with the
    /// repository name.
    pub id: String,
    pub module_id: String,
    pub path: String,
    pub content: String,
    pub description: Option<String>,
    #[serde(rename = "class")]
    pub classes: BTreeMap<String, Class>,
    #[serde(rename = "function")]
    pub functions: BTreeMap<String, Function>,
    pub data: BTreeMap<String, Data>,
    #[serde(rename = "import")]
    pub imports: BTreeMap<String, ImportEntry>,
    #[serde(rename = "export")]
    pub exports: BTreeMap<String, ExportEntry>,
}

impl File {
    /// Whether nothing documentable was found in the file.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
            && self.functions.is_empty()
            && self.data.is_empty()
            && self.imports.is_empty()
            && self.exports.is_empty()
    }

    /// Classes, functions, and data of this file in source order.
    #[must_use]
    pub fn members_in_line_order(&self) -> Vec<Member> {
        let mut members: Vec<Member> = self
            .classes
            .values()
            .map(|c| Member::new(c.line, EntityKind::Class, &c.id))
            .chain(
                self.functions
                    .values()
                    .map(|f| Member::new(f.line, EntityKind::Function, &f.id)),
            )
            .chain(
                self.data
                    .values()
                    .map(|d| Member::new(d.line, EntityKind::Data, &d.id)),
            )
            .collect();
        members.sort_by_key(|m| m.line);
        members
    }

    /// Export entries in source order.
    #[must_use]
    pub fn exports_in_line_order(&self) -> Vec<&ExportEntry> {
        let mut exports: Vec<&ExportEntry> = self.exports.values().collect();
        exports.sort_by_key(|e| e.line);
        exports
    }
}

/// Position of one declaration in a file or class body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub line: usize,
    pub kind: EntityKind,
    pub id: String,
}

impl Member {
    pub(crate) fn new(line: usize, kind: EntityKind, id: &str) -> Self {
        Self {
            line,
            kind,
            id: id.to_string(),
        }
    }
}
