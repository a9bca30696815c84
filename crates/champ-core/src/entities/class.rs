use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::file::Member;
use crate::enums::{AttributePrefix, EntityKind, MethodPrefix};

/// A class declaration or a class expression bound to a variable.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Class {
    pub id: String,
    pub module_id: String,
    pub name: String,
    /// Name after `extends`, possibly dotted (`React.Component`).
    pub parent: Option<String>,
    pub line: usize,
    pub description: Option<String>,
    pub exported: bool,
    pub default: bool,
    #[serde(rename = "method")]
    pub methods: BTreeMap<String, Method>,
    #[serde(rename = "attribute")]
    pub attributes: BTreeMap<String, Attribute>,
}

impl Class {
    /// Methods and attributes in source order. Arrow-form methods appear
    /// twice, once per registration, methods first.
    #[must_use]
    pub fn members_in_line_order(&self) -> Vec<Member> {
        let mut members: Vec<Member> = self
            .methods
            .values()
            .map(|m| Member::new(m.line, EntityKind::Method, &m.id))
            .chain(
                self.attributes
                    .values()
                    .map(|a| Member::new(a.line, EntityKind::Attribute, &a.id)),
            )
            .collect();
        members.sort_by_key(|m| m.line);
        members
    }
}

/// A class method: ordinary, static, accessor, or arrow-assigned.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Method {
    /// `<class_id>.<name>`, with a `.get`/`.set` suffix for accessors.
    pub id: String,
    pub class_id: String,
    pub module_id: String,
    pub name: String,
    pub prefix: MethodPrefix,
    pub arguments: Vec<String>,
    pub line: usize,
    pub description: Option<String>,
}

/// A class field assignment (`[static] name = value`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Attribute {
    pub id: String,
    pub class_id: String,
    pub module_id: String,
    pub name: String,
    pub prefix: AttributePrefix,
    pub value: String,
    pub line: usize,
    pub description: Option<String>,
}
