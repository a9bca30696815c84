use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DataKind;

/// A top-level variable binding that is not a function or class.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Data {
    pub id: String,
    pub module_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DataKind,
    /// Right-hand side text, braced literals re-inflated.
    pub value: String,
    pub exported: bool,
    pub default: bool,
    pub line: usize,
    pub description: Option<String>,
}
