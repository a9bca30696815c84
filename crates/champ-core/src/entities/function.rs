use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A function declaration, function expression, or arrow function bound to a variable.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Function {
    pub id: String,
    pub module_id: String,
    pub name: String,
    pub exported: bool,
    pub default: bool,
    pub anonymous: bool,
    pub generator: bool,
    pub arguments: Vec<String>,
    pub line: usize,
    pub description: Option<String>,
}
