use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A logical unit derived from a file's position in the source tree.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Module {
    pub id: String,
    /// Display name, nested under the nearest known ancestor module.
    pub name: String,
    pub file_id: String,
    /// Filesystem path of the file backing this module.
    pub path: String,
}
