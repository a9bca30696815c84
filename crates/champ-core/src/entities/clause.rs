use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One binding of an `import ... from "..."` clause.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportEntry {
    /// Id of the binding in the importing module's namespace.
    pub id: String,
    /// Id of the module the binding comes from.
    pub module: String,
    /// Name as exported by the source module (`*` for a namespace import).
    pub name: String,
    pub alias: Option<String>,
    /// Whether the binding was written in the `{ ... }` form.
    pub partial: bool,
}

/// One binding of an `export ...` clause that is not itself a declaration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExportEntry {
    pub id: String,
    /// Id of the module named by a `from` clause, if any.
    pub module: Option<String>,
    /// Name being exported (`*` for a wildcard, `default` for a default re-export).
    pub name: String,
    pub alias: Option<String>,
    pub partial: bool,
    pub default: bool,
    pub description: Option<String>,
    pub line: usize,
}

impl ExportEntry {
    /// Name other modules see this export under.
    #[must_use]
    pub fn exported_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.name == crate::ids::WILDCARD
    }
}
