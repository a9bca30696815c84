//! Prefix and kind enums for extracted declarations.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for the keyword they stand for in JavaScript source.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// MethodPrefix
// ---------------------------------------------------------------------------

/// Keyword preceding a class method name.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MethodPrefix {
    #[default]
    None,
    Static,
    Get,
    Set,
}

impl MethodPrefix {
    /// Parse the keyword captured in front of a method name. Unknown or
    /// empty keywords map to `None`.
    #[must_use]
    pub fn from_keyword(keyword: Option<&str>) -> Self {
        match keyword {
            Some("static") => Self::Static,
            Some("get") => Self::Get,
            Some("set") => Self::Set,
            _ => Self::None,
        }
    }

    /// Suffix appended to accessor method ids so that `get x` and `set x`
    /// do not collide.
    #[must_use]
    pub const fn id_suffix(self) -> Option<&'static str> {
        match self {
            Self::Get => Some("get"),
            Self::Set => Some("set"),
            Self::None | Self::Static => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Static => "static",
            Self::Get => "get",
            Self::Set => "set",
        }
    }
}

impl fmt::Display for MethodPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AttributePrefix
// ---------------------------------------------------------------------------

/// Keyword preceding a class attribute name.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AttributePrefix {
    #[default]
    None,
    Static,
}

impl AttributePrefix {
    #[must_use]
    pub fn from_keyword(keyword: Option<&str>) -> Self {
        match keyword {
            Some("static") => Self::Static,
            _ => Self::None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Static => "static",
        }
    }
}

impl fmt::Display for AttributePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DataKind
// ---------------------------------------------------------------------------

/// Binding keyword of a top-level variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DataKind {
    Const,
    Let,
    Var,
}

impl DataKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Const => "const",
            Self::Let => "let",
            Self::Var => "var",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "const" => Ok(Self::Const),
            "let" => Ok(Self::Let),
            "var" => Ok(Self::Var),
            other => Err(CoreError::InvalidIdentifier(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// The maps of an [`Environment`](crate::Environment), one per entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Module,
    File,
    Class,
    Method,
    Attribute,
    Function,
    Data,
}

impl EntityKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::File => "file",
            Self::Class => "class",
            Self::Method => "method",
            Self::Attribute => "attribute",
            Self::Function => "function",
            Self::Data => "data",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "module" => Ok(Self::Module),
            "file" => Ok(Self::File),
            "class" => Ok(Self::Class),
            "method" => Ok(Self::Method),
            "attribute" => Ok(Self::Attribute),
            "function" => Ok(Self::Function),
            "data" => Ok(Self::Data),
            other => Err(CoreError::InvalidIdentifier(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_prefix_from_keyword() {
        assert_eq!(MethodPrefix::from_keyword(Some("static")), MethodPrefix::Static);
        assert_eq!(MethodPrefix::from_keyword(Some("get")), MethodPrefix::Get);
        assert_eq!(MethodPrefix::from_keyword(Some("set")), MethodPrefix::Set);
        assert_eq!(MethodPrefix::from_keyword(Some("async")), MethodPrefix::None);
        assert_eq!(MethodPrefix::from_keyword(None), MethodPrefix::None);
    }

    #[test]
    fn only_accessors_carry_an_id_suffix() {
        assert_eq!(MethodPrefix::Get.id_suffix(), Some("get"));
        assert_eq!(MethodPrefix::Set.id_suffix(), Some("set"));
        assert_eq!(MethodPrefix::Static.id_suffix(), None);
        assert_eq!(MethodPrefix::None.id_suffix(), None);
    }

    #[test]
    fn enums_serialize_snake_case() {
        let json = serde_json::to_string(&AttributePrefix::Static).unwrap();
        assert_eq!(json, "\"static\"");
        let json = serde_json::to_string(&DataKind::Let).unwrap();
        assert_eq!(json, "\"let\"");
        let json = serde_json::to_string(&MethodPrefix::None).unwrap();
        assert_eq!(json, "\"none\"");
    }

    #[test]
    fn entity_kind_parses_every_display_form() {
        for kind in [
            EntityKind::Module,
            EntityKind::File,
            EntityKind::Class,
            EntityKind::Method,
            EntityKind::Attribute,
            EntityKind::Function,
            EntityKind::Data,
        ] {
            assert_eq!(kind.to_string().parse::<EntityKind>().unwrap(), kind);
        }
        assert!("interface".parse::<EntityKind>().is_err());
    }

    #[test]
    fn data_kind_parses_keywords() {
        assert_eq!("const".parse::<DataKind>().unwrap(), DataKind::Const);
        assert_eq!("var".parse::<DataKind>().unwrap(), DataKind::Var);
        assert!("static".parse::<DataKind>().is_err());
    }
}
