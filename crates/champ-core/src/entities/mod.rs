//! Entity structs for every documentable declaration.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the
//! environment can be dumped as JSON and validated against its schema.
//! Maps are `BTreeMap`s keyed by dotted identifier, giving a stable output
//! order; use the `*_in_line_order` helpers for source order.

mod class;
mod clause;
mod data;
mod file;
mod function;
mod module;

pub use class::{Attribute, Class, Method};
pub use clause::{ExportEntry, ImportEntry};
pub use data::Data;
pub use file::{File, Member};
pub use function::Function;
pub use module::Module;
