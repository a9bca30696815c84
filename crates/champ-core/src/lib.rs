//! # champ-core
//!
//! Entity model, identifiers, and error types for Champollion.
//!
//! This crate provides the types shared by every Champollion crate:
//! - Entity structs for every documentable declaration (modules, files,
//!   classes with their methods and attributes, functions, data, and the
//!   import/export clauses that tie files together)
//! - Prefix and kind enums
//! - Dotted identifier helpers and the sentinel names for anonymous
//!   functions and wildcard bindings
//! - The `Environment` aggregate that a directory build produces
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod environment;
pub mod errors;
pub mod ids;

pub use environment::Environment;
