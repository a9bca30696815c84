//! The global environment produced by a directory build.
//!
//! Maps are keyed by dotted identifier. Methods and attributes are stored
//! both inside their class and flattened here so that a documentation
//! directive can address any entity by kind and id alone.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Attribute, Class, Data, File, Function, Method, Module};
use crate::enums::EntityKind;
use crate::errors::CoreError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Environment {
    #[serde(rename = "module")]
    pub modules: BTreeMap<String, Module>,
    #[serde(rename = "class")]
    pub classes: BTreeMap<String, Class>,
    #[serde(rename = "method")]
    pub methods: BTreeMap<String, Method>,
    #[serde(rename = "attribute")]
    pub attributes: BTreeMap<String, Attribute>,
    #[serde(rename = "function")]
    pub functions: BTreeMap<String, Function>,
    pub data: BTreeMap<String, Data>,
    #[serde(rename = "file")]
    pub files: BTreeMap<String, File>,
}

impl Environment {
    /// Record a module and its file, flattening the file's declarations into
    /// the global maps.
    ///
    /// Returns the ids that were already present and got overwritten. The
    /// last writer wins.
    pub fn insert(&mut self, module: Module, file: File) -> Vec<String> {
        let mut collisions = Vec::new();

        for class in file.classes.values() {
            for method in class.methods.values() {
                note(&mut collisions, self.methods.insert(method.id.clone(), method.clone()), &method.id);
            }
            for attribute in class.attributes.values() {
                note(
                    &mut collisions,
                    self.attributes.insert(attribute.id.clone(), attribute.clone()),
                    &attribute.id,
                );
            }
            note(&mut collisions, self.classes.insert(class.id.clone(), class.clone()), &class.id);
        }
        for function in file.functions.values() {
            note(
                &mut collisions,
                self.functions.insert(function.id.clone(), function.clone()),
                &function.id,
            );
        }
        for data in file.data.values() {
            note(&mut collisions, self.data.insert(data.id.clone(), data.clone()), &data.id);
        }

        let module_id = module.id.clone();
        note(&mut collisions, self.modules.insert(module_id.clone(), module), &module_id);
        let file_id = file.id.clone();
        note(&mut collisions, self.files.insert(file_id.clone(), file), &file_id);

        collisions
    }

    /// Union `other` into `self`, key by key. Returns the overwritten ids.
    pub fn merge(&mut self, other: Self) -> Vec<String> {
        let mut collisions = Vec::new();
        merge_map(&mut self.modules, other.modules, &mut collisions);
        merge_map(&mut self.classes, other.classes, &mut collisions);
        merge_map(&mut self.methods, other.methods, &mut collisions);
        merge_map(&mut self.attributes, other.attributes, &mut collisions);
        merge_map(&mut self.functions, other.functions, &mut collisions);
        merge_map(&mut self.data, other.data, &mut collisions);
        merge_map(&mut self.files, other.files, &mut collisions);
        collisions
    }

    /// Module whose file is `file_id`.
    #[must_use]
    pub fn module_for_file(&self, file_id: &str) -> Option<&Module> {
        self.files
            .get(file_id)
            .and_then(|file| self.modules.get(&file.module_id))
    }

    /// File backing the module `module_id`.
    #[must_use]
    pub fn file_for_module(&self, module_id: &str) -> Option<&File> {
        self.modules
            .get(module_id)
            .and_then(|module| self.files.get(&module.file_id))
    }

    pub fn module(&self, id: &str) -> Result<&Module, CoreError> {
        self.modules.get(id).ok_or_else(|| not_found(EntityKind::Module, id))
    }

    pub fn file(&self, id: &str) -> Result<&File, CoreError> {
        self.files.get(id).ok_or_else(|| not_found(EntityKind::File, id))
    }

    pub fn class(&self, id: &str) -> Result<&Class, CoreError> {
        self.classes.get(id).ok_or_else(|| not_found(EntityKind::Class, id))
    }

    pub fn method(&self, id: &str) -> Result<&Method, CoreError> {
        self.methods.get(id).ok_or_else(|| not_found(EntityKind::Method, id))
    }

    pub fn attribute(&self, id: &str) -> Result<&Attribute, CoreError> {
        self.attributes
            .get(id)
            .ok_or_else(|| not_found(EntityKind::Attribute, id))
    }

    pub fn function(&self, id: &str) -> Result<&Function, CoreError> {
        self.functions
            .get(id)
            .ok_or_else(|| not_found(EntityKind::Function, id))
    }

    pub fn data(&self, id: &str) -> Result<&Data, CoreError> {
        self.data.get(id).ok_or_else(|| not_found(EntityKind::Data, id))
    }

    /// Look up any entity by kind and id, serialized as JSON.
    pub fn record(&self, kind: EntityKind, id: &str) -> Result<serde_json::Value, CoreError> {
        let value = match kind {
            EntityKind::Module => serde_json::to_value(self.module(id)?),
            EntityKind::File => serde_json::to_value(self.file(id)?),
            EntityKind::Class => serde_json::to_value(self.class(id)?),
            EntityKind::Method => serde_json::to_value(self.method(id)?),
            EntityKind::Attribute => serde_json::to_value(self.attribute(id)?),
            EntityKind::Function => serde_json::to_value(self.function(id)?),
            EntityKind::Data => serde_json::to_value(self.data(id)?),
        };
        value.map_err(|_| CoreError::InvalidIdentifier(id.to_string()))
    }
}

fn not_found(kind: EntityKind, id: &str) -> CoreError {
    CoreError::NotFound {
        kind,
        id: id.to_string(),
    }
}

fn note<T>(collisions: &mut Vec<String>, previous: Option<T>, id: &str) {
    if previous.is_some() {
        collisions.push(id.to_string());
    }
}

fn merge_map<T>(
    target: &mut BTreeMap<String, T>,
    source: BTreeMap<String, T>,
    collisions: &mut Vec<String>,
) {
    for (id, value) in source {
        if target.insert(id.clone(), value).is_some() {
            collisions.push(id);
        }
    }
}
