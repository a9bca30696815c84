//! Resolution of export entries to the entities they document.
//!
//! An export entry names a binding; documenting it needs the class,
//! function, data, or module that binding finally refers to. The source
//! module comes from the entry's `from` clause, else from the import that
//! introduced the local name, else from the exporting module itself.
//! Re-exports are followed until a declaration is reached.

use std::collections::HashSet;

use champ_core::Environment;
use champ_core::entities::{ExportEntry, File};
use champ_core::enums::EntityKind;
use champ_core::ids::{self, DEFAULT_EXPORT, WILDCARD};
use serde::Serialize;

use crate::error::ExtractError;

/// What an export documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportTarget {
    pub kind: EntityKind,
    pub id: String,
}

impl ExportTarget {
    fn new(kind: EntityKind, id: &str) -> Self {
        Self {
            kind,
            id: id.to_string(),
        }
    }
}

/// An export entry together with the entity it resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedExport {
    pub export_id: String,
    /// Name under which the entity is exported.
    pub exported_name: String,
    pub default: bool,
    pub line: usize,
    pub description: Option<String>,
    pub target: ExportTarget,
}

/// Resolved exports of a file in line order, plus the entries that could
/// not be resolved.
#[derive(Debug, Default)]
pub struct ExportResolution {
    pub resolved: Vec<ResolvedExport>,
    pub unresolved: Vec<ExtractError>,
}

/// Read-only resolver over a built environment.
#[derive(Debug, Clone, Copy)]
pub struct ExportResolver<'env> {
    env: &'env Environment,
}

impl<'env> ExportResolver<'env> {
    #[must_use]
    pub const fn new(env: &'env Environment) -> Self {
        Self { env }
    }

    /// Resolve every export entry of `module_id`'s file.
    ///
    /// # Errors
    /// Returns `CoreError::NotFound` (wrapped) if the module has no file.
    pub fn resolve_module(&self, module_id: &str) -> Result<ExportResolution, ExtractError> {
        let module = self.env.module(module_id)?;
        let file = self.env.file(&module.file_id)?;
        Ok(self.resolve_file(file))
    }

    /// Resolve every export entry of `file`, in line order.
    #[must_use]
    pub fn resolve_file(&self, file: &File) -> ExportResolution {
        let mut resolution = ExportResolution::default();

        for entry in file.exports_in_line_order() {
            let mut visited = HashSet::new();
            match self.resolve_entry(file, entry, &mut visited) {
                Some(target) => resolution.resolved.push(ResolvedExport {
                    export_id: entry.id.clone(),
                    exported_name: entry.exported_name().to_string(),
                    default: entry.default,
                    line: entry.line,
                    description: entry.description.clone(),
                    target,
                }),
                None => {
                    let error = ExtractError::UnresolvableReference {
                        export_id: entry.id.clone(),
                        module_id: self.source_of(file, entry).0,
                    };
                    tracing::debug!(%error, "dropping export");
                    resolution.unresolved.push(error);
                }
            }
        }

        resolution
    }

    /// Exported classes, functions, and data of `module_id` in line order,
    /// with its wildcard re-exports expanded.
    #[must_use]
    pub fn exported_entities(&self, module_id: &str) -> Vec<ExportTarget> {
        let mut visited = HashSet::new();
        let mut targets = Vec::new();
        self.collect_exported(module_id, &mut visited, &mut targets);
        targets
    }

    fn collect_exported(
        &self,
        module_id: &str,
        visited: &mut HashSet<String>,
        targets: &mut Vec<ExportTarget>,
    ) {
        if !visited.insert(module_id.to_string()) {
            return;
        }
        let Some(file) = self.env.file_for_module(module_id) else {
            return;
        };

        let mut lined: Vec<(usize, ExportTarget)> = Vec::new();
        for member in file.members_in_line_order() {
            if is_exported(file, member.kind, &member.id) {
                lined.push((member.line, ExportTarget::new(member.kind, &member.id)));
            }
        }
        for entry in file.exports_in_line_order() {
            if entry.is_wildcard() && entry.alias.is_none() {
                let (source, _) = self.source_of(file, entry);
                let mut nested = Vec::new();
                self.collect_exported(&source, visited, &mut nested);
                lined.extend(nested.into_iter().map(|target| (entry.line, target)));
            } else if let Some(target) = self.resolve_entry(file, entry, &mut HashSet::new()) {
                lined.push((entry.line, target));
            }
        }

        lined.sort_by_key(|(line, _)| *line);
        targets.extend(lined.into_iter().map(|(_, target)| target));
    }

    /// Source module and name an entry refers to.
    fn source_of(&self, file: &File, entry: &ExportEntry) -> (String, String) {
        if let Some(module) = &entry.module {
            return (module.clone(), entry.name.clone());
        }
        let local = ids::join(&file.module_id, &entry.name);
        match file.imports.get(&local) {
            Some(import) if import.partial || import.name == WILDCARD => {
                (import.module.clone(), import.name.clone())
            }
            Some(import) => (import.module.clone(), DEFAULT_EXPORT.to_string()),
            None => (file.module_id.clone(), entry.name.clone()),
        }
    }

    fn resolve_entry(
        &self,
        file: &File,
        entry: &ExportEntry,
        visited: &mut HashSet<(String, String)>,
    ) -> Option<ExportTarget> {
        let (module_id, name) = self.source_of(file, entry);
        if !visited.insert((module_id.clone(), name.clone())) {
            return None;
        }
        let source = self.env.file_for_module(&module_id)?;

        if name == WILDCARD {
            return Some(ExportTarget::new(EntityKind::Module, &module_id));
        }
        let local = module_id == file.module_id;
        self.find(source, &name, !local)
            .or_else(|| self.follow_reexport(source, &name, visited))
    }

    /// Declaration of `source` bound to `name`.
    fn find(&self, source: &File, name: &str, require_exported: bool) -> Option<ExportTarget> {
        if name == DEFAULT_EXPORT {
            let mut classes: Vec<_> = source.classes.values().filter(|c| c.default).collect();
            classes.sort_by_key(|c| c.line);
            if let Some(class) = classes.first() {
                return Some(ExportTarget::new(EntityKind::Class, &class.id));
            }
            let mut functions: Vec<_> = source.functions.values().filter(|f| f.default).collect();
            functions.sort_by_key(|f| f.line);
            if let Some(function) = functions.first() {
                return Some(ExportTarget::new(EntityKind::Function, &function.id));
            }
            let mut data: Vec<_> = source.data.values().filter(|d| d.default).collect();
            data.sort_by_key(|d| d.line);
            return data
                .first()
                .map(|data| ExportTarget::new(EntityKind::Data, &data.id));
        }

        let id = ids::join(&source.module_id, name);
        let visible = |exported: bool| exported || !require_exported;
        if let Some(class) = source.classes.get(&id).filter(|c| visible(c.exported)) {
            return Some(ExportTarget::new(EntityKind::Class, &class.id));
        }
        if let Some(function) = source.functions.get(&id).filter(|f| visible(f.exported)) {
            return Some(ExportTarget::new(EntityKind::Function, &function.id));
        }
        source
            .data
            .get(&id)
            .filter(|d| visible(d.exported))
            .map(|data| ExportTarget::new(EntityKind::Data, &data.id))
    }

    /// Follow the export entries of `source` that may re-export `name`:
    /// a matching named entry first, then every un-aliased wildcard.
    fn follow_reexport(
        &self,
        source: &File,
        name: &str,
        visited: &mut HashSet<(String, String)>,
    ) -> Option<ExportTarget> {
        let exports = source.exports_in_line_order();
        let named = exports
            .iter()
            .filter(|candidate| !candidate.is_wildcard())
            .filter(|candidate| {
                candidate.exported_name() == name || (name == DEFAULT_EXPORT && candidate.default)
            })
            .find_map(|candidate| self.resolve_entry(source, candidate, visited));
        if named.is_some() || name == DEFAULT_EXPORT {
            return named;
        }

        exports
            .iter()
            .filter(|candidate| candidate.is_wildcard() && candidate.alias.is_none())
            .find_map(|candidate| {
                let (module_id, _) = self.source_of(source, candidate);
                if !visited.insert((module_id.clone(), name.to_string())) {
                    return None;
                }
                let target = self.env.file_for_module(&module_id)?;
                self.find(target, name, true)
                    .or_else(|| self.follow_reexport(target, name, visited))
            })
    }
}

fn is_exported(file: &File, kind: EntityKind, id: &str) -> bool {
    match kind {
        EntityKind::Class => file.classes.get(id).is_some_and(|c| c.exported),
        EntityKind::Function => file.functions.get(id).is_some_and(|f| f.exported),
        EntityKind::Data => file.data.get(id).is_some_and(|d| d.exported),
        _ => false,
    }
}
