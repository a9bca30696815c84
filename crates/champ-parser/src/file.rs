//! Whole-file extraction.

use std::collections::HashSet;

use champ_core::entities::{ExportEntry, File};
use champ_core::ids::{self, DEFAULT_EXPORT};

use crate::docstring;
use crate::extractors::helpers::WildcardCounter;
use crate::extractors::{SourceContext, classes, data, exports, functions, imports};

/// Extract everything documentable from `content`, the text of `file_id`
/// belonging to module `module_id`.
///
/// Exports that merely re-state a local declaration (`export default Foo;`
/// where `Foo` is a class, function, or data of this file) are folded into
/// that declaration's `exported`/`default` flags and dropped from the
/// export map.
#[must_use]
pub fn extract_file(module_id: &str, file_id: &str, path: &str, content: &str) -> File {
    let source = SourceContext::new(module_id, file_id, content);
    let mut wildcards = WildcardCounter::default();

    let classes = classes::extract(&source);
    let functions = functions::extract(&source);
    let taken: HashSet<&str> = classes
        .keys()
        .chain(functions.keys())
        .map(String::as_str)
        .collect();
    let data = data::extract(&source, &taken);
    let imports = imports::extract(&source, &mut wildcards);
    let exports = exports::extract(&source, &mut wildcards);

    let mut file = File {
        id: file_id.to_string(),
        module_id: module_id.to_string(),
        path: path.to_string(),
        content: content.to_string(),
        description: docstring::file_description(&source.lines),
        classes,
        functions,
        data,
        imports,
        exports,
    };
    rewire_local_exports(&mut file);

    tracing::trace!(
        file = file_id,
        classes = file.classes.len(),
        functions = file.functions.len(),
        data = file.data.len(),
        imports = file.imports.len(),
        exports = file.exports.len(),
        "extracted file"
    );
    file
}

/// Fold export entries naming a local declaration into that declaration.
pub fn rewire_local_exports(file: &mut File) {
    let local: Vec<(String, String)> = file
        .exports
        .values()
        .filter(|entry| is_local_restatement(entry))
        .map(|entry| (entry.id.clone(), local_entity_id(file, entry)))
        .collect();

    for (export_id, entity_id) in local {
        let Some(entry) = file.exports.get(&export_id) else { continue };
        let default = entry.default;
        let description = entry.description.clone();

        let flags = if let Some(class) = file.classes.get_mut(&entity_id) {
            Some((&mut class.exported, &mut class.default, &mut class.description))
        } else if let Some(function) = file.functions.get_mut(&entity_id) {
            Some((&mut function.exported, &mut function.default, &mut function.description))
        } else {
            file.data
                .get_mut(&entity_id)
                .map(|data| (&mut data.exported, &mut data.default, &mut data.description))
        };

        if let Some((exported, entity_default, entity_description)) = flags {
            *exported = true;
            *entity_default |= default;
            if entity_description.is_none() {
                *entity_description = description;
            }
            file.exports.remove(&export_id);
        }
    }
}

/// An export without `from` that binds a name as itself or as `default`.
fn is_local_restatement(entry: &ExportEntry) -> bool {
    entry.module.is_none()
        && !entry.is_wildcard()
        && entry.alias.as_deref().is_none_or(|alias| alias == DEFAULT_EXPORT)
}

/// Id the entry's local name would have in this file's module.
fn local_entity_id(file: &File, entry: &ExportEntry) -> String {
    ids::join(&file.module_id, &entry.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(content: &str) -> File {
        extract_file("repo.mod", "repo/mod.js", "/tmp/repo/mod.js", content)
    }

    #[test]
    fn default_export_marks_local_class() {
        let file = extract("/** Awesome. */\nclass AwesomeClass {}\n\nexport default AwesomeClass;\n");
        let class = &file.classes["repo.mod.AwesomeClass"];
        assert!(class.exported);
        assert!(class.default);
        assert!(file.exports.is_empty());
    }

    #[test]
    fn named_export_marks_function_and_data() {
        let file = extract("function run() {}\nconst LIMIT = 3;\nexport { run, LIMIT };\n");
        assert!(file.functions["repo.mod.run"].exported);
        assert!(!file.functions["repo.mod.run"].default);
        assert!(file.data["repo.mod.LIMIT"].exported);
        assert!(file.exports.is_empty());
    }

    #[test]
    fn export_as_default_marks_local_declaration() {
        let file = extract("class Panel {}\nexport { Panel as default };\n");
        let class = &file.classes["repo.mod.Panel"];
        assert!(class.exported && class.default);
        assert!(file.exports.is_empty());
    }

    #[test]
    fn export_description_fills_a_missing_one() {
        let file = extract("const a = 1;\n\n/** Re-stated. */\nexport a;\n");
        assert_eq!(file.data["repo.mod.a"].description.as_deref(), Some("Re-stated."));
    }

    #[test]
    fn declaration_description_wins() {
        let file = extract("/** Own. */\nconst a = 1;\n\n/** Re-stated. */\nexport a;\n");
        assert_eq!(file.data["repo.mod.a"].description.as_deref(), Some("Own."));
    }

    #[test]
    fn foreign_and_aliased_exports_stay() {
        let file = extract(
            "import Thing from './thing';\nconst a = 1;\nexport Thing;\nexport { a as b };\nexport * from './other';\n",
        );
        let ids: Vec<&str> = file.exports.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["repo.mod.Thing", "repo.mod.WILDCARD_1", "repo.mod.b"]);
        assert!(!file.data["repo.mod.a"].exported);
    }

    #[test]
    fn file_description_is_recorded() {
        let file = extract("/**\n * Module docs.\n */\n\nconst a = 1;\n");
        assert_eq!(file.description.as_deref(), Some("Module docs."));
        assert_eq!(file.content, "/**\n * Module docs.\n */\n\nconst a = 1;\n");
        assert_eq!(file.path, "/tmp/repo/mod.js");
    }
}
