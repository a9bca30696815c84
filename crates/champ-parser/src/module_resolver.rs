//! Module identity and display-name resolution.
//!
//! A directory containing an `index.js` is a package: its index file is the
//! module named after the directory, and its other files are submodules
//! displayed under the package's name. Display names are guessed against
//! the names already resolved, so files must be resolved in walk order
//! (parents before children).

use std::collections::HashSet;

use champ_core::ids;

const INDEX_FILES: &[&str] = &["index.js", "index.jsx"];

/// Identifier and display name of one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleIdentity {
    pub id: String,
    pub name: String,
}

/// Resolves file ids to module identities, remembering every display name it
/// has handed out.
#[derive(Debug, Default)]
pub struct ModuleResolver {
    known_names: HashSet<String>,
}

impl ModuleResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the module of `file_id` (`repo/pkg/sub/index.js`), given the
    /// names of the files sharing its directory.
    pub fn resolve(&mut self, file_id: &str, siblings: &[String]) -> ModuleIdentity {
        let (hierarchy, file_name) = match file_id.rsplit_once('/') {
            Some((directory, file_name)) => (directory.split('/').collect::<Vec<_>>(), file_name),
            None => (Vec::new(), file_id),
        };
        let stem = file_name
            .rsplit_once('.')
            .map_or(file_name, |(stem, _)| stem);

        let identity = match hierarchy.split_last() {
            Some((directory, ancestors)) if INDEX_FILES.contains(&file_name) => ModuleIdentity {
                id: hierarchy.join("."),
                name: self.guess_name(ancestors, directory),
            },
            Some((directory, ancestors)) if has_index(siblings) => ModuleIdentity {
                id: ids::join(&hierarchy.join("."), stem),
                name: self.guess_name(ancestors, &format!("{directory}.{stem}")),
            },
            _ => ModuleIdentity {
                id: ids::join(&hierarchy.join("."), stem),
                name: stem.to_string(),
            },
        };

        self.known_names.insert(identity.name.clone());
        identity
    }

    /// Prefix `name` with the longest run of trailing ancestors that is
    /// itself a known display name.
    fn guess_name(&self, ancestors: &[&str], name: &str) -> String {
        (0..ancestors.len())
            .map(|start| ancestors[start..].join("."))
            .find(|candidate| self.known_names.contains(candidate))
            .map_or_else(|| name.to_string(), |candidate| format!("{candidate}.{name}"))
    }
}

fn has_index(siblings: &[String]) -> bool {
    siblings
        .iter()
        .any(|sibling| INDEX_FILES.contains(&sibling.as_str()))
}
