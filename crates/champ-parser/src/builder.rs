//! Directory walk and environment assembly.
//!
//! ## Walk rules
//!
//! - Only `.js` and `.jsx` files are extracted.
//! - Files and directories whose name starts with `.` are skipped. No
//!   ignore files are honored.
//! - Entries are visited in file-name order, each directory before its
//!   subdirectories, so module names resolve parents first.
//!
//! Module resolution and the merge into the environment always run in walk
//! order. Only the per-file extraction in between may run in parallel.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use champ_core::Environment;
use champ_core::entities::{File, Module};
use ignore::WalkBuilder;
use rayon::prelude::*;

use crate::error::ExtractError;
use crate::file::extract_file;
use crate::module_resolver::{ModuleIdentity, ModuleResolver};

const EXTENSIONS: &[&str] = &["js", "jsx"];

/// Knobs of an environment build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Extract files on the rayon pool.
    pub parallel: bool,
    /// Follow symbolic links while walking.
    pub follow_links: bool,
    /// Log overwritten ids at `warn` instead of `debug`.
    pub warn_on_collisions: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            parallel: false,
            follow_links: false,
            warn_on_collisions: true,
        }
    }
}

/// A source file scheduled for extraction, with its resolved module.
#[derive(Debug, Clone)]
struct Job {
    file_id: String,
    path: PathBuf,
    module: ModuleIdentity,
}

/// Builds an [`Environment`] from a source directory.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentBuilder {
    options: BuildOptions,
}

impl EnvironmentBuilder {
    #[must_use]
    pub const fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> BuildOptions {
        self.options
    }

    /// Walk `root` and extract every JavaScript file below it.
    ///
    /// # Errors
    /// Returns [`ExtractError::InputNotAccessible`] if `root` is missing or
    /// is not a readable directory. Unreadable files are logged and skipped.
    pub fn build(&self, root: &Path) -> Result<Environment, ExtractError> {
        let canonical = fs::canonicalize(root).map_err(|source| ExtractError::InputNotAccessible {
            path: root.to_path_buf(),
            source,
        })?;
        if !canonical.is_dir() {
            return Err(ExtractError::InputNotAccessible {
                path: root.to_path_buf(),
                source: std::io::Error::other("not a directory"),
            });
        }
        fs::read_dir(&canonical).map_err(|source| ExtractError::InputNotAccessible {
            path: root.to_path_buf(),
            source,
        })?;

        let repository = canonical
            .file_name()
            .map_or_else(|| "root".to_string(), |name| name.to_string_lossy().into_owned());
        let jobs = self.plan(&canonical, &repository);
        tracing::debug!(root = %canonical.display(), files = jobs.len(), "extracting");

        let files: Vec<Option<File>> = if self.options.parallel {
            jobs.par_iter().map(run_job).collect()
        } else {
            jobs.iter().map(run_job).collect()
        };

        let mut environment = Environment::default();
        for (job, file) in jobs.into_iter().zip(files) {
            let Some(file) = file else { continue };
            let module = Module {
                id: job.module.id,
                name: job.module.name,
                file_id: job.file_id,
                path: file.path.clone(),
            };
            let collisions = environment.insert(module, file);
            self.report_collisions(&collisions);
        }

        Ok(environment)
    }

    /// Walk `root`, group files by directory, and resolve their modules.
    fn plan(&self, root: &Path, repository: &str) -> Vec<Job> {
        let mut directories: BTreeMap<PathBuf, Vec<(String, PathBuf)>> = BTreeMap::new();
        for (relative_dir, name, path) in walk(root, self.options.follow_links) {
            directories.entry(relative_dir).or_default().push((name, path));
        }

        let mut resolver = ModuleResolver::new();
        let mut jobs = Vec::new();
        for (relative_dir, mut files) in directories {
            files.sort();
            let siblings: Vec<String> = files.iter().map(|(name, _)| name.clone()).collect();

            for (name, path) in files {
                let file_id = file_id(repository, &relative_dir, &name);
                let module = resolver.resolve(&file_id, &siblings);
                jobs.push(Job {
                    file_id,
                    path,
                    module,
                });
            }
        }
        jobs
    }

    fn report_collisions(&self, collisions: &[String]) {
        for id in collisions {
            if self.options.warn_on_collisions {
                tracing::warn!(id = %id, "duplicate id, keeping the last definition");
            } else {
                tracing::debug!(id = %id, "duplicate id, keeping the last definition");
            }
        }
    }
}

/// Build the environment of `root` with default options.
///
/// # Errors
/// See [`EnvironmentBuilder::build`].
pub fn fetch_environment(root: &Path) -> Result<Environment, ExtractError> {
    EnvironmentBuilder::default().build(root)
}

/// Accepted files below `root` as `(relative directory, file name, path)`.
fn walk(root: &Path, follow_links: bool) -> Vec<(PathBuf, String, PathBuf)> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(true)
        .follow_links(follow_links)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!(%error, "skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|kind| kind.is_file()) {
            continue;
        }
        let path = entry.path();
        let accepted = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| EXTENSIONS.contains(&extension));
        if !accepted {
            continue;
        }
        let Some(name) = path.file_name().map(|name| name.to_string_lossy().into_owned()) else {
            continue;
        };
        let relative_dir = path
            .parent()
            .and_then(|parent| parent.strip_prefix(root).ok())
            .map(Path::to_path_buf)
            .unwrap_or_default();
        files.push((relative_dir, name, path.to_path_buf()));
    }
    files
}

/// `repo/sub/dir/name.js` for a file below the repository root.
fn file_id(repository: &str, relative_dir: &Path, name: &str) -> String {
    let mut segments = vec![repository.to_string()];
    segments.extend(
        relative_dir
            .components()
            .map(|component| component.as_os_str().to_string_lossy().into_owned()),
    );
    segments.push(name.to_string());
    segments.join("/")
}

fn run_job(job: &Job) -> Option<File> {
    match fs::read_to_string(&job.path) {
        Ok(content) => Some(extract_file(
            &job.module.id,
            &job.file_id,
            &job.path.to_string_lossy(),
            &content,
        )),
        Err(source) => {
            let error = ExtractError::UnreadableFile {
                path: job.path.clone(),
                source,
            };
            tracing::warn!(%error, "skipping file");
            None
        }
    }
}
