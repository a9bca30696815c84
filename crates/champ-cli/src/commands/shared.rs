use std::path::Path;

use anyhow::Context;
use champ_core::Environment;
use champ_parser::{BuildOptions, EnvironmentBuilder};

/// Build the environment of `dir` with the given options.
pub fn build_environment(dir: &Path, options: BuildOptions) -> anyhow::Result<Environment> {
    let environment = EnvironmentBuilder::new(options)
        .build(dir)
        .with_context(|| format!("failed to extract '{}'", dir.display()))?;

    tracing::info!(
        modules = environment.modules.len(),
        classes = environment.classes.len(),
        functions = environment.functions.len(),
        data = environment.data.len(),
        "environment built"
    );
    Ok(environment)
}
