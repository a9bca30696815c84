//! Environment build settings.

use champ_parser::BuildOptions;
use serde::{Deserialize, Serialize};

const fn default_warn_on_collisions() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BuildConfig {
    /// Extract files on a rayon pool. Module resolution and merging stay
    /// sequential.
    #[serde(default)]
    pub parallel: bool,

    /// Follow symbolic links while walking the source tree.
    #[serde(default)]
    pub follow_links: bool,

    /// Log ids overwritten by a later file at `warn` level.
    #[serde(default = "default_warn_on_collisions")]
    pub warn_on_collisions: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            follow_links: false,
            warn_on_collisions: default_warn_on_collisions(),
        }
    }
}

impl From<&BuildConfig> for BuildOptions {
    fn from(config: &BuildConfig) -> Self {
        Self {
            parallel: config.parallel,
            follow_links: config.follow_links,
            warn_on_collisions: config.warn_on_collisions,
        }
    }
}
