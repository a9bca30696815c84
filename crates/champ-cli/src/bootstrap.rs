use anyhow::Context;
use champ_config::ChampConfig;

/// Load `.env`, the TOML layers, and `CHAMP_*` overrides.
pub fn load_config() -> anyhow::Result<ChampConfig> {
    let config = ChampConfig::load_with_dotenv().context("failed to load champollion config")?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}
