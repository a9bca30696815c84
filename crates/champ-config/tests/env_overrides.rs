//! `CHAMP_*` environment variables override every file layer.

use std::fs;

use champ_config::ChampConfig;
use figment::Jail;

#[test]
fn env_sets_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("CHAMP_BUILD__PARALLEL", "true");
        jail.set_env("CHAMP_OUTPUT__PRETTY", "false");

        let config = ChampConfig::load().expect("config loads");
        assert!(config.build.parallel);
        assert!(!config.output.pretty);
        Ok(())
    });
}

#[test]
fn env_beats_project_config() {
    Jail::expect_with(|jail| {
        fs::create_dir_all(jail.directory().join(".champollion")).map_err(|e| e.to_string())?;
        jail.create_file(".champollion/config.toml", "[build]\nwarn_on_collisions = true\n")?;
        jail.set_env("CHAMP_BUILD__WARN_ON_COLLISIONS", "false");

        let config = ChampConfig::load().expect("config loads");
        assert!(!config.build.warn_on_collisions);
        Ok(())
    });
}

#[test]
fn dotenv_file_feeds_the_env_layer() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "CHAMP_BUILD__FOLLOW_LINKS=true\n")?;

        let config = ChampConfig::load_with_dotenv().expect("config loads");
        assert!(config.build.follow_links);
        Ok(())
    });
}
