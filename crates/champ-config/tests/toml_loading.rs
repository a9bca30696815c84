//! TOML layering of `ChampConfig`, sandboxed with `figment::Jail`.

use std::fs;

use champ_config::ChampConfig;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_build_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[build]
parallel = true
follow_links = true
warn_on_collisions = false
"#,
        )?;

        let config: ChampConfig = Figment::from(Serialized::defaults(ChampConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(config.build.parallel);
        assert!(config.build.follow_links);
        assert!(!config.build.warn_on_collisions);
        assert!(config.output.pretty);
        Ok(())
    });
}

#[test]
fn missing_keys_keep_their_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[output]\npretty = false\n")?;

        let config: ChampConfig = Figment::from(Serialized::defaults(ChampConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(!config.output.pretty);
        assert_eq!(config.build, ChampConfig::default().build);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up() {
    Jail::expect_with(|jail| {
        fs::create_dir_all(jail.directory().join(".champollion")).map_err(|e| e.to_string())?;
        jail.create_file(".champollion/config.toml", "[build]\nparallel = true\n")?;

        let config = ChampConfig::load().expect("config loads");
        assert!(config.build.parallel);
        Ok(())
    });
}

#[test]
fn project_config_beats_global_config() {
    Jail::expect_with(|jail| {
        let root = jail.directory().to_path_buf();
        jail.set_env("XDG_CONFIG_HOME", root.join("xdg").display());
        jail.set_env("HOME", root.display());

        for dir in [".champollion", "xdg/champollion", ".config/champollion"] {
            fs::create_dir_all(root.join(dir)).map_err(|e| e.to_string())?;
        }
        let global = "[build]\nparallel = true\nfollow_links = true\n";
        jail.create_file("xdg/champollion/config.toml", global)?;
        jail.create_file(".config/champollion/config.toml", global)?;
        jail.create_file(".champollion/config.toml", "[build]\nparallel = false\n")?;

        let config = ChampConfig::load().expect("config loads");
        assert!(!config.build.parallel);
        assert!(config.build.follow_links);
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_config_error() {
    Jail::expect_with(|jail| {
        fs::create_dir_all(jail.directory().join(".champollion")).map_err(|e| e.to_string())?;
        jail.create_file(".champollion/config.toml", "[build]\nparallel = \"often\"\n")?;

        let error = ChampConfig::load().unwrap_err();
        assert!(error.to_string().starts_with("Configuration error"));
        Ok(())
    });
}
