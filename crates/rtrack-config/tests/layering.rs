use figment::Jail;
use pretty_assertions::assert_eq;
use rtrack_config::TrackerConfig;

#[test]
fn env_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("RTRACK_DATABASE__PATH", "/tmp/tracker.db");
        jail.set_env("RTRACK_MATRIX__NOTES_COMPONENT", "NOTAS");

        let config = TrackerConfig::load().expect("config loads");
        assert_eq!(config.database.path, "/tmp/tracker.db");
        assert_eq!(config.matrix.notes_component, "NOTAS");
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn project_toml_is_read() {
    Jail::expect_with(|jail| {
        jail.create_dir(".rtrack")?;
        jail.create_file(
            ".rtrack/config.toml",
            r#"
            [database]
            path = "project.db"

            [general]
            default_limit = 10
            "#,
        )?;

        let config = TrackerConfig::load().expect("config loads");
        assert_eq!(config.database.path, "project.db");
        assert_eq!(config.general.default_limit, 10);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".rtrack")?;
        jail.create_file(
            ".rtrack/config.toml",
            "[database]\npath = \"project.db\"\n",
        )?;
        jail.set_env("RTRACK_DATABASE__PATH", "env.db");

        let config = TrackerConfig::load().expect("config loads");
        assert_eq!(config.database.path, "env.db");
        Ok(())
    });
}

#[test]
fn invalid_limit_from_env_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("RTRACK_GENERAL__DEFAULT_LIMIT", "0");
        assert!(TrackerConfig::load().is_err());
        Ok(())
    });
}
