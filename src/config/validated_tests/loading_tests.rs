//! Tests for configuration loading and the init template.

use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, tempdir};

use super::*;

mod config_load {
    use super::*;

    #[test]
    fn load_from_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r##"
            [webhook]
            url = "{WEBHOOK}"
            channel = "#releases"

            [notify]
            mentions = ["U1"]
        "##
        )
        .unwrap();

        let cli = cli(&["--config", file.path().to_str().unwrap()]);
        let config = ValidatedConfig::load(&cli).unwrap();

        assert_eq!(config.webhook_url.as_str(), WEBHOOK);
        assert_eq!(config.options.channel_override.as_deref(), Some("#releases"));
        assert_eq!(config.options.mention_ids, ["U1"]);
    }

    #[test]
    fn load_without_config_file() {
        let cli = cli(&["--webhook-url", WEBHOOK, "--action-item", "Check dashboards"]);
        let config = ValidatedConfig::load(&cli).unwrap();

        assert_eq!(config.webhook_url.as_str(), WEBHOOK);
        assert_eq!(config.options.action_items, ["Check dashboards"]);
    }

    #[test]
    fn load_nonexistent_config_file_returns_error() {
        let cli = cli(&["--config", "nonexistent_file_12345.toml"]);
        let result = ValidatedConfig::load(&cli);

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn load_malformed_config_file_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[webhook\nurl = ").unwrap();

        let cli = cli(&["--config", file.path().to_str().unwrap()]);

        assert!(matches!(
            ValidatedConfig::load(&cli),
            Err(ConfigError::TomlParse(_))
        ));
    }
}

mod write_config {
    use super::super::super::validated::write_default_config;
    use super::*;

    #[test]
    fn write_default_config_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test-config.toml");

        write_default_config(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[webhook]"));
        assert!(content.contains("[notify]"));
    }

    #[test]
    fn written_template_loads_once_url_is_supplied() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("release-notifier.toml");
        write_default_config(&path).unwrap();

        let cli = cli(&[
            "--config",
            path.to_str().unwrap(),
            "--webhook-url",
            WEBHOOK,
        ]);
        let config = ValidatedConfig::load(&cli).unwrap();

        assert!(config.options.mention_ids.is_empty());
        assert!(!config.options.notify_on_drafts);
    }

    #[test]
    fn write_default_config_to_invalid_path_returns_error() {
        let path = Path::new("/nonexistent_dir_12345/config.toml");
        let result = write_default_config(path);

        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }
}
