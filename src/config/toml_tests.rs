//! Tests for TOML configuration parsing.

use super::ConfigError;
use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
            [webhook]
            url = "https://hooks.example.com/services/T/B/X"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        assert_eq!(
            config.webhook.url.as_deref(),
            Some("https://hooks.example.com/services/T/B/X")
        );
        assert!(config.notify.mentions.is_empty());
        assert!(!config.notify.notify_on_drafts);
    }

    #[test]
    fn parse_full_config() {
        let toml = r##"
            [webhook]
            url = "https://hooks.example.com/services/T/B/X"
            channel = "#releases"
            timeout = 15

            [notify]
            mentions = ["U1", "U2"]
            notify_on_drafts = true
            action_items = ["Update documentation", "Test integration"]
        "##;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.webhook.channel.as_deref(), Some("#releases"));
        assert_eq!(config.webhook.timeout, Some(15));
        assert_eq!(config.notify.mentions, ["U1", "U2"]);
        assert!(config.notify.notify_on_drafts);
        assert_eq!(
            config.notify.action_items,
            ["Update documentation", "Test integration"]
        );
    }

    #[test]
    fn empty_config_is_valid() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.webhook.url.is_none());
        assert!(config.notify.action_items.is_empty());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let toml = r#"
            [webhook]
            url = "https://hooks.example.com/services/T/B/X"
            retries = 3
        "#;

        assert!(matches!(
            TomlConfig::parse(toml),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn unknown_section_is_rejected() {
        assert!(matches!(
            TomlConfig::parse("[queue]\nname = \"x\""),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let toml = r#"
            [notify]
            mentions = "U1"
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert!(config.webhook.url.is_none());
        assert!(!config.notify.notify_on_drafts);
    }

    #[test]
    fn default_template_documents_every_option() {
        let template = default_config_template();

        for key in [
            "url",
            "channel",
            "timeout",
            "mentions",
            "notify_on_drafts",
            "action_items",
        ] {
            assert!(template.contains(key), "template should mention {key}");
        }
    }
}
