//! Tests for notification options: channel, mentions, action items, drafts.

use super::*;

fn with_webhook(args: &[&str]) -> Cli {
    let mut full = vec!["--webhook-url", WEBHOOK];
    full.extend(args);
    cli(&full)
}

mod channel {
    use super::*;

    #[test]
    fn no_channel_by_default() {
        let config = ValidatedConfig::from_raw(&with_webhook(&[]), None).unwrap();
        assert!(config.options.channel_override.is_none());
    }

    #[test]
    fn channel_from_toml() {
        let toml = toml("[webhook]\nchannel = \"#deploys\"");
        let config = ValidatedConfig::from_raw(&with_webhook(&[]), Some(&toml)).unwrap();

        assert_eq!(config.options.channel_override.as_deref(), Some("#deploys"));
    }

    #[test]
    fn cli_channel_overrides_toml() {
        let toml = toml("[webhook]\nchannel = \"#deploys\"");
        let config =
            ValidatedConfig::from_raw(&with_webhook(&["--channel", "#releases"]), Some(&toml))
                .unwrap();

        assert_eq!(config.options.channel_override.as_deref(), Some("#releases"));
    }

    #[test]
    fn blank_channel_is_ignored() {
        let config = ValidatedConfig::from_raw(&with_webhook(&["--channel", " "]), None).unwrap();
        assert!(config.options.channel_override.is_none());
    }
}

mod lists {
    use super::*;

    #[test]
    fn items_are_trimmed_and_empty_ones_dropped() {
        let config = ValidatedConfig::from_raw(
            &with_webhook(&["--action-item", " Update docs ,, Tell support ,"]),
            None,
        )
        .unwrap();

        assert_eq!(config.options.action_items, ["Update docs", "Tell support"]);
    }

    #[test]
    fn mentions_keep_order() {
        let config = ValidatedConfig::from_raw(
            &with_webhook(&["--mention", "U2", "--mention", "U1,U3"]),
            None,
        )
        .unwrap();

        assert_eq!(config.options.mention_ids, ["U2", "U1", "U3"]);
    }

    #[test]
    fn toml_lists_used_without_cli_lists() {
        let toml = toml(
            r#"
            [notify]
            mentions = ["U9"]
            action_items = ["Ship it", "  "]
        "#,
        );
        let config = ValidatedConfig::from_raw(&with_webhook(&[]), Some(&toml)).unwrap();

        assert_eq!(config.options.mention_ids, ["U9"]);
        assert_eq!(config.options.action_items, ["Ship it"]);
    }

    #[test]
    fn cli_lists_replace_toml_lists() {
        let toml = toml(
            r#"
            [notify]
            mentions = ["U9"]
            action_items = ["From file"]
        "#,
        );
        let config = ValidatedConfig::from_raw(
            &with_webhook(&["--mention", "U1", "--action-item", "From cli"]),
            Some(&toml),
        )
        .unwrap();

        assert_eq!(config.options.mention_ids, ["U1"]);
        assert_eq!(config.options.action_items, ["From cli"]);
    }

    #[test]
    fn blank_cli_list_falls_back_to_toml() {
        let toml = toml("[notify]\nmentions = [\"U9\"]");
        let config =
            ValidatedConfig::from_raw(&with_webhook(&["--mention", " "]), Some(&toml)).unwrap();

        assert_eq!(config.options.mention_ids, ["U9"]);
    }
}

mod drafts {
    use super::*;

    #[test]
    fn drafts_off_by_default() {
        let config = ValidatedConfig::from_raw(&with_webhook(&[]), None).unwrap();
        assert!(!config.options.notify_on_drafts);
    }

    #[test]
    fn cli_enables_drafts() {
        let config =
            ValidatedConfig::from_raw(&with_webhook(&["--notify-on-drafts"]), None).unwrap();
        assert!(config.options.notify_on_drafts);
    }

    #[test]
    fn toml_enables_drafts() {
        let toml = toml("[notify]\nnotify_on_drafts = true");
        let config = ValidatedConfig::from_raw(&with_webhook(&[]), Some(&toml)).unwrap();

        assert!(config.options.notify_on_drafts);
    }
}

mod flags {
    use super::*;

    #[test]
    fn dry_run_and_verbose_pass_through() {
        let config =
            ValidatedConfig::from_raw(&with_webhook(&["--dry-run", "--verbose"]), None).unwrap();

        assert!(config.dry_run);
        assert!(config.verbose);
    }
}
