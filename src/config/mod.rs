//! Configuration layer for release-notifier.
//!
//! This module provides:
//! - CLI argument parsing with environment fallbacks ([`Cli`], [`Command`], [`ReleaseArgs`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values passed on the command line
//! 2. **Environment variables** - The fallback declared on each CLI argument
//! 3. **TOML config file** - Values from the configuration file
//! 4. **Built-in defaults** - Hardcoded default values
//!
//! The webhook URL has no default and must come from one of the first three.
//!
//! For the list options (`mentions`, `action_items`), a non-empty CLI/env list
//! **replaces** the TOML list entirely (not merged).
//!
//! # Boolean Flag Semantics
//!
//! `notify_on_drafts` uses OR semantics: if enabled in either CLI/env or TOML,
//! the result is `true`. The CLI cannot switch off a TOML `true`.
//!
//! # Release Metadata
//!
//! Release fields ([`ReleaseArgs`]) are parsed here but validated by
//! [`crate::release::ReleaseMetadata`], after this configuration. A missing
//! webhook URL is therefore reported before a missing release tag.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, ReleaseArgs};
pub use error::{ConfigError, field};
pub use self::toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
