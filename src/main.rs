//! Release Notifier
//!
//! Entry point for the release-notifier application.

use release_notifier::config::{Cli, Command, ValidatedConfig, write_default_config};
use release_notifier::release::{ReleaseError, ReleaseFields, ReleaseMetadata};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, print_delivery_hint, print_release_hint, setup_tracing};
use run::{Job, RunOutcome};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    let job = match resolve_job(&cli) {
        Ok(job) => job,
        Err(e) => {
            eprintln!("Release data error: {e}");
            print_release_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    run_application(&config, job)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Decides what to deliver; release data is only gathered when announcing.
fn resolve_job(cli: &Cli) -> Result<Job, ReleaseError> {
    if cli.is_webhook_test() {
        return Ok(Job::TestWebhook);
    }

    ReleaseMetadata::gather(
        ReleaseFields::from(&cli.release),
        cli.release.event_path.as_deref(),
    )
    .map(Job::Notify)
}

/// Runs the job on a single-threaded runtime and maps the outcome to an exit code.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_application(config: &ValidatedConfig, job: Job) -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create Tokio runtime: {e}");
            return exit_code::runtime_error();
        }
    };

    let is_probe = matches!(job, Job::TestWebhook);

    match runtime.block_on(run::execute(config, job)) {
        Ok(RunOutcome::DryRun(payload)) => {
            println!("{payload}");
            exit_code::SUCCESS
        }
        Ok(RunOutcome::Sent(delivered)) => {
            if is_probe {
                println!("✅ Webhook test successful (response: {})", delivered.body);
            }
            exit_code::SUCCESS
        }
        Ok(RunOutcome::Suppressed) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            print_delivery_hint(&e);
            exit_code::runtime_error()
        }
    }
}
