mod cli;
mod commands;
mod error;
mod output;
mod params;

use clap::Parser;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use dnac_api::{ApiClient, TransportConfig};

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Completions don't need a controller connection
        Command::Completions { shell } => {
            commands::generate_completions(shell);
            Ok(())
        }

        // Everything else requires controller credentials
        cmd => {
            let client = build_client(&cli.global)?;
            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &client, &cli.global).await
        }
    }
}

/// Build an `ApiClient` from the environment-backed global options.
///
/// All three of controller, username, and password are required; any
/// missing one produces the usage diagnostic with the `export` examples
/// and exit code 1.
fn build_client(global: &GlobalOpts) -> Result<ApiClient, CliError> {
    let (Some(controller), Some(username), Some(password)) = (
        global.controller.as_deref(),
        global.username.clone(),
        global.password.as_deref(),
    ) else {
        return Err(CliError::MissingEnvironment);
    };

    let url = normalize_controller_url(controller)?;

    let transport = TransportConfig {
        timeout: std::time::Duration::from_secs(global.timeout),
        ..TransportConfig::default()
    };

    ApiClient::new(
        url,
        username,
        SecretString::from(password.to_owned()),
        &transport,
    )
    .map_err(CliError::from)
}

/// Accept a bare host/IP (the usual `DNAC_IP` form) or a full URL.
fn normalize_controller_url(controller: &str) -> Result<url::Url, CliError> {
    let with_scheme = if controller.contains("://") {
        controller.to_owned()
    } else {
        format!("https://{controller}")
    };
    with_scheme.parse().map_err(|_| CliError::Validation {
        field: "controller".into(),
        reason: format!("invalid URL: {controller}"),
    })
}
