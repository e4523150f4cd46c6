use clap::Parser;
use coincap_cli::cli::{dispatch, exit_status, Cli};
use coincap_cli::telemetry::init_telemetry;
use coincap_cli::{CliError, CoinCapProvider};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_telemetry(cli.verbose);

    let result = run(&cli).await;
    exit_status(&result)
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    let config = cli.config()?;
    tracing::debug!(api_url = %config.api_url, timeout = ?config.timeout, "Loaded configuration");

    let provider = CoinCapProvider::new(config.timeout)?;

    let mut stdout = std::io::stdout().lock();
    dispatch(&cli.command, &provider, &config, &mut stdout).await
}
