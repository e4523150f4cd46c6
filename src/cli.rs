//! Command-line interface
//!
//! The `Command` enum is the full command table; `dispatch` routes a parsed
//! command to the query flow and `exit_status` is the only place that turns
//! a result into a process exit code.

use crate::{
    config::Config,
    constants::{API_URL_ENV, COINCAP_API_URL, REQUEST_TIMEOUT_SECS, TIMEOUT_ENV},
    error::CliError,
    provider::MarketDataProvider,
    query::run_query,
    types::QueryMode,
};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::process::ExitCode;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "coincap-cli",
    version,
    about = "Get cryptocurrency prices and market data",
    long_about = "Get cryptocurrency prices and market data from CoinCap.\n\n\
                  Use the price command to look up a token. For names with spaces, \
                  use - instead of spaces, for example terra-luna."
)]
pub struct Cli {
    /// CoinCap API base URL.
    #[arg(long, global = true, env = API_URL_ENV, default_value = COINCAP_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds.
    #[arg(long, global = true, env = TIMEOUT_ENV, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get price information of a token.
    ///
    /// For example `coincap-cli price bitcoin` prints the price of bitcoin,
    /// `coincap-cli price bitcoin --markets` lists its markets.
    Price(PriceArgs),
}

/// Arguments of the `price` command.
#[derive(Debug, Args)]
pub struct PriceArgs {
    /// Token identifier, e.g. bitcoin.
    pub token: String,

    /// Get the market listings of the token instead of its price.
    #[arg(short, long)]
    pub markets: bool,
}

impl Cli {
    /// Builds the runtime configuration from the parsed flags
    pub fn config(&self) -> Result<Config, CliError> {
        Config::new(self.api_url.clone(), self.timeout)
    }
}

/// Runs a parsed command against `provider`, writing results to `out`
pub async fn dispatch<W>(
    command: &Command,
    provider: &dyn MarketDataProvider,
    config: &Config,
    out: &mut W,
) -> Result<(), CliError>
where
    W: Write + ?Sized,
{
    match command {
        Command::Price(args) => {
            let mode = QueryMode::from_markets_flag(args.markets);
            tracing::debug!(
                token = %args.token,
                %mode,
                provider = provider.provider_name(),
                "Dispatching price command"
            );
            run_query(provider, &config.api_url, &args.token, mode, out).await
        }
    }
}

/// Numeric exit code for the outcome of a command
///
/// "Not found" and empty market listings are successful outcomes.
pub fn exit_code(result: &Result<(), CliError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => e.exit_code(),
    }
}

/// Writes the user-facing report for a failed command
pub fn report_error<W>(err: &mut W, e: &CliError) -> std::io::Result<()>
where
    W: Write + ?Sized,
{
    tracing::debug!(error = ?e, "Command failed");
    writeln!(err, "Error: {}", e)
}

/// Maps the outcome of a command to the process exit status, reporting
/// errors on stderr
pub fn exit_status(result: &Result<(), CliError>) -> ExitCode {
    if let Err(e) = result {
        let _ = report_error(&mut std::io::stderr().lock(), e);
    }
    ExitCode::from(exit_code(result))
}
