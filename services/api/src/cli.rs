use crate::infra::build_lookup_service;
use crate::server;
use candidate_lookup::config::AppConfig;
use candidate_lookup::error::AppError;
use candidate_lookup::lookup::{LookupError, SearchResult, NOT_FOUND_MESSAGE};
use candidate_lookup::telemetry;
use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser, Debug)]
#[command(
    name = "Candidate Lookup",
    about = "Find Teamtailor candidates by phone number over HTTP or from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Look up a single phone number and print the result as JSON
    Lookup(LookupArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct LookupArgs {
    /// Phone number as stored or typed, with or without country code
    phone_number: String,
    /// Include traversal statistics in the output
    #[arg(long)]
    stats: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Lookup(args) => run_lookup(args).await,
    }
}

async fn run_lookup(args: LookupArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let service = build_lookup_service(&config)?;

    let output = lookup_output(service.lookup(&args.phone_number).await, args.stats)?;

    println!(
        "{}",
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| output.to_string())
    );
    Ok(())
}

/// Renders a lookup outcome with the same bodies the HTTP route returns.
fn lookup_output(
    outcome: Result<SearchResult, LookupError>,
    stats: bool,
) -> Result<Value, LookupError> {
    let (mut body, metadata) = match outcome {
        Ok(result) => (json!(result.view()), result.query_metadata),
        Err(LookupError::NotFound {
            deep_link,
            metadata,
        }) => (
            json!({
                "error": NOT_FOUND_MESSAGE,
                "ttquery": deep_link,
            }),
            metadata,
        ),
        Err(other) => return Err(other),
    };

    if stats {
        body["query_metadata"] = json!(metadata);
    }
    Ok(body)
}
