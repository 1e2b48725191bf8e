use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use venues::ClientConfig;

/// venues - backend exchange client
///
/// POST a JSON payload to the backend's /api/vue endpoint, or wait for a while.
///
/// Requests without --base-url are sent relative to the origin
/// (defaults to http://127.0.0.1:8060; also via VENUES_ORIGIN).
///
/// Examples:
///   venues exchange --data '{"foo": 1}'
///   venues exchange --base-url https://host.example --data-file payload.json
///   venues delay 500
#[derive(Parser, Debug)]
#[command(author, version = venues::VERSION, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Origin that relative requests resolve against
    #[arg(long, env = "VENUES_ORIGIN", value_name = "URL", global = true)]
    pub origin: Option<String>,

    /// Per-request timeout in milliseconds (no timeout by default)
    #[arg(
        long = "timeout-ms",
        env = "VENUES_TIMEOUT_MS",
        value_name = "MS",
        global = true
    )]
    pub timeout_ms: Option<u64>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// POST a JSON payload to /api/vue and print the response body
    Exchange(ExchangeArgs),

    /// Wait for the given number of milliseconds
    Delay(DelayArgs),
}

#[derive(clap::Args, Debug)]
pub struct ExchangeArgs {
    /// Base URL to send the request to (overrides the origin)
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// Inline JSON payload
    #[arg(long, value_name = "JSON", conflicts_with = "data_file")]
    pub data: Option<String>,

    /// Read the JSON payload from a file
    #[arg(long = "data-file", value_name = "PATH")]
    pub data_file: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct DelayArgs {
    /// Duration in milliseconds
    #[arg(value_name = "MS")]
    pub ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Exchange(args) => {
            let config = ClientConfig::new(cli.origin, cli.timeout_ms)?;
            let payload =
                venues::commands::load_payload(args.data.as_deref(), args.data_file.as_deref())?;
            let response = venues::commands::exchange(&config, args.base_url, &payload).await?;
            println!("{}", venues::commands::render_response(&response)?);
        }
        Commands::Delay(args) => venues::commands::delay(args.ms).await,
    }
    Ok(())
}
