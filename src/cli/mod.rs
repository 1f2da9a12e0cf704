mod args;
mod config;
mod global;
mod handlers;

use args::Commands;
use clap::Parser;
use global::GlobalArgs;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "base-codec")]
#[command(version)]
#[command(about = "Encode and decode binary data as Base16, Base58 or Base64 text", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn no_color(&self) -> bool {
        self.global.no_color
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = if verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    } else {
        EnvFilter::new(default_level)
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    // Only fails when a subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(cli.global.verbose);

    let config = config::load_registry(&cli.global)?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &config),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &config),
        Commands::List => handlers::list::handle(&config),
    }
}
