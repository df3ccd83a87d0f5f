use clap::Parser;
use tracing::error;

use auctionlord::cli::output::{self, OutputConfig};
use auctionlord::cli::{check, inspect, run, Cli, Commands};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let result = match &cli.command {
        Commands::Run(args) => run::execute(args),
        Commands::Inspect(args) => inspect::execute(args),
        Commands::Check(args) => check::execute(args),
    };

    if let Err(e) = result {
        error!(error = %e, "Fatal error");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
