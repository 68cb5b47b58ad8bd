//! sasop - Operator companion for the SAS identity backend

use clap::Parser;
use log::LevelFilter;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod remote;
mod retrieval;

use cli::args::GlobalOptions;
use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `--debug` wins over `RUST_LOG`; otherwise warnings and above.
fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("sasop version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Tokens {
            login,
            limit,
            strategy,
        } => cli::tokens::run(&opts, &login, &limit, strategy).await,
        Commands::Audit { login, filters } => cli::audit::run(&opts, &login, &filters).await,
        Commands::Enrollments { login } => cli::enrollments::run(&opts, &login).await,
        Commands::Logs {
            login,
            timeout,
            output_dir,
        } => cli::logs::run(&opts, &login, timeout, &output_dir).await,
    }
}
