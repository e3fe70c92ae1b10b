mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use docredact_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing on stderr; stdout carries the status text
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let config_path = cli.config.unwrap_or_else(Config::config_path);

    match cli.command {
        cli::Commands::Redact {
            input,
            output,
            overrides,
            json,
        } => {
            let config = Config::load_or_create(&config_path)?;
            commands::redact::handle(&input, output.as_deref(), &overrides, json, &config).await
        }
        cli::Commands::Scan {
            input,
            show,
            matching,
        } => {
            let config = Config::load_or_create(&config_path)?;
            commands::scan::handle(&input, show, matching, &config).await
        }
        cli::Commands::Patterns => {
            let config = Config::load_or_create(&config_path)?;
            commands::patterns::handle(&config)
        }
        cli::Commands::Notify => commands::notify::handle(),
        cli::Commands::Init { force } => commands::init::handle(&config_path, force),
        cli::Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
