mod cli;
mod commands;
mod event;
mod notify;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries JSON results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => commands::init::run(force),
        Commands::Route {
            title,
            body,
            difficulty,
            cost_tolerance,
            request,
            record,
        } => commands::route::run(
            commands::route::RouteArgs {
                title,
                body,
                difficulty,
                cost_tolerance,
                request,
            },
            record,
        ),
        Commands::Webhook { file, record } => commands::webhook::run(file.as_deref(), record),
        Commands::Tiers => commands::tiers::run(),
        Commands::History { stats, limit } => commands::history::run(stats, limit),
        Commands::Version => commands::version::run(),
    }
}
