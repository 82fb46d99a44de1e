//
//  atlassian-client
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use atlassian_client::cli::{Cli, Commands};
use atlassian_client::exit_codes;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::for_error(&e));
        }
    }
}

/// Logs go to stderr, filtered by `ATL_DEBUG` (e.g. `ATL_DEBUG=debug`).
fn init_logging() {
    let filter = EnvFilter::try_from_env("ATL_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Api(cmd) => cmd.run(&cli.global).await,
        Commands::Jira(cmd) => cmd.run(&cli.global).await,
        Commands::Confluence(cmd) => cmd.run(&cli.global).await,
        Commands::Assets(cmd) => cmd.run(&cli.global).await,
        Commands::Bitbucket(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("atl version {}", atlassian_client::VERSION);
            Ok(())
        }
    }
}
