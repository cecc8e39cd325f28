//! recaptcha-verify CLI entry point.

mod cli;

use clap::Parser;
use cli::Cli;
use recaptcha_v3::Verifier;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    // Initialize error handling
    color_eyre::install()?;

    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = cli.to_config()?;
    let verifier = Verifier::from_config(&config)?;
    info!("Verifying token against {}", verifier.endpoint());

    if verifier.verify(&cli.token, &cli.remote_ip).await? {
        println!("admitted");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("rejected");
        Ok(ExitCode::FAILURE)
    }
}
