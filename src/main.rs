//! image-query CLI binary entry point.

use clap::Parser;
use image_query::cli::Cli;
use image_query::config::env_lookup;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.resolve_config(env_lookup()) {
        Ok(config) => image_query::cli::run(&cli, config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(answer) => println!("{answer}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
