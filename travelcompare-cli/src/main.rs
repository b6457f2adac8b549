//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use env_logger::{Builder, Env};
use travelcompare_cli::CliError;

#[tokio::main]
async fn main() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    match travelcompare_cli::run().await {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("travelcompare: {err}");
            std::process::exit(1);
        }
    }
}
