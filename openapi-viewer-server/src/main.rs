use std::process::ExitCode;

use clap::Parser;
use openapi_viewer_server::{logging, serve, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging as early as possible.
    logging::init_logging();

    if let Err(error) = serve(Cli::parse()).await {
        tracing::error!("{error:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
