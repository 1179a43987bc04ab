use std::io;

use eyre::Result;

use sousview::cli;

#[tokio::main]
async fn main() -> Result<()> {
    init()?;
    cli::run().await
}

fn init() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr, the dashboard owns stdout
    tracing_subscriber::fmt()
        .with_env_filter("sousview=info")
        .with_writer(io::stderr)
        .init();

    Ok(())
}
