use clap::Parser;
use presentation::cli::{Cli, CliApp};
use shared::telemetry::init_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let app = CliApp::new();
    app.run(cli).await?;
    Ok(())
}
