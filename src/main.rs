use clap::Parser;
use study_planner::cli::Cli;
use study_planner::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    startup::init_logging()?;

    info!("Starting study planner");

    // Load configuration
    let config = startup::load_config()?;

    startup::run(cli, config).await
}
