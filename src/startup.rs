use crate::cli::Cli;
use crate::commands::{dispatch, CommandContext};
use crate::components::scheduler::HttpScheduleService;
use crate::components::storage::FileBackend;
use crate::components::{ComponentManager, SchedulerHandle, StorageHandle};
use crate::config::Config;
use crate::error::{other_error, PlannerResult};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration.
/// Logs go to stderr so stdout only carries rendered output.
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper_util=warn")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| other_error(&format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and initialize the application config
pub fn load_config() -> miette::Result<Arc<Config>> {
    match Config::load() {
        Ok(config) => Ok(Arc::new(config)),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Start the storage and scheduler actors described by `config`
pub async fn start_components(config: &Config) -> PlannerResult<(StorageHandle, SchedulerHandle)> {
    let backend = FileBackend::open(&config.store_path).await?;
    info!("Using store {}", backend.path().display());
    let storage = StorageHandle::spawn(Box::new(backend));

    let service = HttpScheduleService::new(&config.scheduler_url()?)?;
    info!("Using scheduling service at {}", service.endpoint());
    let scheduler = SchedulerHandle::spawn(Arc::new(service));

    Ok((storage, scheduler))
}

/// Run one command line against the configured store and service
pub async fn run(cli: Cli, config: Arc<Config>) -> miette::Result<()> {
    crate::utils::i18n::set_locale(&config.locale);

    let (storage, scheduler) = start_components(&config).await?;

    let mut component_manager = ComponentManager::new();
    component_manager.register(storage.clone());
    component_manager.register(scheduler.clone());

    let ctx = CommandContext::new(config, storage, scheduler);
    let result = dispatch(&ctx, cli.command).await;

    if let Err(e) = component_manager.shutdown_all().await {
        error!("Error shutting down components: {:?}", e);
    }

    result.map_err(Into::into)
}
