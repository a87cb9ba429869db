use crate::cli::{CommitmentCommand, Commands, TaskCommand};
use crate::components::planner::Page;
use crate::components::storage::keys;
use crate::components::{SchedulerHandle, StorageHandle};
use crate::config::Config;
use crate::error::PlannerResult;
use rust_i18n::t;
use std::sync::Arc;
use tracing::debug;

// Export submodules
pub mod commitments;
pub mod schedule;
pub mod tasks;
pub mod wizard;

/// Shared context for all commands
#[derive(Clone)]
pub struct CommandContext {
    pub config: Arc<Config>,
    pub storage: StorageHandle,
    pub scheduler: SchedulerHandle,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(config: Arc<Config>, storage: StorageHandle, scheduler: SchedulerHandle) -> Self {
        Self {
            config,
            storage,
            scheduler,
        }
    }
}

/// Type alias for command result
pub type CommandResult = PlannerResult<()>;

/// Run one parsed command line
pub async fn dispatch(ctx: &CommandContext, command: Commands) -> CommandResult {
    debug!("Dispatching {:?}", command);

    match command {
        Commands::Commitment(CommitmentCommand::Add {
            subject,
            start,
            end,
        }) => {
            commitments::add(
                ctx,
                &subject.unwrap_or_default(),
                &start.unwrap_or_default(),
                &end.unwrap_or_default(),
            )
            .await
        }
        Commands::Commitment(CommitmentCommand::List) => commitments::list(ctx).await,
        Commands::Task(TaskCommand::Add {
            subject,
            estimated,
            due,
            priority,
        }) => {
            tasks::add(
                ctx,
                &subject.unwrap_or_default(),
                &estimated.unwrap_or_default(),
                &due.unwrap_or_default(),
                &priority.unwrap_or_default(),
            )
            .await
        }
        Commands::Task(TaskCommand::List) => tasks::list(ctx).await,
        Commands::Preferences {
            times,
            breaks,
            work_duration,
            html,
        } => {
            schedule::save_preferences(
                ctx,
                times.into_iter().collect(),
                breaks,
                &work_duration.unwrap_or_default(),
                html.as_deref(),
            )
            .await
        }
        Commands::Schedule { html } => schedule::show(ctx, html.as_deref()).await,
        Commands::Export { output } => schedule::export(ctx, output.as_deref()).await,
        Commands::Reset => reset(ctx).await,
        Commands::Wizard { page } => {
            let start = page.as_deref().map(Page::from_path).unwrap_or(Page::Home);
            wizard::run_interactive(ctx, start).await
        }
    }
}

/// Forget everything the planner stored
pub async fn reset(ctx: &CommandContext) -> CommandResult {
    for key in keys::ALL {
        ctx.storage.remove(key).await?;
    }
    println!("{}", t!("storage_reset"));
    Ok(())
}
