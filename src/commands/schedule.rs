use crate::commands::{CommandContext, CommandResult};
use crate::components::calendar::{to_html, Calendar};
use crate::components::export::download_csv;
use crate::components::planner::output::load_schedule;
use crate::components::planner::{Page, PreferencesForm, TimeSlot};
use crate::error::PlannerResult;
use crate::utils::time::today_in;
use rust_i18n::t;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info};

/// Save preferences, then follow on to the output page
pub async fn save_preferences(
    ctx: &CommandContext,
    times: BTreeSet<TimeSlot>,
    breaks: bool,
    work_duration: &str,
    html: Option<&Path>,
) -> CommandResult {
    let form = PreferencesForm {
        preferred_times: times,
        prefer_breaks: breaks,
        work_duration: work_duration.to_string(),
    };

    let next = form.save(&ctx.storage).await?;
    println!("{}", t!("preferences_saved"));
    debug!("Navigating to {}", next.path());

    if next == Page::Output {
        show(ctx, html).await?;
    }
    Ok(())
}

/// Generate the schedule for the configured window starting today
pub async fn fetch_calendar(ctx: &CommandContext) -> PlannerResult<Calendar> {
    let today = today_in(ctx.config.timezone()?);
    load_schedule(
        &ctx.storage,
        &ctx.scheduler,
        today,
        ctx.config.calendar_days,
    )
    .await
}

/// The output page: fetch, print and optionally write the calendar as HTML
pub async fn show(ctx: &CommandContext, html: Option<&Path>) -> CommandResult {
    let calendar = fetch_calendar(ctx).await?;
    print!("{}", calendar);

    if let Some(path) = html {
        tokio::fs::write(path, to_html(&calendar)?).await?;
        info!("Wrote calendar page to {}", path.display());
    }
    Ok(())
}

/// Write the stored schedule as CSV
pub async fn export(ctx: &CommandContext, output: Option<&Path>) -> CommandResult {
    let path = output.unwrap_or(ctx.config.export_path.as_path());
    let count = download_csv(&ctx.storage, path).await?;

    println!(
        "{}",
        t!("export_written", path = path.display().to_string(), count = count)
    );
    Ok(())
}
