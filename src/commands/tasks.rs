use crate::commands::{CommandContext, CommandResult};
use crate::components::planner::forms::stored_tasks;
use crate::components::planner::table::TASK_HEADERS;
use crate::components::planner::{Table, TableRow, TaskForm};
use rust_i18n::t;

/// Add one task and print its row
pub async fn add(
    ctx: &CommandContext,
    subject: &str,
    estimated: &str,
    due: &str,
    priority: &str,
) -> CommandResult {
    let mut form = TaskForm::new(subject, estimated, due, priority);
    let row = form.submit(&ctx.storage).await?;

    println!("{}", t!("task_added"));
    println!("{}", Table::new(&TASK_HEADERS).with_rows([row]));
    Ok(())
}

/// Print every stored task
pub async fn list(ctx: &CommandContext) -> CommandResult {
    let tasks = stored_tasks(&ctx.storage).await?;
    print!(
        "{}",
        Table::new(&TASK_HEADERS).with_rows(tasks.iter().map(TableRow::from))
    );
    Ok(())
}
