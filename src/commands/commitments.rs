use crate::commands::{CommandContext, CommandResult};
use crate::components::planner::forms::stored_commitments;
use crate::components::planner::table::COMMITMENT_HEADERS;
use crate::components::planner::{CommitmentForm, Table, TableRow};
use rust_i18n::t;

/// Add one fixed commitment and print its row
pub async fn add(ctx: &CommandContext, subject: &str, start: &str, end: &str) -> CommandResult {
    let mut form = CommitmentForm::new(subject, start, end);
    let row = form.submit(&ctx.storage).await?;

    println!("{}", t!("commitment_added"));
    println!("{}", Table::new(&COMMITMENT_HEADERS).with_rows([row]));
    Ok(())
}

/// Print every stored commitment
pub async fn list(ctx: &CommandContext) -> CommandResult {
    let commitments = stored_commitments(&ctx.storage).await?;
    let table = Table::new(&COMMITMENT_HEADERS).with_rows(commitments.iter().map(TableRow::from));
    print!("{}", table);
    Ok(())
}
