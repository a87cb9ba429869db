use crate::commands::schedule::fetch_calendar;
use crate::commands::{CommandContext, CommandResult};
use crate::components::export::download_csv;
use crate::components::planner::{CommitmentForm, Page, PreferencesForm, TaskForm, TimeSlot};
use crate::error::PlannerResult;
use crate::utils::input::parse_yes;
use rust_i18n::t;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

/// Walks the pages in order, reading answers line by line.
/// End of input stops the walk wherever it is.
pub struct Wizard<'a, R, W> {
    ctx: &'a CommandContext,
    input: R,
    output: W,
}

/// Run the wizard on the terminal, starting at `page`
pub async fn run_interactive(ctx: &CommandContext, page: Page) -> CommandResult {
    let stdin = BufReader::new(tokio::io::stdin());
    Wizard::new(ctx, stdin, std::io::stdout()).run_from(page).await
}

impl<'a, R, W> Wizard<'a, R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(ctx: &'a CommandContext, input: R, output: W) -> Self {
        Self { ctx, input, output }
    }

    /// Give back the writer, e.g. to inspect what was printed
    pub fn into_output(self) -> W {
        self.output
    }

    /// Walk every page from the start
    pub async fn run(&mut self) -> CommandResult {
        self.run_from(Page::Home).await
    }

    /// Walk the pages from `start` onwards
    pub async fn run_from(&mut self, start: Page) -> CommandResult {
        let mut page = Some(start);

        while let Some(current) = page {
            debug!("Wizard on page {}", current);
            page = match current {
                Page::Home => Page::Home.next(),
                Page::FixedCommitments => self.commitments_page().await?,
                Page::TaskDetails => self.tasks_page().await?,
                Page::Preferences => self.preferences_page().await?,
                Page::Output => {
                    self.output_page().await?;
                    None
                }
            };
        }

        self.output.flush()?;
        Ok(())
    }

    async fn prompt(&mut self, text: &str) -> PlannerResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Print an alert, or hand back errors that are not alerts
    fn alert_or_fail(&mut self, result: PlannerResult<()>) -> PlannerResult<bool> {
        match result {
            Ok(()) => Ok(true),
            Err(e) if e.is_alert() => {
                writeln!(self.output, "{}", e)?;
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    async fn commitments_page(&mut self) -> PlannerResult<Option<Page>> {
        writeln!(self.output, "{}", t!("wizard_commitments_title"))?;

        loop {
            let Some(subject) = self.prompt(&t!("wizard_subject_or_continue")).await? else {
                return Ok(None);
            };
            if subject.is_empty() {
                return Ok(Page::FixedCommitments.next());
            }

            let Some(start) = self.prompt(&t!("wizard_start_time")).await? else {
                return Ok(None);
            };
            let Some(end) = self.prompt(&t!("wizard_end_time")).await? else {
                return Ok(None);
            };

            let mut form = CommitmentForm::new(&subject, &start, &end);
            let result = match form.submit(&self.ctx.storage).await {
                Ok(row) => writeln!(self.output, "  + {}", row).map_err(Into::into),
                Err(e) => Err(e),
            };
            self.alert_or_fail(result)?;
        }
    }

    async fn tasks_page(&mut self) -> PlannerResult<Option<Page>> {
        writeln!(self.output, "{}", t!("wizard_tasks_title"))?;

        loop {
            let Some(subject) = self.prompt(&t!("wizard_subject_or_continue")).await? else {
                return Ok(None);
            };
            if subject.is_empty() {
                return Ok(Page::TaskDetails.next());
            }

            let mut answers = Vec::with_capacity(3);
            for question in [
                t!("wizard_estimated"),
                t!("wizard_due_date"),
                t!("wizard_priority"),
            ] {
                match self.prompt(&question).await? {
                    Some(answer) => answers.push(answer),
                    None => return Ok(None),
                }
            }

            let mut form = TaskForm::new(&subject, &answers[0], &answers[1], &answers[2]);
            let result = match form.submit(&self.ctx.storage).await {
                Ok(row) => writeln!(self.output, "  + {}", row).map_err(Into::into),
                Err(e) => Err(e),
            };
            self.alert_or_fail(result)?;
        }
    }

    async fn preferences_page(&mut self) -> PlannerResult<Option<Page>> {
        writeln!(self.output, "{}", t!("wizard_preferences_title"))?;

        let options = TimeSlot::ALL
            .iter()
            .map(|slot| format!("{} {}", slot.label(), slot.hours()))
            .collect::<Vec<_>>()
            .join(", ");

        let Some(times) = self
            .prompt(&t!("wizard_preferred_times", options = options))
            .await?
        else {
            return Ok(None);
        };

        let mut form = PreferencesForm::default();
        for label in times.split(',').filter(|label| !label.trim().is_empty()) {
            match label.parse::<TimeSlot>() {
                Ok(slot) => {
                    form.preferred_times.insert(slot);
                }
                Err(unknown) => {
                    writeln!(self.output, "{}", t!("wizard_unknown_time", value = unknown))?;
                }
            }
        }

        let Some(breaks) = self.prompt(&t!("wizard_prefer_breaks")).await? else {
            return Ok(None);
        };
        form.prefer_breaks = parse_yes(&breaks);

        let Some(duration) = self.prompt(&t!("wizard_work_duration")).await? else {
            return Ok(None);
        };
        form.work_duration = duration;

        let next = form.save(&self.ctx.storage).await?;
        writeln!(self.output, "{}", t!("preferences_saved"))?;
        Ok(Some(next))
    }

    async fn output_page(&mut self) -> PlannerResult<()> {
        writeln!(self.output, "{}", t!("wizard_output_title"))?;

        let result = match fetch_calendar(self.ctx).await {
            Ok(calendar) => write!(self.output, "{}", calendar).map_err(Into::into),
            Err(e) => Err(e),
        };
        if !self.alert_or_fail(result)? {
            return Ok(());
        }

        let Some(answer) = self.prompt(&t!("wizard_export_prompt")).await? else {
            return Ok(());
        };
        if !parse_yes(&answer) {
            return Ok(());
        }

        let path = self.ctx.config.export_path.clone();
        let result = match download_csv(&self.ctx.storage, &path).await {
            Ok(count) => writeln!(
                self.output,
                "{}",
                t!("export_written", path = path.display().to_string(), count = count)
            )
            .map_err(Into::into),
            Err(e) => Err(e),
        };
        self.alert_or_fail(result)?;
        Ok(())
    }
}
