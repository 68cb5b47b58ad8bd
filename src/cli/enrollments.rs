//! Enrollment task command

use log::debug;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::error::{Error, Result};
use crate::models::EnrollmentDisplay;
use crate::output;

/// Run the enrollments command.
///
/// Any failed variant fails the command, even when other variants returned
/// tasks, so a partial list is never shown as complete.
pub async fn run(opts: &GlobalOptions, login: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let credential = ctx.authenticate().await?;

    let outcome = ctx
        .enrollment_resolver()
        .fetch_enrollments(&credential, login)
        .await;

    if !outcome.is_complete() {
        debug!(
            "Withholding {} tasks after {} variant failures",
            outcome.tasks.len(),
            outcome.errors.len()
        );
        return Err(Error::PartialFanout(outcome.errors));
    }

    let display: Vec<EnrollmentDisplay> = outcome
        .tasks
        .into_iter()
        .map(EnrollmentDisplay::from)
        .collect();
    output::print(&display, ctx.format, "No enrollment tasks found.")
}
