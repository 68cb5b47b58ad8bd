//! Audit trail command

use crate::cli::args::GlobalOptions;
use crate::cli::{AuditFilterArgs, CommandContext};
use crate::error::Result;
use crate::models::AuditDisplay;
use crate::output;

/// Run the audit command
pub async fn run(opts: &GlobalOptions, login: &str, filters: &AuditFilterArgs) -> Result<()> {
    // Bad dates are rejected before touching the backend
    let window = filters.window()?;

    let ctx = CommandContext::new(opts)?;
    let credential = ctx.authenticate().await?;

    let records = ctx
        .audit_fetcher()
        .fetch_audit(
            &credential,
            login,
            filters.limit.resolve(ctx.config.limit),
            &window,
        )
        .await;

    let display = records.map_records(AuditDisplay::from);
    output::print_fetched(&display, ctx.format, "No audit records found or an error occurred.")
}
