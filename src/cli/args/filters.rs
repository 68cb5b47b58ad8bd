//! Filter argument types for CLI commands

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::Args;

use crate::client::models::{AUDIT_DATETIME_FORMAT, DateWindow};
use crate::error::{Error, Result};

/// Date-only form accepted for audit bounds
const AUDIT_DATE_FORMAT: &str = "%d-%m-%Y";

/// Record limit shared by the list commands.
#[derive(Args, Debug, Clone, Default)]
pub struct LimitArgs {
    /// Maximum records to show (capped at 100; defaults to the configured limit)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

impl LimitArgs {
    /// The requested limit, or `default` when none was given
    pub fn resolve(&self, default: usize) -> usize {
        self.limit.unwrap_or(default)
    }
}

/// Filter arguments for the audit command.
#[derive(Args, Debug, Clone, Default)]
pub struct AuditFilterArgs {
    /// Start of the window (DD-MM-YYYY or "DD-MM-YYYY HH:MM:SS")
    #[arg(long)]
    pub since: Option<String>,

    /// End of the window (DD-MM-YYYY or "DD-MM-YYYY HH:MM:SS")
    #[arg(long)]
    pub until: Option<String>,

    #[command(flatten)]
    pub limit: LimitArgs,
}

impl AuditFilterArgs {
    /// Validate both bounds and build the backend window.
    ///
    /// Bounds are sent to the backend in the form they were given.
    pub fn window(&self) -> Result<DateWindow> {
        let since = parse_bound(self.since.as_deref(), BoundEdge::Start)?;
        let until = parse_bound(self.until.as_deref(), BoundEdge::End)?;

        if let (Some((start, _)), Some((stop, _))) = (&since, &until)
            && start > stop
        {
            return Err(Error::Other(format!(
                "--since ({}) is after --until ({})",
                self.since.as_deref().unwrap_or_default().trim(),
                self.until.as_deref().unwrap_or_default().trim()
            )));
        }

        Ok(DateWindow::new(
            since.map(|(_, raw)| raw),
            until.map(|(_, raw)| raw),
        ))
    }
}

/// Which end of the window a bound closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoundEdge {
    Start,
    End,
}

/// Parse one optional bound, keeping its trimmed text.
///
/// A date-only end bound covers the whole day when compared.
fn parse_bound(value: Option<&str>, edge: BoundEdge) -> Result<Option<(NaiveDateTime, String)>> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    let mut at = parse_audit_date(raw)?;
    if edge == BoundEdge::End && NaiveDate::parse_from_str(raw, AUDIT_DATE_FORMAT).is_ok() {
        at = at.date().and_hms_opt(23, 59, 59).unwrap_or(at);
    }
    Ok(Some((at, raw.to_string())))
}

/// Parse `DD-MM-YYYY` (midnight) or `DD-MM-YYYY HH:MM:SS`.
pub fn parse_audit_date(date_str: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, AUDIT_DATETIME_FORMAT) {
        return Ok(dt);
    }

    if let Ok(date) = NaiveDate::parse_from_str(date_str, AUDIT_DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    Err(Error::Other(format!(
        "Invalid date format: '{}'. Use DD-MM-YYYY or \"DD-MM-YYYY HH:MM:SS\"",
        date_str
    )))
}
