//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::retrieval::FetchOutcome;

pub mod json;
pub mod table;

/// Types that can be rendered in every output format
pub trait Formattable {
    /// Render in `format`; `empty_message` replaces an empty table
    fn format(&self, format: OutputFormat, empty_message: &str) -> Result<String>;
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat, empty_message: &str) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(self, empty_message)),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

/// Format and print data to stdout
pub fn print<T: Formattable>(data: &T, format: OutputFormat, empty_message: &str) -> Result<()> {
    println!("{}", data.format(format, empty_message)?);
    Ok(())
}

/// Render the result of a lenient fetch.
///
/// Tables show `empty_message`; JSON carries the failure under `meta.error`
/// so scripts can tell a failed lookup from an empty one.
pub fn format_fetched<T: Tabled + Serialize>(
    outcome: &FetchOutcome<T>,
    format: OutputFormat,
    empty_message: &str,
) -> Result<String> {
    if format == OutputFormat::Json && outcome.is_failure() {
        let error = outcome.failure.as_ref().map(ToString::to_string);
        return Ok(json::format_json_with_error(&outcome.records, error)?);
    }
    outcome.records.format(format, empty_message)
}

/// Print the result of a lenient fetch to stdout
pub fn print_fetched<T: Tabled + Serialize>(
    outcome: &FetchOutcome<T>,
    format: OutputFormat,
    empty_message: &str,
) -> Result<()> {
    println!("{}", format_fetched(outcome, format, empty_message)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[derive(Debug, Tabled, Serialize)]
    struct Row {
        #[tabled(rename = "ID")]
        id: i64,
    }

    #[test]
    fn test_empty_table_prints_message() {
        let rows: Vec<Row> = vec![];
        let out = rows.format(OutputFormat::Table, "Nothing here.").unwrap();
        assert_eq!(out, "Nothing here.");
    }

    #[test]
    fn test_empty_json_ignores_message() {
        let rows: Vec<Row> = vec![];
        let out = rows.format(OutputFormat::Json, "Nothing here.").unwrap();
        assert!(!out.contains("Nothing here."));
        assert!(out.contains("\"data\": []"));
    }

    #[test]
    fn test_failed_fetch_reports_error_in_json() {
        let outcome: FetchOutcome<Row> =
            FetchOutcome::failed(ApiError::Logical("Result=ERR".to_string()).into());

        let out = format_fetched(&outcome, OutputFormat::Json, "Nothing here.").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["data"], serde_json::json!([]));
        assert!(parsed["meta"]["error"]
            .as_str()
            .unwrap()
            .contains("Result=ERR"));
    }

    #[test]
    fn test_failed_fetch_keeps_table_message() {
        let outcome: FetchOutcome<Row> =
            FetchOutcome::failed(ApiError::Logical("Result=ERR".to_string()).into());

        let out = format_fetched(&outcome, OutputFormat::Table, "Nothing here.").unwrap();
        assert_eq!(out, "Nothing here.");
    }

    #[test]
    fn test_successful_fetch_has_no_error() {
        let outcome = FetchOutcome::found(vec![Row { id: 7 }]);
        let out = format_fetched(&outcome, OutputFormat::Json, "Nothing here.").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(parsed["meta"].get("error").is_none());
        assert_eq!(parsed["data"][0]["id"], 7);
    }
}
