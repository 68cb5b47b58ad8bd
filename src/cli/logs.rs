//! Remote operational log command

use std::path::{Path, PathBuf};
use std::time::Duration;

use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::output::json::format_json;
use crate::remote::{RemoteLog, RemoteLogRetriever};

/// What happened to the log output, for JSON output
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "delivery", rename_all = "snake_case")]
enum Delivery {
    Inline { content: String },
    Attachment { path: PathBuf, bytes: usize },
    Empty,
}

/// Run the logs command.
///
/// Only the remote section of the config is needed; the backend is never
/// contacted.
pub async fn run(
    opts: &GlobalOptions,
    login: &str,
    timeout: Option<u64>,
    output_dir: &Path,
) -> Result<()> {
    let config = Config::load_at(opts.config_ref())?;
    let retriever = RemoteLogRetriever::new(config.require_remote()?.clone());
    let timeout = timeout
        .map(Duration::from_secs)
        .unwrap_or_else(|| retriever.default_timeout());

    let log = retriever.fetch_remote_log(login, timeout).await?;
    let delivery = deliver(log, output_dir)?;

    match opts.format {
        OutputFormat::Json => println!("{}", format_json(&delivery)?),
        OutputFormat::Table => match delivery {
            Delivery::Inline { content } => println!("{}", content.trim_end()),
            Delivery::Attachment { path, bytes } => println!(
                "{} Log is too long to show ({} bytes); saved to {}",
                "✓".green(),
                bytes,
                path.display().to_string().cyan()
            ),
            Delivery::Empty => println!("The log command returned no output for {}.", login),
        },
    }

    Ok(())
}

/// Write attachments to `output_dir`; pass everything else through.
fn deliver(log: RemoteLog, output_dir: &Path) -> Result<Delivery> {
    match log {
        RemoteLog::Inline(content) => Ok(Delivery::Inline { content }),
        RemoteLog::Empty => Ok(Delivery::Empty),
        RemoteLog::Attachment { file_name, content } => {
            std::fs::create_dir_all(output_dir)?;
            let path = output_dir.join(file_name);
            std::fs::write(&path, &content)?;
            Ok(Delivery::Attachment {
                path,
                bytes: content.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deliver_writes_attachment() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("logs");

        let delivery = deliver(
            RemoteLog::Attachment {
                file_name: "ivanova_logs.txt".to_string(),
                content: b"line\n".repeat(1000),
            },
            &out,
        )
        .unwrap();

        let expected = out.join("ivanova_logs.txt");
        assert_eq!(
            delivery,
            Delivery::Attachment {
                path: expected.clone(),
                bytes: 5000
            }
        );
        assert_eq!(std::fs::read(expected).unwrap().len(), 5000);
    }

    #[test]
    fn test_deliver_inline_and_empty_write_nothing() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(
            deliver(RemoteLog::Inline("ok".to_string()), dir.path()).unwrap(),
            Delivery::Inline {
                content: "ok".to_string()
            }
        );
        assert_eq!(deliver(RemoteLog::Empty, dir.path()).unwrap(), Delivery::Empty);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_delivery_json_shape() {
        let value = serde_json::to_value(Delivery::Empty).unwrap();
        assert_eq!(value["delivery"], "empty");
    }
}
