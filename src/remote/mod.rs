//! Remote operational log retrieval over SSH
//!
//! Runs one fixed command on the log host with the login as its only
//! argument, bounded by a timeout, and decides how the output is delivered.

mod ssh;

use std::process::Stdio;
use std::time::Duration;

use log::{debug, warn};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::task::JoinHandle;

use crate::config::RemoteConfig;
use crate::error::{RemoteError, Result};

use ssh::ssh_args;

/// Output shorter than this many characters is shown inline.
pub const INLINE_THRESHOLD: usize = 4000;

const PERMISSION_DENIED_MESSAGE: &str = "access error: bad key or rights";
const CONNECTION_TIMEOUT_MESSAGE: &str = "connection timeout";

/// Raw result of one remote run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteOutput {
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// How successful remote output is handed to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteLog {
    /// Short enough to show in place
    Inline(String),
    /// Too long to show; delivered as a named file
    Attachment { file_name: String, content: Vec<u8> },
    /// The command succeeded but printed nothing
    Empty,
}

/// Fetches a user's operational logs from the configured host.
pub struct RemoteLogRetriever {
    config: RemoteConfig,
}

impl RemoteLogRetriever {
    pub fn new(config: RemoteConfig) -> Self {
        Self { config }
    }

    /// The configured default timeout
    pub fn default_timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_secs)
    }

    /// Run the log command for `identity` and classify its output.
    pub async fn fetch_remote_log(&self, identity: &str, timeout: Duration) -> Result<RemoteLog> {
        let output = self.run(identity, timeout).await?;
        classify(output, identity)
    }

    /// Run the log command, returning its raw output whatever the exit code.
    ///
    /// On timeout the SSH process is killed and reaped before returning.
    pub async fn run(&self, identity: &str, timeout: Duration) -> Result<RemoteOutput> {
        self.check_key_material()?;

        let args = ssh_args(&self.config, identity, timeout)?;
        debug!(
            "Running {} against {}@{}",
            self.config.ssh_program, self.config.user, self.config.host
        );

        let mut child = Command::new(&self.config.ssh_program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| RemoteError::Spawn(e.to_string()))?;

        let mut stdout_task = tokio::spawn(drain(child.stdout.take()));
        let mut stderr_task = tokio::spawn(drain(child.stderr.take()));

        let finished = tokio::time::timeout(timeout, async {
            let status = child.wait().await?;
            let stdout = join_reader(&mut stdout_task).await?;
            let stderr = join_reader(&mut stderr_task).await?;
            Ok::<_, std::io::Error>((status, stdout, stderr))
        })
        .await;

        match finished {
            Ok(Ok((status, stdout, stderr))) => Ok(RemoteOutput {
                exit_code: status.code().unwrap_or(-1),
                stdout,
                stderr,
            }),
            Ok(Err(e)) => {
                stdout_task.abort();
                stderr_task.abort();
                Err(wait_failure(identity, &e))
            }
            Err(_) => {
                warn!(
                    "Remote log command for {} timed out after {:?}",
                    identity, timeout
                );
                stdout_task.abort();
                stderr_task.abort();
                if let Err(e) = child.kill().await {
                    warn!("Failed to kill timed out ssh process: {}", e);
                }
                Err(RemoteError::Timeout(timeout.as_secs()).into())
            }
        }
    }

    fn check_key_material(&self) -> Result<()> {
        if !self.config.key_path.is_file() {
            return Err(RemoteError::MissingKey(self.config.key_path.clone()).into());
        }
        if !self.config.known_hosts_path.is_file() {
            return Err(RemoteError::MissingKnownHosts(self.config.known_hosts_path.clone()).into());
        }
        Ok(())
    }
}

/// Read a pipe to the end
async fn drain<R: AsyncRead + Unpin>(reader: Option<R>) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut reader) = reader {
        reader.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

async fn join_reader(task: &mut JoinHandle<std::io::Result<Vec<u8>>>) -> std::io::Result<Vec<u8>> {
    task.await.map_err(std::io::Error::other)?
}

/// A wait or pipe read that failed after ssh started
fn wait_failure(identity: &str, err: &std::io::Error) -> crate::error::Error {
    warn!("Remote log command for {} failed unexpectedly: {}", identity, err);
    RemoteError::Unexpected(err.to_string()).into()
}

/// Turn a finished run into a delivery decision or a classified failure.
pub fn classify(output: RemoteOutput, identity: &str) -> Result<RemoteLog> {
    if output.exit_code != 0 {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(RemoteError::Exit {
            code: output.exit_code,
            message: normalize_stderr(&stderr),
        }
        .into());
    }

    let text = String::from_utf8_lossy(&output.stdout);
    if text.trim().is_empty() {
        return Ok(RemoteLog::Empty);
    }

    if text.chars().count() < INLINE_THRESHOLD {
        Ok(RemoteLog::Inline(text.into_owned()))
    } else {
        Ok(RemoteLog::Attachment {
            file_name: attachment_name(identity),
            content: output.stdout,
        })
    }
}

/// Map well-known SSH failures to short messages; pass anything else through.
fn normalize_stderr(stderr: &str) -> String {
    let lower = stderr.to_lowercase();
    if lower.contains("permission denied") {
        PERMISSION_DENIED_MESSAGE.to_string()
    } else if lower.contains("connection timed out") || lower.contains("operation timed out") {
        CONNECTION_TIMEOUT_MESSAGE.to_string()
    } else {
        stderr.trim().to_string()
    }
}

/// File name for an attachment, keeping only filename-safe characters
fn attachment_name(identity: &str) -> String {
    let safe: String = identity
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let safe = safe.trim_matches('.');
    if safe.is_empty() {
        "logs.txt".to_string()
    } else {
        format!("{}_logs.txt", safe)
    }
}
