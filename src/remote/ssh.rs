//! SSH invocation building

use std::path::Path;
use std::time::Duration;

use crate::config::RemoteConfig;
use crate::error::{RemoteError, Result};

/// Longest connect phase allowed, regardless of the overall timeout
const MAX_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Quote `identity` for the remote shell and append it to `command`.
///
/// SSH hands the command line to the remote user's shell, so the login must
/// reach it as a single quoted word.
pub fn remote_command_line(command: &str, identity: &str) -> Result<String> {
    let quoted = shlex::try_quote(identity)
        .map_err(|e| RemoteError::InvalidIdentity(e.to_string()))?;
    Ok(format!("{} {}", command, quoted))
}

/// Full argument list for the SSH client.
///
/// Host key checking is strict and pinned to the configured known hosts
/// file. No ssh_config is read, so nothing can add another key source;
/// password prompts are disabled.
pub fn ssh_args(config: &RemoteConfig, identity: &str, timeout: Duration) -> Result<Vec<String>> {
    let connect_timeout = timeout.as_secs().clamp(1, MAX_CONNECT_TIMEOUT_SECS);

    Ok(vec![
        "-F".to_string(),
        "/dev/null".to_string(),
        "-i".to_string(),
        path_arg(&config.key_path),
        "-o".to_string(),
        "StrictHostKeyChecking=yes".to_string(),
        "-o".to_string(),
        format!("UserKnownHostsFile={}", path_arg(&config.known_hosts_path)),
        "-o".to_string(),
        "GlobalKnownHostsFile=/dev/null".to_string(),
        "-o".to_string(),
        "BatchMode=yes".to_string(),
        "-o".to_string(),
        "IdentitiesOnly=yes".to_string(),
        "-o".to_string(),
        format!("ConnectTimeout={}", connect_timeout),
        "-p".to_string(),
        config.port.to_string(),
        "--".to_string(),
        format!("{}@{}", config.user, config.host),
        remote_command_line(&config.command, identity)?,
    ])
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config() -> RemoteConfig {
        RemoteConfig {
            host: "logs.example.com".to_string(),
            user: "sas".to_string(),
            port: 2222,
            key_path: PathBuf::from("/keys/id_ed25519"),
            known_hosts_path: PathBuf::from("/keys/known_hosts"),
            command: "/opt/sas/bin/user-logs".to_string(),
            timeout_secs: 30,
            ssh_program: "ssh".to_string(),
        }
    }

    fn remote_words(identity: &str) -> Vec<String> {
        let args = ssh_args(&config(), identity, Duration::from_secs(30)).unwrap();
        let line = args.last().unwrap();
        shlex::split(line).unwrap()
    }

    #[test]
    fn test_host_key_checking_is_strict_and_pinned() {
        let args = ssh_args(&config(), "ivanova", Duration::from_secs(30)).unwrap();
        assert!(args.contains(&"StrictHostKeyChecking=yes".to_string()));
        assert!(args.contains(&"UserKnownHostsFile=/keys/known_hosts".to_string()));
        assert!(args.contains(&"GlobalKnownHostsFile=/dev/null".to_string()));
        assert!(args.contains(&"BatchMode=yes".to_string()));
        // No user or system ssh_config
        assert_eq!(args[0], "-F");
        assert_eq!(args[1], "/dev/null");
        let key_pos = args.iter().position(|a| a == "-i").unwrap();
        assert_eq!(args[key_pos + 1], "/keys/id_ed25519");
    }

    #[test]
    fn test_destination_and_port() {
        let args = ssh_args(&config(), "ivanova", Duration::from_secs(30)).unwrap();
        assert!(args.contains(&"sas@logs.example.com".to_string()));
        let port_pos = args.iter().position(|a| a == "-p").unwrap();
        assert_eq!(args[port_pos + 1], "2222");
    }

    #[test]
    fn test_connect_timeout_is_bounded() {
        let args = ssh_args(&config(), "ivanova", Duration::from_secs(120)).unwrap();
        assert!(args.contains(&"ConnectTimeout=10".to_string()));

        let args = ssh_args(&config(), "ivanova", Duration::from_millis(200)).unwrap();
        assert!(args.contains(&"ConnectTimeout=1".to_string()));
    }

    #[test]
    fn test_plain_login_is_one_word() {
        assert_eq!(remote_words("ivanova"), vec!["/opt/sas/bin/user-logs", "ivanova"]);
    }

    #[test]
    fn test_single_quote_and_semicolon_stay_literal() {
        let hostile = "x'; rm -rf / #";
        assert_eq!(remote_words(hostile), vec!["/opt/sas/bin/user-logs", hostile]);
    }

    #[test]
    fn test_substitution_and_pipes_stay_literal() {
        for hostile in ["$(reboot)", "`id`", "a | nc evil 1", "a && b", "new\nline"] {
            assert_eq!(
                remote_words(hostile),
                vec!["/opt/sas/bin/user-logs", hostile],
                "identity {:?} changed the command structure",
                hostile
            );
        }
    }

    #[test]
    fn test_nul_byte_is_rejected() {
        let err = remote_command_line("logs", "a\0b").unwrap_err();
        assert!(err.to_string().contains("cannot be passed"));
    }
}
