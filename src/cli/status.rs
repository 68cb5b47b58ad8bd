//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::{Config, RemoteConfig};
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "sasop Configuration Status".bold());

    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config.with_env_overrides(),
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!("Run {} to create a configuration file.", "sasop init".cyan());
            println!();
            return Ok(());
        }
    };

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!("Config file: {}", config_path.display().to_string().cyan());
    println!();

    setting_line("Backend URL", config.base_url.as_deref());
    setting_line("Client GUID", config.guid.as_deref());
    secret_line("Client signature", config.signature.as_deref());
    setting_line("Organization", config.org_name.as_deref());

    if config.validate_backend().is_err() {
        println!("  → Run 'sasop init' to complete the backend settings");
    }

    println!();
    println!("{} Default limit: {}", "○".dimmed(), config.limit);
    println!(
        "{} Token strategy: {}",
        "○".dimmed(),
        match config.token_strategy {
            crate::retrieval::TokenStrategy::OwnerFiltered => "owner-filtered",
            crate::retrieval::TokenStrategy::OwnerScoped => "owner-scoped",
        }
    );
    println!("{} Token page size: {}", "○".dimmed(), config.page_size);
    println!(
        "{} Enrollment concurrency: {}",
        "○".dimmed(),
        config.fanout_concurrency
    );

    println!();
    match &config.remote {
        Some(remote) => remote_lines(remote),
        None => println!("{} Remote log retrieval not configured", "○".dimmed()),
    }
    println!();

    Ok(())
}

fn setting_line(label: &str, value: Option<&str>) {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(v) => println!("{} {}: {}", "✓".green(), label, v),
        None => println!("{} {} not configured", "✗".red(), label),
    }
}

fn secret_line(label: &str, value: Option<&str>) {
    if value.is_some_and(|v| !v.trim().is_empty()) {
        println!("{} {} configured", "✓".green(), label);
    } else {
        println!("{} {} not configured", "✗".red(), label);
    }
}

fn remote_lines(remote: &RemoteConfig) {
    println!(
        "{} Log host: {}@{}:{}",
        "✓".green(),
        remote.user,
        remote.host,
        remote.port
    );
    file_line("SSH key", &remote.key_path);
    file_line("Known hosts", &remote.known_hosts_path);
    println!("{} Timeout: {}s", "○".dimmed(), remote.timeout_secs);
}

fn file_line(label: &str, path: &std::path::Path) {
    if path.is_file() {
        println!("{} {}: {}", "✓".green(), label, path.display());
    } else {
        println!(
            "{} {} missing: {}",
            "⚠".yellow(),
            label,
            path.display()
        );
    }
}
