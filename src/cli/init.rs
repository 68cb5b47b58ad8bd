//! Init command implementation

use std::sync::Arc;

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::client::SasClient;
use crate::config::{BackendSettings, Config};
use crate::error::Result;
use crate::retrieval::{ApiCredentials, Authenticator};

/// Run the init command
///
/// Prompts for the backend settings, verifies them with a login and saves
/// them. Existing settings (including the remote section) are kept as
/// defaults.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to sasop!".bold().green());
    println!("Let's set up your SAS backend configuration.\n");

    let mut config = Config::load_at(opts.config_ref()).unwrap_or_default();
    let theme = ColorfulTheme::default();

    let base_url: String = prompt(&theme, "Backend URL", config.base_url.as_deref())?;
    let guid: String = prompt(&theme, "Client GUID", config.guid.as_deref())?;
    let signature: String = Password::with_theme(&theme)
        .with_prompt("Client signature")
        .interact()?;
    let org_name: String = prompt(&theme, "Organization name", config.org_name.as_deref())?;

    let settings = BackendSettings {
        base_url: base_url.trim().to_string(),
        guid: guid.trim().to_string(),
        signature,
        org_name: org_name.trim().to_string(),
    };

    println!("\n{}", "Authenticating...".cyan());
    let client = Arc::new(SasClient::new(&settings.base_url, &settings.org_name)?);
    Authenticator::new(client, ApiCredentials::from(&settings))
        .authenticate()
        .await?;
    println!("{}", "✓ Authentication successful!".green());

    config.base_url = Some(settings.base_url);
    config.guid = Some(settings.guid);
    config.signature = Some(settings.signature);
    config.org_name = Some(settings.org_name);
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    if config.remote.is_none() {
        println!(
            "  Add a {} section to the file to enable {}.",
            "remote".bold(),
            "sasop logs".cyan()
        );
    }

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "sasop status".cyan());
    println!("  {} - List a user's tokens", "sasop tokens <login>".cyan());

    Ok(())
}

fn prompt(theme: &ColorfulTheme, label: &str, current: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::with_theme(theme).with_prompt(label);
    if let Some(current) = current {
        input = input.default(current.to_string());
    }
    Ok(input.interact_text()?)
}
