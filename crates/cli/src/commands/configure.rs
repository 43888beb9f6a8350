use anyhow::Result;
use sitekit_core::{ClientConfig, GlobalConfig, load_config, save_config};
use std::io::{self, Write};

/// Helper to read user input
fn read_input(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Configure provider credentials and API host
pub fn run() -> Result<()> {
    println!("🔧 Configuring hosting provider access...\n");

    // Load existing config if any
    let existing = load_config()?;

    println!("📋 You'll need a personal access token for the provider's API.");
    println!("   For Netlify, create one at: https://app.netlify.com/user/applications");
    println!();

    // Get access token
    let default_token = existing
        .as_ref()
        .map(|c| c.provider.access_token.as_str())
        .unwrap_or("");
    let access_token = if !default_token.is_empty() {
        let input = read_input(&format!(
            "Access Token [current: {}...]: ",
            &default_token[..10.min(default_token.len())]
        ))?;
        if input.is_empty() {
            default_token.to_string()
        } else {
            input
        }
    } else {
        read_input("Access Token: ")?
    };

    if access_token.is_empty() {
        anyhow::bail!("Access token is required");
    }

    // Keep previously configured connection settings, defaults otherwise
    let mut provider = ClientConfig::new(access_token);
    if let Some(existing) = &existing {
        provider.scheme = existing.provider.scheme.clone();
        provider.host = existing.provider.host.clone();
        provider.version_path = existing.provider.version_path.clone();
    }

    // Get API host override (optional)
    let host_input = read_input(&format!(
        "API Host [current: {}] (press Enter to keep): ",
        provider.host
    ))?;
    if !host_input.is_empty() {
        provider.host = host_input;
    }

    let config = GlobalConfig { provider };
    let path = save_config(&config)?;

    println!();
    println!("✅ Configuration saved to: {}", path.display());
    println!();
    println!("🚀 Ready to deploy! Try: sitekit deploy <site-name> --dir <build-dir>");

    Ok(())
}
