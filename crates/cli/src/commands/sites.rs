use anyhow::{Context, Result};
use sitekit_client::HostingClient;
use sitekit_core::load_config;

fn client() -> Result<HostingClient> {
    let config = load_config()?
        .context("No provider configuration found.\nRun 'sitekit configure' first")?;
    Ok(HostingClient::new(&config.provider)?)
}

/// List all sites on the account
pub fn list() -> Result<()> {
    let sites = client()?.list_sites()?;

    if sites.is_empty() {
        println!("No sites on this account yet.");
        println!("Create one with: sitekit sites create <name>");
        return Ok(());
    }

    println!("📋 {} site(s):", sites.len());
    for site in &sites {
        match &site.url {
            Some(url) => println!("   {}  {}  {}", site.id, site.name, url),
            None => println!("   {}  {}", site.id, site.name),
        }
    }

    Ok(())
}

/// Create a new site
pub fn create(name: &str) -> Result<()> {
    println!("📝 Creating site '{}'...", name);
    let site = client()?.create_site(name)?;

    println!("   ✓ Created with id: {}", site.id);
    if let Some(url) = &site.url {
        println!("   Live at: {}", url);
    }

    Ok(())
}

/// Print a site's id, looked up by name
pub fn resolve(name: &str) -> Result<()> {
    match client()?.resolve_site_id(name)? {
        Some(id) => {
            println!("{}", id);
            Ok(())
        }
        None => anyhow::bail!("No site named '{}' on this account", name),
    }
}
