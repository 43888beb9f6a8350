use anyhow::{Context, Result};
use sitekit_client::HostingClient;
use sitekit_core::load_config;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Deploy a site by name: resolve it (creating it when absent), optionally
/// bundle a directory, then upload the zip.
pub fn run(name: &str, dir: Option<PathBuf>, force: bool) -> Result<()> {
    println!("🚀 Deploying '{}'...\n", name);

    let config = load_config()?
        .context("No provider configuration found.\nRun 'sitekit configure' first")?;
    let client = HostingClient::new(&config.provider)?;

    // Check whether the site exists
    println!("🔍 Resolving site...");
    let existing_id = match client.resolve_site_id(name)? {
        Some(id) => {
            println!("   ✓ Site exists (id: {})", id);
            Some(id)
        }
        None => {
            println!("   ℹ️  Site doesn't exist - will create");
            None
        }
    };
    println!();

    // Confirmation prompt
    if !force {
        print!("❓ Deploy '{}' to the hosting provider? (y/N): ", name);
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("❌ Deployment cancelled");
            return Ok(());
        }
        println!();
    }

    let site_id = match existing_id {
        Some(id) => id,
        None => {
            println!("📝 Creating site...");
            let site = client.create_site(name)?;
            println!("   ✓ Site created (id: {})", site.id);
            println!();
            site.id
        }
    };

    // Bundle the site directory if one was given
    if let Some(dir) = dir {
        println!("📦 Bundling {}...", dir.display());
        let zip_path = bundle_path(&site_id);
        create_bundle_zip(&dir, &zip_path)?;
        println!("   ✓ Wrote {}", zip_path.display());
        println!();
    }

    println!("☁️  Uploading bundle...");
    let deploy = client.deploy_site(&site_id)?;
    println!("   ✓ Upload accepted");
    println!();

    println!("✅ Deployment complete!");
    if let Some(state) = &deploy.state {
        println!("   State: {}", state);
    }
    if let Some(url) = &deploy.url {
        println!("   Live URL: {}", url);
    }

    Ok(())
}

/// Where the upload step looks for the bundle: `{site_id}.zip` in the
/// current directory.
fn bundle_path(site_id: &str) -> PathBuf {
    PathBuf::from(format!("{}.zip", site_id))
}

/// Create a zip of every file under `dir`, relative paths preserved
fn create_bundle_zip(dir: &Path, zip_path: &Path) -> Result<()> {
    let file = File::create(zip_path).context("Failed to create deploy bundle file")?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    // Walk the site directory and add all files
    for entry in WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        let relative_path = path
            .strip_prefix(dir)
            .context("Failed to get relative path")?;

        zip.start_file(relative_path.to_string_lossy().to_string(), options)?;

        let mut f = File::open(path)?;
        io::copy(&mut f, &mut zip)?;
    }

    zip.finish()?;

    Ok(())
}
