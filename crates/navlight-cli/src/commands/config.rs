use std::path::Path;

use anyhow::Result;

use navlight_core::AppConfig;

pub fn path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        println!("Config already exists at {}", config_path.display());
        println!("\nUse --force to overwrite it.");
        return Ok(());
    }

    AppConfig::default_site().save_to(config_path)?;
    tracing::info!(path = %config_path.display(), "Wrote default config");
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}
