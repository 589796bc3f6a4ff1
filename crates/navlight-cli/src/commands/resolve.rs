use std::path::Path;

use anyhow::Result;

use navlight_core::site::Site;
use navlight_core::AppConfig;

use super::load_registry;

pub fn run(config: &AppConfig, url: &str, markup: Option<&Path>) -> Result<()> {
    let site = Site::new(config.site.clone(), load_registry(config, markup)?);
    let state = site.locate(url)?;
    let active = site.active_links(&state);

    let hash = if state.current_hash.is_empty() {
        "(none)"
    } else {
        state.current_hash.as_str()
    };
    println!("Page: {}  Hash: {}\n", state.current_page, hash);

    if active.is_empty() {
        println!("No active links.");
        return Ok(());
    }

    println!("Active links ({}):\n", active.len());
    for link in active.iter().filter_map(|id| site.registry.get(id)) {
        let kind = if link.is_dropdown_toggle {
            " [dropdown]"
        } else {
            ""
        };
        println!("  {} -> {}{}", link.label, link.href, kind);
    }

    Ok(())
}
