use std::path::Path;

use anyhow::Result;

use navlight_core::AppConfig;

use super::load_registry;

pub fn run(config: &AppConfig, markup: Option<&Path>) -> Result<()> {
    let registry = load_registry(config, markup)?;

    if registry.is_empty() {
        println!("No navigation links found.");
        if markup.is_some() {
            println!("\nLinks are read from `a.nav-link` elements inside `.navbar__links`.");
        }
        return Ok(());
    }

    println!("Navigation links ({}):\n", registry.len());

    for link in registry.top_level() {
        let href = if link.href.is_empty() {
            "(no href)"
        } else {
            link.href.as_str()
        };
        if link.is_dropdown_toggle {
            println!("  {} -> {} [dropdown]", link.label, href);
            for child in registry.children_of(link.id) {
                println!("    {} -> {}", child.label, child.href);
            }
        } else {
            println!("  {} -> {}", link.label, href);
        }
    }

    Ok(())
}
