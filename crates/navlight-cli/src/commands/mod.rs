pub mod config;
pub mod links;
pub mod resolve;
pub mod run;
pub mod theme;

use std::path::Path;

use anyhow::Result;
use navlight_core::nav::parse_nav_markup_file;
use navlight_core::{AppConfig, NavRegistry};

/// Registry from a navbar HTML file when given, else from the config
pub fn load_registry(config: &AppConfig, markup: Option<&Path>) -> Result<NavRegistry> {
    match markup {
        Some(path) => Ok(parse_nav_markup_file(path)?),
        None => Ok(NavRegistry::from_config(&config.nav)),
    }
}
