use anyhow::Result;

use navlight_core::theme::{FileStore, KeyValueStore, THEME_KEY};
use navlight_core::{AppConfig, Theme};

fn stored(store: &FileStore) -> Result<Theme> {
    Ok(Theme::from_stored(store.get(THEME_KEY)?.as_deref()))
}

pub fn get(config: &AppConfig) -> Result<()> {
    let store = FileStore::new(config.storage_path());
    println!("{}", stored(&store)?);
    Ok(())
}

pub fn set(config: &AppConfig, theme: Theme) -> Result<()> {
    let mut store = FileStore::new(config.storage_path());
    store.set(THEME_KEY, theme.as_str())?;
    tracing::debug!(path = %store.path().display(), "Theme stored");
    println!("Theme set to {}", theme);
    Ok(())
}

pub fn toggle(config: &AppConfig) -> Result<()> {
    let store = FileStore::new(config.storage_path());
    let theme = stored(&store)?.toggle();
    set(config, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &std::path::Path) -> AppConfig {
        let mut config = AppConfig::default_site();
        config.general.data_dir = dir.to_path_buf();
        config
    }

    #[test]
    fn test_set_and_toggle() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let store = FileStore::new(config.storage_path());

        assert_eq!(stored(&store).unwrap(), Theme::Light);
        set(&config, Theme::Dark).unwrap();
        assert_eq!(stored(&store).unwrap(), Theme::Dark);
        toggle(&config).unwrap();
        assert_eq!(stored(&store).unwrap(), Theme::Light);
    }

    #[test]
    fn test_corrupt_store_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(config.storage_path(), "not json").unwrap();
        assert!(get(&config).is_err());
    }
}
