// SPDX-License-Identifier: MPL-2.0
//! This module handles the pager's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! [`Config`] is the persisted, partially-filled form. [`PagerOptions`] is the
//! resolved, immutable value a [`PagingViewport`](crate::pager::PagingViewport)
//! is constructed with.
//!
//! # Examples
//!
//! ```no_run
//! use lens_pager::config::{self, CaptionLocation, Config, PagerOptions};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.caption_location = Some(CaptionLocation::Bottom);
//! config::save(&config).expect("Failed to save config");
//!
//! let options = PagerOptions::from(&config);
//! assert_eq!(options.caption_location, CaptionLocation::Bottom);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::ui::PrefetchCount;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "LensPager";

/// Which piece of browser chrome the caption overlay sits above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionLocation {
    /// Above the pagination indicator.
    #[default]
    Basic,
    /// Above the bottom toolbar.
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display_paging_horizontal_scroll_indicator: Option<bool>,
    #[serde(default)]
    pub caption_location: Option<CaptionLocation>,
    #[serde(default)]
    pub prefetch_count: Option<usize>,
    #[serde(default)]
    pub reuse_recycled_pages: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_paging_horizontal_scroll_indicator: Some(
                DEFAULT_DISPLAY_PAGING_HORIZONTAL_SCROLL_INDICATOR,
            ),
            caption_location: Some(CaptionLocation::default()),
            prefetch_count: Some(DEFAULT_PREFETCH_COUNT),
            reuse_recycled_pages: Some(DEFAULT_REUSE_RECYCLED_PAGES),
        }
    }
}

/// Resolved pager options. Immutable once handed to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagerOptions {
    pub display_paging_horizontal_scroll_indicator: bool,
    pub caption_location: CaptionLocation,
    pub prefetch_count: PrefetchCount,
    pub reuse_recycled_pages: bool,
    pub side_margin: f32,
    pub recycled_pages_per_kind: usize,
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for PagerOptions {
    fn from(config: &Config) -> Self {
        Self {
            display_paging_horizontal_scroll_indicator: config
                .display_paging_horizontal_scroll_indicator
                .unwrap_or(DEFAULT_DISPLAY_PAGING_HORIZONTAL_SCROLL_INDICATOR),
            caption_location: config.caption_location.unwrap_or_default(),
            prefetch_count: config
                .prefetch_count
                .map(PrefetchCount::new)
                .unwrap_or_default(),
            reuse_recycled_pages: config
                .reuse_recycled_pages
                .unwrap_or(DEFAULT_REUSE_RECYCLED_PAGES),
            side_margin: SIDE_MARGIN,
            recycled_pages_per_kind: RECYCLED_PAGES_PER_KIND,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            display_paging_horizontal_scroll_indicator: Some(false),
            caption_location: Some(CaptionLocation::Bottom),
            prefetch_count: Some(3),
            reuse_recycled_pages: Some(false),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_fields_resolve_to_defaults() {
        let config: Config = toml::from_str("caption_location = \"bottom\"").expect("valid toml");
        assert_eq!(config.prefetch_count, None);

        let options = PagerOptions::from(&config);
        assert_eq!(options.caption_location, CaptionLocation::Bottom);
        assert_eq!(options.prefetch_count.value(), DEFAULT_PREFETCH_COUNT);
        assert!(options.reuse_recycled_pages);
        assert!(options.display_paging_horizontal_scroll_indicator);
    }

    #[test]
    fn options_clamp_prefetch_count() {
        let config = Config {
            prefetch_count: Some(1_000),
            ..Config::default()
        };
        let options = PagerOptions::from(&config);
        assert_eq!(options.prefetch_count.value(), MAX_PREFETCH_COUNT);
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }
}
