//! Resolves [`CarouselSettings`] from the environment and the filesystem.
//!
//! Evaluation order:
//! 1) `$KEYSTONE_CAROUSEL_CONFIG_PATH` (TOML or JSON file),
//! 2) `$KEYSTONE_CAROUSEL_CONFIG_JSON` (inline JSON),
//! 3) the first default file found under the search root,
//! 4) built-in defaults.
//!
//! Per-field overrides are applied on top of whichever base won, then the
//! guard rails run.

pub mod error;

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    time::Duration,
};

use tracing::{info, warn};

use crate::constants::{DEFAULT_FILE_CANDIDATES, env};
use crate::models::carousel::{
    CarouselSettings, SettingsSource, parse_duration,
};
use crate::validation::{ConfigWarnings, apply_guard_rails};
use error::ConfigLoadError;

/// Outcome of a successful load.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub settings: CarouselSettings,
    pub source: SettingsSource,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Clone)]
pub struct ConfigLoader {
    vars: HashMap<String, String>,
    search_root: PathBuf,
}

impl ConfigLoader {
    /// Loader backed by the process environment and working directory.
    pub fn from_env() -> Self {
        Self {
            vars: std::env::vars().collect(),
            search_root: std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Loader with an explicit variable set, mainly for tests and embedding.
    pub fn with_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            search_root: PathBuf::from("."),
        }
    }

    pub fn search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_root = root.into();
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (base, source) = self.load_base()?;
        self.finish(base, source)
    }

    /// Load from an explicit file, still honouring per-field overrides.
    pub fn load_file(&self, path: &Path) -> Result<ConfigLoad, ConfigLoadError> {
        let base = read_file(path)?;
        self.finish(base, SettingsSource::File(path.to_path_buf()))
    }

    fn finish(
        &self,
        mut settings: CarouselSettings,
        source: SettingsSource,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        self.apply_overrides(&mut settings)?;
        let warnings = apply_guard_rails(&settings)?;
        for warning in &warnings.items {
            warn!("carousel config: {}", warning.message);
        }
        info!(?source, "carousel settings resolved");
        Ok(ConfigLoad {
            settings,
            source,
            warnings,
        })
    }

    fn load_base(
        &self,
    ) -> Result<(CarouselSettings, SettingsSource), ConfigLoadError> {
        if let Some(path_str) = self.var(env::CONFIG_PATH) {
            let path = PathBuf::from(path_str);
            let settings = read_file(&path)?;
            return Ok((settings, SettingsSource::EnvPath(path)));
        }

        if let Some(raw) = self.var(env::CONFIG_JSON) {
            let settings = CarouselSettings::parse_json(raw)
                .map_err(ConfigLoadError::Inline)?;
            return Ok((settings, SettingsSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let settings = read_file(&path)?;
            return Ok((settings, SettingsSource::File(path)));
        }

        Ok((CarouselSettings::default(), SettingsSource::Default))
    }

    fn apply_overrides(
        &self,
        settings: &mut CarouselSettings,
    ) -> Result<(), ConfigLoadError> {
        if let Some(raw) = self.var(env::TRANSITION_LOCK) {
            settings.transition_lock =
                parse_duration_override(env::TRANSITION_LOCK, raw)?;
        }
        if let Some(raw) = self.var(env::AUTOPLAY_INTERVAL) {
            settings.autoplay_interval =
                parse_duration_override(env::AUTOPLAY_INTERVAL, raw)?;
        }
        if let Some(raw) = self.var(env::MAX_ITEMS) {
            settings.max_items = raw.trim().parse().map_err(
                |err: std::num::ParseIntError| {
                    ConfigLoadError::InvalidOverride {
                        key: env::MAX_ITEMS,
                        value: raw.to_string(),
                        reason: err.to_string(),
                    }
                },
            )?;
        }
        if let Some(raw) = self.var(env::AUTOPLAY) {
            settings.autoplay_on_start = parse_flag(env::AUTOPLAY, raw)?;
        }
        Ok(())
    }

    fn var(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_FILE_CANDIDATES
            .iter()
            .map(|candidate| self.search_root.join(candidate))
            .find(|path| path.exists())
    }
}

fn read_file(path: &Path) -> Result<CarouselSettings, ConfigLoadError> {
    CarouselSettings::load_from_file(path).map_err(|source| {
        ConfigLoadError::File {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn parse_duration_override(
    key: &'static str,
    raw: &str,
) -> Result<Duration, ConfigLoadError> {
    parse_duration(raw).map_err(|err| {
        ConfigLoadError::InvalidOverride {
            key,
            value: raw.to_string(),
            reason: format!("{err:#}"),
        }
    })
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigLoadError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigLoadError::InvalidOverride {
            key,
            value: raw.to_string(),
            reason: "expected a boolean flag".to_string(),
        }),
    }
}
