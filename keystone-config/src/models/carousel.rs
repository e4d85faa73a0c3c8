use anyhow::{Context, anyhow, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::constants::{
    DEFAULT_AUTOPLAY_INTERVAL, DEFAULT_MAX_ITEMS, DEFAULT_TRANSITION_LOCK,
};

/// Fields that hold a [`Duration`] and get normalized before deserializing.
const DURATION_FIELDS: [&str; 2] = ["transition_lock", "autoplay_interval"];

/// Source that produced the carousel settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SettingsSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Tunables for the projects carousel.
///
/// Durations accept human readable strings in files (`"600ms"`, `"4s"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// How long navigation stays locked after a move. This doubles as the
    /// card animation duration, so the two can never drift apart.
    pub transition_lock: Duration,
    /// Period of the autoplay timer. Only counts down while idle.
    pub autoplay_interval: Duration,
    /// Cap on the number of ongoing projects kept for display.
    pub max_items: usize,
    /// Whether autoplay starts enabled for a freshly loaded working set.
    pub autoplay_on_start: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            transition_lock: DEFAULT_TRANSITION_LOCK,
            autoplay_interval: DEFAULT_AUTOPLAY_INTERVAL,
            max_items: DEFAULT_MAX_ITEMS,
            autoplay_on_start: true,
        }
    }
}

impl CarouselSettings {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read carousel config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid carousel config {}", path.display())
            }),
            Some("toml") | Some("tml") => Self::parse_toml(&contents)
                .with_context(|| {
                    format!("invalid carousel config {}", path.display())
                }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        Self::parse_toml(contents).or_else(|toml_err| {
            Self::parse_json(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse carousel config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid carousel config json: {err}"))?;
        Self::from_value(value)
    }

    pub fn parse_toml(raw: &str) -> anyhow::Result<Self> {
        let value: Value = toml::from_str(raw)
            .map_err(|err| anyhow!("invalid carousel config toml: {err}"))?;
        Self::from_value(value)
    }

    fn from_value(value: Value) -> anyhow::Result<Self> {
        let normalized = normalize_durations(value)?;
        serde_json::from_value(normalized)
            .context("carousel config has unexpected shape")
    }
}

/// Parse a human readable duration (`"600ms"`, `"4s"`).
///
/// Zero is rejected: every carousel duration drives a timer.
pub fn parse_duration(raw: &str) -> anyhow::Result<Duration> {
    let duration = humantime::parse_duration(raw.trim())
        .with_context(|| format!("{raw:?} is not a duration"))?;
    non_zero(duration)
}

fn non_zero(duration: Duration) -> anyhow::Result<Duration> {
    if duration.is_zero() {
        bail!("duration must be greater than zero");
    }
    Ok(duration)
}

/// Rewrite the duration fields into serde's `{ secs, nanos }` shape.
/// Strings go through humantime, bare integers are milliseconds and the
/// structured form passes through untouched.
fn normalize_durations(mut value: Value) -> anyhow::Result<Value> {
    if let Value::Object(map) = &mut value {
        for field in DURATION_FIELDS {
            let Some(raw) = map.get_mut(field) else {
                continue;
            };
            let duration = match raw {
                Value::String(text) => parse_duration(text),
                Value::Number(number) => number
                    .as_u64()
                    .map(Duration::from_millis)
                    .ok_or_else(|| {
                        anyhow!("expected a whole number of milliseconds")
                    })
                    .and_then(non_zero),
                _ => continue,
            }
            .with_context(|| format!("invalid {field}"))?;

            *raw = serde_json::json!({
                "secs": duration.as_secs(),
                "nanos": duration.subsec_nanos(),
            });
        }
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_timings() {
        let settings = CarouselSettings::default();
        assert_eq!(settings.transition_lock, Duration::from_millis(600));
        assert_eq!(settings.autoplay_interval, Duration::from_secs(4));
        assert_eq!(settings.max_items, 15);
        assert!(settings.autoplay_on_start);
    }

    #[test]
    fn toml_accepts_humantime_durations() {
        let settings = CarouselSettings::parse_toml(
            r#"
            transition_lock = "450ms"
            autoplay_interval = "5s"
            "#,
        )
        .unwrap();
        assert_eq!(settings.transition_lock, Duration::from_millis(450));
        assert_eq!(settings.autoplay_interval, Duration::from_secs(5));
        // Unspecified fields keep their defaults.
        assert_eq!(settings.max_items, 15);
    }

    #[test]
    fn json_accepts_structured_durations() {
        let settings = CarouselSettings::parse_json(
            r#"{ "transition_lock": { "secs": 1, "nanos": 0 }, "max_items": 8 }"#,
        )
        .unwrap();
        assert_eq!(settings.transition_lock, Duration::from_secs(1));
        assert_eq!(settings.max_items, 8);
    }

    #[test]
    fn bare_integers_are_milliseconds() {
        let settings = CarouselSettings::parse_toml(
            "transition_lock = 450\nautoplay_interval = 3000\n",
        )
        .unwrap();
        assert_eq!(settings.transition_lock, Duration::from_millis(450));
        assert_eq!(settings.autoplay_interval, Duration::from_secs(3));
    }

    #[test]
    fn zero_durations_fail_to_parse() {
        let err = CarouselSettings::parse_json(r#"{ "autoplay_interval": "0s" }"#)
            .unwrap_err();
        assert!(format!("{err:#}").contains("autoplay_interval"));

        assert!(
            CarouselSettings::parse_toml("transition_lock = 0\n").is_err()
        );
        assert!(parse_duration("0ms").is_err());
        assert_eq!(parse_duration(" 2s ").unwrap(), Duration::from_secs(2));
    }

    #[test]
    fn unknown_extension_tries_both_formats() {
        let err = CarouselSettings::parse_from_str("{{ nope", "inline")
            .unwrap_err()
            .to_string();
        assert!(err.contains("toml error"));
        assert!(err.contains("json error"));
    }
}
