//! Defaults and environment keys for carousel configuration.

use std::time::Duration;

/// Hold time of the transition lock after a navigation. Renderers must
/// animate card movement over exactly this duration.
pub const DEFAULT_TRANSITION_LOCK: Duration = Duration::from_millis(600);
/// Period of the autoplay timer.
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(4000);
/// Upper bound on the curated working set. Configuration may lower it,
/// never raise it.
pub const DEFAULT_MAX_ITEMS: usize = 15;

pub mod env {
    pub const CONFIG_PATH: &str = "KEYSTONE_CAROUSEL_CONFIG_PATH";
    pub const CONFIG_JSON: &str = "KEYSTONE_CAROUSEL_CONFIG_JSON";
    pub const TRANSITION_LOCK: &str = "KEYSTONE_CAROUSEL_TRANSITION_LOCK";
    pub const AUTOPLAY_INTERVAL: &str = "KEYSTONE_CAROUSEL_AUTOPLAY_INTERVAL";
    pub const MAX_ITEMS: &str = "KEYSTONE_CAROUSEL_MAX_ITEMS";
    pub const AUTOPLAY: &str = "KEYSTONE_CAROUSEL_AUTOPLAY";
}

/// Files probed (relative to the search root) when no explicit source is set.
pub const DEFAULT_FILE_CANDIDATES: &[&str] = &[
    "carousel.toml",
    "carousel.json",
    "config/carousel.toml",
    "config/carousel.json",
];
