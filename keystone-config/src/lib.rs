//! Shared configuration library for Keystone.
//!
//! This crate owns the carousel's tunables (transition lock, autoplay
//! cadence, working-set cap) and resolves them from files, inline JSON or
//! per-field environment overrides. Keeping them here means the state
//! machine, the scheduler and the renderer all read one value instead of
//! re-declaring their own constants.

pub mod constants;
pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::carousel::{CarouselSettings, SettingsSource};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
