use thiserror::Error;

use crate::constants::DEFAULT_MAX_ITEMS;
use crate::models::carousel::CarouselSettings;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("transition_lock must be greater than zero")]
    ZeroTransitionLock,
    #[error("autoplay_interval must be greater than zero")]
    ZeroAutoplayInterval,
    #[error("max_items must be at least 1")]
    EmptyWorkingSet,
    #[error("max_items = {requested} exceeds the working-set limit of {limit}")]
    WorkingSetTooLarge { requested: usize, limit: usize },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

pub fn apply_guard_rails(
    settings: &CarouselSettings,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if settings.transition_lock.is_zero() {
        return Err(ConfigGuardRailError::ZeroTransitionLock);
    }
    if settings.autoplay_interval.is_zero() {
        return Err(ConfigGuardRailError::ZeroAutoplayInterval);
    }
    if settings.max_items == 0 {
        return Err(ConfigGuardRailError::EmptyWorkingSet);
    }
    if settings.max_items > DEFAULT_MAX_ITEMS {
        return Err(ConfigGuardRailError::WorkingSetTooLarge {
            requested: settings.max_items,
            limit: DEFAULT_MAX_ITEMS,
        });
    }

    if settings.autoplay_interval < settings.transition_lock {
        warnings.push_with_hint(
            format!(
                "autoplay_interval ({:?}) is shorter than transition_lock ({:?})",
                settings.autoplay_interval, settings.transition_lock
            ),
            "cards will barely settle before the next automatic advance",
        );
    }

    Ok(warnings)
}
