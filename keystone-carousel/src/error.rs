use keystone_config::ConfigGuardRailError;
use keystone_contracts::source::SourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("carousel controller requires a running tokio runtime")]
    NoRuntime,
    #[error("invalid carousel settings: {0}")]
    InvalidSettings(#[from] ConfigGuardRailError),
    #[error("failed to load carousel items: {0}")]
    Load(#[from] SourceError),
}
