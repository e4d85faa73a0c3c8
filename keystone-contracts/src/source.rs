use async_trait::async_trait;
use keystone_model::CarouselItem;
use thiserror::Error;

/// Failure reported by an [`ItemSource`].
///
/// Retries are the source's business; the carousel treats any of these as
/// terminal and renders an error placeholder.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("content source unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read items from {origin}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed item payload from {origin}: {reason}")]
    Decode { origin: String, reason: String },
}

/// Read side of the remote content API.
///
/// Returns every known item in no particular order. Filtering, ordering
/// and capping are the caller's job.
#[async_trait]
pub trait ItemSource: Send + Sync {
    async fn fetch_items(&self) -> Result<Vec<CarouselItem>, SourceError>;

    /// Human readable origin used in log lines.
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}
