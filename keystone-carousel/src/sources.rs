//! Bundled collaborators: item sources and detail navigators that the demo
//! binary and tests plug into the panel.

use std::path::PathBuf;

use async_trait::async_trait;
use keystone_contracts::navigation::DetailNavigator;
use keystone_contracts::source::{ItemSource, SourceError};
use keystone_model::{CarouselItem, ItemId};
use serde_json::Value;
use tokio::sync::mpsc;

/// In-memory source. Every fetch returns a copy of the same records.
#[derive(Debug, Clone, Default)]
pub struct StaticItemSource {
    items: Vec<CarouselItem>,
}

impl StaticItemSource {
    pub fn new(items: Vec<CarouselItem>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl ItemSource for StaticItemSource {
    async fn fetch_items(&self) -> Result<Vec<CarouselItem>, SourceError> {
        Ok(self.items.clone())
    }

    fn describe(&self) -> String {
        format!("static source ({} items)", self.items.len())
    }
}

/// Reads a JSON array of project records from disk.
///
/// Records are decoded one at a time. A record that cannot be decoded at
/// all (no usable id, wrong shape) is skipped with a warning; only a file
/// that is unreadable or not an array fails the fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    pub(crate) fn decode(
        origin: &str,
        contents: &str,
    ) -> Result<Vec<CarouselItem>, SourceError> {
        let value: Value =
            serde_json::from_str(contents).map_err(|err| SourceError::Decode {
                origin: origin.to_string(),
                reason: err.to_string(),
            })?;

        let Value::Array(records) = value else {
            return Err(SourceError::Decode {
                origin: origin.to_string(),
                reason: "expected a JSON array of items".to_string(),
            });
        };

        let total = records.len();
        let items: Vec<CarouselItem> = records
            .into_iter()
            .enumerate()
            .filter_map(|(position, record)| {
                match serde_json::from_value::<CarouselItem>(record) {
                    Ok(item) => Some(item),
                    Err(err) => {
                        log::warn!(
                            "skipping record {position} from {origin}: {err}"
                        );
                        None
                    }
                }
            })
            .collect();

        if items.len() < total {
            log::warn!(
                "decoded {} of {total} records from {origin}",
                items.len()
            );
        }
        Ok(items)
    }
}

#[async_trait]
impl ItemSource for JsonFileSource {
    async fn fetch_items(&self) -> Result<Vec<CarouselItem>, SourceError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                origin: self.origin(),
                source,
            })?;
        Self::decode(&self.origin(), &contents)
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}

/// Navigator that only records the route it would have opened.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNavigator;

impl LoggingNavigator {
    pub fn route_for(id: &ItemId) -> String {
        format!("/projects/{id}")
    }
}

impl DetailNavigator for LoggingNavigator {
    fn navigate_to_detail(&self, id: &ItemId) {
        log::info!("navigate -> {}", Self::route_for(id));
    }
}

/// Forwards activated ids to an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    sender: mpsc::UnboundedSender<ItemId>,
}

impl ChannelNavigator {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ItemId>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl DetailNavigator for ChannelNavigator {
    fn navigate_to_detail(&self, id: &ItemId) {
        if self.sender.send(id.clone()).is_err() {
            log::warn!("detail navigation for {id} dropped; receiver closed");
        }
    }
}
