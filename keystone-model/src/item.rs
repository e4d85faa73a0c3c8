use chrono::{DateTime, Utc};
use url::Url;

use crate::dates::parse_item_date;
use crate::error::ModelError;
use crate::ids::ItemId;
use crate::status::ItemStatus;

/// A project record as delivered by the content source.
///
/// Only `id` is required. Every other field tolerates absence or a
/// malformed value so one bad record cannot take down the whole list;
/// presentation code substitutes placeholders for the gaps.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CarouselItem {
    #[cfg_attr(feature = "serde", serde(alias = "_id"))]
    pub id: ItemId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            alias = "image",
            deserialize_with = "crate::dates::lenient::text"
        )
    )]
    pub image_url: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::dates::lenient::text")
    )]
    pub location: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::dates::lenient::date")
    )]
    pub date: Option<DateTime<Utc>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: ItemStatus,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::dates::lenient::link")
    )]
    pub link: Option<Url>,
}

impl CarouselItem {
    /// Minimal record with an unknown status and no optional fields.
    pub fn new(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            image_url: None,
            location: None,
            date: None,
            status: ItemStatus::Unknown,
            link: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<ItemStatus>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Parse and attach a date using the same rules as decoding.
    pub fn with_date_str(mut self, raw: &str) -> Result<Self, ModelError> {
        self.date = Some(parse_item_date(raw)?);
        Ok(self)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_link(mut self, link: Url) -> Self {
        self.link = Some(link);
        self
    }

    pub fn is_ongoing(&self) -> bool {
        self.status.is_ongoing()
    }
}
