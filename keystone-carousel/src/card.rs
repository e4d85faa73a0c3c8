//! Presentation text for a single card, with per-field fallbacks.

use keystone_model::{CarouselItem, ItemId};

use crate::constants::placeholders;

/// Render-ready card fields. Missing or malformed source fields are
/// replaced individually; a bad record never blanks the whole card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContent {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// False when `image_url` is the placeholder.
    pub has_image: bool,
    pub location: String,
    pub date_label: String,
    pub link: Option<String>,
}

impl CardContent {
    pub fn from_item(item: &CarouselItem) -> Self {
        let title = match item.title.trim() {
            "" => placeholders::UNTITLED.to_string(),
            title => title.to_string(),
        };
        let (image_url, has_image) = match item.image_url.as_deref() {
            Some(url) if !url.trim().is_empty() => (url.to_string(), true),
            _ => (placeholders::IMAGE.to_string(), false),
        };

        Self {
            id: item.id.clone(),
            title,
            description: item.description.clone(),
            image_url,
            has_image,
            location: item
                .location
                .clone()
                .unwrap_or_else(|| placeholders::MISSING_LABEL.to_string()),
            date_label: item
                .date
                .map(|date| date.format(placeholders::DATE_FORMAT).to_string())
                .unwrap_or_else(|| placeholders::MISSING_LABEL.to_string()),
            link: item.link.as_ref().map(|url| url.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_record_passes_through() {
        let link =
            keystone_model::url::Url::parse("https://keystone.example/p/a")
                .unwrap();
        let item = CarouselItem::new(ItemId::new("a").unwrap(), "Pier 9")
            .with_description("Waterfront restoration")
            .with_link(link)
            .with_image_url("https://cdn.example.com/pier.jpg")
            .with_location("Harbourfront")
            .with_date_str("2024-03-01")
            .unwrap();

        let card = CardContent::from_item(&item);
        assert_eq!(card.title, "Pier 9");
        assert!(card.has_image);
        assert_eq!(card.location, "Harbourfront");
        assert_eq!(card.date_label, "Mar 1, 2024");
        assert_eq!(card.description, "Waterfront restoration");
        assert_eq!(card.link.as_deref(), Some("https://keystone.example/p/a"));
    }

    #[test]
    fn missing_fields_get_placeholders() {
        let item = CarouselItem::new(ItemId::new("b").unwrap(), "  ");
        let card = CardContent::from_item(&item);

        assert_eq!(card.title, placeholders::UNTITLED);
        assert_eq!(card.image_url, placeholders::IMAGE);
        assert!(!card.has_image);
        assert_eq!(card.location, "N/A");
        assert_eq!(card.date_label, "N/A");
        assert_eq!(card.link, None);
    }
}
