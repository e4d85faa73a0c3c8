//! Builds the carousel's working set from the raw source list.

use std::cmp::Ordering;

use keystone_config::constants::DEFAULT_MAX_ITEMS;
use keystone_model::CarouselItem;

/// Curated, ordered, size-capped items eligible for display.
///
/// Every element is ongoing, elements are ordered newest first, and the
/// length never exceeds the cap it was curated with. The only way to build
/// one is through [`curate`] / [`curate_with_limit`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkingSet {
    items: Vec<CarouselItem>,
}

impl WorkingSet {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CarouselItem> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CarouselItem> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a WorkingSet {
    type Item = &'a CarouselItem;
    type IntoIter = std::slice::Iter<'a, CarouselItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Curate with the default cap of 15 items.
pub fn curate<I>(raw_items: I) -> WorkingSet
where
    I: IntoIterator<Item = CarouselItem>,
{
    curate_with_limit(raw_items, DEFAULT_MAX_ITEMS)
}

/// Keep ongoing items, order them newest first, and truncate to `limit`.
/// A limit above the default cap of 15 is clamped to it.
///
/// Ties on date keep their input order. Items without a parseable date
/// sort after every dated item.
pub fn curate_with_limit<I>(raw_items: I, limit: usize) -> WorkingSet
where
    I: IntoIterator<Item = CarouselItem>,
{
    let mut items: Vec<CarouselItem> = raw_items
        .into_iter()
        .filter(CarouselItem::is_ongoing)
        .collect();

    // `sort_by` is stable, which is what gives ties their input order.
    items.sort_by(newest_first);
    items.truncate(limit.min(DEFAULT_MAX_ITEMS));

    log::debug!("curated working set of {} ongoing items", items.len());
    WorkingSet { items }
}

fn newest_first(a: &CarouselItem, b: &CarouselItem) -> Ordering {
    match (&a.date, &b.date) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
