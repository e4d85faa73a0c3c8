//! Circular five-card window around the focal item.

use keystone_model::CarouselItem;

use crate::constants::window::{RADIUS, SIZE};

/// One slot of the visible window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowEntry<'a> {
    pub item: &'a CarouselItem,
    /// Position relative to the focal card, in `-RADIUS..=RADIUS`.
    pub display_offset: i32,
    /// Index of `item` in the working set.
    pub actual_index: usize,
}

/// Index reached by moving `offset` steps from `focal_index` on a ring of
/// `len` items. `len` must be non-zero.
#[inline]
pub fn wrap_index(focal_index: usize, offset: i32, len: usize) -> usize {
    debug_assert!(len > 0, "wrap_index on an empty ring");
    let len = len as i64;
    (focal_index as i64 + offset as i64).rem_euclid(len) as usize
}

/// Project the window for `focal_index`.
///
/// Returns `None` for an empty working set; callers render an empty state
/// instead. When fewer than five items exist the window repeats items, so
/// the same card can appear at several offsets.
pub fn project(
    items: &[CarouselItem],
    focal_index: usize,
) -> Option<[WindowEntry<'_>; SIZE]> {
    if items.is_empty() {
        return None;
    }
    let len = items.len();
    Some(std::array::from_fn(|slot| {
        let display_offset = slot as i32 - RADIUS;
        let actual_index = wrap_index(focal_index, display_offset, len);
        WindowEntry {
            item: &items[actual_index],
            display_offset,
            actual_index,
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use keystone_model::ItemId;

    fn items(n: usize) -> Vec<CarouselItem> {
        (0..n)
            .map(|i| CarouselItem::new(ItemId::new(format!("p{i}")).unwrap(), ""))
            .collect()
    }

    fn actual_indices(items: &[CarouselItem], focal: usize) -> Vec<usize> {
        project(items, focal)
            .unwrap()
            .iter()
            .map(|entry| entry.actual_index)
            .collect()
    }

    #[test]
    fn empty_set_has_no_window() {
        assert!(project(&[], 0).is_none());
    }

    #[test]
    fn three_items_repeat_around_the_focal_card() {
        assert_eq!(actual_indices(&items(3), 0), vec![1, 2, 0, 1, 2]);
    }

    #[test]
    fn single_item_fills_every_slot() {
        assert_eq!(actual_indices(&items(1), 0), vec![0; 5]);
    }

    #[test]
    fn offsets_are_in_render_order() {
        let set = items(7);
        let window = project(&set, 3).unwrap();
        let offsets: Vec<i32> = window.iter().map(|e| e.display_offset).collect();
        assert_eq!(offsets, vec![-2, -1, 0, 1, 2]);
        assert_eq!(window[2].item.id.as_str(), "p3");
    }

    #[test]
    fn window_wraps_for_every_size_and_focus() {
        for n in 1..=12 {
            let set = items(n);
            for focal in 0..n {
                let expected: Vec<usize> = (-2i64..=2)
                    .map(|k| (focal as i64 + k + n as i64).rem_euclid(n as i64) as usize)
                    .collect();
                assert_eq!(actual_indices(&set, focal), expected, "n={n} focal={focal}");
            }
        }
    }
}
