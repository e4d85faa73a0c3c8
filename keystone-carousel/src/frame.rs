//! Render output for one frame of a populated carousel.

use std::time::Duration;

use keystone_contracts::viewport::ViewportProvider;

use crate::card::CardContent;
use crate::state::CarouselStateMachine;
use crate::style::{DisplayStyle, style};
use crate::viewport::ViewportBreakpoint;
use crate::window::project;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCard {
    pub display_offset: i32,
    pub actual_index: usize,
    pub is_focal: bool,
    pub style: DisplayStyle,
    pub content: CardContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

/// Enabled state of the interactive controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub indicators_enabled: bool,
    pub auto_playing: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselFrame {
    pub breakpoint: ViewportBreakpoint,
    /// Cards in render order, offsets -2 through 2.
    pub cards: Vec<RenderedCard>,
    pub indicators: Vec<Indicator>,
    pub controls: ControlState,
    /// Animation duration for style changes; equal to the transition lock.
    pub transition: Duration,
}

impl CarouselFrame {
    pub fn focal_card(&self) -> Option<&RenderedCard> {
        self.cards.iter().find(|card| card.is_focal)
    }

    /// Cards sorted back to front, for painters without z-index support.
    pub fn paint_order(&self) -> Vec<&RenderedCard> {
        let mut cards: Vec<&RenderedCard> = self.cards.iter().collect();
        cards.sort_by_key(|card| card.style.z_index);
        cards
    }
}

/// Build the frame for the machine's current state. The breakpoint is
/// classified from `viewport` on every call.
pub(crate) fn build_frame(
    machine: &CarouselStateMachine,
    viewport: &dyn ViewportProvider,
    transition: Duration,
) -> Option<CarouselFrame> {
    let window = project(machine.items().as_slice(), machine.focal_index())?;
    let breakpoint = ViewportBreakpoint::current(viewport);

    let cards = window
        .iter()
        .map(|entry| RenderedCard {
            display_offset: entry.display_offset,
            actual_index: entry.actual_index,
            is_focal: entry.display_offset == 0,
            style: style(entry.display_offset, breakpoint),
            content: CardContent::from_item(entry.item),
        })
        .collect();

    let indicators = (0..machine.len())
        .map(|index| Indicator {
            index,
            active: index == machine.focal_index(),
        })
        .collect();

    let unlocked = !machine.is_transitioning();
    Some(CarouselFrame {
        breakpoint,
        cards,
        indicators,
        controls: ControlState {
            prev_enabled: unlocked,
            next_enabled: unlocked,
            indicators_enabled: unlocked,
            auto_playing: machine.is_auto_playing(),
        },
        transition,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curator::curate;
    use keystone_model::{CarouselItem, ItemId, ItemStatus};

    fn machine(len: usize) -> CarouselStateMachine {
        let items = (0..len).map(|i| {
            CarouselItem::new(ItemId::new(format!("p{i}")).unwrap(), "")
                .with_status(ItemStatus::Ongoing)
        });
        CarouselStateMachine::new(curate(items))
    }

    #[test]
    fn paint_order_puts_the_focal_card_last() {
        let frame =
            build_frame(&machine(5), &1600.0_f32, Duration::from_millis(600))
                .unwrap();
        let order: Vec<i32> = frame
            .paint_order()
            .iter()
            .map(|card| card.display_offset.abs())
            .collect();
        assert_eq!(order, vec![2, 2, 1, 1, 0]);
        assert_eq!(frame.breakpoint, ViewportBreakpoint::Xl);
    }

    #[test]
    fn controls_lock_while_transitioning() {
        let mut machine = machine(3);
        machine.next();
        let frame =
            build_frame(&machine, &320.0_f32, Duration::from_millis(600))
                .unwrap();
        assert!(!frame.controls.prev_enabled);
        assert!(!frame.controls.indicators_enabled);
        assert!(frame.indicators[1].active);
        assert_eq!(frame.focal_card().unwrap().actual_index, 1);
    }

    #[test]
    fn empty_machine_has_no_frame() {
        assert!(
            build_frame(&machine(0), &800.0_f32, Duration::ZERO).is_none()
        );
    }
}
